//! Per-particle gate in front of the cascade engine.

use nucascade_bridge::{to_submission, Submission};
use nucascade_core::{pdg, Particle, Pdg, Status};

/// What the transport loop does with one record entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eligibility {
    /// Not inside the nucleus; left alone.
    Skip,
    /// Inside the nucleus but not a species the cascade handles; copied
    /// out unchanged.
    ExtractUnchanged,
    /// Passed the species check but the bridge has no engine type for it;
    /// copied out unchanged.
    UnsupportedAfterBridge,
    /// Send to the engine.
    Submit(Submission),
}

const RESCATTERABLE: [Pdg; 5] = [
    pdg::PROTON,
    pdg::NEUTRON,
    pdg::PI_PLUS,
    pdg::PI_MINUS,
    pdg::PI_ZERO,
];

/// Whether the cascade stage rescatters this species at all.
pub fn can_rescatter(code: Pdg) -> bool {
    RESCATTERABLE.contains(&code)
}

/// Classify one entry.
pub fn classify(particle: &Particle) -> Eligibility {
    if particle.status != Status::HadronInTheNucleus {
        return Eligibility::Skip;
    }
    if !can_rescatter(particle.pdg) {
        return Eligibility::ExtractUnchanged;
    }
    match to_submission(particle) {
        Some(submission) => Eligibility::Submit(submission),
        None => Eligibility::UnsupportedAfterBridge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucascade_core::LorentzVector;

    fn in_nucleus(code: Pdg) -> Particle {
        Particle::new(
            code,
            Status::HadronInTheNucleus,
            LorentzVector::at_rest(1.0),
            LorentzVector::ZERO,
        )
    }

    #[test]
    fn only_hadrons_in_the_nucleus_are_considered() {
        let mut p = in_nucleus(pdg::PROTON);
        p.status = Status::StableFinalState;
        assert_eq!(classify(&p), Eligibility::Skip);
    }

    #[test]
    fn nucleons_and_pions_are_submitted() {
        for code in RESCATTERABLE {
            assert!(matches!(classify(&in_nucleus(code)), Eligibility::Submit(_)));
        }
    }

    #[test]
    fn strange_hadrons_are_extracted() {
        assert_eq!(classify(&in_nucleus(pdg::K_PLUS)), Eligibility::ExtractUnchanged);
        assert_eq!(classify(&in_nucleus(pdg::LAMBDA)), Eligibility::ExtractUnchanged);
        assert_eq!(classify(&in_nucleus(pdg::ETA)), Eligibility::ExtractUnchanged);
    }
}
