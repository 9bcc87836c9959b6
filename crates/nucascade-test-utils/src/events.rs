//! Event-record fixtures.
//!
//! [`EventBuilder`] lays out records the way the primary-interaction stage
//! does: probe at entry 0, target nucleus next, then the struck nucleon,
//! the remnant nucleus, the outgoing lepton and the hadrons still inside
//! the nucleus.

use nucascade_bridge::mass::nuclear_mass_mev;
use nucascade_bridge::MEV_PER_GEV;
use nucascade_core::{
    EventRecord, Fate, GenerationMode, LorentzVector, Particle, Pdg, ProcessKind, Status,
};

/// Four-momentum (GeV) of an (A, Z) nucleus at rest.
pub fn nucleus_at_rest(a: u32, z: u32) -> LorentzVector {
    LorentzVector::at_rest(nuclear_mass_mev(a, z) / MEV_PER_GEV)
}

fn mass_gev(code: Pdg) -> f64 {
    match (code.ion_a(), code.ion_z()) {
        (Some(a), Some(z)) => nuclear_mass_mev(a, z) / MEV_PER_GEV,
        _ => match code.0.abs() {
            11 => 0.000_511,
            13 => 0.105_658,
            111 => 0.134_977,
            211 => 0.139_570,
            321 => 0.493_677,
            3122 => 1.115_683,
            _ => 0.0,
        },
    }
}

/// Fluent builder for event records.
///
/// Every `add_*` helper panics on a dangling mother, which only a broken
/// fixture can produce.
pub struct EventBuilder {
    record: EventRecord,
    target: Option<usize>,
    struck: Option<usize>,
}

impl EventBuilder {
    /// A record with `probe` at entry 0, moving along +z with `energy` GeV.
    pub fn new(mode: GenerationMode, process: ProcessKind, probe: Pdg, energy: f64) -> Self {
        let m = mass_gev(probe);
        let pz = (energy * energy - m * m).max(0.0).sqrt();
        let mut record = EventRecord::new(mode, process);
        record
            .add_particle(Particle::new(
                probe,
                Status::InitialState,
                LorentzVector::new(0.0, 0.0, pz, energy),
                LorentzVector::ZERO,
            ))
            .expect("probe has no mother");
        Self {
            record,
            target: None,
            struck: None,
        }
    }

    /// Lepton-nucleus event with a muon neutrino probe.
    pub fn neutrino(process: ProcessKind, energy: f64) -> Self {
        Self::new(GenerationMode::LeptonNucleus, process, nucascade_core::pdg::NU_MU, energy)
    }

    /// Hadron-nucleus event with a hadron probe of kinetic energy `kinetic` GeV.
    pub fn hadron(probe: Pdg, kinetic: f64) -> Self {
        Self::new(
            GenerationMode::HadronNucleus,
            ProcessKind::Other,
            probe,
            kinetic + mass_gev(probe),
        )
    }

    /// Add the initial-state target nucleus.
    pub fn target(mut self, a: u32, z: u32) -> Self {
        let idx = self.push(Particle::new(
            nucascade_core::pdg::nucleus(a, z),
            Status::InitialState,
            nucleus_at_rest(a, z),
            LorentzVector::ZERO,
        ));
        self.target = Some(idx);
        self
    }

    /// Add the struck nucleon as a daughter of the target.
    pub fn struck_nucleon(mut self, code: Pdg) -> Self {
        let mother = self.target_index();
        let idx = self.push(
            Particle::new(
                code,
                Status::NucleonTarget,
                LorentzVector::at_rest(mass_gev(code)),
                LorentzVector::ZERO,
            )
            .with_mother(mother),
        );
        self.struck = Some(idx);
        self
    }

    /// Add the remnant nucleus as a daughter of the target.
    pub fn remnant(mut self, a: u32, z: u32) -> Self {
        let mother = self.target_index();
        self.push(
            Particle::new(
                nucascade_core::pdg::nucleus(a, z),
                Status::StableFinalState,
                nucleus_at_rest(a, z),
                LorentzVector::ZERO,
            )
            .with_mother(mother),
        );
        self
    }

    /// Add the outgoing primary lepton as a daughter of the probe.
    pub fn lepton(mut self, code: Pdg, momentum: [f64; 3]) -> Self {
        self.push(
            Particle::new(
                code,
                Status::StableFinalState,
                LorentzVector::on_shell(momentum, mass_gev(code)),
                LorentzVector::ZERO,
            )
            .with_mother(0),
        );
        self
    }

    /// Add a hadron still inside the nucleus, momentum in GeV/c.
    pub fn hadron_in_nucleus(self, code: Pdg, momentum: [f64; 3]) -> Self {
        self.hadron_with_fate(code, momentum, Fate::Undefined)
    }

    /// Add a hadron inside the nucleus carrying a rescattering fate.
    pub fn hadron_with_fate(mut self, code: Pdg, momentum: [f64; 3], fate: Fate) -> Self {
        let mother = self.struck.unwrap_or_else(|| self.target_index());
        self.push(
            Particle::new(
                code,
                Status::HadronInTheNucleus,
                LorentzVector::on_shell(momentum, mass_gev(code)),
                LorentzVector::new(0.5, -0.5, 1.0, 0.0),
            )
            .with_mother(mother)
            .with_fate(fate),
        );
        self
    }

    /// Add a stable final-state hadron produced by the previous entry.
    ///
    /// Pairs with [`hadron_with_fate`](Self::hadron_with_fate) to build the
    /// mother/daughter links the reweighter reads fates through.
    pub fn escaped(mut self, code: Pdg, momentum: [f64; 3]) -> Self {
        let mother = self.record.len() - 1;
        self.push(
            Particle::new(
                code,
                Status::StableFinalState,
                LorentzVector::on_shell(momentum, mass_gev(code)),
                LorentzVector::ZERO,
            )
            .with_mother(mother),
        );
        self
    }

    /// Add an arbitrary particle.
    pub fn particle(mut self, particle: Particle) -> Self {
        self.push(particle);
        self
    }

    pub fn build(self) -> EventRecord {
        self.record
    }

    fn target_index(&self) -> usize {
        self.target.expect("fixture needs a target before its daughters")
    }

    fn push(&mut self, particle: Particle) -> usize {
        self.record
            .add_particle(particle)
            .expect("fixture mother index is in range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucascade_core::pdg;

    #[test]
    fn builder_lays_out_a_lepton_event() {
        let ev = EventBuilder::neutrino(ProcessKind::QuasiElastic, 1.0)
            .target(12, 6)
            .struck_nucleon(pdg::NEUTRON)
            .remnant(11, 6)
            .lepton(pdg::MUON, [0.0, 0.1, 0.6])
            .hadron_in_nucleus(pdg::PROTON, [0.0, -0.1, 0.4])
            .build();
        assert_eq!(ev.target_nucleus_position(), Some(1));
        assert_eq!(ev.remnant_nucleus_position(), Some(3));
        assert_eq!(ev.with_status(Status::HadronInTheNucleus).count(), 1);
        assert_eq!(ev.particle(5).and_then(|p| p.first_mother), Some(2));
    }

    #[test]
    fn escaped_hadron_hangs_off_the_previous_entry() {
        let ev = EventBuilder::neutrino(ProcessKind::Resonant, 2.0)
            .target(12, 6)
            .struck_nucleon(pdg::PROTON)
            .hadron_with_fate(pdg::PI_PLUS, [0.0, 0.1, 0.3], Fate::ChargeExchange)
            .escaped(pdg::PI_ZERO, [0.0, 0.1, 0.3])
            .build();
        let pion = ev.particle(4).unwrap();
        assert_eq!((pion.status, pion.first_mother), (Status::StableFinalState, Some(3)));
        assert_eq!(ev.particle(3).unwrap().rescatter, Fate::ChargeExchange);
    }
}
