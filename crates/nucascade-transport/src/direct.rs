//! Single-shot cascade for beam-on-target events.
//!
//! Hadron-nucleus and photon-nucleus events have no primary interaction
//! stage: the probe itself is fired at the target once.

use nucascade_bridge::mass::nuclear_mass_mev;
use nucascade_bridge::{to_submission, EngineHandles, MEV_PER_GEV};
use nucascade_core::{EventRecord, LorentzVector, Particle, Status};
use tracing::{debug, warn};

use crate::emit::Sink;
use crate::error::TransportError;
use crate::orchestrator::nucleus_az;
use crate::summary::TransportSummary;

/// Fire the probe of `record` at its target nucleus.
///
/// A probe the engine cannot transport is logged and leaves the record
/// untouched.
pub fn cascade_projectile(
    handles: &mut EngineHandles,
    record: &mut EventRecord,
) -> Result<TransportSummary, TransportError> {
    let target = record
        .target_nucleus_position()
        .ok_or(TransportError::MissingNucleus {
            role: "target",
            mode: record.mode(),
        })?;
    let (a, z) = nucleus_az(record, target)?;
    let (target_pdg, probe) = match (record.particle(target), record.particle(0)) {
        (Some(t), Some(p)) => (t.pdg, p.clone()),
        _ => return Err(TransportError::NotANucleus { index: target }),
    };

    let Some(submission) = to_submission(&probe) else {
        warn!(pdg = %probe.pdg, "probe cannot be transported by the cascade engine");
        return Ok(TransportSummary::default());
    };

    debug!(
        pdg = %probe.pdg,
        kinetic_energy = submission.kinetic_energy,
        target_a = a,
        target_z = z,
        "firing probe at target"
    );
    let mut outcome = handles.engine_mut().process_projectile(
        submission.species,
        submission.kinetic_energy,
        a,
        z,
    );

    let mut sink = Sink::new(record, target);
    sink.summary.engine_calls = 1;

    if outcome.transparent {
        sink.summary.transparent = 1;
        let mut copy = probe;
        copy.status = Status::StableFinalState;
        copy.first_mother = Some(0);
        copy.last_mother = None;
        copy.first_daughter = None;
        copy.last_daughter = None;
        sink.push(copy)?;

        let m = nuclear_mass_mev(a.unsigned_abs(), z.unsigned_abs()) / MEV_PER_GEV;
        sink.push(
            Particle::new(
                target_pdg,
                Status::FinalStateNuclearRemnant,
                LorentzVector::at_rest(m),
                LorentzVector::ZERO,
            )
            .with_mother(target),
        )?;
        sink.summary.remnant_emitted = true;
        return Ok(sink.summary);
    }

    if handles.de_excite(&mut outcome) {
        sink.summary.de_excitations += 1;
    }
    let first = sink.record.len();
    sink.emit_produced(&outcome, 0)?;
    if !outcome.remnant.is_empty() {
        sink.emit_remnant(&outcome.remnant)?;
    } else if let Some(last) = sink.record.len().checked_sub(1).filter(|&i| i >= first) {
        // De-excitation consumed the remnant; its residue is the last product.
        if let Some(p) = sink.record.particle_mut(last).filter(|p| p.pdg.is_ion()) {
            p.status = Status::FinalStateNuclearRemnant;
            sink.summary.remnant_emitted = true;
        }
    }
    Ok(sink.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucascade_core::pdg;
    use nucascade_test_utils::{
        outcome, produced, CountingDeExcitation, EngineCall, EvaporatingDeExcitation,
        EventBuilder, ScriptedEngine,
    };

    #[test]
    fn transparent_probe_leaves_target_at_rest() {
        let mut record = EventBuilder::hadron(pdg::PI_PLUS, 0.5).target(56, 26).build();
        let engine = ScriptedEngine::transparent();
        let log = engine.log();
        let mut h = EngineHandles::new(Box::new(engine));

        let summary = cascade_projectile(&mut h, &mut record).unwrap();

        assert_eq!(summary.transparent, 1);
        assert_eq!(record.len(), 4);
        let probe = record.particle(2).unwrap();
        assert_eq!((probe.pdg, probe.first_mother), (pdg::PI_PLUS, Some(0)));
        let nucleus = record.particle(3).unwrap();
        assert_eq!(nucleus.pdg, pdg::nucleus(56, 26));
        assert_eq!(nucleus.first_mother, Some(1));
        assert_eq!(nucleus.p4.vect(), [0.0; 3]);
        match &log.calls()[0] {
            EngineCall::Projectile {
                target_a, target_z, ..
            } => assert_eq!((*target_a, *target_z), (56, 26)),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn products_and_leftover_remnant_are_emitted() {
        let mut record = EventBuilder::hadron(pdg::PROTON, 0.2).target(12, 6).build();
        let knock_out = outcome(
            vec![
                produced(pdg::PROTON, 120.0, [0.0, 0.0, 500.0]),
                produced(pdg::PROTON, 30.0, [0.0, 240.0, 0.0]),
            ],
            11,
            5,
        );
        let de = CountingDeExcitation::new();
        let mut h = EngineHandles::new(Box::new(ScriptedEngine::new([knock_out])))
            .with_de_excitation(Box::new(de.clone()));

        let summary = cascade_projectile(&mut h, &mut record).unwrap();

        assert_eq!(de.calls(), 1);
        assert_eq!(summary.emitted, 3);
        let last = record.particles().last().unwrap();
        assert_eq!(last.pdg, pdg::nucleus(11, 5));
        assert_eq!(last.status, Status::FinalStateNuclearRemnant);
        assert_eq!(last.first_mother, Some(1));
        assert_eq!(record.particle(2).unwrap().first_mother, Some(0));
    }

    #[test]
    fn consumed_remnant_relabels_the_residue() {
        let mut record = EventBuilder::hadron(pdg::NEUTRON, 0.1).target(12, 6).build();
        let knock_out = outcome(vec![produced(pdg::NEUTRON, 60.0, [0.0, 0.0, 350.0])], 12, 6);
        let mut h = EngineHandles::new(Box::new(ScriptedEngine::new([knock_out])))
            .with_de_excitation(Box::new(EvaporatingDeExcitation::new()));

        let summary = cascade_projectile(&mut h, &mut record).unwrap();

        assert!(summary.remnant_emitted);
        let last = record.particles().last().unwrap();
        assert_eq!(last.pdg, pdg::nucleus(12, 6));
        assert_eq!(last.status, Status::FinalStateNuclearRemnant);
    }

    #[test]
    fn unsupported_probe_is_a_no_op() {
        let mut record = EventBuilder::hadron(pdg::K_PLUS, 0.5).target(12, 6).build();
        let snapshot = record.clone();
        let engine = ScriptedEngine::transparent();
        let log = engine.log();
        let mut h = EngineHandles::new(Box::new(engine));

        let summary = cascade_projectile(&mut h, &mut record).unwrap();

        assert_eq!(summary, TransportSummary::default());
        assert_eq!(record, snapshot);
        assert!(log.is_empty());
    }
}
