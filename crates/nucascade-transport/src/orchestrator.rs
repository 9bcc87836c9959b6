//! The transport loop for hadrons produced inside a nucleus.
//!
//! Every hadron-in-nucleus entry goes through the [`classify`] gate; the
//! ones the engine can handle are submitted one at a time against the
//! nucleus as it stood before transport. Each outcome then takes one of
//! three paths:
//!
//! ```text
//! SUBMITTED ──► budget exhausted? ──yes──► EXCEPTION (emit unchanged, flush buffer)
//!                    │ no
//!                    ▼
//!               transparent? ──yes──► TRANSPARENT (emit unchanged)
//!                    │ no
//!                    ▼
//!                BUFFERED
//! ```
//!
//! Once every entry is handled the buffer is merged (see
//! [`merge`](crate::merge)), or, if it is empty, the nucleus itself is
//! carried into the final state. The original nucleus entry always ends
//! up as an intermediate state.

use nucascade_bridge::units::to_engine_momentum;
use nucascade_bridge::EngineHandles;
use nucascade_core::{EventRecord, GenerationMode, LorentzVector, Particle, Status};
use tracing::{debug, warn};

use crate::budget::ConservationBudget;
use crate::eligibility::{classify, Eligibility};
use crate::emit::Sink;
use crate::error::TransportError;
use crate::merge::{flush_without_conservation, merge, BufferedOutcome, MergeMode};
use crate::summary::TransportSummary;

/// (A, Z) of the nucleus entry at `index`.
pub(crate) fn nucleus_az(record: &EventRecord, index: usize) -> Result<(i32, i32), TransportError> {
    let p = record
        .particle(index)
        .ok_or(TransportError::NotANucleus { index })?;
    match (p.a(), p.z()) {
        (Some(a), Some(z)) => Ok((
            i32::try_from(a).map_err(|_| TransportError::NotANucleus { index })?,
            i32::try_from(z).map_err(|_| TransportError::NotANucleus { index })?,
        )),
        _ => Err(TransportError::NotANucleus { index }),
    }
}

/// Record index of the nucleus the hadrons are propagated through.
///
/// Beam-on-target events use the target itself; every other mode uses the
/// remnant left by the primary interaction.
fn transport_nucleus(record: &EventRecord) -> Result<usize, TransportError> {
    let mode = record.mode();
    match mode {
        GenerationMode::HadronNucleus | GenerationMode::PhotonNucleus => record
            .target_nucleus_position()
            .ok_or(TransportError::MissingNucleus {
                role: "target",
                mode,
            }),
        GenerationMode::LeptonNucleus
        | GenerationMode::NucleonDecay
        | GenerationMode::NeutronOscillation => record
            .remnant_nucleus_position()
            .ok_or(TransportError::MissingNucleus {
                role: "remnant",
                mode,
            }),
    }
}

/// Propagate every hadron inside the nucleus of `record`.
///
/// # Errors
///
/// Fails before touching the record if the event has no target or no
/// transport nucleus. A failure while appending leaves the entries
/// written so far in place.
pub fn transport_hadrons(
    handles: &mut EngineHandles,
    record: &mut EventRecord,
) -> Result<TransportSummary, TransportError> {
    // 1. Resolve the nuclei and the per-event constants.
    let nucleus = transport_nucleus(record)?;
    let target = record
        .target_nucleus_position()
        .ok_or(TransportError::MissingNucleus {
            role: "target",
            mode: record.mode(),
        })?;
    let (initial_a, initial_z) = nucleus_az(record, target)?;
    let (nucleus_a, nucleus_z) = nucleus_az(record, nucleus)?;
    let (nucleus_pdg, nucleus_p4) = match record.particle(nucleus) {
        Some(p) => (p.pdg, p.p4),
        None => return Err(TransportError::NotANucleus { index: nucleus }),
    };
    let lepton_charge = record
        .final_state_primary_lepton()
        .and_then(|l| l.pdg.charge())
        .map_or(0, i32::signum);
    let mode = MergeMode::for_process(record.process());

    let mut budget = ConservationBudget::new(initial_a, initial_z, lepton_charge);
    let mut buffer: Vec<BufferedOutcome> = Vec::new();
    let candidates = record.len();
    let mut sink = Sink::new(record, nucleus);

    // 2. Walk the entries present before transport.
    for index in 0..candidates {
        let Some(particle) = sink.record.particle(index) else {
            break;
        };
        let submission = match classify(particle) {
            Eligibility::Skip => continue,
            Eligibility::ExtractUnchanged | Eligibility::UnsupportedAfterBridge => {
                debug!(index, pdg = %particle.pdg, "extracting hadron unchanged");
                sink.summary.extracted += 1;
                sink.emit_unchanged(index)?;
                continue;
            }
            Eligibility::Submit(submission) => submission,
        };

        // 2a. One engine call against the pre-transport nucleus.
        debug!(
            index,
            kinetic_energy = submission.kinetic_energy,
            nucleus_a,
            nucleus_z,
            "submitting hadron to cascade"
        );
        let outcome = handles.engine_mut().process_particle(
            submission.species,
            &submission.particle,
            submission.kinetic_energy,
            nucleus_a,
            nucleus_z,
        );
        sink.summary.engine_calls += 1;

        // 2b. Charge the budget, then route the outcome.
        budget.record(nucleus_a, nucleus_z, &submission.species, &outcome.remnant);
        if budget.is_exhausted() {
            let (remaining_a, remaining_z) = budget.remaining();
            warn!(
                index,
                remaining_a,
                remaining_z,
                buffered = buffer.len(),
                "nucleus exhausted; flushing cascade buffer without conservation"
            );
            sink.summary.exceptions += 1;
            sink.emit_unchanged(index)?;
            flush_without_conservation(&mut buffer, handles, &mut sink)?;
        } else if outcome.transparent {
            budget.add_transparent(&submission.species);
            sink.summary.transparent += 1;
            sink.emit_unchanged(index)?;
        } else {
            sink.summary.buffered += 1;
            buffer.push(BufferedOutcome {
                outcome,
                producer: index,
                projectile: submission.species,
                nucleus: (nucleus_a, nucleus_z),
            });
        }
    }

    // 3. Merge, or carry the untouched nucleus through.
    if buffer.is_empty() {
        sink.push(
            Particle::new(
                nucleus_pdg,
                Status::FinalStateNuclearRemnant,
                nucleus_p4,
                LorentzVector::ZERO,
            )
            .with_mother(nucleus),
        )?;
        sink.summary.remnant_emitted = true;
    } else {
        merge(
            mode,
            buffer,
            &budget,
            to_engine_momentum(nucleus_p4.vect()),
            handles,
            &mut sink,
        )?;
    }

    // 4. The nucleus has been replaced by its products.
    if let Some(p) = sink.record.particle_mut(nucleus) {
        p.status = Status::IntermediateState;
    }
    Ok(sink.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucascade_bridge::CascadeOutcome;
    use nucascade_core::{pdg, ProcessKind};
    use nucascade_test_utils::{
        outcome, produced, CountingDeExcitation, EngineCall, EventBuilder, ScriptedEngine,
    };

    fn handles(engine: ScriptedEngine) -> (EngineHandles, CountingDeExcitation) {
        let de = CountingDeExcitation::new();
        let h = EngineHandles::new(Box::new(engine)).with_de_excitation(Box::new(de.clone()));
        (h, de)
    }

    fn final_state(record: &EventRecord) -> Vec<&Particle> {
        record
            .particles()
            .iter()
            .filter(|p| {
                matches!(
                    p.status,
                    Status::StableFinalState | Status::FinalStateNuclearRemnant
                )
            })
            .collect()
    }

    #[test]
    fn transparent_proton_through_carbon() {
        // Beam-on-target layout with one proton left inside the target.
        let mut record = EventBuilder::hadron(pdg::PROTON, 0.3)
            .target(12, 6)
            .build();
        let inside = record.len();
        record
            .add_particle(
                Particle::new(
                    pdg::PROTON,
                    Status::HadronInTheNucleus,
                    LorentzVector::on_shell([0.0, 0.0, 0.8], 0.938_272),
                    LorentzVector::ZERO,
                )
                .with_mother(1),
            )
            .unwrap();
        let before = record.len();
        let (mut h, de) = handles(ScriptedEngine::transparent());

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(record.len() - before, 2);
        assert_eq!(summary.transparent, 1);
        assert_eq!(de.calls(), 0);
        let proton = record.particle(before).unwrap();
        assert_eq!(proton.pdg, pdg::PROTON);
        assert_eq!(proton.first_mother, Some(inside));
        let remnant = record.particle(before + 1).unwrap();
        assert_eq!(remnant.pdg, pdg::nucleus(12, 6));
        assert_eq!(remnant.status, Status::FinalStateNuclearRemnant);
        assert_eq!(record.particle(1).unwrap().status, Status::IntermediateState);
    }

    #[test]
    fn lone_proton_target_takes_the_exception_path() {
        let mut record = EventBuilder::hadron(pdg::PROTON, 0.3).target(1, 1).build();
        record
            .add_particle(
                Particle::new(
                    pdg::PROTON,
                    Status::HadronInTheNucleus,
                    LorentzVector::on_shell([0.0, 0.0, 0.5], 0.938_272),
                    LorentzVector::ZERO,
                )
                .with_mother(1),
            )
            .unwrap();
        let knock_out = outcome(
            vec![
                produced(pdg::PROTON, 80.0, [0.0, 0.0, 400.0]),
                produced(pdg::NEUTRON, 20.0, [0.0, 190.0, 0.0]),
            ],
            0,
            0,
        );
        let (mut h, de) = handles(ScriptedEngine::new([knock_out]));
        let before = record.len();

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(summary.exceptions, 1);
        assert_eq!(summary.buffered, 0);
        assert_eq!(summary.merge_mode, None);
        assert_eq!(de.calls(), 0);
        let copy = record.particle(before).unwrap();
        assert_eq!(copy.pdg, pdg::PROTON);
        assert_eq!(copy.status, Status::StableFinalState);
        assert_eq!(copy.first_mother, Some(2));
        // Nothing merged: only the copy and the untouched target follow.
        assert_eq!(record.len() - before, 2);
    }

    #[test]
    fn every_hadron_is_accounted_for_once() {
        let mut record = EventBuilder::neutrino(ProcessKind::Resonant, 2.0)
            .target(16, 8)
            .struck_nucleon(pdg::PROTON)
            .remnant(15, 7)
            .lepton(pdg::NU_MU, [0.0, 0.2, 1.0])
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.1, 0.4])
            .hadron_in_nucleus(pdg::PI_ZERO, [0.1, 0.0, 0.3])
            .hadron_in_nucleus(pdg::K_PLUS, [0.0, -0.1, 0.2])
            .build();
        let hadrons = record.with_status(Status::HadronInTheNucleus).count();
        let pion_out = outcome(vec![produced(pdg::PI_ZERO, 100.0, [0.0, 0.0, 200.0])], 15, 7);
        let (mut h, _) = handles(ScriptedEngine::new([
            CascadeOutcome::transparent(15, 7),
            pion_out,
        ]));

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(summary.hadrons(), hadrons);
        assert_eq!(summary.extracted, 1);
        assert_eq!(summary.transparent, 1);
        assert_eq!(summary.buffered, 1);
        let remnants = record
            .particles()
            .iter()
            .filter(|p| p.status == Status::FinalStateNuclearRemnant)
            .count();
        assert!(remnants <= 1);
    }

    #[test]
    fn resonant_merge_sums_remnants_into_one_nucleus() {
        // Neutral-current resonance on oxygen: p and pi0 inside O15 remnant.
        let mut record = EventBuilder::neutrino(ProcessKind::Resonant, 2.0)
            .target(16, 8)
            .struck_nucleon(pdg::PROTON)
            .remnant(15, 7)
            .lepton(pdg::NU_MU, [0.0, 0.2, 1.0])
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.1, 0.4])
            .hadron_in_nucleus(pdg::PI_ZERO, [0.1, 0.0, 0.3])
            .build();
        // proton knocks out a neutron; pion passes through a shared nucleus
        let first = outcome(
            vec![
                produced(pdg::PROTON, 60.0, [0.0, 0.0, 340.0]),
                produced(pdg::NEUTRON, 30.0, [0.0, 240.0, 0.0]),
            ],
            14,
            7,
        );
        let second = outcome(vec![produced(pdg::PI_ZERO, 90.0, [0.0, 0.0, 180.0])], 15, 7);
        let (mut h, de) = handles(ScriptedEngine::new([first, second]));

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(summary.merge_mode, Some(MergeMode::ResonantOrDis));
        assert_eq!(de.calls(), 1);
        let remnant = record
            .particles()
            .iter()
            .find(|p| p.status == Status::FinalStateNuclearRemnant)
            .unwrap();
        // 16 - (15 + 1 - 14) - (15 + 0 - 15) = 14 ; 8 - (7 + 1 - 7) - 0 = 7
        assert_eq!(remnant.pdg, pdg::nucleus(14, 7));

        let (a, z) = final_state(&record)
            .iter()
            .filter(|p| p.first_mother != Some(0))
            .fold((0, 0), |(a, z), p| {
                (a + p.a().unwrap_or(0), z + p.pdg.charge().unwrap_or(0))
            });
        assert_eq!((a, z), (16, 8));
    }

    #[test]
    fn quasi_elastic_merge_de_excites_every_outcome() {
        let mut record = EventBuilder::neutrino(ProcessKind::MesonExchange, 1.0)
            .target(12, 6)
            .struck_nucleon(pdg::PROTON)
            .remnant(10, 4)
            .lepton(pdg::MUON, [0.0, 0.1, 0.7])
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.1, 0.4])
            .hadron_in_nucleus(pdg::PROTON, [0.0, -0.1, 0.3])
            .build();
        let (mut h, de) = handles(ScriptedEngine::new([
            outcome(vec![produced(pdg::PROTON, 50.0, [0.0, 0.0, 310.0])], 10, 4),
            outcome(vec![produced(pdg::PROTON, 40.0, [0.0, 280.0, 0.0])], 10, 4),
        ]));

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(summary.merge_mode, Some(MergeMode::QuasiElastic));
        assert_eq!(de.calls(), 2);
        assert!(summary.remnant_emitted);
    }

    #[test]
    fn flush_index_advances_only_on_emission() {
        // Three buffered outcomes, then a call that exhausts A.
        let mut record = EventBuilder::neutrino(ProcessKind::DeepInelastic, 5.0)
            .target(4, 2)
            .struck_nucleon(pdg::NEUTRON)
            .remnant(3, 2)
            .lepton(pdg::MUON, [0.0, 0.5, 3.0])
            .hadron_in_nucleus(pdg::PI_PLUS, [0.0, 0.1, 0.4])
            .hadron_in_nucleus(pdg::PI_MINUS, [0.1, 0.0, 0.4])
            .hadron_in_nucleus(pdg::PI_ZERO, [0.0, 0.0, 0.5])
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.2, 0.6])
            .build();
        let one = |code| produced(code, 30.0, [0.0, 0.0, 150.0]);
        let (mut h, _) = handles(ScriptedEngine::new([
            outcome(vec![one(pdg::PI_PLUS), one(pdg::NEUTRON)], 3, 2),
            outcome(vec![one(pdg::PI_MINUS)], 3, 2),
            outcome(vec![one(pdg::PI_ZERO), one(pdg::NEUTRON), one(pdg::PROTON)], 2, 1),
            outcome(vec![one(pdg::PROTON), one(pdg::PROTON)], 0, 0),
        ]));
        let before = record.len();

        let summary = transport_hadrons(&mut h, &mut record).unwrap();

        assert_eq!(summary.exceptions, 1);
        let added: Vec<_> = record.particles()[before..].iter().map(|p| p.pdg).collect();
        // copy of the proton, slot 0 index 0, slot 1 has no index 1 so the
        // index stays put, slot 2 index 1, then the untouched remnant
        assert_eq!(
            added,
            [pdg::PROTON, pdg::PI_PLUS, pdg::NEUTRON, pdg::nucleus(3, 2)]
        );
    }

    #[test]
    fn engine_sees_the_pre_transport_nucleus_every_time() {
        let mut record = EventBuilder::neutrino(ProcessKind::Resonant, 2.0)
            .target(12, 6)
            .struck_nucleon(pdg::NEUTRON)
            .remnant(11, 6)
            .lepton(pdg::MUON, [0.0, 0.2, 1.0])
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.1, 0.4])
            .hadron_in_nucleus(pdg::PI_MINUS, [0.1, 0.0, 0.3])
            .build();
        let engine = ScriptedEngine::new([
            outcome(vec![produced(pdg::PROTON, 50.0, [0.0; 3])], 11, 6),
            outcome(vec![produced(pdg::PI_MINUS, 50.0, [0.0; 3])], 11, 6),
        ]);
        let log = engine.log();
        let (mut h, _) = handles(engine);

        transport_hadrons(&mut h, &mut record).unwrap();

        for call in log.calls() {
            match call {
                EngineCall::Particle {
                    remnant_a,
                    remnant_z,
                    ..
                } => assert_eq!((remnant_a, remnant_z), (11, 6)),
                other => panic!("unexpected call {other:?}"),
            }
        }
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn missing_remnant_is_reported_without_touching_the_record() {
        let mut record = EventBuilder::neutrino(ProcessKind::QuasiElastic, 1.0)
            .target(12, 6)
            .hadron_in_nucleus(pdg::PROTON, [0.0, 0.0, 0.4])
            .build();
        let snapshot = record.clone();
        let (mut h, _) = handles(ScriptedEngine::transparent());
        let err = transport_hadrons(&mut h, &mut record).unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingNucleus {
                role: "remnant",
                ..
            }
        ));
        assert_eq!(record, snapshot);
    }
}
