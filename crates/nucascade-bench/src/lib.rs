//! Benchmark profiles for the nucascade hadron transport.
//!
//! - [`neutrino_events`]: seeded lepton-nucleus events with a handful of
//!   hadrons inside the nucleus
//! - [`toy_transport`]: a transport driven by the seeded toy cascade
//! - [`reference_weights`]: a weight table touching every lookup tier

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nucascade_bridge::EngineHandles;
use nucascade_core::{pdg, EventRecord, Fate, Pdg, ProcessKind};
use nucascade_reweight::FateWeightTable;
use nucascade_test_utils::{EvaporatingDeExcitation, EventBuilder, ToyCascade};
use nucascade_transport::HadronTransport;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const HADRONS: [Pdg; 5] = [
    pdg::PROTON,
    pdg::NEUTRON,
    pdg::PI_PLUS,
    pdg::PI_MINUS,
    pdg::PI_ZERO,
];

/// Generate `n` deterministic argon events, cycling QE/RES/DIS.
///
/// Each event carries one to `max_hadrons` hadrons inside the nucleus,
/// each with a random fate and one escaped daughter so the same events
/// exercise both transport and reweighting.
pub fn neutrino_events(n: usize, max_hadrons: usize, seed: u64) -> Vec<EventRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let processes = [
        ProcessKind::QuasiElastic,
        ProcessKind::Resonant,
        ProcessKind::DeepInelastic,
    ];
    (0..n)
        .map(|i| {
            let mut b = EventBuilder::neutrino(processes[i % processes.len()], 3.0)
                .target(40, 18)
                .struck_nucleon(pdg::NEUTRON)
                .remnant(39, 18)
                .lepton(pdg::MUON, [0.0, 0.3, 2.2]);
            for _ in 0..rng.random_range(1..=max_hadrons.max(1)) {
                let code = HADRONS[rng.random_range(0..HADRONS.len())];
                let fate = Fate::ALL[rng.random_range(0..Fate::ALL.len())];
                let p = [
                    rng.random_range(-0.3..0.3),
                    rng.random_range(-0.3..0.3),
                    rng.random_range(0.1..1.0),
                ];
                b = b.hadron_with_fate(code, p, fate).escaped(code, p);
            }
            b.build()
        })
        .collect()
}

/// Transport with the toy cascade and evaporation de-excitation.
pub fn toy_transport(seed: u64) -> HadronTransport {
    HadronTransport::new(
        EngineHandles::new(Box::new(ToyCascade::new(seed)))
            .with_de_excitation(Box::new(EvaporatingDeExcitation::new())),
    )
}

/// Weight table with a fate default and species overrides.
pub fn reference_weights() -> FateWeightTable {
    FateWeightTable::new(1.0)
        .with_fate_default(Fate::Absorption, 0.8)
        .with_override(Fate::Absorption, pdg::PROTON, 1.1)
        .with_override(Fate::ChargeExchange, pdg::PI_ZERO, 1.3)
        .with_override(Fate::Inelastic, pdg::PI_PLUS, 0.9)
}
