//! Event weights against a hand-computed product.

use nucascade_core::{pdg, Fate, Pdg, ProcessKind, Registry};
use nucascade_reweight::{CascadeReweight, FateWeightTable, DEFAULT_WEIGHT_KEY};
use nucascade_test_utils::EventBuilder;
use proptest::prelude::*;

const SPECIES: [Pdg; 4] = [pdg::PROTON, pdg::NEUTRON, pdg::PI_PLUS, pdg::PI_ZERO];

fn registry(default: f64, abs: f64, cex_pi0: f64) -> Registry {
    Registry::new()
        .with(DEFAULT_WEIGHT_KEY, default)
        .with("CascadeReweight-Default-Weight-Abs", abs)
        .with("CascadeReweight-Weight-CEx@Pdg=111", cex_pi0)
}

proptest! {
    #[test]
    fn event_weight_is_the_product_of_particle_weights(
        default in 0.1f64..2.0,
        abs in 0.1f64..2.0,
        cex_pi0 in 0.1f64..2.0,
        hadrons in prop::collection::vec((0..Fate::ALL.len(), 0..SPECIES.len()), 0..6),
    ) {
        let rw = CascadeReweight::configure(&registry(default, abs, cex_pi0)).unwrap();
        let mut b = EventBuilder::neutrino(ProcessKind::Resonant, 2.0)
            .target(16, 8)
            .struck_nucleon(pdg::NEUTRON)
            .lepton(pdg::MUON, [0.0, 0.3, 1.5]);
        // The lepton hangs off the probe, which carries no fate.
        let mut expected = default;
        for &(fate, species) in &hadrons {
            let (fate, species) = (Fate::ALL[fate], SPECIES[species]);
            b = b
                .hadron_with_fate(pdg::PROTON, [0.0, 0.0, 0.4], fate)
                .escaped(species, [0.0, 0.0, 0.4]);
            expected *= match (fate, species) {
                (Fate::Absorption, _) => abs,
                (Fate::ChargeExchange, pdg::PI_ZERO) => cex_pi0,
                _ => default,
            };
        }
        let mut record = b.build();

        let factor = rw.process_event(Some(&mut record)).unwrap();

        prop_assert!((factor - expected).abs() <= 1e-12 * expected.max(1.0));
        prop_assert!((record.weight() - expected).abs() <= 1e-12 * expected.max(1.0));
    }
}

#[test]
fn json_configuration_round_trip() {
    let reg = Registry::from_json_str(
        r#"{
            "CascadeReweight-Default-Weight": 1.0,
            "CascadeReweight-Default-Weight-Elastic": 0.8,
            "CascadeReweight-Weight-Elastic@Pdg=2212": 1.2,
            "CascadeReweight-Weight-Cmp@Pdg=2112": 0.0
        }"#,
    )
    .unwrap();
    let table = FateWeightTable::from_registry(&reg).unwrap();
    assert_eq!(table.weight_for(Fate::Elastic, pdg::PROTON), 1.2);
    assert_eq!(table.weight_for(Fate::Elastic, pdg::NEUTRON), 0.8);
    assert_eq!(table.weight_for(Fate::MultiNucleon, pdg::NEUTRON), 0.0);
    assert_eq!(table.weight_for(Fate::Undefined, pdg::NEUTRON), 1.0);
}
