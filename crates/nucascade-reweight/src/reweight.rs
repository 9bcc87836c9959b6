//! The event-record visitor.

use std::sync::Arc;

use nucascade_core::{EventRecord, Registry};
use tracing::{error, trace};

use crate::batch::reweight_batch;
use crate::error::WeightConfigError;
use crate::table::FateWeightTable;

/// Sets each event's weight to the product of its cascade fate weights.
///
/// The table is shared, so clones are cheap and can be handed to other
/// threads.
#[derive(Clone, Debug, Default)]
pub struct CascadeReweight {
    table: Arc<FateWeightTable>,
}

impl CascadeReweight {
    /// Reweighter over an existing table.
    pub fn new(table: FateWeightTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Load the table from `registry`.
    pub fn configure(registry: &Registry) -> Result<Self, WeightConfigError> {
        FateWeightTable::from_registry(registry).map(Self::new)
    }

    /// The weight table.
    pub fn table(&self) -> &FateWeightTable {
        &self.table
    }

    /// Shared handle to the weight table.
    pub fn shared_table(&self) -> Arc<FateWeightTable> {
        Arc::clone(&self.table)
    }

    /// Reweight a batch on `workers` threads; see [`reweight_batch`].
    pub fn process_batch(&self, events: Vec<EventRecord>, workers: usize) -> Vec<EventRecord> {
        reweight_batch(&self.table, events, workers)
    }

    /// Replace the weight of `event` with its cascade weight and return it.
    ///
    /// Any weight already on the record is discarded. A missing record is
    /// logged and left alone.
    pub fn process_event(&self, event: Option<&mut EventRecord>) -> Option<f64> {
        let Some(record) = event else {
            error!("null event record passed to cascade reweight");
            return None;
        };
        let weight = self.table.event_weight(record);
        trace!(previous = record.weight(), weight, "event reweighted");
        record.set_weight(weight);
        Some(weight)
    }
}
