//! Per-event transport counters.

use crate::merge::MergeMode;

/// What happened to one event.
///
/// Every hadron-in-nucleus entry lands in exactly one of `extracted`,
/// `transparent`, `buffered` or `exceptions`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportSummary {
    /// Entries copied out unchanged without an engine call.
    pub extracted: usize,
    /// Submissions the engine passed straight through.
    pub transparent: usize,
    /// Submissions whose outcome was buffered for the merge.
    pub buffered: usize,
    /// Submissions that exhausted the budget.
    pub exceptions: usize,
    /// Engine calls made.
    pub engine_calls: usize,
    /// De-excitation model invocations.
    pub de_excitations: usize,
    /// Entries appended to the record.
    pub emitted: usize,
    /// Whether a residual-nucleus entry was appended.
    pub remnant_emitted: bool,
    /// Merge mode applied, if the buffer was merged.
    pub merge_mode: Option<MergeMode>,
}

impl TransportSummary {
    /// Number of hadron-in-nucleus entries this event processed.
    pub fn hadrons(&self) -> usize {
        self.extracted + self.transparent + self.buffered + self.exceptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_summary_is_empty() {
        let s = TransportSummary::default();
        assert_eq!(s.hadrons(), 0);
        assert!(!s.remnant_emitted);
        assert!(s.merge_mode.is_none());
    }
}
