//! Fitness history: the series handed to an external consumer.

use super::types::Fitness;

/// Best-so-far fitness sampled at one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySample {
    pub iteration: usize,
    pub fitness: Fitness,
}

/// Receives history samples as the driver records them.
///
/// Displaying the series (charts, tables, logs) is the sink's business;
/// the driver only guarantees that samples arrive in iteration order.
///
/// ```
/// use knapsack_ga::ga::{HistorySample, HistorySink};
///
/// let mut sink: Vec<HistorySample> = Vec::new();
/// sink.record(HistorySample { iteration: 20, fitness: 7 });
/// assert_eq!(sink.len(), 1);
/// ```
pub trait HistorySink {
    fn record(&mut self, sample: HistorySample);
}

impl HistorySink for Vec<HistorySample> {
    fn record(&mut self, sample: HistorySample) {
        self.push(sample);
    }
}
