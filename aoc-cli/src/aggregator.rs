//! Result aggregator for ordering parallel execution results
//!
//! Buffers and orders results for streaming output using two min-heaps:
//! - One for expected keys (what we're waiting for)
//! - One for received results (buffered until their turn)

use crate::executor::ExecutionResult;
use aoc_solver::PuzzlePart;
use chrono::TimeDelta;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for min-heap ordering of ExecutionResult
struct OrderedResult(ExecutionResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse ordering for min-heap (smallest first)
        other.0.part.cmp(&self.0.part)
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        self.0.part == other.0.part
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<PuzzlePart>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create aggregator from list of expected keys
    pub fn new(expected_keys: impl IntoIterator<Item = PuzzlePart>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: ExecutionResult) -> Vec<ExecutionResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if top_pending.0.part != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<ExecutionResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| r.part);
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

/// Final report of a run, ordered by identifier then part number
#[derive(Debug, Default)]
pub struct Report {
    results: Vec<ExecutionResult>,
}

impl Report {
    pub fn new(mut results: Vec<ExecutionResult>) -> Self {
        results.sort_by_key(|r| r.part);
        Self { results }
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| r.outcome.is_err())
    }

    /// Number of parts that produced an answer
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    /// Whether the run should exit successfully
    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Sum of the measured spans of every part
    pub fn total_solve_time(&self) -> TimeDelta {
        self.results.iter().map(|r| r.elapsed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{Answer, PuzzleId, SolverError};
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> PuzzlePart {
        PuzzleId::new(year, day).unwrap().part(part)
    }

    fn make_result(year: u16, day: u8, part: u8) -> ExecutionResult {
        ExecutionResult {
            part: key(year, day, part),
            outcome: Ok(Answer::Text(format!("{}_{}_{}", year, day, part))),
            elapsed: TimeDelta::milliseconds(10),
        }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);

        let ready = agg.add(make_result(2015, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part.part, 1);

        let ready = agg.add(make_result(2015, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part.part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg =
            ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);

        // Part 2 before part 1
        let ready = agg.add(make_result(2015, 1, 2));
        assert!(ready.is_empty());

        let ready = agg.add(make_result(2015, 2, 1));
        assert!(ready.is_empty());

        let ready = agg.add(make_result(2015, 1, 1));
        let order: Vec<_> = ready.iter().map(|r| r.part).collect();
        assert_eq!(order, vec![key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);

        agg.add(make_result(2015, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part.part, 2);
        assert!(!agg.is_complete());
    }

    #[test]
    fn test_report_orders_and_counts() {
        let mut failed = make_result(2016, 3, 1);
        failed.outcome = Err(SolverError::NotRegistered(failed.part.id));
        let report = Report::new(vec![make_result(2018, 1, 2), failed, make_result(2015, 7, 1)]);

        let order: Vec<_> = report.results().iter().map(|r| r.part).collect();
        assert_eq!(order, vec![key(2015, 7, 1), key(2016, 3, 1), key(2018, 1, 2)]);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failures().count(), 1);
        assert!(!report.all_succeeded());
        assert_eq!(report.total_solve_time(), TimeDelta::milliseconds(30));
        assert!(Report::default().all_succeeded());
    }

    proptest! {
        /// Whatever order workers finish in, results come out sorted
        #[test]
        fn prop_emits_in_key_order(order in Just((1u8..=6).collect::<Vec<_>>()).prop_shuffle()) {
            let keys: Vec<_> = (1..=6).map(|day| key(2018, day, 1)).collect();
            let mut agg = ResultAggregator::new(keys.clone());
            let mut emitted = Vec::new();
            for day in order {
                emitted.extend(agg.add(make_result(2018, day, 1)).into_iter().map(|r| r.part));
            }
            prop_assert_eq!(emitted, keys);
            prop_assert!(agg.is_complete());
        }
    }
}
