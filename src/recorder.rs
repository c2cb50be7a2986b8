//! Evaluation instrumentation
//!
//! Anything that wants to observe an evaluation gets handed to the
//! `Evaluator` explicitly; nothing is intercepted globally.
use crate::{auction::Bid, evaluator::Evaluation};
use anyhow::{format_err, Result};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};
use tracing::{debug, trace};

/// Observer of evaluation progress
pub trait EvaluationRecorder {
    fn evaluation_started(&self, description: &str, bid_count: usize);
    fn bid_scanned(&self, index: usize, bid: &Bid);
    fn bid_skipped(&self, index: usize, bid: &Bid);
    fn evaluation_finished(&self, evaluation: &Evaluation);
}

pub type SharedRecorder = Arc<dyn EvaluationRecorder + Send + Sync + 'static>;

/// Counting recorder, remembering the last finished evaluation
///
/// Useful for unit-tests.
#[derive(Debug, Default)]
pub struct InMemoryRecorder {
    evaluations: AtomicUsize,
    evaluations_finished: AtomicUsize,
    bids_scanned: AtomicUsize,
    bids_skipped: AtomicUsize,
    last_evaluation: Mutex<Option<Evaluation>>,
}

impl InMemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    pub fn bids_scanned(&self) -> usize {
        self.bids_scanned.load(Ordering::SeqCst)
    }

    pub fn bids_skipped(&self) -> usize {
        self.bids_skipped.load(Ordering::SeqCst)
    }

    pub fn evaluations_finished(&self) -> usize {
        self.evaluations_finished.load(Ordering::SeqCst)
    }

    /// Snapshot passed to the most recent `evaluation_finished`
    pub fn last_evaluation(&self) -> Result<Option<Evaluation>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Evaluation>>> {
        self.last_evaluation
            .lock()
            .map_err(|_e| format_err!("mutex poisoned"))
    }
}

impl EvaluationRecorder for InMemoryRecorder {
    fn evaluation_started(&self, _description: &str, _bid_count: usize) {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
    }

    fn bid_scanned(&self, _index: usize, _bid: &Bid) {
        self.bids_scanned.fetch_add(1, Ordering::SeqCst);
    }

    fn bid_skipped(&self, _index: usize, _bid: &Bid) {
        self.bids_skipped.fetch_add(1, Ordering::SeqCst);
    }

    fn evaluation_finished(&self, evaluation: &Evaluation) {
        self.evaluations_finished.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.lock() {
            *last = Some(evaluation.clone());
        }
    }
}

/// Forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl TracingRecorder {
    pub fn new_shared() -> SharedRecorder {
        Arc::new(Self)
    }
}

impl EvaluationRecorder for TracingRecorder {
    fn evaluation_started(&self, description: &str, bid_count: usize) {
        debug!(description, bid_count, "evaluating auction");
    }

    fn bid_scanned(&self, index: usize, bid: &Bid) {
        trace!(index, bidder = bid.bidder_name(), value = bid.value(), "bid");
    }

    fn bid_skipped(&self, index: usize, bid: &Bid) {
        trace!(index, bidder = bid.bidder_name(), "bid skipped");
    }

    fn evaluation_finished(&self, evaluation: &Evaluation) {
        debug!(
            bid_count = evaluation.bid_count,
            highest = ?evaluation.highest,
            lowest = ?evaluation.lowest,
            top = evaluation.top.len(),
            "evaluation done"
        );
    }
}
