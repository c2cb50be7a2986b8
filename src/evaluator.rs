//! Evaluator
//!
//! Scans the bids of an auction once and keeps the running highest
//! value, lowest value and a ranking of the top `N` bids.
//!
//! An `Evaluator` accumulates: evaluating a second auction folds its bids
//! into the same statistics. Use a fresh `Evaluator` (or
//! [`evaluate_auction`]) per auction when that is not what you want.
use crate::{
    auction::{Amount, Auction, Bid},
    config::EvaluatorConfig,
    recorder::SharedRecorder,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Snapshot of what an `Evaluator` has seen so far
///
/// `highest` and `lowest` are `None` until at least one bid has been
/// evaluated, so "no bids" is never confused with a real extreme.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Evaluation {
    pub bid_count: usize,
    pub highest: Option<Amount>,
    pub lowest: Option<Amount>,
    pub top: Vec<Bid>,
}

#[derive(Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
    highest: Option<Amount>,
    lowest: Option<Amount>,
    top: Vec<Bid>,
    bids_seen: usize,
    recorder: Option<SharedRecorder>,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_recorder(config: EvaluatorConfig, recorder: SharedRecorder) -> Self {
        Self {
            config,
            recorder: Some(recorder),
            ..Self::default()
        }
    }

    pub fn config(&self) -> EvaluatorConfig {
        self.config
    }

    pub fn evaluate(&mut self, auction: &Auction) {
        if let Some(recorder) = &self.recorder {
            recorder.evaluation_started(auction.description(), auction.len());
        }

        for (index, bid) in auction.bids().iter().enumerate() {
            if bid.value().is_nan() {
                warn!(
                    auction = auction.description(),
                    index,
                    bidder = bid.bidder_name(),
                    "bid value is NaN, skipping"
                );
                if let Some(recorder) = &self.recorder {
                    recorder.bid_skipped(index, bid);
                }
                continue;
            }

            self.handle_bid(bid);

            if let Some(recorder) = &self.recorder {
                recorder.bid_scanned(index, bid);
            }
        }

        debug!(
            auction = auction.description(),
            bids = auction.len(),
            highest = ?self.highest,
            lowest = ?self.lowest,
            "auction evaluated"
        );

        if let Some(recorder) = &self.recorder {
            recorder.evaluation_finished(&self.evaluation());
        }
    }

    fn handle_bid(&mut self, bid: &Bid) {
        let value = bid.value();

        self.highest = Some(self.highest.map_or(value, |highest| highest.max(value)));
        self.lowest = Some(self.lowest.map_or(value, |lowest| lowest.min(value)));
        self.bids_seen += 1;

        // `top` is kept non-increasing, so everything `>= value` is a prefix;
        // inserting after it keeps equal bids in arrival order.
        let position = self.top.partition_point(|ranked| ranked.value() >= value);
        if position < self.config.top_n {
            self.top.insert(position, bid.clone());
            self.top.truncate(self.config.top_n);
        }
    }

    pub fn highest_value(&self) -> Option<Amount> {
        self.highest
    }

    pub fn lowest_value(&self) -> Option<Amount> {
        self.lowest
    }

    /// The highest bids, best first
    pub fn top_bids(&self) -> &[Bid] {
        &self.top
    }

    /// Number of bids that took part in the statistics
    pub fn bids_seen(&self) -> usize {
        self.bids_seen
    }

    pub fn evaluation(&self) -> Evaluation {
        Evaluation {
            bid_count: self.bids_seen,
            highest: self.highest,
            lowest: self.lowest,
            top: self.top.clone(),
        }
    }

    /// Forget everything evaluated so far, keeping config and recorder
    pub fn reset(&mut self) {
        self.highest = None;
        self.lowest = None;
        self.top.clear();
        self.bids_seen = 0;
    }
}

/// Evaluate a single auction with a fresh `Evaluator`
pub fn evaluate_auction(config: EvaluatorConfig, auction: &Auction) -> Evaluation {
    let mut evaluator = Evaluator::new(config);
    evaluator.evaluate(auction);
    evaluator.evaluation()
}
