//! Auction bid evaluation
//!
//! Bids are collected into an [`auction::Auction`] and scanned by an
//! [`evaluator::Evaluator`], which reports the highest and lowest values
//! and the best `N` bids.
pub mod auction;
pub mod config;
pub mod evaluator;
pub mod input;
pub mod recorder;
pub mod report;

pub use self::{
    auction::{Amount, Auction, Bid, Bidder},
    config::EvaluatorConfig,
    evaluator::{evaluate_auction, Evaluation, Evaluator},
};
