//! Auction descriptions read from JSON
use crate::auction::{Amount, Auction, Bid, Bidder};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("bid #{index}: bidder name is empty")]
    EmptyBidderName { index: usize },
    #[error("bid #{index}: value {value} is not a finite number")]
    NonFiniteValue { index: usize, value: Amount },
    #[error("malformed auction description")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct BidInput {
    pub bidder: String,
    pub value: Amount,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuctionInput {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bids: Vec<BidInput>,
}

impl AuctionInput {
    pub fn from_reader(reader: impl Read) -> Result<Self, InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn parse(s: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Validate and turn into an `Auction`, keeping the bids in file order
    pub fn into_auction(self) -> Result<Auction, InputError> {
        let mut auction = Auction::new(self.description);

        for (index, bid) in self.bids.into_iter().enumerate() {
            if bid.bidder.trim().is_empty() {
                return Err(InputError::EmptyBidderName { index });
            }
            if !bid.value.is_finite() {
                return Err(InputError::NonFiniteValue {
                    index,
                    value: bid.value,
                });
            }
            auction.receive_bid(Bid::new(Bidder::new(bid.bidder), bid.value));
        }

        Ok(auction)
    }
}
