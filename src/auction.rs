//! Auction domain values
//!
//! `Bidder` -> `Bid` -> `Auction`. All of them are plain values; an
//! `Auction` only ever grows.
use serde::Serialize;

pub type Amount = f64;

/// A person placing bids
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bidder {
    name: String,
}

impl Bidder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Full display name, verbatim
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything up to the first whitespace, or the whole name
    pub fn first_name(&self) -> &str {
        match self.name.split_once(char::is_whitespace) {
            Some((first, _rest)) => first,
            None => &self.name,
        }
    }
}

/// One bidder offering one amount
///
/// No validation is done on `value`: zero and negative amounts are
/// accepted as they are.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bid {
    bidder: Bidder,
    value: Amount,
}

impl Bid {
    pub fn new(bidder: Bidder, value: Amount) -> Self {
        Self { bidder, value }
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn bidder(&self) -> &Bidder {
        &self.bidder
    }

    pub fn bidder_name(&self) -> &str {
        self.bidder.name()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Auction {
    description: String,
    bids: Vec<Bid>,
}

impl Auction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            bids: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a bid; earlier bids are never touched
    pub fn receive_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// All received bids, in arrival order
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn len(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }
}

impl Extend<Bid> for Auction {
    fn extend<T: IntoIterator<Item = Bid>>(&mut self, iter: T) {
        for bid in iter {
            self.receive_bid(bid);
        }
    }
}
