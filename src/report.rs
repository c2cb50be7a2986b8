//! Human readable evaluation output
use crate::evaluator::Evaluation;
use std::io::{self, Write};

/// Write `evaluation` as text: a header line, the extremes (or "no bids")
/// and one line per ranked bid
pub fn write_text<W: Write>(
    out: &mut W,
    description: &str,
    evaluation: &Evaluation,
) -> io::Result<()> {
    writeln!(out, "{description} ({} bids)", evaluation.bid_count)?;

    match (evaluation.highest, evaluation.lowest) {
        (Some(highest), Some(lowest)) => {
            writeln!(out, "highest: {highest}")?;
            writeln!(out, "lowest:  {lowest}")?;
        }
        _ => writeln!(out, "no bids")?,
    }

    for (rank, bid) in evaluation.top.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} ({}): {}",
            rank + 1,
            bid.bidder().first_name(),
            bid.bidder_name(),
            bid.value()
        )?;
    }

    Ok(())
}
