//! Conversion engine.
//!
//! Turning an [`Amount`] into words is a strictly forward pipeline; option
//! flags are threaded through every stage but nothing flows backwards:
//!
//! ```text
//! Amount ── grouper::group ──────── Vec<Triple> (billions .. ones)
//!                                     │
//!                                     v
//!           rewriter::rewrite ───── per-triple words (ordered rule table,
//!                                     │                zero groups elided)
//!                                     v
//!           formatter ───────────── ruble noun + "NN копеек" phrase
//!                                     │
//!                                     v
//!           postprocess::finish ─── joined, trimmed, optionally capitalized
//! ```
//!
//! ## Responsibilities by module
//!
//! - `grouper.rs`: splits the ruble count into zero-padded, scale-tagged triples.
//! - `rewriter.rs`: runs the rule table over each triple.
//! - `formatter.rs`: currency noun and kopeck phrase, both chosen by agreement.
//! - `postprocess.rs`: whitespace and first-letter capitalization.
//!
//! Set `PROPIS_LOG=trace` (CLI) to see every rule that fires.

#[path = "engine/formatter.rs"]
mod formatter;
#[path = "engine/grouper.rs"]
mod grouper;
#[path = "engine/postprocess.rs"]
mod postprocess;
#[path = "engine/rewriter.rs"]
mod rewriter;

pub use rewriter::GroupTrace;
#[cfg(test)]
pub(crate) use rewriter::rewrite_triple;

use crate::rules::ru::words::ZERO;
use crate::{Amount, Options, Rule};
use std::time::{Duration, Instant};

/// Engine output with everything the verbose API reports.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub text: String,
    /// The amount actually spelled (kopecks dropped when fractions are off).
    pub amount: Amount,
    pub groups: Vec<GroupTrace>,
    pub currency: Option<&'static str>,
    pub fraction: Option<String>,
    pub elapsed: Duration,
}

pub(crate) fn run(amount: &Amount, options: &Options, rules: &[Rule]) -> RunResult {
    let start = Instant::now();

    let amount = if options.with_fraction() { *amount } else { amount.truncated() };
    let triples = grouper::group(amount.rubles());
    let groups = rewriter::rewrite(&triples, rules);

    let mut words: Vec<&str> = groups.iter().flat_map(|g| g.words.iter().copied()).collect();
    if words.is_empty() {
        words.push(ZERO);
    }

    let currency = formatter::currency_noun(amount.rubles(), options);
    let fraction = formatter::kopeck_phrase(amount.kopecks(), options);
    words.extend(currency);
    if let Some(phrase) = fraction.as_deref() {
        words.push(phrase);
    }

    let text = postprocess::finish(&words, options.upper_first());
    tracing::debug!(%amount, text = %text, "converted");

    RunResult { text, amount, groups, currency, fraction, elapsed: start.elapsed() }
}
