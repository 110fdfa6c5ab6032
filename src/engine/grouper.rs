//! Digit grouping.
//!
//! The ruble count is split right-to-left into triples of decimal digits.
//! Every triple is zero-padded, so `208676` becomes
//!
//! ```text
//! [ 208 (thousands) | 676 (ones) ]
//! ```
//!
//! and the rewriter can rely on all three digit slots being populated.

use crate::{Scale, Triple};

/// Split `rubles` into triples, most significant first.
///
/// At least the ones triple is always returned; leading all-zero triples are
/// not. Values are expected below 10^12 (guaranteed by `Amount`).
pub(crate) fn group(rubles: u64) -> Vec<Triple> {
    let mut triples = Vec::with_capacity(Scale::ALL.len());
    let mut rest = rubles;

    for scale in Scale::ALL {
        triples.push(Triple::new((rest % 1000) as u16, scale));
        rest /= 1000;
        if rest == 0 {
            break;
        }
    }

    triples.reverse();
    tracing::debug!(
        rubles,
        groups = ?triples.iter().map(|t| t.digits()).collect::<Vec<_>>(),
        "grouped"
    );
    triples
}
