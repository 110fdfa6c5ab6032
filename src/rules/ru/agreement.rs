use crate::rules::ru::words::{BILLION, MILLION, THOUSAND};
use crate::{NounForms, Plurality, Scale};

/// Select the noun form a Russian cardinal `n` governs.
///
/// Only the last two digits matter: 11..14 always take the genitive plural,
/// otherwise the last digit decides.
pub fn plurality(n: u64) -> Plurality {
    if (11..=14).contains(&(n % 100)) {
        return Plurality::Many;
    }

    match n % 10 {
        1 => Plurality::One,
        2..=4 => Plurality::Few,
        _ => Plurality::Many,
    }
}

/// Noun forms for a scale; the ones triple carries no scale noun.
pub fn scale_nouns(scale: Scale) -> Option<&'static NounForms> {
    match scale {
        Scale::Ones => None,
        Scale::Thousands => Some(&THOUSAND),
        Scale::Millions => Some(&MILLION),
        Scale::Billions => Some(&BILLION),
    }
}
