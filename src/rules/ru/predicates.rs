use crate::{Gender, Scale, Triple};

/// Returns true when the hundreds digit is spoken (1..9).
pub fn has_hundreds(t: &Triple) -> bool {
    t.hundreds > 0
}

/// Returns true when the last two digits form 10..19.
pub fn is_teen(t: &Triple) -> bool {
    t.tens == 1
}

/// Returns true when the tens digit has its own word (20..90).
pub fn has_compound_tens(t: &Triple) -> bool {
    t.tens >= 2
}

/// Returns true when a units word follows (not zero, not inside a teen).
pub fn has_units(t: &Triple) -> bool {
    t.units > 0 && t.tens != 1
}

pub fn is_feminine(t: &Triple) -> bool {
    t.scale.gender() == Gender::Feminine
}

pub fn is_masculine(t: &Triple) -> bool {
    t.scale.gender() == Gender::Masculine
}

/// Returns true for thousands, millions and billions.
pub fn has_scale_noun(t: &Triple) -> bool {
    t.scale != Scale::Ones
}
