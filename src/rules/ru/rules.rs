use crate::Rule;

use crate::rules::ru::{
    agreement::scale_nouns,
    predicates::{has_compound_tens, has_hundreds, has_scale_noun, has_units, is_feminine, is_masculine, is_teen},
    words::{HUNDREDS, TEENS, TENS, UNITS_FEMININE, UNITS_MASCULINE},
};

// Rules. Table order is spoken order: each rule appends at most one word.

/// Rule matching a non-zero hundreds digit (сто..девятьсот).
fn rule_hundreds() -> Rule {
    rule! {
        name: "hundreds (100..900)",
        pattern: [has_hundreds],
        prod: |t| { HUNDREDS.get(t.hundreds as usize).copied() },
    }
}

/// Rule matching 10..19. Teens are single words and must win over the
/// tens and units rules, which both exclude them.
fn rule_teens() -> Rule {
    rule! {
        name: "teens (10..19)",
        pattern: [is_teen],
        prod: |t| { TEENS.get(t.units as usize).copied() },
    }
}

/// Rule matching twenty..ninety.
fn rule_tens() -> Rule {
    rule! {
        name: "tens (20..90)",
        pattern: [has_compound_tens],
        prod: |t| { TENS.get(t.tens as usize).copied() },
    }
}

/// Units of the thousands triple agree with the feminine "тысяча".
fn rule_units_feminine() -> Rule {
    rule! {
        name: "units (1..9, feminine)",
        pattern: [has_units, is_feminine],
        prod: |t| { UNITS_FEMININE.get(t.units as usize).copied() },
    }
}

fn rule_units_masculine() -> Rule {
    rule! {
        name: "units (1..9, masculine)",
        pattern: [has_units, is_masculine],
        prod: |t| { UNITS_MASCULINE.get(t.units as usize).copied() },
    }
}

/// Rule appending "тысяча/миллион/миллиард" in the form agreeing with the triple.
fn rule_scale_noun() -> Rule {
    rule! {
        name: "scale noun (agreement)",
        pattern: [has_scale_noun],
        prod: |t| { scale_nouns(t.scale).map(|forms| forms.select(t.value() as u64)) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_hundreds(),
        rule_teens(),
        rule_tens(),
        rule_units_feminine(),
        rule_units_masculine(),
        rule_scale_noun(),
    ]
}
