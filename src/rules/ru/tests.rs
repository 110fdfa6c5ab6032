use crate::engine::rewrite_triple;
use crate::rules::ru::{agreement::plurality, rules, words};
use crate::{Plurality, Scale, Triple};

fn spell(value: u16, scale: Scale) -> Vec<&'static str> {
    let rules = rules::get();
    rewrite_triple(&Triple::new(value, scale), &rules).words
}

#[test]
fn triple_examples_matching() {
    let cases: Vec<(u16, &str)> = vec![
        (1, "один"),
        (2, "два"),
        (9, "девять"),
        (10, "десять"),
        (11, "одиннадцать"),
        (14, "четырнадцать"),
        (19, "девятнадцать"),
        (20, "двадцать"),
        (21, "двадцать один"),
        (40, "сорок"),
        (90, "девяносто"),
        (99, "девяносто девять"),
        (100, "сто"),
        (101, "сто один"),
        (110, "сто десять"),
        (115, "сто пятнадцать"),
        (200, "двести"),
        (208, "двести восемь"),
        (342, "триста сорок два"),
        (470, "четыреста семьдесят"),
        (500, "пятьсот"),
        (676, "шестьсот семьдесят шесть"),
        (713, "семьсот тринадцать"),
        (860, "восемьсот шестьдесят"),
        (999, "девятьсот девяносто девять"),
    ];

    for (value, expected) in cases {
        assert_eq!(spell(value, Scale::Ones).join(" "), expected, "value {value}");
    }
}

#[test]
fn zero_triple_produces_nothing() {
    for scale in Scale::ALL {
        assert!(spell(0, scale).is_empty(), "scale {scale:?}");
    }
}

#[test]
fn thousands_take_feminine_units() {
    assert_eq!(spell(1, Scale::Thousands), vec!["одна", "тысяча"]);
    assert_eq!(spell(2, Scale::Thousands), vec!["две", "тысячи"]);
    assert_eq!(spell(22, Scale::Thousands), vec!["двадцать", "две", "тысячи"]);
    assert_eq!(spell(12, Scale::Thousands), vec!["двенадцать", "тысяч"]);

    assert_eq!(spell(1, Scale::Millions), vec!["один", "миллион"]);
    assert_eq!(spell(2, Scale::Billions), vec!["два", "миллиарда"]);
}

/// Expected noun form derived from the decimal digits alone.
fn expected_form(value: u16) -> Plurality {
    let s = format!("{value:03}");
    let last_two = &s[1..];
    if ["11", "12", "13", "14"].contains(&last_two) {
        return Plurality::Many;
    }
    match &s[2..] {
        "1" => Plurality::One,
        "2" | "3" | "4" => Plurality::Few,
        _ => Plurality::Many,
    }
}

#[test]
fn scale_noun_agreement_is_exhaustive() {
    let nouns = [
        (Scale::Thousands, &words::THOUSAND),
        (Scale::Millions, &words::MILLION),
        (Scale::Billions, &words::BILLION),
    ];

    for (scale, forms) in nouns {
        for value in 1..=999u16 {
            let spelled = spell(value, scale);
            let expected = forms.form(expected_form(value));
            assert_eq!(spelled.last().copied(), Some(expected), "{value} {scale:?}");
        }
    }
}

#[test]
fn plurality_over_last_two_digits() {
    for n in 0..100u64 {
        let expected = expected_form(n as u16);
        assert_eq!(plurality(n), expected, "n = {n}");
        // Higher digits never matter.
        assert_eq!(plurality(n + 100), expected, "n = {}", n + 100);
        assert_eq!(plurality(n + 999_999_900), expected, "n = {}", n + 999_999_900);
    }
}

#[test]
fn rule_table_order_is_spoken_order() {
    let names: Vec<&str> = rules::get().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "hundreds (100..900)",
            "teens (10..19)",
            "tens (20..90)",
            "units (1..9, feminine)",
            "units (1..9, masculine)",
            "scale noun (agreement)",
        ]
    );
}

#[test]
fn every_triple_is_spelled_without_blanks() {
    for scale in Scale::ALL {
        for value in 1..=999u16 {
            let spelled = spell(value, scale);
            assert!(!spelled.is_empty(), "{value} {scale:?}");
            assert!(spelled.iter().all(|w| !w.is_empty() && !w.contains(' ')), "{value} {scale:?}: {spelled:?}");
        }
    }
}
