//! Rule-table rewriting.
//!
//! Each triple is classified once into digits + scale and then offered to the
//! rules in table order. A rule whose pattern holds contributes one word, so
//! the table order is the spoken order ("двести восемь тысяч").
//!
//! Zero triples above the ones position are elided together with their scale
//! noun: `1 000 005` reads "один миллион пять", never "... ноль тысяч ...".

use crate::{Rule, Scale, Triple};

/// Words produced for one triple and the rules that produced them.
#[derive(Debug, Clone)]
pub struct GroupTrace {
    pub triple: Triple,
    pub words: Vec<&'static str>,
    pub fired: Vec<&'static str>,
    pub elided: bool,
}

pub(crate) fn rewrite(triples: &[Triple], rules: &[Rule]) -> Vec<GroupTrace> {
    triples.iter().map(|t| rewrite_triple(t, rules)).collect()
}

pub(crate) fn rewrite_triple(triple: &Triple, rules: &[Rule]) -> GroupTrace {
    if triple.is_zero() {
        if triple.scale != Scale::Ones {
            tracing::debug!(scale = triple.scale.name(), "elided zero group");
        }
        return GroupTrace { triple: *triple, words: Vec::new(), fired: Vec::new(), elided: true };
    }

    let mut words = Vec::new();
    let mut fired = Vec::new();

    for rule in rules {
        if !rule.matches(triple) {
            continue;
        }
        match (rule.production)(triple) {
            Some(word) if !word.is_empty() => {
                tracing::trace!(rule = rule.name, digits = %triple.digits(), scale = triple.scale.name(), word = word);
                words.push(word);
                fired.push(rule.name);
            }
            _ => tracing::trace!(rule = rule.name, digits = %triple.digits(), "production_none"),
        }
    }

    GroupTrace { triple: *triple, words, fired, elided: false }
}
