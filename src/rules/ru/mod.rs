//! Russian cardinal numerals and the nouns counted by them.

pub mod agreement;
pub mod predicates;
pub mod rules;
pub mod words;

#[cfg(test)]
mod tests;
