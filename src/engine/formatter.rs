//! Currency and fraction formatting.

use crate::Options;
use crate::rules::ru::words::{KOPECK, RUBLE};

/// The ruble noun agreeing with the whole ruble count, or `None` without currency.
pub(crate) fn currency_noun(rubles: u64, options: &Options) -> Option<&'static str> {
    options.with_currency().then(|| RUBLE.select(rubles))
}

/// Kopecks are written as two digits followed by the agreeing noun: "05 копеек".
pub(crate) fn kopeck_phrase(kopecks: u8, options: &Options) -> Option<String> {
    options.with_fraction().then(|| format!("{:02} {}", kopecks, KOPECK.select(kopecks as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kopeck_phrase_agrees_with_count() {
        let opts = Options::default();
        let cases = [
            (0, "00 копеек"),
            (1, "01 копейка"),
            (2, "02 копейки"),
            (4, "04 копейки"),
            (5, "05 копеек"),
            (10, "10 копеек"),
            (11, "11 копеек"),
            (12, "12 копеек"),
            (14, "14 копеек"),
            (21, "21 копейка"),
            (22, "22 копейки"),
            (99, "99 копеек"),
        ];

        for (kopecks, expected) in cases {
            assert_eq!(kopeck_phrase(kopecks, &opts).as_deref(), Some(expected));
        }
    }

    #[test]
    fn no_currency_means_no_nouns() {
        let opts = Options::builder().with_currency(false).with_fraction(true).build();
        assert_eq!(currency_noun(1, &opts), None);
        assert_eq!(kopeck_phrase(1, &opts), None);
    }

    #[test]
    fn ruble_noun_follows_whole_count() {
        let opts = Options::default();
        assert_eq!(currency_noun(1, &opts), Some("рубль"));
        assert_eq!(currency_noun(184, &opts), Some("рубля"));
        assert_eq!(currency_noun(1000, &opts), Some("рублей"));
        assert_eq!(currency_noun(111, &opts), Some("рублей"));
        assert_eq!(currency_noun(1001, &opts), Some("рубль"));
    }
}
