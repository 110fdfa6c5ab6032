use crate::engine;
use crate::{Amount, Result, Rule};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::ru::rules::get);

bitflags::bitflags! {
    /// Rendering switches carried by [`Options`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Flags: u8 {
        const UPPER_FIRST   = 1 << 0;
        const WITH_FRACTION = 1 << 1;
        const WITH_CURRENCY = 1 << 2;
    }
}

/// Options that affect how an amount is written.
///
/// Options are immutable once built. Use [`Options::builder`] to change the
/// defaults:
///
/// | option          | default | effect                                         |
/// |-----------------|---------|------------------------------------------------|
/// | `upper_first`   | `false` | capitalize the first letter                    |
/// | `with_fraction` | `true`  | append "NN копеек"; when off, kopecks are truncated |
/// | `with_currency` | `true`  | ruble/kopeck nouns; when off, fraction is off too |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    flags: Flags,
}

impl Default for Options {
    fn default() -> Self {
        Options { flags: Flags::WITH_FRACTION | Flags::WITH_CURRENCY }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn upper_first(&self) -> bool {
        self.flags.contains(Flags::UPPER_FIRST)
    }

    pub fn with_fraction(&self) -> bool {
        self.flags.contains(Flags::WITH_FRACTION)
    }

    pub fn with_currency(&self) -> bool {
        self.flags.contains(Flags::WITH_CURRENCY)
    }
}

/// Builder for [`Options`].
///
/// Setter order does not matter: disabling the currency always disables the
/// fraction, whatever `with_fraction` was set to.
#[derive(Debug, Clone, Copy)]
pub struct OptionsBuilder {
    upper_first: bool,
    with_fraction: bool,
    with_currency: bool,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        OptionsBuilder { upper_first: false, with_fraction: true, with_currency: true }
    }
}

impl OptionsBuilder {
    pub fn upper_first(mut self, v: bool) -> Self {
        self.upper_first = v;
        self
    }

    pub fn with_fraction(mut self, v: bool) -> Self {
        self.with_fraction = v;
        self
    }

    pub fn with_currency(mut self, v: bool) -> Self {
        self.with_currency = v;
        self
    }

    pub fn build(self) -> Options {
        let mut flags = Flags::empty();
        flags.set(Flags::UPPER_FIRST, self.upper_first);
        flags.set(Flags::WITH_CURRENCY, self.with_currency);
        flags.set(Flags::WITH_FRACTION, self.with_fraction && self.with_currency);
        Options { flags }
    }
}

/// Words produced for one digit group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// `"ones"`, `"thousands"`, `"millions"` or `"billions"`.
    pub scale: &'static str,
    /// Zero-padded digits of the group, e.g. `"008"`.
    pub digits: String,
    pub words: Vec<String>,
    /// Names of the rules that fired, in table order.
    pub rules: Vec<String>,
    /// Whether the group was all zeros and produced nothing.
    pub elided: bool,
}

/// Additional details returned by [`convert_verbose`].
#[derive(Debug, Clone)]
pub struct ConversionDetails {
    /// The amount actually spelled, after kopeck truncation if any.
    pub amount: Amount,
    pub groups: Vec<GroupSummary>,
    pub currency: Option<String>,
    pub fraction: Option<String>,
    pub elapsed: Duration,
}

/// Result from [`convert_verbose`].
#[derive(Debug, Clone)]
pub struct Conversion {
    pub text: String,
    pub details: ConversionDetails,
}

/// Write `amount` in Russian words using the default [`Options`].
///
/// # Example
/// ```
/// let text = propis::ru_money(100.21).unwrap();
/// assert_eq!(text, "сто рублей 21 копейка");
/// ```
pub fn ru_money(amount: f64) -> Result<String> {
    convert_to_words(amount, &Options::default())
}

/// Write `amount` in Russian words.
///
/// Fails with [`crate::Error::InvalidAmount`] for negative, non-finite and
/// too large (≥ 10^12) amounts.
///
/// # Example
/// ```
/// use propis::{Options, convert_to_words};
///
/// let opts = Options::builder().with_fraction(false).build();
/// assert_eq!(convert_to_words(184.0, &opts).unwrap(), "сто восемьдесят четыре рубля");
/// ```
pub fn convert_to_words(amount: f64, options: &Options) -> Result<String> {
    let amount = Amount::try_from(amount)?;
    Ok(convert_amount(&amount, options))
}

/// Write an already validated amount. Never fails.
pub fn convert_amount(amount: &Amount, options: &Options) -> String {
    engine::run(amount, options, &DEFAULT_RULES).text
}

/// Convert `amount` and return the per-group trace alongside the text.
///
/// The default [`convert_to_words`] path goes through the same engine; this
/// variant only copies the trace out for reporting.
pub fn convert_verbose(amount: f64, options: &Options) -> Result<Conversion> {
    let amount = Amount::try_from(amount)?;
    Ok(convert_amount_verbose(&amount, options))
}

pub(crate) fn convert_amount_verbose(amount: &Amount, options: &Options) -> Conversion {
    let run = engine::run(amount, options, &DEFAULT_RULES);

    let groups = run
        .groups
        .iter()
        .map(|g| GroupSummary {
            scale: g.triple.scale.name(),
            digits: g.triple.digits(),
            words: g.words.iter().map(|w| w.to_string()).collect(),
            rules: g.fired.iter().map(|r| r.to_string()).collect(),
            elided: g.elided,
        })
        .collect();

    let details = ConversionDetails {
        amount: run.amount,
        groups,
        currency: run.currency.map(str::to_string),
        fraction: run.fraction,
        elapsed: run.elapsed,
    };

    Conversion { text: run.text, details }
}

impl Amount {
    /// Shorthand for [`convert_amount`].
    pub fn to_words(&self, options: &Options) -> String {
        convert_amount(self, options)
    }

    /// Shorthand for the verbose conversion of an already validated amount.
    pub fn to_words_verbose(&self, options: &Options) -> Conversion {
        convert_amount_verbose(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, InvalidReason};

    fn opts() -> OptionsBuilder {
        Options::builder()
    }

    #[test]
    fn literal_scenarios() {
        let cases: Vec<(f64, Options, &str)> = vec![
            (1.0, opts().upper_first(true).build(), "Один рубль 00 копеек"),
            (100.21, Options::default(), "сто рублей 21 копейка"),
            (184.0, opts().with_fraction(false).build(), "сто восемьдесят четыре рубля"),
            (
                208676.0,
                opts().with_fraction(false).upper_first(true).build(),
                "Двести восемь тысяч шестьсот семьдесят шесть рублей",
            ),
            (4702.0, opts().with_currency(false).build(), "четыре тысячи семьсот два"),
        ];

        for (amount, options, expected) in cases {
            assert_eq!(convert_to_words(amount, &options).unwrap(), expected, "amount {amount}");
        }
    }

    #[test]
    fn defaults() {
        let o = Options::default();
        assert!(!o.upper_first());
        assert!(o.with_fraction());
        assert!(o.with_currency());
        assert_eq!(opts().build(), o);
    }

    #[test]
    fn no_currency_forces_no_fraction_in_any_order() {
        let a = opts().with_currency(false).with_fraction(true).build();
        let b = opts().with_fraction(true).with_currency(false).build();
        assert_eq!(a, b);
        assert!(!a.with_fraction());
        assert!(!a.with_currency());
    }

    #[test]
    fn fraction_is_truncated_not_rounded() {
        let o = opts().with_fraction(false).build();
        assert_eq!(convert_to_words(1.99, &o).unwrap(), "один рубль");
        assert_eq!(convert_to_words(4.5, &o).unwrap(), "четыре рубля");
    }

    #[test]
    fn zero_amounts() {
        assert_eq!(ru_money(0.0).unwrap(), "ноль рублей 00 копеек");
        assert_eq!(ru_money(0.5).unwrap(), "ноль рублей 50 копеек");
        let bare = opts().with_currency(false).build();
        assert_eq!(convert_to_words(0.0, &bare).unwrap(), "ноль");
    }

    #[test]
    fn scale_groups_and_elision() {
        let o = opts().with_fraction(false).build();
        let cases: Vec<(f64, &str)> = vec![
            (1000.0, "одна тысяча рублей"),
            (2000.0, "две тысячи рублей"),
            (10_000.0, "десять тысяч рублей"),
            (11_000.0, "одиннадцать тысяч рублей"),
            (21_000.0, "двадцать одна тысяча рублей"),
            (1_000_005.0, "один миллион пять рублей"),
            (2_000_000.0, "два миллиона рублей"),
            (5_000_000.0, "пять миллионов рублей"),
            (1_000_000_000.0, "один миллиард рублей"),
            (3_000_001_000.0, "три миллиарда одна тысяча рублей"),
            (112.0, "сто двенадцать рублей"),
            (121.0, "сто двадцать один рубль"),
            (
                999_999_999_999.0,
                "девятьсот девяносто девять миллиардов девятьсот девяносто девять миллионов \
                 девятьсот девяносто девять тысяч девятьсот девяносто девять рублей",
            ),
        ];

        for (amount, expected) in cases {
            assert_eq!(convert_to_words(amount, &o).unwrap(), expected, "amount {amount}");
        }
    }

    #[test]
    fn rejects_out_of_domain_amounts() {
        for (amount, reason) in [
            (-1.0, InvalidReason::Negative),
            (f64::NAN, InvalidReason::NotFinite),
            (1e12, InvalidReason::OutOfRange),
        ] {
            match ru_money(amount) {
                Err(Error::InvalidAmount { reason: r, .. }) => assert_eq!(r, reason),
                other => panic!("expected {reason:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn verbose_reports_groups_and_rules() {
        let res = convert_verbose(1_000_021.5, &Options::default()).unwrap();
        assert_eq!(res.text, "один миллион двадцать один рубль 50 копеек");

        let d = &res.details;
        assert_eq!(d.amount, Amount::new(1_000_021, 50).unwrap());
        assert_eq!(d.currency.as_deref(), Some("рубль"));
        assert_eq!(d.fraction.as_deref(), Some("50 копеек"));
        assert_eq!(d.groups.len(), 3);

        assert_eq!(d.groups[0].scale, "millions");
        assert_eq!(d.groups[0].words, vec!["один", "миллион"]);
        assert_eq!(d.groups[0].rules, vec!["units (1..9, masculine)", "scale noun (agreement)"]);

        assert_eq!(d.groups[1].digits, "000");
        assert!(d.groups[1].elided);
        assert!(d.groups[1].words.is_empty());

        assert_eq!(d.groups[2].rules, vec!["tens (20..90)", "units (1..9, masculine)"]);
    }

    #[test]
    fn amount_to_words_matches_float_path() {
        let amount: Amount = "208 676,05".parse().unwrap();
        assert_eq!(
            amount.to_words(&Options::default()),
            convert_to_words(208676.05, &Options::default()).unwrap()
        );
    }
}
