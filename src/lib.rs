#[macro_use]
mod macros;
mod amount;
mod api;
mod engine;
mod error;
mod rules;

pub use amount::Amount;
pub use api::{
    Conversion, ConversionDetails, GroupSummary, Options, OptionsBuilder, convert_amount, convert_to_words,
    convert_verbose, ru_money,
};
pub use error::{Error, InvalidReason, Result};

// --- Internal types ---------------------------------------------------------

/// Power-of-thousand position of a digit triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Scale {
    Ones,
    Thousands,
    Millions,
    Billions,
}

impl Scale {
    /// All scales from the least significant triple upwards.
    pub const ALL: [Scale; 4] = [Scale::Ones, Scale::Thousands, Scale::Millions, Scale::Billions];

    /// Grammatical gender of the scale noun; it decides "один/одна" and "два/две".
    pub fn gender(self) -> Gender {
        match self {
            Scale::Thousands => Gender::Feminine,
            _ => Gender::Masculine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Ones => "ones",
            Scale::Thousands => "thousands",
            Scale::Millions => "millions",
            Scale::Billions => "billions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gender {
    Masculine,
    Feminine,
}

/// Noun form selected by the preceding numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Plurality {
    /// "рубль", "тысяча": last digit 1, except 11.
    One,
    /// "рубля", "тысячи": last digit 2..4, except 12..14.
    Few,
    /// "рублей", "тысяч": everything else.
    Many,
}

/// The three agreement forms of a counted noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NounForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl NounForms {
    pub fn form(&self, plurality: Plurality) -> &'static str {
        match plurality {
            Plurality::One => self.one,
            Plurality::Few => self.few,
            Plurality::Many => self.many,
        }
    }

    /// Pick the form agreeing with the count `n`.
    pub fn select(&self, n: u64) -> &'static str {
        self.form(crate::rules::ru::agreement::plurality(n))
    }
}

/// A zero-padded group of three decimal digits tagged with its scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Triple {
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
    pub scale: Scale,
}

impl Triple {
    pub fn new(value: u16, scale: Scale) -> Self {
        Triple {
            hundreds: (value / 100 % 10) as u8,
            tens: (value / 10 % 10) as u8,
            units: (value % 10) as u8,
            scale,
        }
    }

    pub fn value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.tens as u16 * 10 + self.units as u16
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0
    }

    /// Zero-padded digits, e.g. `"008"`.
    pub fn digits(&self) -> String {
        format!("{}{}{}", self.hundreds, self.tens, self.units)
    }
}

/// A triple predicate used in rule patterns.
pub(crate) type Predicate = fn(&Triple) -> bool;

pub(crate) type Production = Box<dyn Fn(&Triple) -> Option<&'static str> + Send + Sync>;

/// A rewriting rule: a name, a conjunction of triple predicates and a
/// `production` that yields at most one word for the matched triple.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Vec<Predicate>,
    pub production: Production,
}

impl Rule {
    pub fn matches(&self, triple: &Triple) -> bool {
        self.pattern.iter().all(|p| p(triple))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.len())
            .field("production", &"<function>")
            .finish()
    }
}
