use crate::NounForms;

// Lexicon
/// Hundreds words indexed by the hundreds digit; index 0 is never spoken.
pub static HUNDREDS: [&str; 10] =
    ["", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот", "девятьсот"];

/// 10..19 indexed by the units digit.
pub static TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

/// Tens words indexed by the tens digit; 0 and 1 are handled elsewhere.
pub static TENS: [&str; 10] =
    ["", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят", "восемьдесят", "девяносто"];

pub static UNITS_MASCULINE: [&str; 10] =
    ["", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять"];

/// "тысяча" is feminine: "одна тысяча", "две тысячи".
pub static UNITS_FEMININE: [&str; 10] =
    ["", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять"];

pub const ZERO: &str = "ноль";

// Counted nouns
pub static THOUSAND: NounForms = nouns!("тысяча", "тысячи", "тысяч");
pub static MILLION: NounForms = nouns!("миллион", "миллиона", "миллионов");
pub static BILLION: NounForms = nouns!("миллиард", "миллиарда", "миллиардов");
pub static RUBLE: NounForms = nouns!("рубль", "рубля", "рублей");
pub static KOPECK: NounForms = nouns!("копейка", "копейки", "копеек");
