use propis::{Conversion, GroupSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_conversion(input: &str, conversion: &Conversion, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &conversion.details;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Amount: \"{}\" → {}", input, details.amount), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Groups ━━━", ansi::GRAY));
    for group in &details.groups {
        print_group(group, &palette);
    }

    println!("\n{}", palette.paint("━━━ Currency ━━━", ansi::GRAY));
    println!(
        "  {} {}  {} {}",
        palette.dim("rubles:"),
        palette.paint(details.currency.as_deref().unwrap_or("—"), ansi::BLUE),
        palette.dim("│ kopecks:"),
        palette.paint(details.fraction.as_deref().unwrap_or("—"), ansi::BLUE),
    );

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&conversion.text, ansi::GREEN)));
    println!("\n  {} {}", palette.dim("Total:"), palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    println!();
}

fn print_group(group: &GroupSummary, palette: &ansi::Palette) {
    let label = format!("{:<9}", group.scale);
    if group.elided {
        println!(
            "  {} {} {}",
            palette.paint(label, ansi::BLUE),
            palette.paint(&group.digits, ansi::YELLOW),
            palette.dim("✗ elided")
        );
        return;
    }

    println!(
        "  {} {} {}",
        palette.paint(label, ansi::BLUE),
        palette.paint(&group.digits, ansi::YELLOW),
        palette.bold(group.words.join(" "))
    );
    for (rule, word) in group.rules.iter().zip(&group.words) {
        println!("      {} {} {}", palette.paint(rule, ansi::CYAN), palette.dim("→"), word);
    }
}
