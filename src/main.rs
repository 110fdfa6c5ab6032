mod debug_report;

use propis::{Amount, Options};
use std::io::{self, IsTerminal, Read};

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut failed = false;
    for input in &config.inputs {
        let amount = match input.parse::<Amount>() {
            Ok(amount) => amount,
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
                continue;
            }
        };

        if config.explain {
            let conversion = amount.to_words_verbose(&config.options);
            debug_report::print_conversion(input, &conversion, config.color);
        } else {
            println!("{}", amount.to_words(&config.options));
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Install a stderr `tracing` subscriber filtered by `PROPIS_LOG` (default `warn`).
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("PROPIS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

struct CliConfig {
    inputs: Vec<String>,
    options: Options,
    explain: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut inputs: Vec<String> = Vec::new();
    let mut builder = Options::builder();
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("propis {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-u" | "--upper-first" => builder = builder.upper_first(true),
            "--no-fraction" => builder = builder.with_fraction(false),
            "--no-currency" => builder = builder.with_currency(false),
            "-e" | "--explain" => explain = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--" => {
                inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with('-') && !looks_numeric(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        inputs = read_stdin_inputs()?;
    }

    if inputs.is_empty() {
        return Err(format!("error: no amount provided\n\n{}", help_text()));
    }

    Ok(CliConfig { inputs, options: builder.build(), explain, color })
}

/// Negative amounts start with '-' too; let them reach the converter so it
/// can report them properly.
fn looks_numeric(arg: &str) -> bool {
    arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn read_stdin_inputs() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "propis {version}

Write ruble amounts in Russian words.

Usage:
  propis [OPTIONS] [--] <amount...>
  propis [OPTIONS] < amounts.txt

Amounts look like 184, 100.21, 100,21 or \"208 676\". Without amount
arguments one amount per line is read from stdin.

Options:
  -u, --upper-first          Capitalize the first letter.
  --no-fraction              Drop kopecks (truncated, not rounded).
  --no-currency              Bare number: no ruble/kopeck nouns, no kopecks.
  -e, --explain              Print the per-group rule trace.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  PROPIS_LOG                 Log filter, e.g. debug or trace. Default: warn

Exit codes:
  0  Success.
  1  At least one amount could not be converted.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
