mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use numnorm_core::{explain, Normalization, RULES};
use serde::Serialize;
use tracing::{debug, info};

/// Every value normalized
const EXIT_OK: i32 = 0;
/// At least one value had no recognizable format
const EXIT_ABSENT: i32 = 1;
/// Usage or I/O error
const EXIT_ERROR: i32 = 2;

/// numnorm - locale-ambiguous number normalizer
///
/// Converts numerals such as "1.000.000,12" or "1,000,000.12" to a single
/// integer, rounding fractions half away from zero.
#[derive(Parser)]
#[command(name = "numnorm", version, about, long_about = None)]
struct Cli {
    /// Print nothing on stdout; report through the exit code only
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one or more values
    Normalize {
        /// Values to normalize (use quotes for values with spaces)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a value is sanitized, recognized and rounded
    Explain {
        /// Value to explain
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize one value per line from a file (or stdin)
    Batch {
        /// Input file; omit or use "-" for stdin
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognized formats in evaluation order
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let quiet = cli.quiet;
    let exit_code = match cli.command {
        Commands::Normalize { values, json } => cmd_normalize(&values, json, quiet),
        Commands::Explain { value, json } => cmd_explain(&value, json, quiet),
        Commands::Batch { file, json } => cmd_batch(file, json, quiet),
        Commands::Rules { json } => cmd_rules(json, quiet),
        Commands::Version => {
            if !quiet {
                println!(
                    "numnorm {} (numnorm-core {})",
                    env!("CARGO_PKG_VERSION"),
                    numnorm_core::VERSION
                );
            }
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

// ── Commands ──────────────────────────────────────────────

fn cmd_normalize(values: &[String], json: bool, quiet: bool) -> i32 {
    let reports: Vec<Normalization> = values.iter().map(|v| explain(v)).collect();
    emit_reports(&reports, json, quiet)
}

fn cmd_explain(value: &str, json: bool, quiet: bool) -> i32 {
    let report = explain(value);

    if !quiet {
        if json {
            if let Err(e) = print_json(&report) {
                return fail(&e);
            }
        } else {
            println!("input:     {:?}", report.input);
            println!("sanitized: {:?}", report.sanitized);
            match report.rule {
                Some(rule) => println!(
                    "rule:      {} ({})",
                    rule.to_string().cyan(),
                    rule.description()
                ),
                None => println!("rule:      {}", "none".yellow()),
            }
            match report.value {
                Some(v) => println!("value:     {}", v.to_string().green().bold()),
                None => println!("value:     {}", "absent".yellow()),
            }
        }
    }

    exit_for(&[report])
}

fn cmd_batch(file: Option<PathBuf>, json: bool, quiet: bool) -> i32 {
    let lines = match read_lines(file.as_ref()) {
        Ok(lines) => lines,
        Err(e) => return fail(&e),
    };
    info!(count = lines.len(), "normalizing batch");

    let reports: Vec<Normalization> = lines.iter().map(|l| explain(l)).collect();
    emit_reports(&reports, json, quiet)
}

#[derive(Serialize)]
struct RuleInfo {
    order: usize,
    rule: String,
    strategy: numnorm_core::Strategy,
    pattern: String,
    description: &'static str,
    example: &'static str,
}

fn cmd_rules(json: bool, quiet: bool) -> i32 {
    if quiet {
        return EXIT_OK;
    }

    let rules: Vec<RuleInfo> = RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleInfo {
            order: i + 1,
            rule: rule.to_string(),
            strategy: rule.strategy(),
            pattern: rule.pattern().as_str().to_string(),
            description: rule.description(),
            example: rule.example(),
        })
        .collect();

    if json {
        if let Err(e) = print_json(&rules) {
            return fail(&e);
        }
    } else {
        for info in &rules {
            println!(
                "{}. {} {}",
                info.order,
                format!("{:<15}", info.rule).cyan(),
                info.description
            );
            println!("   pattern: {}", info.pattern);
            println!("   example: {}", info.example);
        }
    }
    EXIT_OK
}

// ── Helpers ───────────────────────────────────────────────

#[derive(Serialize)]
struct BatchReport<'a> {
    normalized: usize,
    absent: usize,
    results: &'a [Normalization],
}

fn emit_reports(reports: &[Normalization], json: bool, quiet: bool) -> i32 {
    let absent = reports.iter().filter(|r| r.value.is_none()).count();
    debug!(total = reports.len(), absent, "normalization finished");

    if !quiet {
        if json {
            let output = BatchReport {
                normalized: reports.len() - absent,
                absent,
                results: reports,
            };
            if let Err(e) = print_json(&output) {
                return fail(&e);
            }
        } else {
            for report in reports {
                match report.value {
                    Some(v) => println!("{}", v),
                    None => println!("-"),
                }
            }
        }
    }

    if absent > 0 {
        eprintln!(
            "{} {} of {} value(s) not recognized",
            "warning:".yellow().bold(),
            absent,
            reports.len()
        );
    }
    exit_for(reports)
}

fn exit_for(reports: &[Normalization]) -> i32 {
    if reports.iter().all(|r| r.value.is_some()) {
        EXIT_OK
    } else {
        EXIT_ABSENT
    }
}

/// Read non-blank lines from a file, or stdin for `None` / `-`
///
/// Bytes that are not UTF-8 (legacy-encoded currency signs) decode to
/// U+FFFD, which sanitization then drops like any other decoration.
fn read_lines(file: Option<&PathBuf>) -> numnorm_core::Result<Vec<String>> {
    let mut reader: Box<dyn BufRead> = match file {
        Some(path) if path.as_os_str() != "-" => {
            debug!(path = %path.display(), "reading batch file");
            Box::new(BufReader::new(File::open(path)?))
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn print_json<T: Serialize>(value: &T) -> numnorm_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(err: &numnorm_core::Error) -> i32 {
    eprintln!("{} {}", "error:".red().bold(), err);
    EXIT_ERROR
}
