//! pii-scan CLI - scan text files for PII and secret material

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pii_scan::{load_patterns_from_dir, scan, Match, PatternSet};

/// Scan files for PII and secret material using declarative pattern
/// definitions plus semantic verifiers.
#[derive(Parser, Debug)]
#[command(name = "pii-scan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory holding pattern definition files (*.yml/*.yaml)
    #[arg(short = 'p', long, default_value = "patterns")]
    patterns: PathBuf,

    /// Only report matches whose pattern `location` tag equals this value
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// Output format: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Show the matched substring alongside each match (redacted by default)
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let pattern_set = match load_patterns_from_dir(&args.patterns) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error loading patterns from {}: {e}", args.patterns.display());
            return ExitCode::FAILURE;
        }
    };

    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        if let Err(e) = scan_file(file, &pattern_set, &args) {
            eprintln!("Error scanning {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn scan_file(
    path: &PathBuf,
    pattern_set: &PatternSet,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let matches = scan(pattern_set, &contents, args.location.as_deref());

    match args.format {
        OutputFormat::Text => print_text_output(path, &matches, args.verbose),
        OutputFormat::Json => print_json_output(path, &matches, args.verbose),
    }

    Ok(())
}

fn print_text_output(path: &std::path::Path, matches: &[Match], verbose: bool) {
    println!("File: {}", path.display());
    println!("  Matches: {}", matches.len());

    for m in matches {
        print!(
            "    [{}..{}] {} severity={} action={}",
            m.start(),
            m.end(),
            m.pattern_id,
            m.policy.severity,
            m.policy.action_on_match
        );
        if verbose {
            print!(" text={:?}", m.matched_text);
        } else {
            print!(" masked={}", m.mask);
        }
        println!();
    }

    println!();
}

fn print_json_output(path: &std::path::Path, matches: &[Match], verbose: bool) {
    print!(r#"{{"file":"{}","matches":["#, path.display());

    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            print!(",");
        }
        print!(
            r#"{{"pattern_id":"{}","start":{},"end":{},"severity":"{}","action_on_match":"{}""#,
            m.pattern_id,
            m.start(),
            m.end(),
            m.policy.severity,
            m.policy.action_on_match
        );
        if verbose {
            print!(r#","text":{}"#, serde_json_escape(&m.matched_text));
        }
        print!("}}");
    }

    println!("]}}");
}

/// Minimal string escaping for the verbose JSON text field — the CLI has no
/// other use for a full JSON serializer.
fn serde_json_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
