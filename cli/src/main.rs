//! unprofile CLI - profile record extraction tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use unprofile::{
    extract_gated, record_to_json, report_to_json, to_text, BlockPolicy, CleanupPreset,
    ExtractOptions, ExtractionReport, ExtractionStats, JsonFormat, Outcome, RenderedDocument,
    SessionConfig, SnapshotMeta,
};

/// Exit code used when a page is judged blocked.
const EXIT_BLOCKED: u8 = 2;

#[derive(Parser)]
#[command(name = "unprofile")]
#[command(version)]
#[command(about = "Extract structured profile records from rendered page text", long_about = None)]
struct Cli {
    /// Input snapshot file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable record summary
    Text {
        /// Input snapshot file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Extract a record as JSON
    Json {
        /// Input snapshot file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Final URL of the capture; enables the blocked-page gate
        #[arg(long)]
        url: Option<String>,

        /// Emit a full extraction report (metadata and statistics)
        #[arg(long)]
        report: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Run only the blocked-page policy against a snapshot
    Check {
        /// Input snapshot file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Final URL of the capture
        #[arg(long)]
        url: Option<String>,
    },

    /// Extract many snapshot files to a directory of JSON records
    Batch {
        /// Input snapshot files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "records")]
        output: PathBuf,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Disable parallel extraction
        #[arg(long)]
        sequential: bool,
    },

    /// Show snapshot document statistics
    Info {
        /// Input snapshot file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Emit a browser session configuration for the automation layer
    Session {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Unicode normalization only
    Minimal,
    /// Bullet and whitespace normalization (default)
    Standard,
    /// Also strip interface artifact lines
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            cleanup,
        }) => cmd_text(&input, output.as_deref(), cleanup),
        Some(Commands::Json {
            input,
            output,
            compact,
            url,
            report,
            cleanup,
        }) => cmd_json(&input, output.as_deref(), compact, url.as_deref(), report, cleanup),
        Some(Commands::Check { input, url }) => cmd_check(&input, url.as_deref()),
        Some(Commands::Batch {
            inputs,
            output,
            cleanup,
            sequential,
        }) => cmd_batch(&inputs, &output, cleanup, sequential),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Session { output }) => cmd_session(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if let Some(input) = cli.input {
                cmd_text(&input, None, cli.cleanup)
            } else {
                println!("{}", "Usage: unprofile <FILE>".yellow());
                println!("       unprofile --help for more information");
                Ok(ExitCode::SUCCESS)
            }
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

type CmdResult = Result<ExitCode, Box<dyn std::error::Error>>;

/// Read a snapshot file, treating "-" as stdin.
fn read_input(path: &Path) -> Result<String, std::io::Error> {
    if path == Path::new("-") {
        debug!("reading snapshot from stdin");
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        debug!("reading snapshot from {}", path.display());
        fs::read_to_string(path)
    }
}

fn options_for(cleanup: Option<CleanupLevel>) -> ExtractOptions {
    let mut options = ExtractOptions::new();
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }
    options
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), std::io::Error> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>, cleanup: Option<CleanupLevel>) -> CmdResult {
    let text = read_input(input)?;
    let record = unprofile::extract_str_with_options(&text, &options_for(cleanup));
    write_or_print(output, to_text(&record).trim_end())?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    url: Option<&str>,
    report: bool,
    cleanup: Option<CleanupLevel>,
) -> CmdResult {
    let text = read_input(input)?;
    let options = options_for(cleanup);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let record = if url.is_some() {
        match extract_gated(url, &text, &BlockPolicy::default(), &options) {
            Outcome::Success(record) => record,
            Outcome::Blocked(reason) => {
                eprintln!("{}: {}", "Blocked".red().bold(), reason);
                return Ok(ExitCode::from(EXIT_BLOCKED));
            }
            Outcome::Transient(message) => return Err(message.into()),
        }
    } else {
        unprofile::extract_str_with_options(&text, &options)
    };

    let json = if report {
        let doc = RenderedDocument::parse(&text);
        let stats = ExtractionStats::collect(&doc, &record);
        let mut meta = SnapshotMeta::new().captured_now();
        if let Some(url) = url {
            meta = meta.with_url(url);
        }
        report_to_json(&ExtractionReport::new(meta, record, stats), format)?
    } else {
        record_to_json(&record, format)?
    };

    write_or_print(output, &json)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(input: &Path, url: Option<&str>) -> CmdResult {
    let text = read_input(input)?;
    let policy = BlockPolicy::default();

    match policy.evaluate(url, &text) {
        Some(reason) => {
            println!("{}: {}", "Blocked".red().bold(), reason);
            Ok(ExitCode::from(EXIT_BLOCKED))
        }
        None => {
            println!("{}", "Page looks like a profile".green());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: &Path,
    cleanup: Option<CleanupLevel>,
    sequential: bool,
) -> CmdResult {
    fs::create_dir_all(output)?;

    let mut options = options_for(cleanup);
    if sequential {
        options = options.sequential();
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting...");

    let results = unprofile::extract_files(inputs, &options);

    let mut failures = 0usize;
    for (path, result) in &results {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        match result {
            Ok(record) => {
                let json = record_to_json(record, JsonFormat::Pretty)?;
                fs::write(output.join(format!("{}.json", stem)), json)?;
            }
            Err(e) => {
                pb.suspend(|| {
                    eprintln!("{} {}: {}", "Failed".red(), path.display(), e);
                });
                failures += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} records written to {} ({} failed)",
        "Done!".green().bold(),
        results.len() - failures,
        output.display(),
        failures
    );

    if failures > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_info(input: &Path) -> CmdResult {
    let text = read_input(input)?;
    let doc = RenderedDocument::parse(&text);
    let record = unprofile::extract::extract(&doc);
    let stats = ExtractionStats::collect(&doc, &record);

    println!("{}", "Snapshot Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}/5", "Fields populated".bold(), stats.fields_populated);

    println!();
    println!("{}", "Extracted Record".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print!("{}", to_text(&record));

    Ok(ExitCode::SUCCESS)
}

fn cmd_session(output: Option<&Path>) -> CmdResult {
    let config = SessionConfig::default();
    write_or_print(output, &config.to_json()?)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_version() {
    println!("{} {}", "unprofile".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Profile record extraction tool");
    println!();
    println!("License: MIT");
}
