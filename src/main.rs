//! FIPS 180-4 SHA-256 digest of a single file.

mod block;
mod compress;
mod constants;
mod digest;
mod framer;
mod hashing;
mod report;
mod transcript;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::hashing::sha256_file;
use crate::report::DigestReport;
use crate::transcript::Transcript;

/// Exit code for malformed invocations.
const USAGE_EXIT: u8 = 2;

/// CLI arguments for the digester.
#[derive(Parser, Debug)]
#[command(
    name = "sha256",
    version,
    about = "Print the SHA-256 digest of a file",
    after_help = "Put `--` before a file name that starts with `-`, e.g. `sha256 -- --json`."
)]
struct Args {
    /// File to hash
    file: PathBuf,

    /// Emit a JSON object instead of the bare hex digest
    #[arg(long)]
    json: bool,

    /// Log hashing details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Single line: context and cause joined by `: `.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse argv, reducing usage errors to one stderr line.
fn parse_args() -> std::result::Result<Args, ExitCode> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            ErrorKind::MissingRequiredArgument => {
                eprintln!("error: expected a single filename argument");
                Err(ExitCode::from(USAGE_EXIT))
            }
            _ => {
                let rendered = err.to_string();
                let first = rendered.lines().next().unwrap_or("error: invalid arguments");
                eprintln!("{first}");
                Err(ExitCode::from(USAGE_EXIT))
            }
        },
    }
}

/// Hash the requested file and print the digest.
fn run(args: Args) -> Result<()> {
    let mut transcript = Transcript::new(args.verbose);
    let summary = sha256_file(&args.file, &mut transcript)?;

    if args.json {
        let report = DigestReport::new(&args.file, &summary);
        let json = serde_json::to_string(&report).context("serialize digest report")?;
        println!("{json}");
    } else {
        println!("{}", summary.digest);
    }
    Ok(())
}
