//! Streaming SHA-256 checksum tool entrypoint.

mod hashing;
mod inputs;
mod report;
mod transcript;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::hashing::{parse_chunk_size, sha256_file, sha256_stdin, Digest, DEFAULT_CHUNK_SIZE};
use crate::inputs::{default_operands, resolve_operand, Input};
use crate::report::{render, HashReport, OutputFormat};
use crate::transcript::Transcript;

/// CLI arguments for the checksum tool.
#[derive(Parser, Debug)]
#[command(
    name = "sha256-stream",
    version,
    about = "Compute SHA-256 digests of files or standard input"
)]
struct Args {
    /// Files or directories to hash (`-` reads standard input)
    paths: Vec<PathBuf>,

    /// Hash every regular file below directory operands
    #[arg(short, long)]
    recursive: bool,

    /// Bytes read per update call (at most 16 MiB)
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = parse_chunk_size
    )]
    chunk_size: usize,

    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Emit a transcript of each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Hash every operand and print the results. Returns `false` if any input failed.
fn run(args: Args) -> Result<bool> {
    let mut transcript = Transcript::new(args.verbose);

    let operands = if args.paths.is_empty() {
        let defaults = default_operands();
        transcript.note(format!(
            "no operands; using default input {}",
            defaults[0].display()
        ));
        defaults
    } else {
        args.paths
    };
    transcript.note(format!(
        "chunk size {} bytes, format {:?}",
        args.chunk_size, args.format
    ));

    let mut reports = Vec::new();
    let mut attempted = 0usize;
    let mut ok = true;
    for operand in &operands {
        let inputs = match resolve_operand(operand, args.recursive) {
            Ok(inputs) => inputs,
            Err(err) => {
                report_error(&err);
                ok = false;
                continue;
            }
        };
        for input in inputs {
            attempted += 1;
            transcript.opening(&input);
            match hash_input(&input, args.chunk_size) {
                Ok(digest) => {
                    transcript.hashed(&input, &digest);
                    reports.push(HashReport {
                        path: input.label(),
                        sha256: digest.sha256,
                        bytes: digest.bytes,
                    });
                }
                Err(err) => {
                    report_error(&err);
                    ok = false;
                }
            }
        }
    }

    let multiple = operands.len() > 1 || attempted > 1 || args.recursive;
    if !reports.is_empty() || args.format == OutputFormat::Json {
        println!("{}", render(args.format, &reports, multiple)?);
    }
    Ok(ok)
}

fn hash_input(input: &Input, chunk_size: usize) -> Result<Digest> {
    match input {
        Input::Stdin => sha256_stdin(chunk_size).context("read standard input"),
        Input::File(path) => sha256_file(path, chunk_size)
            .with_context(|| format!("cannot hash file {}", path.display())),
    }
}

fn report_error(err: &anyhow::Error) {
    let details: Vec<String> = err.chain().skip(1).map(|cause| cause.to_string()).collect();
    if details.is_empty() {
        eprintln!("Error: {err}");
    } else {
        eprintln!("Error: {err}: {}", details.join(": "));
    }
}
