#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod error;

use argh::FromArgs;
use bmp_blob::{file_io::convert_file, ConversionSummary};
use error::CliError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs, Debug, PartialEq)]
/// Convert a 24-bit uncompressed BMP into a raw [0, R, G, B] pixel blob
struct Args {
    /// input BMP file
    #[argh(positional)]
    input: PathBuf,

    /// output blob file (created or overwritten)
    #[argh(positional)]
    output: PathBuf,
}

/// Anything other than exactly two positional arguments, `--help` included, is a usage error.
fn parse_args(command: &str, args: &[&str]) -> Result<Args, CliError> {
    Args::from_args(&[command], args).map_err(|early_exit| {
        log::debug!("argument parsing stopped early: {}", early_exit.output);
        CliError::Usage(format!("usage: {command} <input.bmp> <output.bin>"))
    })
}

fn run(args: &Args) -> Result<ConversionSummary, CliError> {
    Ok(convert_file(&args.input, &args.output)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_args: Vec<String> = std::env::args().collect();
    let command = raw_args.first().map_or("bmp2blob", String::as_str);
    let args: Vec<&str> = raw_args.iter().skip(1).map(String::as_str).collect();

    match parse_args(command, &args).and_then(|args| run(&args)) {
        Ok(summary) => {
            println!("ok: {summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("conversion failed: {e:?}");
            println!("fck: {e}");
            ExitCode::FAILURE
        }
    }
}
