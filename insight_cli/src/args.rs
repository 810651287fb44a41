//! Command-line argument handling

use case_forecast::DEFAULT_HORIZON;
use std::env;
use std::path::PathBuf;

const DEFAULT_TAIL: usize = 10;

/// Parsed invocation
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Options for a forecast run
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Country slug for the live case feed
    pub country: Option<String>,
    /// Local CSV or JSON file instead of the live feed
    pub input: Option<PathBuf>,
    /// Days to forecast
    pub horizon: u32,
    /// Trailing history rows to show
    pub tail: usize,
    /// Two-letter country code to fetch headlines for
    pub news: Option<String>,
}

pub fn parse() -> Result<Command, String> {
    parse_from(env::args().skip(1).collect())
}

fn parse_from(args: Vec<String>) -> Result<Command, String> {
    let mut country = None;
    let mut input = None;
    let mut horizon = DEFAULT_HORIZON;
    let mut tail = DEFAULT_TAIL;
    let mut news = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--country" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --country (expected a country slug, e.g. switzerland)".to_string())?;
                if country.replace(value.clone()).is_some() {
                    return Err("--country provided more than once".to_string());
                }
            }
            "--input" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --input (expected a CSV or JSON file path)".to_string())?;
                if input.replace(PathBuf::from(value)).is_some() {
                    return Err("--input provided more than once".to_string());
                }
            }
            "--horizon" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --horizon (expected a day count)".to_string())?;
                horizon = value
                    .parse()
                    .map_err(|_| format!("invalid --horizon value: {value}"))?;
            }
            "--tail" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --tail (expected a row count)".to_string())?;
                tail = value
                    .parse()
                    .map_err(|_| format!("invalid --tail value: {value}"))?;
            }
            "--news" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --news (expected a 2-letter country code)".to_string())?;
                if news.replace(value.clone()).is_some() {
                    return Err("--news provided more than once".to_string());
                }
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if country.is_none() && input.is_none() {
        return Err("one of --country or --input is required".to_string());
    }

    Ok(Command::Run(Options {
        country,
        input,
        horizon,
        tail,
        news,
    }))
}

pub fn print_usage() {
    println!("insight_cli: fetch a daily case series, forecast it, show the table");
    println!();
    println!("USAGE:");
    println!("    insight_cli --country <slug> [options]");
    println!("    insight_cli --input <file.csv|file.json> [options]");
    println!();
    println!("OPTIONS:");
    println!("    --country <slug>   fetch the live series for a country slug");
    println!("    --input <path>     load a local CSV or JSON series instead");
    println!("    --horizon <days>   days to forecast (default {DEFAULT_HORIZON})");
    println!("    --tail <rows>      trailing history rows to show (default {DEFAULT_TAIL})");
    println!("    --news <code>      also fetch covid headlines for a country code");
    println!("    -h, --help         show this help");
}
