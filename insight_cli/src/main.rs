//! Terminal front end for the viral-insights workspace
//!
//! Loads a daily case series (live feed or local file), runs the
//! linear-rate forecaster over it, and prints the trailing history with
//! the forecast window appended. Optionally fetches covid headlines for
//! a country code.

mod args;
mod render;

use args::{Command, Options};
use case_data::CaseSeries;
use case_feed::{CaseApiClient, NewsApiClient};
use case_forecast::LinearRateForecaster;
use std::error::Error;
use std::process;

fn main() {
    let command = match args::parse() {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            process::exit(2);
        }
    };

    let options = match command {
        Command::Help => {
            args::print_usage();
            return;
        }
        Command::Run(options) => options,
    };

    if let Err(err) = run(options) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let series = load_series(&options)?;
    let forecast = LinearRateForecaster::new().forecast(&series, options.horizon)?;

    print!("{}", render::render_table(&series, &forecast, options.tail));

    if !forecast.is_complete() {
        println!();
        println!("{}", render::render_gap_note(&forecast));
    }

    if let Some(code) = &options.news {
        let articles = NewsApiClient::from_env()?.top_headlines(code)?;
        println!();
        print!("{}", render::render_headlines(&articles));
    }

    Ok(())
}

fn load_series(options: &Options) -> Result<CaseSeries, Box<dyn Error>> {
    match (&options.input, &options.country) {
        (Some(path), _) => {
            let is_json = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            let series = if is_json {
                case_data::load_json(path)?
            } else {
                case_data::load_csv(path)?
            };
            Ok(series)
        }
        (None, Some(country)) => Ok(CaseApiClient::new().total_by_country(country)?),
        (None, None) => Err("no data source configured".into()),
    }
}
