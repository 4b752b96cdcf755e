//! CLI definition and dispatch.
//!
//! Each subcommand loads price data through the CSV adapter, runs the
//! relevant engine, and prints a tail of the result. Insufficient history
//! is soft: the command reports it and exits cleanly, matching the engine
//! policy of returning empty series.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::markdown_report_adapter::{self, MarkdownReportAdapter};
use crate::domain::analysis::{build_report, IndicatorParams};
use crate::domain::correlation::correlation_matrix;
use crate::domain::error::StocklensError;
use crate::domain::indicator::{bollinger_bands, ema, macd, rsi, sma, IndicatorType};
use crate::domain::price_series::PriceSeries;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

const TAIL_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "stocklens",
    about = "Technical indicator analysis for historical stock CSV data"
)]
pub struct Cli {
    /// INI configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing {SYMBOL}.csv files
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simple and exponential moving averages for one symbol
    Ma {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        window: Option<usize>,
    },
    /// Relative Strength Index for one symbol
    Rsi {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        window: Option<usize>,
    },
    /// MACD line and signal line for one symbol
    Macd {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        short: Option<usize>,
        #[arg(long)]
        long: Option<usize>,
        #[arg(long)]
        signal: Option<usize>,
    },
    /// Bollinger Bands for one symbol
    Bollinger {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        window: Option<usize>,
        #[arg(long)]
        num_std: Option<f64>,
    },
    /// Pairwise return correlation matrix over two or more symbols
    Correlation {
        /// Comma-separated symbol list
        #[arg(long, value_delimiter = ',', required = true)]
        symbols: Vec<String>,
    },
    /// Full analysis report for one or more symbols
    Report {
        /// Comma-separated symbol list
        #[arg(long, value_delimiter = ',', required = true)]
        symbols: Vec<String>,
        /// Write markdown to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List symbols available in the data directory
    ListSymbols,
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match load_config(cli.config.as_ref()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let params = resolve_params(config.as_ref());
    let data = CsvAdapter::new(resolve_data_dir(cli.data_dir.as_ref(), config.as_ref()));

    match cli.command {
        Command::Ma { symbol, window } => {
            run_ma(&data, &symbol, window.unwrap_or(params.ma_window))
        }
        Command::Rsi { symbol, window } => {
            run_rsi(&data, &symbol, window.unwrap_or(params.rsi_window))
        }
        Command::Macd {
            symbol,
            short,
            long,
            signal,
        } => run_macd(
            &data,
            &symbol,
            short.unwrap_or(params.macd_short),
            long.unwrap_or(params.macd_long),
            signal.unwrap_or(params.macd_signal),
        ),
        Command::Bollinger {
            symbol,
            window,
            num_std,
        } => run_bollinger(
            &data,
            &symbol,
            window.unwrap_or(params.bollinger_window),
            num_std.unwrap_or(params.bollinger_num_std),
        ),
        Command::Correlation { symbols } => run_correlation(&data, &symbols),
        Command::Report { symbols, output } => {
            run_report(&data, &symbols, &params, output.as_ref())
        }
        Command::ListSymbols => run_list_symbols(&data),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<FileConfigAdapter>, ExitCode> {
    match path {
        None => Ok(None),
        Some(p) => FileConfigAdapter::from_file(p).map(Some).map_err(|e| {
            let err = StocklensError::ConfigParse {
                file: p.display().to_string(),
                reason: e.to_string(),
            };
            eprintln!("error: {err}");
            (&err).into()
        }),
    }
}

fn resolve_data_dir(flag: Option<&PathBuf>, config: Option<&FileConfigAdapter>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.clone();
    }
    if let Some(dir) = config.and_then(|c| c.get_string("data", "dir")) {
        return PathBuf::from(dir);
    }
    PathBuf::from("data")
}

fn resolve_params(config: Option<&FileConfigAdapter>) -> IndicatorParams {
    let mut params = IndicatorParams::default();
    let Some(cfg) = config else {
        return params;
    };

    let window = |key: &str, default: usize| -> usize {
        cfg.get_int("indicators", key, default as i64).max(1) as usize
    };
    params.ma_window = window("ma_window", params.ma_window);
    params.rsi_window = window("rsi_window", params.rsi_window);
    params.macd_short = window("macd_short", params.macd_short);
    params.macd_long = window("macd_long", params.macd_long);
    params.macd_signal = window("macd_signal", params.macd_signal);
    params.bollinger_window = window("bollinger_window", params.bollinger_window);
    params.bollinger_num_std =
        cfg.get_double("indicators", "bollinger_num_std", params.bollinger_num_std);
    params
}

fn fetch(data: &dyn DataPort, symbol: &str) -> Result<PriceSeries, ExitCode> {
    data.fetch_prices(symbol).map_err(|e| {
        eprintln!("error: {e}");
        (&e).into()
    })
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

fn run_ma(data: &dyn DataPort, symbol: &str, window: usize) -> ExitCode {
    let series = match fetch(data, symbol) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let prices = &series.closes;

    let sma_series = sma(prices, window);
    let ema_series = ema(prices, window);
    if sma_series.is_empty() {
        eprintln!(
            "insufficient history for {}: need {} closes, have {}",
            IndicatorType::Sma(window),
            window,
            prices.len()
        );
        return ExitCode::SUCCESS;
    }

    println!(
        "{} and {} for {} ({} closes)",
        IndicatorType::Sma(window),
        IndicatorType::Ema(window),
        symbol,
        prices.len()
    );
    println!("{:>12} {:>10} {:>10} {:>10}", "date", "close", "sma", "ema");
    let start = prices.len().saturating_sub(TAIL_ROWS);
    for i in start..prices.len() {
        // SMA output is right-aligned: offset by window-1 against the input.
        let sma_val = (i + 1 >= window).then(|| sma_series[i + 1 - window]);
        println!(
            "{:>12} {:>10.2} {:>10} {:>10}",
            series.dates[i],
            prices[i],
            fmt_opt(sma_val, 2),
            fmt_opt(Some(ema_series[i]), 2)
        );
    }
    ExitCode::SUCCESS
}

fn run_rsi(data: &dyn DataPort, symbol: &str, window: usize) -> ExitCode {
    let series = match fetch(data, symbol) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let prices = &series.closes;

    let rsi_series = rsi(prices, window);
    if rsi_series.is_empty() || prices.len() == window {
        eprintln!(
            "insufficient history for {}: need more than {} closes, have {}",
            IndicatorType::Rsi(window),
            window,
            prices.len()
        );
        return ExitCode::SUCCESS;
    }

    println!(
        "{} for {} ({} closes)",
        IndicatorType::Rsi(window),
        symbol,
        prices.len()
    );
    println!("{:>12} {:>10} {:>10}", "date", "close", "rsi");
    let start = prices.len().saturating_sub(TAIL_ROWS);
    for i in start..prices.len() {
        let rsi_val = (i >= window).then(|| rsi_series[i]);
        println!(
            "{:>12} {:>10.2} {:>10}",
            series.dates[i],
            prices[i],
            fmt_opt(rsi_val, 2)
        );
    }
    ExitCode::SUCCESS
}

fn run_macd(
    data: &dyn DataPort,
    symbol: &str,
    short: usize,
    long: usize,
    signal_window: usize,
) -> ExitCode {
    let series = match fetch(data, symbol) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let prices = &series.closes;

    let label = IndicatorType::Macd {
        short,
        long,
        signal: signal_window,
    };
    let out = macd(prices, short, long, signal_window);
    if out.macd_line.is_empty() {
        eprintln!(
            "insufficient history for {}: need {} closes, have {}",
            label,
            long.max(short),
            prices.len()
        );
        return ExitCode::SUCCESS;
    }

    println!("{} for {} ({} closes)", label, symbol, prices.len());
    println!("{:>12} {:>10} {:>10} {:>10}", "date", "close", "macd", "signal");
    let start = prices.len().saturating_sub(TAIL_ROWS);
    for i in start..prices.len() {
        let signal_val = out.signal_line.get(i).copied();
        println!(
            "{:>12} {:>10.2} {:>10} {:>10}",
            series.dates[i],
            prices[i],
            fmt_opt(Some(out.macd_line[i]), 4),
            fmt_opt(signal_val, 4)
        );
    }
    ExitCode::SUCCESS
}

fn run_bollinger(data: &dyn DataPort, symbol: &str, window: usize, num_std: f64) -> ExitCode {
    let series = match fetch(data, symbol) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let prices = &series.closes;

    let label = IndicatorType::Bollinger { window, num_std };
    let bands = bollinger_bands(prices, window, num_std);
    if bands.middle.is_empty() {
        eprintln!(
            "insufficient history for {}: need {} closes, have {}",
            label,
            window,
            prices.len()
        );
        return ExitCode::SUCCESS;
    }

    println!("{} for {} ({} closes)", label, symbol, prices.len());
    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}",
        "date", "close", "lower", "middle", "upper"
    );
    let start = prices.len().saturating_sub(TAIL_ROWS);
    for i in start..prices.len() {
        let band_val = |band: &[f64]| (i + 1 >= window).then(|| band[i + 1 - window]);
        println!(
            "{:>12} {:>10.2} {:>10} {:>10} {:>10}",
            series.dates[i],
            prices[i],
            fmt_opt(band_val(&bands.lower), 2),
            fmt_opt(band_val(&bands.middle), 2),
            fmt_opt(band_val(&bands.upper), 2)
        );
    }
    ExitCode::SUCCESS
}

fn run_correlation(data: &dyn DataPort, symbols: &[String]) -> ExitCode {
    let mut store = HashMap::new();
    for symbol in symbols {
        match fetch(data, symbol) {
            Ok(series) => {
                store.insert(symbol.clone(), series);
            }
            Err(code) => return code,
        }
    }

    match correlation_matrix(&store, symbols) {
        Ok(matrix) => {
            print!(
                "{}",
                markdown_report_adapter::format_correlation_table(&matrix)
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_report(
    data: &dyn DataPort,
    symbols: &[String],
    params: &IndicatorParams,
    output: Option<&PathBuf>,
) -> ExitCode {
    let mut store = HashMap::new();
    for symbol in symbols {
        match data.fetch_prices(symbol) {
            Ok(series) => {
                store.insert(symbol.clone(), series);
            }
            Err(e) => eprintln!("warning: skipping {symbol}: {e}"),
        }
    }
    if store.is_empty() {
        eprintln!("error: no symbols could be loaded");
        return ExitCode::from(3);
    }

    let report = build_report(&store, symbols, params);
    match output {
        Some(path) => {
            match MarkdownReportAdapter.write(&report, &path.display().to_string()) {
                Ok(()) => {
                    eprintln!("report written to {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    (&e).into()
                }
            }
        }
        None => {
            print!("{}", markdown_report_adapter::render_report(&report));
            ExitCode::SUCCESS
        }
    }
}

fn run_list_symbols(data: &dyn DataPort) -> ExitCode {
    match data.list_symbols() {
        Ok(symbols) => {
            for symbol in symbols {
                println!("{}", symbol);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
