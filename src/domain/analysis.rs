//! Per-symbol indicator snapshots and multi-symbol report composition.
//!
//! A snapshot captures the most recent value of each indicator together
//! with its classification (overbought/oversold, bullish/bearish, band
//! position) and an overall recommendation from tallying the signals.
//! Rendering is left to report adapters.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

use crate::domain::correlation::{correlation_matrix, CorrelationMatrix};
use crate::domain::indicator::{bollinger_bands, macd, rsi};
use crate::domain::price_series::PriceSeries;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Windows and multipliers used across an analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorParams {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub macd_short: usize,
    pub macd_long: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_num_std: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_window: 30,
            rsi_window: 14,
            macd_short: 12,
            macd_long: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_num_std: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiStatus {
    Overbought,
    Oversold,
    Neutral,
}

impl fmt::Display for RsiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiStatus::Overbought => write!(f, "Overbought"),
            RsiStatus::Oversold => write!(f, "Oversold"),
            RsiStatus::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdTrend {
    Bullish,
    Bearish,
}

impl fmt::Display for MacdTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacdTrend::Bullish => write!(f, "Bullish"),
            MacdTrend::Bearish => write!(f, "Bearish"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandStatus {
    AboveUpper,
    BelowLower,
    WithinBands,
}

impl fmt::Display for BandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandStatus::AboveUpper => write!(f, "Price above upper band (potential overbought)"),
            BandStatus::BelowLower => write!(f, "Price below lower band (potential oversold)"),
            BandStatus::WithinBands => write!(f, "Price within bands"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Bullish => write!(f, "Bullish - consider buying/holding"),
            Recommendation::Bearish => write!(f, "Bearish - consider selling/waiting"),
            Recommendation::Neutral => write!(f, "Neutral - monitor for clearer signals"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MacdSnapshot {
    pub line: f64,
    pub signal: f64,
    pub trend: MacdTrend,
}

#[derive(Debug, Clone, Copy)]
pub struct BandSnapshot {
    pub upper: f64,
    pub lower: f64,
    pub status: BandStatus,
}

/// Latest indicator values for one symbol. Fields are `None` when the
/// series is too short for the corresponding indicator.
#[derive(Debug, Clone)]
pub struct SymbolSnapshot {
    pub symbol: String,
    pub last_date: Option<NaiveDate>,
    pub last_close: Option<f64>,
    pub rsi: Option<(f64, RsiStatus)>,
    pub macd: Option<MacdSnapshot>,
    pub bollinger: Option<BandSnapshot>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub generated: NaiveDate,
    pub params: IndicatorParams,
    pub snapshots: Vec<SymbolSnapshot>,
    pub skipped: Vec<String>,
    pub correlation: Option<CorrelationMatrix>,
}

fn rsi_status(value: f64) -> RsiStatus {
    if value > RSI_OVERBOUGHT {
        RsiStatus::Overbought
    } else if value < RSI_OVERSOLD {
        RsiStatus::Oversold
    } else {
        RsiStatus::Neutral
    }
}

fn band_status(close: f64, upper: f64, lower: f64) -> BandStatus {
    if close > upper {
        BandStatus::AboveUpper
    } else if close < lower {
        BandStatus::BelowLower
    } else {
        BandStatus::WithinBands
    }
}

pub fn analyze_symbol(series: &PriceSeries, params: &IndicatorParams) -> SymbolSnapshot {
    let prices = &series.closes;
    let last_close = series.last_close();

    // RSI is only meaningful once an index past the warmup region exists.
    let rsi_snapshot = if prices.len() > params.rsi_window {
        rsi(prices, params.rsi_window)
            .last()
            .map(|&v| (v, rsi_status(v)))
    } else {
        None
    };

    let macd_out = macd(
        prices,
        params.macd_short,
        params.macd_long,
        params.macd_signal,
    );
    let macd_snapshot = match (macd_out.macd_line.last(), macd_out.signal_line.last()) {
        (Some(&line), Some(&signal)) => Some(MacdSnapshot {
            line,
            signal,
            trend: if line > signal {
                MacdTrend::Bullish
            } else {
                MacdTrend::Bearish
            },
        }),
        _ => None,
    };

    let bands = bollinger_bands(prices, params.bollinger_window, params.bollinger_num_std);
    let band_snapshot = match (bands.upper.last(), bands.lower.last(), last_close) {
        (Some(&upper), Some(&lower), Some(close)) => Some(BandSnapshot {
            upper,
            lower,
            status: band_status(close, upper, lower),
        }),
        _ => None,
    };

    let mut bullish = 0usize;
    let mut bearish = 0usize;
    if let Some((_, status)) = rsi_snapshot {
        match status {
            RsiStatus::Oversold => bullish += 1,
            RsiStatus::Overbought => bearish += 1,
            RsiStatus::Neutral => {}
        }
    }
    if let Some(m) = macd_snapshot {
        match m.trend {
            MacdTrend::Bullish => bullish += 1,
            MacdTrend::Bearish => bearish += 1,
        }
    }
    if let Some(b) = band_snapshot {
        match b.status {
            BandStatus::BelowLower => bullish += 1,
            BandStatus::AboveUpper => bearish += 1,
            BandStatus::WithinBands => {}
        }
    }
    let recommendation = match bullish.cmp(&bearish) {
        std::cmp::Ordering::Greater => Recommendation::Bullish,
        std::cmp::Ordering::Less => Recommendation::Bearish,
        std::cmp::Ordering::Equal => Recommendation::Neutral,
    };

    SymbolSnapshot {
        symbol: series.symbol.clone(),
        last_date: series.last_date(),
        last_close,
        rsi: rsi_snapshot,
        macd: macd_snapshot,
        bollinger: band_snapshot,
        recommendation,
    }
}

/// Analyze every requested symbol present in the store. Symbols that are
/// missing or empty are recorded as skipped rather than failing the run;
/// the correlation matrix is attached when at least two symbols survive.
pub fn build_report(
    store: &HashMap<String, PriceSeries>,
    symbols: &[String],
    params: &IndicatorParams,
) -> AnalysisReport {
    let mut snapshots = Vec::new();
    let mut skipped = Vec::new();
    let mut analyzed = Vec::new();

    for symbol in symbols {
        match store.get(symbol) {
            Some(series) if !series.is_empty() => {
                snapshots.push(analyze_symbol(series, params));
                analyzed.push(symbol.clone());
            }
            _ => skipped.push(symbol.clone()),
        }
    }

    let correlation = if analyzed.len() >= 2 {
        correlation_matrix(store, &analyzed).ok()
    } else {
        None
    };

    AnalysisReport {
        generated: chrono::Local::now().date_naive(),
        params: *params,
        snapshots,
        skipped,
        correlation,
    }
}
