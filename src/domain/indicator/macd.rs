//! MACD (Moving Average Convergence Divergence) trend indicator.
//!
//! MACD Line = EMA(short) - EMA(long), elementwise over the full series.
//! Signal Line = EMA(signal_window) of the MACD line.
//!
//! Default parameters: short=12, long=26, signal=9.
//! If the input is shorter than the long window the MACD line is empty and
//! the signal line likewise.

use crate::domain::indicator::ema;

pub const DEFAULT_SHORT: usize = 12;
pub const DEFAULT_LONG: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
}

pub fn macd(prices: &[f64], short: usize, long: usize, signal_window: usize) -> MacdOutput {
    let ema_short = ema(prices, short);
    let ema_long = ema(prices, long);

    // Both EMAs have full input length when computable; a length mismatch
    // means one of them was degenerate, so the MACD line is too.
    if ema_short.len() != ema_long.len() {
        return MacdOutput {
            macd_line: Vec::new(),
            signal_line: Vec::new(),
        };
    }

    let macd_line: Vec<f64> = ema_short
        .iter()
        .zip(ema_long.iter())
        .map(|(s, l)| s - l)
        .collect();
    let signal_line = ema(&macd_line, signal_window);

    MacdOutput {
        macd_line,
        signal_line,
    }
}

pub fn macd_default(prices: &[f64]) -> MacdOutput {
    macd(prices, DEFAULT_SHORT, DEFAULT_LONG, DEFAULT_SIGNAL)
}
