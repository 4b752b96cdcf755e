//! Technical indicator engines.
//!
//! Each engine is a pure function from a closing-price slice (plus
//! parameters) to an output series. Output series are right-aligned to the
//! most recent observations: element `i` from the end of an output
//! corresponds to element `i` from the end of the input.

pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use self::bollinger::{bollinger_bands, BollingerBands};
pub use self::macd::{macd, macd_default, MacdOutput};
pub use self::moving_average::{ema, sma};
pub use self::rsi::rsi;

use std::fmt;

/// Indicator identity + parameters, used for labeling output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    Macd {
        short: usize,
        long: usize,
        signal: usize,
    },
    Bollinger {
        window: usize,
        num_std: f64,
    },
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(window) => write!(f, "SMA({})", window),
            IndicatorType::Ema(window) => write!(f, "EMA({})", window),
            IndicatorType::Rsi(window) => write!(f, "RSI({})", window),
            IndicatorType::Macd {
                short,
                long,
                signal,
            } => write!(f, "MACD({},{},{})", short, long, signal),
            IndicatorType::Bollinger { window, num_std } => {
                write!(f, "BOLLINGER({},{})", window, num_std)
            }
        }
    }
}
