//! Bollinger Bands volatility envelope.
//!
//! Middle band: SMA over the window.
//! Upper/Lower: middle ± num_std × rolling population standard deviation
//! (divides by N, not N-1), one value per valid window offset so all three
//! bands share the SMA's length.
//!
//! Default parameters: window=20, num_std=2.0.

use crate::domain::indicator::sma;

pub const DEFAULT_BOLLINGER_WINDOW: usize = 20;
pub const DEFAULT_NUM_STD: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn bollinger_bands(prices: &[f64], window: usize, num_std: f64) -> BollingerBands {
    if window == 0 || prices.len() < window {
        return BollingerBands {
            middle: Vec::new(),
            upper: Vec::new(),
            lower: Vec::new(),
        };
    }

    let middle = sma(prices, window);
    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (i, w) in prices.windows(window).enumerate() {
        let mean = middle[i];
        let variance = w
            .iter()
            .map(|p| {
                let diff = p - mean;
                diff * diff
            })
            .sum::<f64>()
            / window as f64;
        let stddev = variance.sqrt();

        upper.push(mean + num_std * stddev);
        lower.push(mean - num_std * stddev);
    }

    BollingerBands {
        middle,
        upper,
        lower,
    }
}
