//! RSI (Relative Strength Index) momentum oscillator.
//!
//! Wilder's smoothing for average gain/loss:
//! - Seed: plain mean of the first n gains/losses
//! - Then: avg = (prev_avg * (n-1) + current) / n
//!
//! RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0 the ratio degenerates; the defined result is RSI = 100.
//!
//! Output has the same length as the input; the first n entries are 0.0
//! placeholders, meaningful values start at index n.

pub const DEFAULT_RSI_WINDOW: usize = 14;

pub fn rsi(prices: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || prices.len() < window {
        return Vec::new();
    }

    let mut out = vec![0.0; prices.len()];
    if prices.len() == window {
        // No index past the warmup region, nothing meaningful to compute.
        return out;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for pair in prices.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(if delta > 0.0 { delta } else { 0.0 });
        losses.push(if delta < 0.0 { -delta } else { 0.0 });
    }

    let mut avg_gain = gains[..window].iter().sum::<f64>() / window as f64;
    let mut avg_loss = losses[..window].iter().sum::<f64>() / window as f64;
    out[window] = rsi_point(avg_gain, avg_loss);

    for i in window + 1..prices.len() {
        avg_gain = (avg_gain * (window - 1) as f64 + gains[i - 1]) / window as f64;
        avg_loss = (avg_loss * (window - 1) as f64 + losses[i - 1]) / window as f64;
        out[i] = rsi_point(avg_gain, avg_loss);
    }

    out
}

fn rsi_point(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}
