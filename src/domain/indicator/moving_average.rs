//! Simple and Exponential Moving Averages.
//!
//! SMA: running mean over a sliding window, one output per valid offset, so
//! the output has length `len - window + 1`.
//!
//! EMA: alpha = 2/(window+1), seeded with a flat block: the first `window`
//! output positions all hold the mean of the first `window` prices, then
//! EMA[i] = alpha*C[i] + (1-alpha)*EMA[i-1]. The flat seed block is a fixed
//! policy, not an approximation; output has the same length as the input.
//!
//! Both return an empty series when the input is shorter than the window.

/// Simple Moving Average over a sliding window.
pub fn sma(prices: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || prices.len() < window {
        return Vec::new();
    }

    prices
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Exponential Moving Average, same length as the input.
pub fn ema(prices: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || prices.len() < window {
        return Vec::new();
    }

    let seed = prices[..window].iter().sum::<f64>() / window as f64;
    let alpha = 2.0 / (window as f64 + 1.0);

    let mut out = Vec::with_capacity(prices.len());
    out.resize(window, seed);

    let mut prev = seed;
    for &price in &prices[window..] {
        prev = alpha * price + (1.0 - alpha) * prev;
        out.push(prev);
    }

    out
}
