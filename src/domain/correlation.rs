//! Cross-symbol return correlation.
//!
//! Series are tail-aligned to the shortest requested series, converted to
//! simple daily returns, and correlated pairwise with the Pearson
//! coefficient. A symbol missing from the store, or one with zero price
//! observations, aborts the whole computation; partial matrices are never
//! returned.

use std::collections::HashMap;

use crate::domain::error::StocklensError;
use crate::domain::price_series::PriceSeries;

/// Symmetric Pearson correlation matrix with its row/column labels.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Simple day-over-day returns: (p[t] - p[t-1]) / p[t-1].
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Pearson correlation coefficient between two equal-length series.
///
/// NaN when either series has zero variance or zero length.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n == 0 {
        return f64::NAN;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x * var_y).sqrt()
}

/// Pairwise return correlation over the requested symbols, in the caller's
/// symbol order. Diagonal is exactly 1.0 and the matrix exactly symmetric.
pub fn correlation_matrix(
    store: &HashMap<String, PriceSeries>,
    symbols: &[String],
) -> Result<CorrelationMatrix, StocklensError> {
    if symbols.len() < 2 {
        return Err(StocklensError::NotEnoughSymbols {
            have: symbols.len(),
            need: 2,
        });
    }

    let mut series: Vec<&PriceSeries> = Vec::with_capacity(symbols.len());
    let mut min_length = usize::MAX;
    for symbol in symbols {
        let s = store
            .get(symbol)
            .ok_or_else(|| StocklensError::MissingSymbol {
                symbol: symbol.clone(),
            })?;
        if s.is_empty() {
            return Err(StocklensError::EmptyPrices {
                symbol: symbol.clone(),
            });
        }
        min_length = min_length.min(s.len());
        series.push(s);
    }

    // Keep only the most recent min_length observations of each series so
    // every return series covers the same trailing window.
    let returns: Vec<Vec<f64>> = series
        .iter()
        .map(|s| simple_returns(&s.closes[s.len() - min_length..]))
        .collect();

    let n = symbols.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in i + 1..n {
            let corr = pearson(&returns[i], &returns[j]);
            values[i][j] = corr;
            values[j][i] = corr;
        }
    }

    Ok(CorrelationMatrix {
        symbols: symbols.to_vec(),
        values,
    })
}
