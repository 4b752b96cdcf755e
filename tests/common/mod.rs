//! Shared test helpers: in-memory data port and series builders.
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use stocklens::domain::error::StocklensError;
use stocklens::domain::price_series::PriceSeries;
use stocklens::ports::data_port::DataPort;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    let dates = (0..closes.len())
        .map(|i| date(2024, 1 + (i / 28) as u32, 1 + (i % 28) as u32))
        .collect();
    PriceSeries::new(symbol.to_string(), dates, closes.to_vec())
}

pub struct MockDataPort {
    series: HashMap<String, PriceSeries>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    pub fn with_series(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.series
            .insert(symbol.to_string(), make_series(symbol, closes));
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_prices(&self, symbol: &str) -> Result<PriceSeries, StocklensError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| StocklensError::MissingSymbol {
                symbol: symbol.to_string(),
            })
    }

    fn list_symbols(&self) -> Result<Vec<String>, StocklensError> {
        let mut symbols: Vec<String> = self.series.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}
