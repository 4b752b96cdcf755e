//! Closing-price series for a single instrument.
//!
//! Insertion order is chronological order; engines borrow the closes slice
//! and never mutate it.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: String, dates: Vec<NaiveDate>, closes: Vec<f64>) -> Self {
        Self {
            symbol,
            dates,
            closes,
        }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let dates = (0..closes.len())
            .map(|i| NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap())
            .collect();
        PriceSeries::new("TEST".into(), dates, closes.to_vec())
    }

    #[test]
    fn len_and_last() {
        let series = make_series(&[100.0, 101.0, 102.5]);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert!((series.last_close().unwrap() - 102.5).abs() < f64::EPSILON);
        assert_eq!(
            series.last_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn empty_series() {
        let series = PriceSeries::new("EMPTY".into(), vec![], vec![]);
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert_eq!(series.last_date(), None);
    }
}
