//! CSV file data adapter.
//!
//! One file per symbol, `{SYMBOL}.csv` under a base directory, with header
//! `Date,Open,High,Low,Close,Volume`. Only the date and close columns feed
//! the analysis; the rest are validated for presence and otherwise ignored.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::error::StocklensError;
use crate::domain::price_series::PriceSeries;
use crate::ports::data_port::DataPort;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_prices(&self, symbol: &str) -> Result<PriceSeries, StocklensError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| StocklensError::DataLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let load_err = |reason: String| StocklensError::DataLoad {
            path: path.display().to_string(),
            reason,
        };

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows: Vec<(NaiveDate, f64)> = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| load_err(format!("CSV parse error: {}", e)))?;

            let date_str = record
                .get(0)
                .ok_or_else(|| load_err("missing date column".into()))?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|e| load_err(format!("invalid date {:?}: {}", date_str, e)))?;

            let close: f64 = record
                .get(4)
                .ok_or_else(|| load_err("missing close column".into()))?
                .parse()
                .map_err(|e| load_err(format!("invalid close value: {}", e)))?;

            rows.push((date, close));
        }

        if rows.is_empty() {
            return Err(load_err("no data rows".into()));
        }

        rows.sort_by_key(|&(date, _)| date);
        let (dates, closes) = rows.into_iter().unzip();

        Ok(PriceSeries::new(symbol.to_string(), dates, closes))
    }

    fn list_symbols(&self) -> Result<Vec<String>, StocklensError> {
        let mut symbols = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    symbols.push(stem.to_string());
                }
            }
        }
        symbols.sort();
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, symbol: &str, content: &str) {
        let mut file = fs::File::create(dir.path().join(format!("{}.csv", symbol))).unwrap();
        write!(file, "{}", content).unwrap();
    }

    const AAPL_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-02,184.0,186.0,183.0,185.5,40000000
2024-01-03,185.0,186.5,184.0,184.2,35000000
2024-01-04,184.5,185.0,182.0,182.7,38000000
";

    #[test]
    fn fetch_prices_reads_close_column() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "AAPL", AAPL_CSV);

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let series = adapter.fetch_prices("AAPL").unwrap();

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.len(), 3);
        assert!((series.closes[0] - 185.5).abs() < f64::EPSILON);
        assert!((series.last_close().unwrap() - 182.7).abs() < f64::EPSILON);
        assert_eq!(
            series.last_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
    }

    #[test]
    fn fetch_prices_sorts_by_date() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "X",
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-03,1,1,1,30.0,100\n\
             2024-01-01,1,1,1,10.0,100\n\
             2024-01-02,1,1,1,20.0,100\n",
        );

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let series = adapter.fetch_prices("X").unwrap();
        assert_eq!(series.closes, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn fetch_prices_missing_file() {
        let dir = TempDir::new().unwrap();
        let adapter = CsvAdapter::new(dir.path().to_path_buf());

        let err = adapter.fetch_prices("NOPE").unwrap_err();
        assert!(matches!(err, StocklensError::DataLoad { .. }));
    }

    #[test]
    fn fetch_prices_empty_file_fails() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "EMPTY", "Date,Open,High,Low,Close,Volume\n");

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let err = adapter.fetch_prices("EMPTY").unwrap_err();
        assert!(matches!(err, StocklensError::DataLoad { .. }));
    }

    #[test]
    fn fetch_prices_bad_close_value() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "BAD",
            "Date,Open,High,Low,Close,Volume\n2024-01-02,1,1,1,not-a-number,100\n",
        );

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let err = adapter.fetch_prices("BAD").unwrap_err();
        assert!(matches!(err, StocklensError::DataLoad { .. }));
    }

    #[test]
    fn list_symbols_finds_csv_stems() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "MSFT", AAPL_CSV);
        write_csv(&dir, "AAPL", AAPL_CSV);
        fs::File::create(dir.path().join("notes.txt")).unwrap();

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let symbols = adapter.list_symbols().unwrap();
        assert_eq!(symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    }
}
