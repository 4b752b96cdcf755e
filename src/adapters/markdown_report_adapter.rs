//! Markdown report adapter implementing ReportPort.
//!
//! Renders per-symbol indicator tables, the correlation matrix, and the
//! list of skipped symbols into a single markdown document.

use std::fs;

use crate::domain::analysis::{AnalysisReport, SymbolSnapshot};
use crate::domain::correlation::CorrelationMatrix;
use crate::domain::error::StocklensError;
use crate::domain::indicator::IndicatorType;
use crate::ports::report_port::ReportPort;

pub struct MarkdownReportAdapter;

impl ReportPort for MarkdownReportAdapter {
    fn write(&self, report: &AnalysisReport, output_path: &str) -> Result<(), StocklensError> {
        fs::write(output_path, render_report(report))?;
        Ok(())
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Stock Analysis Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", report.generated));

    for snapshot in &report.snapshots {
        out.push_str(&render_snapshot(snapshot, report));
    }

    if let Some(matrix) = &report.correlation {
        out.push_str("## Return Correlation\n\n");
        out.push_str(&format_correlation_table(matrix));
        out.push('\n');
    }

    if !report.skipped.is_empty() {
        out.push_str(&format!("Skipped symbols: {}\n", report.skipped.join(", ")));
    }

    out
}

fn render_snapshot(snapshot: &SymbolSnapshot, report: &AnalysisReport) -> String {
    let params = &report.params;
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", snapshot.symbol));

    match (snapshot.last_close, snapshot.last_date) {
        (Some(close), Some(date)) => {
            out.push_str(&format!("Last close: {:.2} ({})\n\n", close, date));
        }
        (Some(close), None) => out.push_str(&format!("Last close: {:.2}\n\n", close)),
        _ => out.push_str("No price data.\n\n"),
    }

    out.push_str("| Indicator | Value | Assessment |\n");
    out.push_str("|-----------|-------|------------|\n");

    let rsi_label = IndicatorType::Rsi(params.rsi_window);
    match snapshot.rsi {
        Some((value, status)) => {
            out.push_str(&format!("| {} | {:.2} | {} |\n", rsi_label, value, status));
        }
        None => out.push_str(&format!("| {} | n/a | insufficient history |\n", rsi_label)),
    }

    let macd_label = IndicatorType::Macd {
        short: params.macd_short,
        long: params.macd_long,
        signal: params.macd_signal,
    };
    match &snapshot.macd {
        Some(m) => out.push_str(&format!(
            "| {} | {:.4} / signal {:.4} | {} |\n",
            macd_label, m.line, m.signal, m.trend
        )),
        None => out.push_str(&format!(
            "| {} | n/a | insufficient history |\n",
            macd_label
        )),
    }

    let band_label = IndicatorType::Bollinger {
        window: params.bollinger_window,
        num_std: params.bollinger_num_std,
    };
    match &snapshot.bollinger {
        Some(b) => out.push_str(&format!(
            "| {} | upper {:.2} / lower {:.2} | {} |\n",
            band_label, b.upper, b.lower, b.status
        )),
        None => out.push_str(&format!(
            "| {} | n/a | insufficient history |\n",
            band_label
        )),
    }

    out.push_str(&format!(
        "\nRecommendation: {}\n\n",
        snapshot.recommendation
    ));

    out
}

pub fn format_correlation_table(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();

    out.push_str("| |");
    for symbol in &matrix.symbols {
        out.push_str(&format!(" {} |", symbol));
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in &matrix.symbols {
        out.push_str("---|");
    }
    out.push('\n');

    for (i, symbol) in matrix.symbols.iter().enumerate() {
        out.push_str(&format!("| {} |", symbol));
        for j in 0..matrix.size() {
            out.push_str(&format!(" {:+.4} |", matrix.get(i, j)));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{build_report, IndicatorParams};
    use crate::domain::price_series::PriceSeries;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn make_store() -> HashMap<String, PriceSeries> {
        let mut store = HashMap::new();
        for (symbol, offset) in [("AAPL", 0.0), ("MSFT", 5.0)] {
            let closes: Vec<f64> = (0..40)
                .map(|i| 100.0 + offset + ((i * 7) % 13) as f64)
                .collect();
            let dates = (0..40)
                .map(|i| {
                    NaiveDate::from_ymd_opt(2024, 1 + (i / 28) as u32, 1 + (i % 28) as u32).unwrap()
                })
                .collect();
            store.insert(
                symbol.to_string(),
                PriceSeries::new(symbol.to_string(), dates, closes),
            );
        }
        store
    }

    #[test]
    fn render_contains_symbol_sections_and_matrix() {
        let store = make_store();
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
        let report = build_report(&store, &symbols, &IndicatorParams::default());

        let rendered = render_report(&report);
        assert!(rendered.contains("# Stock Analysis Report"));
        assert!(rendered.contains("## AAPL"));
        assert!(rendered.contains("## MSFT"));
        assert!(rendered.contains("RSI(14)"));
        assert!(rendered.contains("MACD(12,26,9)"));
        assert!(rendered.contains("BOLLINGER(20,2)"));
        assert!(rendered.contains("## Return Correlation"));
        assert!(rendered.contains("+1.0000"));
    }

    #[test]
    fn render_notes_skipped_symbols() {
        let store = make_store();
        let symbols = vec!["AAPL".to_string(), "GOOG".to_string()];
        let report = build_report(&store, &symbols, &IndicatorParams::default());

        let rendered = render_report(&report);
        assert!(rendered.contains("Skipped symbols: GOOG"));
    }

    #[test]
    fn write_persists_file() {
        let store = make_store();
        let symbols = vec!["AAPL".to_string()];
        let report = build_report(&store, &symbols, &IndicatorParams::default());

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        MarkdownReportAdapter
            .write(&report, path.to_str().unwrap())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## AAPL"));
    }

    #[test]
    fn correlation_table_shape() {
        let matrix = CorrelationMatrix {
            symbols: vec!["A".to_string(), "B".to_string()],
            values: vec![vec![1.0, -0.25], vec![-0.25, 1.0]],
        };

        let table = format_correlation_table(&matrix);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("+1.0000"));
        assert!(lines[2].contains("-0.2500"));
    }
}
