//! Report generation port trait.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::StocklensError;

/// Port for rendering and persisting analysis reports.
pub trait ReportPort {
    fn write(&self, report: &AnalysisReport, output_path: &str) -> Result<(), StocklensError>;
}
