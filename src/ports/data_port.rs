//! Price data access port trait.

use crate::domain::error::StocklensError;
use crate::domain::price_series::PriceSeries;

pub trait DataPort {
    /// Load the full closing-price history for one symbol.
    fn fetch_prices(&self, symbol: &str) -> Result<PriceSeries, StocklensError>;

    /// List the symbols available from this source.
    fn list_symbols(&self) -> Result<Vec<String>, StocklensError>;
}
