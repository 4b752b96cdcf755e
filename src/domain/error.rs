//! Domain error types.
//!
//! Insufficient history is not an error: indicator engines return empty
//! output series and callers check for emptiness. Hard failures are reserved
//! for missing inputs (unloadable files, symbols absent from the store).

/// Top-level error type for stocklens.
#[derive(Debug, thiserror::Error)]
pub enum StocklensError {
    #[error("failed to load {path}: {reason}")]
    DataLoad { path: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no data loaded for symbol {symbol}")]
    MissingSymbol { symbol: String },

    #[error("no price observations for symbol {symbol}")]
    EmptyPrices { symbol: String },

    #[error("need at least {need} symbols, got {have}")]
    NotEnoughSymbols { have: usize, need: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StocklensError> for std::process::ExitCode {
    fn from(err: &StocklensError) -> Self {
        let code: u8 = match err {
            StocklensError::Io(_) => 1,
            StocklensError::ConfigParse { .. } | StocklensError::ConfigInvalid { .. } => 2,
            StocklensError::DataLoad { .. } => 3,
            StocklensError::MissingSymbol { .. } | StocklensError::EmptyPrices { .. } => 4,
            StocklensError::NotEnoughSymbols { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
