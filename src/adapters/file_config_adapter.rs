//! INI file configuration adapter.
//!
//! Recognized sections: `[data] dir` and `[indicators]` window overrides
//! (`ma_window`, `rsi_window`, `macd_short`, `macd_long`, `macd_signal`,
//! `bollinger_window`, `bollinger_num_std`).

use configparser::ini::Ini;
use std::path::Path;

use crate::ports::config_port::ConfigPort;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[data]
dir = /srv/prices

[indicators]
ma_window = 50
rsi_window = 10
bollinger_num_std = 2.5
"#;

    #[test]
    fn from_string_reads_sections() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();

        assert_eq!(
            adapter.get_string("data", "dir"),
            Some("/srv/prices".to_string())
        );
        assert_eq!(adapter.get_int("indicators", "ma_window", 30), 50);
        assert_eq!(adapter.get_int("indicators", "rsi_window", 14), 10);
        let num_std = adapter.get_double("indicators", "bollinger_num_std", 2.0);
        assert!((num_std - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();

        assert_eq!(adapter.get_string("data", "missing"), None);
        assert_eq!(adapter.get_int("indicators", "macd_long", 26), 26);
        let num_std = adapter.get_double("missing", "bollinger_num_std", 2.0);
        assert!((num_std - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_file_loads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.get_int("indicators", "ma_window", 30), 50);
    }

    #[test]
    fn from_file_missing_path_errors() {
        assert!(FileConfigAdapter::from_file("/nonexistent/stocklens.ini").is_err());
    }
}
