use std::path::Path;

use anyhow::Context;
use inn_ledger::LedgerConfig;

/// Load the ledger configuration, falling back to the built-in tariff.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LedgerConfig> {
    let Some(path) = path else {
        return Ok(LedgerConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    LedgerConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn no_path_is_default() {
        assert_eq!(load_config(None).unwrap(), LedgerConfig::default());
    }

    #[test]
    fn reads_tariff_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tax_rate = 0.18\n[tariff]\nac = 2200.0").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.tax_rate, 0.18);
        assert_eq!(config.tariff.ac, 2200.0);
        assert_eq!(config.tariff.premium, 3000.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let error = load_config(Some(&path)).unwrap_err();
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn invalid_values_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tax_rate = -0.5").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
