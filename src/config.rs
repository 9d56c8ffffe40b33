use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::data::model::CellValue;
use crate::data::normalize::{NO, YES};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(version, about = "Interactive explorer for union spreadsheets")]
pub struct Cli {
    /// Spreadsheet to open (overrides `data_path` from the config file).
    #[arg(value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep categorical values exactly as stored in the file.
    #[arg(long)]
    pub no_normalize: bool,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Settings resolved once at startup: defaults, then the JSON file, then flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Columns offered as filters and charted as Sí / No distributions.
    pub categorical_columns: Vec<String>,
    /// Bucket order of every chart.
    pub count_order: Vec<String>,
    pub export_file_name: String,
    pub sheet_name: String,
    pub normalize: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Sindicatos_limpio.xlsx"),
            categorical_columns: vec![
                "NUEVOS REFORMA".to_string(),
                "Legitimados".to_string(),
                "REPOSITORIO".to_string(),
            ],
            count_order: vec![YES.to_string(), NO.to_string()],
            export_file_name: "sindicatos_filtrados.xlsx".to_string(),
            sheet_name: "Filtrados".to_string(),
            normalize: true,
        }
    }
}

impl DashboardConfig {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(data) = &cli.data {
            config.data_path = data.clone();
        }
        if cli.no_normalize {
            config.normalize = false;
        }
        log::debug!("Resolved configuration: {config:?}");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn order(&self) -> Vec<CellValue> {
        self.count_order
            .iter()
            .map(|v| CellValue::from(v.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "data_path": "/srv/datos/sindicatos.xlsx" }"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/datos/sindicatos.xlsx"));
        assert_eq!(config.sheet_name, "Filtrados");
        assert_eq!(config.categorical_columns.len(), 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_json(r#"{ "dataPath": "x.xlsx" }"#).is_err());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("dashboard.json");
        std::fs::write(&cfg_path, r#"{ "data_path": "a.xlsx", "normalize": true }"#).unwrap();

        let cli = Cli::parse_from([
            "sindicatos-explorer",
            "b.xlsx",
            "--config",
            cfg_path.to_str().unwrap(),
            "--no-normalize",
        ]);
        let config = DashboardConfig::resolve(&cli).unwrap();
        assert_eq!(config.data_path, PathBuf::from("b.xlsx"));
        assert!(!config.normalize);
    }

    #[test]
    fn default_order_is_yes_then_no() {
        assert_eq!(
            DashboardConfig::default().order(),
            vec![CellValue::from("Sí"), CellValue::from("No")]
        );
    }
}
