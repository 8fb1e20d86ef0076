use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::affordance::types::TargetAction;

const SCHEMA_FILE_NAME: &str = "affordance.schema.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub capabilities: CapabilityNamesConfig,
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/affordance")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

fn default_change_num_sections_path() -> String {
    "/course/changenumsections.php".to_string()
}

fn default_edit_entry_path() -> String {
    "/mod/data/edit.php".to_string()
}

fn default_import_entries_path() -> String {
    "/mod/data/import.php".to_string()
}

fn default_export_entries_path() -> String {
    "/mod/data/export.php".to_string()
}

/// Paths the renderer links each target action to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutesConfig {
    #[serde(default = "default_change_num_sections_path")]
    pub change_num_sections: String,
    #[serde(default = "default_edit_entry_path")]
    pub edit_entry: String,
    #[serde(default = "default_import_entries_path")]
    pub import_entries: String,
    #[serde(default = "default_export_entries_path")]
    pub export_entries: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            change_num_sections: default_change_num_sections_path(),
            edit_entry: default_edit_entry_path(),
            import_entries: default_import_entries_path(),
            export_entries: default_export_entries_path(),
        }
    }
}

impl RoutesConfig {
    pub fn path_for(&self, target: TargetAction) -> &str {
        match target {
            TargetAction::ChangeNumSections => &self.change_num_sections,
            TargetAction::EditEntry => &self.edit_entry,
            TargetAction::ImportEntries => &self.import_entries,
            TargetAction::ExportEntries => &self.export_entries,
        }
    }
}

fn default_manage_entries_capability() -> String {
    "mod/data:manageentries".to_string()
}

fn default_export_entries_capability() -> String {
    "mod/data:exportentries".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapabilityNamesConfig {
    #[serde(default = "default_manage_entries_capability")]
    pub manage_entries: String,
    #[serde(default = "default_export_entries_capability")]
    pub export_entries: String,
}

impl Default for CapabilityNamesConfig {
    fn default() -> Self {
        Self {
            manage_entries: default_manage_entries_capability(),
            export_entries: default_export_entries_capability(),
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let mut config: Config = serde_json::from_value(config_value)
            .context("failed to deserialize affordance config")?;

        if config.logging.dir.is_relative() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }

    /// Loads `config_path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load(config_path);
        }
        Ok(Self::default())
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join(SCHEMA_FILE_NAME);
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or {SCHEMA_FILE_NAME} next to it"
    ))
}

fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema_content = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema: Value = serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;

    let compiled =
        JSONSchema::compile(&schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
