use std::path::Path;

use anyhow::{Context, Result};
use commentbox_core::CommentBoxConfig;

/// Load comment box configuration from a JSON file.
/// Without a path every field takes its default.
pub fn load_config(path: Option<&Path>) -> Result<CommentBoxConfig> {
    let Some(path) = path else {
        return Ok(CommentBoxConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = CommentBoxConfig::from_json(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"levelPadding": 2, "flagButtonContent": "report"}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.level_padding, 2);
        assert_eq!(config.labels.flag_button_content, "report");
        assert_eq!(config.class_prefix, "cb-");
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, CommentBoxConfig::default());
    }

    #[test]
    fn test_load_config_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
