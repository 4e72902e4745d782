//! Run options resolved from defaults and settings

use crate::error::ConfigError;
use crate::output::Schema;
use crate::settings::Settings;
use crate::tree::{DEFAULT_MAX_DEPTH, DEFAULT_PATH_SEPARATOR, WalkerConfig};

pub const ROOT_FOLDER_URL: &str = "root-folder-url";
pub const MAX_DEPTH: &str = "max-depth";
pub const OUTPUT_SHEET_NAME: &str = "output-sheet-name";
pub const PATH_SEPARATOR: &str = "path-separator";
pub const INCLUDE_FILES: &str = "include-files";
pub const INCLUDE_FOLDERS: &str = "include-folders";
pub const SCHEMA: &str = "schema";

pub const DEFAULT_SHEET_NAME: &str = "Document Index";

/// Built-in defaults for every option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub max_depth: usize,
    pub output_sheet_name: String,
    pub path_separator: String,
    pub include_files: bool,
    pub include_folders: bool,
    pub schema: Schema,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            output_sheet_name: DEFAULT_SHEET_NAME.to_string(),
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
            include_files: true,
            include_folders: true,
            schema: Schema::default(),
        }
    }
}

/// Options for one indexing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Root reference. `None` means the caller's default root.
    pub root: Option<String>,
    pub max_depth: usize,
    pub output_sheet_name: String,
    pub path_separator: String,
    pub include_files: bool,
    pub include_folders: bool,
    pub schema: Schema,
}

impl IndexOptions {
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            root: None,
            max_depth: defaults.max_depth,
            output_sheet_name: defaults.output_sheet_name.clone(),
            path_separator: defaults.path_separator.clone(),
            include_files: defaults.include_files,
            include_folders: defaults.include_folders,
            schema: defaults.schema,
        }
    }

    /// Read every known key from `settings`, falling back to `defaults`.
    pub fn from_settings(settings: &Settings, defaults: &Defaults) -> Result<Self, ConfigError> {
        let mut options = Self::from_defaults(defaults);

        if let Some(root) = settings.get_str(ROOT_FOLDER_URL)? {
            options.root = Some(root.to_string());
        }
        if let Some(depth) = settings.get_number(MAX_DEPTH)? {
            options.max_depth = depth_from_number(depth)?;
        }
        if let Some(name) = settings.get_str(OUTPUT_SHEET_NAME)? {
            options.output_sheet_name = name.to_string();
        }
        if let Some(separator) = settings.get_str(PATH_SEPARATOR)? {
            options.path_separator = separator.to_string();
        }
        if let Some(include) = settings.get_bool(INCLUDE_FILES)? {
            options.include_files = include;
        }
        if let Some(include) = settings.get_bool(INCLUDE_FOLDERS)? {
            options.include_folders = include;
        }
        if let Some(schema) = settings.get_str(SCHEMA)? {
            options.schema = schema.parse().map_err(|reason| ConfigError::InvalidValue {
                key: SCHEMA.to_string(),
                reason,
            })?;
        }

        options.validate()?;
        Ok(options)
    }

    /// Check constraints that hold regardless of where a value came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(ConfigError::InvalidValue {
                key: MAX_DEPTH.to_string(),
                reason: format!("must be at least 1, got {}", self.max_depth),
            });
        }
        if self.output_sheet_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: OUTPUT_SHEET_NAME.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            max_depth: self.max_depth,
            include_files: self.include_files,
            include_folders: self.include_folders,
        }
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

fn depth_from_number(depth: f64) -> Result<usize, ConfigError> {
    if depth.fract() != 0.0 || depth < 1.0 {
        return Err(ConfigError::InvalidValue {
            key: MAX_DEPTH.to_string(),
            reason: format!("must be a whole number of at least 1, got {}", depth),
        });
    }
    Ok(depth as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IndexOptions::from_settings(&Settings::new(), &Defaults::default()).unwrap();
        assert_eq!(options.root, None);
        assert_eq!(options.max_depth, 5);
        assert_eq!(options.output_sheet_name, "Document Index");
        assert_eq!(options.path_separator, " > ");
        assert!(options.include_files);
        assert!(options.include_folders);
        assert_eq!(options.schema, Schema::Delimited);
    }

    #[test]
    fn test_settings_override_defaults() {
        let mut settings = Settings::new();
        settings.insert(ROOT_FOLDER_URL, "file:///srv/docs");
        settings.insert(MAX_DEPTH, 2);
        settings.insert(OUTPUT_SHEET_NAME, "Docs");
        settings.insert(PATH_SEPARATOR, " / ");
        settings.insert(INCLUDE_FILES, false);
        settings.insert(SCHEMA, "per-level");

        let options = IndexOptions::from_settings(&settings, &Defaults::default()).unwrap();
        assert_eq!(options.root.as_deref(), Some("file:///srv/docs"));
        assert_eq!(options.max_depth, 2);
        assert_eq!(options.output_sheet_name, "Docs");
        assert_eq!(options.path_separator, " / ");
        assert!(!options.include_files);
        assert!(options.include_folders);
        assert_eq!(options.schema, Schema::PerLevel);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = Defaults {
            max_depth: 2,
            ..Default::default()
        };
        let options = IndexOptions::from_settings(&Settings::new(), &defaults).unwrap();
        assert_eq!(options.walker_config().max_depth, 2);
    }

    #[test]
    fn test_depth_as_string_rejected() {
        let mut settings = Settings::new();
        settings.insert(MAX_DEPTH, "5");
        let err = IndexOptions::from_settings(&settings, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { ref key, .. } if key == MAX_DEPTH));
    }

    #[test]
    fn test_depth_must_be_positive_whole_number() {
        for depth in [0.0, -1.0, 2.5] {
            let mut settings = Settings::new();
            settings.insert(MAX_DEPTH, depth);
            let err = IndexOptions::from_settings(&settings, &Defaults::default()).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == MAX_DEPTH),
                "depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_unknown_schema_rejected() {
        let mut settings = Settings::new();
        settings.insert(SCHEMA, "columns");
        let err = IndexOptions::from_settings(&settings, &Defaults::default()).unwrap_err();
        assert!(err.to_string().contains("schema"));
    }

    #[test]
    fn test_validate_catches_zero_depth() {
        let options = IndexOptions {
            max_depth: 0,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_walker_config() {
        let options = IndexOptions {
            max_depth: 3,
            include_folders: false,
            ..Default::default()
        };
        let config = options.walker_config();
        assert_eq!(config.max_depth, 3);
        assert!(config.include_files);
        assert!(!config.include_folders);
    }
}
