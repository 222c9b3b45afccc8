//! Project layout and naming settings.
//!
//! Sources, lowest priority first: built-in defaults, `pagekit.toml` in the
//! project root, then `PAGEKIT_*` environment variables (`__` separates nested
//! keys).
//!
//! Field names and override table names are case-insensitive in the
//! environment. Keys below an override table are taken verbatim, so bundler
//! options keep their camelCase spelling:
//!
//! ```text
//! PAGEKIT_PUBLIC_PATH=/cdn/
//! PAGEKIT_OVERRIDES__DEVELOPMENT__devServer__port=9000
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::mode::DEFAULT_MODE_VAR;

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "pagekit.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PAGEKIT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Entry module handed to the bundler
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Directory holding page templates, relative to the root
    #[serde(default = "default_views_dir")]
    pub views_dir: PathBuf,

    /// Directory copied verbatim into the output, relative to the root
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_script_filename")]
    pub script_filename: String,

    #[serde(default = "default_css_filename")]
    pub css_filename: String,

    #[serde(default = "default_css_chunk_filename")]
    pub css_chunk_filename: String,

    #[serde(default = "default_resolve_extensions")]
    pub resolve_extensions: Vec<String>,

    /// Environment variable carrying the mode signal
    #[serde(default = "default_mode_var")]
    pub mode_var: String,

    #[serde(default = "default_devtool")]
    pub devtool: String,

    #[serde(default = "default_dev_content_base")]
    pub dev_content_base: String,

    #[serde(default = "default_public_path")]
    pub public_path: String,

    #[serde(default)]
    pub overrides: Overrides,
}

/// Free-form tables merged onto the built-in base and overlays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub base: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub production: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub development: Map<String, Value>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            views_dir: default_views_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            script_filename: default_script_filename(),
            css_filename: default_css_filename(),
            css_chunk_filename: default_css_chunk_filename(),
            resolve_extensions: default_resolve_extensions(),
            mode_var: default_mode_var(),
            devtool: default_devtool(),
            dev_content_base: default_dev_content_base(),
            public_path: default_public_path(),
            overrides: Overrides::default(),
        }
    }
}

impl ProjectSettings {
    /// Layer defaults, `<root>/pagekit.toml` and `PAGEKIT_*` variables.
    ///
    /// A missing settings file is not an error.
    ///
    /// # Arguments
    ///
    /// * `root` - Project root holding the optional `pagekit.toml`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Settings`] if the file cannot be parsed or a
    /// value has the wrong type.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pagekit_config::ProjectSettings;
    ///
    /// let settings = ProjectSettings::load(".")?;
    /// println!("templates live in {}", settings.views_dir.display());
    /// # Ok::<(), pagekit_config::ConfigError>(())
    /// ```
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(SETTINGS_FILE);
        tracing::debug!("Loading project settings from {}", path.display());

        let settings = Self::figment(&path).extract()?;
        Ok(settings)
    }

    /// Layer defaults and the given TOML file only, ignoring the environment.
    ///
    /// # Arguments
    ///
    /// * `path` - Settings file; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Settings`] on invalid TOML or mistyped fields.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .extract()?;
        Ok(settings)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(env_provider())
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .split("__")
        .lowercase(false)
        .map(|key| env_key(key.as_str()).into())
}

/// Normalize a dotted environment key: the settings field and the override
/// table are lowercased, anything deeper is left as written.
fn env_key(key: &str) -> String {
    let mut segments = key.splitn(3, '.');
    let field = segments.next().unwrap_or_default().to_ascii_lowercase();
    if field != "overrides" {
        return key.to_ascii_lowercase();
    }

    match (segments.next(), segments.next()) {
        (Some(table), Some(rest)) => format!("{field}.{}.{rest}", table.to_ascii_lowercase()),
        (Some(table), None) => format!("{field}.{}", table.to_ascii_lowercase()),
        _ => field,
    }
}

fn default_entry() -> String {
    "./src/bootstrap".to_string()
}

fn default_views_dir() -> PathBuf {
    PathBuf::from("src/views")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_script_filename() -> String {
    "[name].[chunkhash].js".to_string()
}

fn default_css_filename() -> String {
    "[name].[contenthash].css".to_string()
}

fn default_css_chunk_filename() -> String {
    "[id].[contenthash].css".to_string()
}

fn default_resolve_extensions() -> Vec<String> {
    [".ts", ".tsx", ".js", ".json"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_mode_var() -> String {
    DEFAULT_MODE_VAR.to_string()
}

fn default_devtool() -> String {
    "inline-source-map".to_string()
}

fn default_dev_content_base() -> String {
    "./dist".to_string()
}

fn default_public_path() -> String {
    "/".to_string()
}
