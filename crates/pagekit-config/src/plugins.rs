//! Plugin directives emitted into a configuration.
//!
//! Each entry has the shape `{ "plugin": <kind>, "options": { ... } }`. The
//! bundler maps the kind to its own plugin implementation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Generate one HTML page from a template
    Html,
    /// Empty the output directory before emitting
    Clean,
    /// Copy static assets verbatim
    Copy,
    /// Extract imported CSS into standalone files
    CssExtract,
    /// Minify scripts
    Terser,
    /// Minify extracted CSS
    CssOptimize,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Clean => "clean",
            Self::Copy => "copy",
            Self::CssExtract => "css-extract",
            Self::Terser => "terser",
            Self::CssOptimize => "css-optimize",
        }
    }

    pub fn with_options(self, options: Value) -> Value {
        json!({ "plugin": self.as_str(), "options": options })
    }

    pub fn bare(self) -> Value {
        self.with_options(Value::Object(Map::new()))
    }

    /// Kind of a plugin entry, if it is one pagekit knows.
    pub fn of(entry: &Value) -> Option<Self> {
        entry
            .get("plugin")
            .cloned()
            .and_then(|kind| serde_json::from_value(kind).ok())
    }
}

pub fn clean() -> Value {
    PluginKind::Clean.bare()
}

/// Copy the whole of `from` into the output directory, keeping relative paths.
///
/// # Arguments
///
/// * `from` - Static asset directory, as the bundler should see it
///
/// # Examples
///
/// ```
/// use pagekit_config::plugins::copy_static;
/// use std::path::Path;
///
/// let entry = copy_static(Path::new("static"));
/// assert_eq!(entry["options"]["patterns"][0]["from"], "static");
/// ```
pub fn copy_static(from: &Path) -> Value {
    PluginKind::Copy.with_options(json!({
        "patterns": [{ "from": from.to_string_lossy() }]
    }))
}

pub fn css_extract(filename: &str, chunk_filename: &str) -> Value {
    PluginKind::CssExtract.with_options(json!({
        "filename": filename,
        "chunkFilename": chunk_filename,
    }))
}

pub fn terser() -> Value {
    PluginKind::Terser.bare()
}

pub fn css_optimize() -> Value {
    PluginKind::CssOptimize.bare()
}
