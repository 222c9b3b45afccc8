//! Built-in base configuration and mode overlays.

use std::path::Path;

use serde_json::json;

use crate::config::Configuration;
use crate::mode::Mode;
use crate::plugins;
use crate::settings::ProjectSettings;

/// The production and development overlays. Exactly one is selected per
/// composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    pub production: Configuration,
    pub development: Configuration,
}

impl Overlays {
    pub fn new(production: Configuration, development: Configuration) -> Self {
        Self {
            production,
            development,
        }
    }

    pub fn select(&self, mode: Mode) -> &Configuration {
        match mode {
            Mode::Production => &self.production,
            Mode::Development => &self.development,
        }
    }

    /// Built-in overlays for `settings`, with the user's override tables
    /// merged on top.
    pub fn from_settings(settings: &ProjectSettings) -> Self {
        let mut production = production_overlay();
        production.merge(&settings.overrides.production.clone().into());

        let mut development = development_overlay(settings);
        development.merge(&settings.overrides.development.clone().into());

        Self::new(production, development)
    }
}

/// Mode-invariant configuration. `root` anchors the output path.
///
/// Page directives are not part of the base; the composer folds them in.
///
/// # Arguments
///
/// * `root` - Project root; `output.path` is `root` joined with `output_dir`
/// * `settings` - Naming and layout, plus `[overrides.base]` merged last
///
/// # Examples
///
/// ```
/// use pagekit_config::{ProjectSettings, base_config};
/// use std::path::Path;
///
/// let base = base_config(Path::new("/site"), &ProjectSettings::default());
/// assert_eq!(base.get("entry").and_then(|v| v.as_str()), Some("./src/bootstrap"));
/// assert_eq!(base.plugins().len(), 3);
/// ```
pub fn base_config(root: &Path, settings: &ProjectSettings) -> Configuration {
    let output_path = root.join(&settings.output_dir);

    let mut base = Configuration::from_value(json!({
        "entry": settings.entry,
        "plugins": [
            plugins::clean(),
            plugins::copy_static(&settings.static_dir),
            plugins::css_extract(&settings.css_filename, &settings.css_chunk_filename),
        ],
        "output": {
            "path": output_path.to_string_lossy(),
            "filename": settings.script_filename,
        },
        "resolve": {
            "extensions": settings.resolve_extensions,
        },
        "module": {
            "rules": [
                {
                    "test": "\\.(ts|js)x?$",
                    "exclude": "node_modules",
                    "loader": "babel-loader",
                },
                {
                    "test": "\\.css$",
                    "flags": "i",
                    "use": ["css-extract-loader", "css-loader"],
                },
            ],
        },
    }));

    base.merge(&settings.overrides.base.clone().into());
    base
}

pub fn production_overlay() -> Configuration {
    Configuration::from_value(json!({
        "mode": Mode::Production.as_str(),
        "optimization": {
            "minimizer": [plugins::terser(), plugins::css_optimize()],
        },
    }))
}

pub fn development_overlay(settings: &ProjectSettings) -> Configuration {
    Configuration::from_value(json!({
        "mode": Mode::Development.as_str(),
        "devtool": settings.devtool,
        "devServer": {
            "contentBase": settings.dev_content_base,
        },
        "output": {
            "publicPath": settings.public_path,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::PluginKind;
    use serde_json::Value;

    #[test]
    fn base_plugins_in_order() {
        let base = base_config(Path::new("/project"), &ProjectSettings::default());
        let kinds: Vec<_> = base.plugins().iter().filter_map(PluginKind::of).collect();
        assert_eq!(
            kinds,
            vec![PluginKind::Clean, PluginKind::Copy, PluginKind::CssExtract]
        );
    }

    #[test]
    fn output_path_is_anchored_at_root() {
        let base = base_config(Path::new("/project"), &ProjectSettings::default());
        let expected = Path::new("/project").join("dist");
        assert_eq!(
            base.pointer("/output/path"),
            Some(&Value::String(expected.to_string_lossy().into_owned()))
        );
    }

    #[test]
    fn overlays_carry_distinct_mode_keys() {
        let overlays = Overlays::from_settings(&ProjectSettings::default());
        let prod = overlays.select(Mode::Production);
        let dev = overlays.select(Mode::Development);

        assert_eq!(prod.mode(), Some("production"));
        assert_eq!(dev.mode(), Some("development"));
        assert!(prod.contains_key("optimization") && !dev.contains_key("optimization"));
        assert!(dev.contains_key("devtool") && !prod.contains_key("devtool"));
    }

    #[test]
    fn override_tables_merge_onto_presets() {
        let mut settings = ProjectSettings::default();
        settings
            .overrides
            .development
            .insert("devtool".into(), json!("eval"));
        settings
            .overrides
            .base
            .insert("plugins".into(), json!(["extra"]));

        let overlays = Overlays::from_settings(&settings);
        assert_eq!(overlays.development.get("devtool"), Some(&json!("eval")));

        let base = base_config(Path::new("/p"), &settings);
        assert_eq!(base.plugins().last(), Some(&json!("extra")));
        assert_eq!(base.plugins().len(), 4);
    }
}
