//! Configuration composition.
//!
//! [`Composer`] is pure: it folds page directives into the base plugin list
//! and merges the overlay selected by a [`Mode`]. [`Project`] wires settings,
//! template discovery and the composer together for a project root.

use std::path::{Path, PathBuf};

use crate::config::Configuration;
use crate::discovery::{PageDirective, discover_templates};
use crate::error::Result;
use crate::mode::Mode;
use crate::presets::{Overlays, base_config};
use crate::settings::ProjectSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    base: Configuration,
    overlays: Overlays,
}

impl Composer {
    pub fn new(base: Configuration, overlays: Overlays) -> Self {
        Self { base, overlays }
    }

    pub fn base(&self) -> &Configuration {
        &self.base
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    /// Merge the base, with `pages` ahead of its own plugins, and the overlay
    /// for `mode`.
    ///
    /// # Example
    ///
    /// ```
    /// use pagekit_config::{Composer, Configuration, Mode, Overlays};
    /// use serde_json::json;
    ///
    /// let composer = Composer::new(
    ///     Configuration::from_value(json!({ "plugins": ["A"] })),
    ///     Overlays::new(
    ///         Configuration::from_value(json!({ "mode": "production" })),
    ///         Configuration::from_value(json!({ "mode": "development", "plugins": ["B"] })),
    ///     ),
    /// );
    ///
    /// let config = composer.compose(&[], Mode::Development);
    /// assert_eq!(config.plugins(), &[json!("A"), json!("B")]);
    /// assert_eq!(config.mode(), Some("development"));
    /// ```
    pub fn compose(&self, pages: &[PageDirective], mode: Mode) -> Configuration {
        let mut config = self.base.clone();
        config.prepend_plugins(pages.iter().map(PageDirective::to_plugin));
        config.merge(self.overlays.select(mode));

        tracing::debug!(
            %mode,
            pages = pages.len(),
            plugins = config.plugins().len(),
            "composed configuration"
        );
        config
    }
}

/// A project root plus its loaded settings.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    settings: ProjectSettings,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, settings: ProjectSettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    /// Load settings for `root` from `pagekit.toml` and the environment.
    ///
    /// # Arguments
    ///
    /// * `root` - Project root; relative paths in the settings resolve against it
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Settings`] if the settings are invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pagekit_config::{Mode, Project};
    ///
    /// let project = Project::load("site")?;
    /// let config = project.compose(Mode::Development)?;
    /// println!("{}", serde_json::to_string_pretty(&config).unwrap());
    /// # Ok::<(), pagekit_config::ConfigError>(())
    /// ```
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let settings = ProjectSettings::load(&root)?;
        Ok(Self::new(root, settings))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// Template directory, resolved against the project root.
    pub fn views_dir(&self) -> PathBuf {
        self.root.join(&self.settings.views_dir)
    }

    /// Mode signalled by the configured environment variable at call time.
    pub fn mode_from_env(&self) -> Mode {
        Mode::from_env_var(&self.settings.mode_var)
    }

    /// Page directives for every template in [`Project::views_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Filesystem`] if the directory cannot be
    /// listed.
    pub fn discover_pages(&self) -> Result<Vec<PageDirective>> {
        discover_templates(self.views_dir())
    }

    /// Composer holding this project's base and overlays, override tables
    /// already applied.
    pub fn composer(&self) -> Composer {
        Composer::new(
            base_config(&self.root, &self.settings),
            Overlays::from_settings(&self.settings),
        )
    }

    /// Discover templates and compose the configuration for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Filesystem`] if the views directory
    /// cannot be listed. Nothing is composed in that case.
    pub fn compose(&self, mode: Mode) -> Result<Configuration> {
        let pages = self.discover_pages()?;
        Ok(self.composer().compose(&pages, mode))
    }

    /// Like [`Project::compose`], reading the mode signal now.
    ///
    /// # Returns
    ///
    /// The development configuration when the configured variable (default
    /// `NODE_ENV`) is exactly `development`, the production one otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Project::compose`].
    pub fn compose_from_env(&self) -> Result<Configuration> {
        self.compose(self.mode_from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn composer() -> Composer {
        Composer::new(
            Configuration::from_value(json!({ "plugins": ["A"], "devtool": false })),
            Overlays::new(
                Configuration::from_value(json!({ "mode": "production", "plugins": ["P"] })),
                Configuration::from_value(json!({
                    "mode": "development",
                    "plugins": ["B"],
                    "devtool": "inline-source-map"
                })),
            ),
        )
    }

    #[test]
    fn pages_precede_base_plugins() {
        let pages = vec![PageDirective::new("v/index.html", "index.html")];
        let config = composer().compose(&pages, Mode::Production);

        let plugins = config.plugins();
        assert_eq!(plugins.len(), 3);
        assert_eq!(plugins[0], pages[0].to_plugin());
        assert_eq!(&plugins[1..], &[json!("A"), json!("P")]);
    }

    #[test]
    fn only_selected_overlay_is_applied() {
        let prod = composer().compose(&[], Mode::Production);
        assert_eq!(prod.plugins(), &[json!("A"), json!("P")]);
        assert_eq!(prod.get("devtool"), Some(&json!(false)));

        let dev = composer().compose(&[], Mode::Development);
        assert_eq!(dev.plugins(), &[json!("A"), json!("B")]);
        assert_eq!(dev.get("devtool"), Some(&json!("inline-source-map")));
    }

    #[test]
    fn base_is_left_untouched() {
        let composer = composer();
        let before = composer.base().clone();
        let _ = composer.compose(&[PageDirective::new("x.html", "x.html")], Mode::Development);
        assert_eq!(composer.base(), &before);
    }
}
