//! Page template discovery.
//!
//! Lists a single directory and yields one [`PageDirective`] for every entry
//! whose name ends in `.html`. Other entries are skipped. The listing is not
//! recursive and is not sorted: directives come out in whatever order the
//! filesystem returns entries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ConfigError, Result};
use crate::plugins::PluginKind;

/// Extension recognized as a page template.
pub const TEMPLATE_EXTENSION: &str = "html";

/// Instruction to generate one HTML page from one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDirective {
    /// Template source path.
    pub template: PathBuf,

    /// Output file name, identical to the template's file name.
    pub filename: String,

    /// Inject bundle tags into the page. Templates reference assets
    /// themselves, so discovered pages never inject.
    pub inject: bool,

    /// Append the compilation hash to referenced assets.
    pub hash: bool,
}

impl PageDirective {
    pub fn new(template: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            filename: filename.into(),
            inject: false,
            hash: true,
        }
    }

    /// Plugin entry consumed by the bundler's HTML generator.
    pub fn to_plugin(&self) -> Value {
        PluginKind::Html.with_options(json!({
            "template": self.template.to_string_lossy(),
            "filename": self.filename,
            "inject": self.inject,
            "hash": self.hash,
        }))
    }
}

/// Lazy directory scan producing page directives.
///
/// # Example
///
/// ```no_run
/// use pagekit_config::TemplateScan;
///
/// let pages = TemplateScan::new("src/views")?
///     .collect::<Result<Vec<_>, _>>()?;
/// for page in &pages {
///     println!("{} <- {}", page.filename, page.template.display());
/// }
/// # Ok::<(), pagekit_config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct TemplateScan {
    dir: PathBuf,
    entries: fs::ReadDir,
}

impl TemplateScan {
    /// Open `dir` for listing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Filesystem`] if the directory does not exist or
    /// cannot be read.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tracing::debug!("Scanning templates in {}", dir.display());
        let entries = fs::read_dir(&dir).map_err(|err| ConfigError::filesystem(&dir, err))?;
        Ok(Self { dir, entries })
    }
}

impl Iterator for TemplateScan {
    type Item = Result<PageDirective>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(ConfigError::filesystem(&self.dir, err))),
            };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !is_template_name(name) {
                tracing::trace!("Skipping non-template entry {name}");
                continue;
            }

            tracing::trace!("Found template {name}");
            return Some(Ok(PageDirective::new(entry.path(), name)));
        }
    }
}

/// Scan `dir` and collect every directive.
///
/// Fails as a whole on the first listing error; no partial result is returned.
///
/// # Arguments
///
/// * `dir` - Directory to list; subdirectories are not descended into
///
/// # Returns
///
/// One [`PageDirective`] per `.html` entry, in directory listing order.
///
/// # Errors
///
/// Returns [`ConfigError::Filesystem`] if the directory is missing or unreadable.
pub fn discover_templates(dir: impl AsRef<Path>) -> Result<Vec<PageDirective>> {
    let pages = TemplateScan::new(dir)?.collect::<Result<Vec<_>>>()?;
    tracing::debug!("Discovered {} page template(s)", pages.len());
    Ok(pages)
}

fn is_template_name(name: &str) -> bool {
    name.strip_suffix(TEMPLATE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}
