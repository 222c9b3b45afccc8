//! Config command implementation.
//!
//! Composes the build configuration for a project and prints or writes it.

use std::fs;

use pagekit_config::{Configuration, Mode, PluginKind, Project};

use crate::cli::{ConfigArgs, OutputFormat};
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the config command.
///
/// # Errors
///
/// Fails if settings cannot be loaded, the views directory cannot be listed,
/// or the output cannot be serialized or written.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let root = utils::project_root(&args.root)?;
    let project = Project::load(&root)?;

    let mode: Mode = match args.mode {
        Some(mode) => mode.into(),
        None => project.mode_from_env(),
    };
    tracing::info!(%mode, root = %root.display(), "Composing configuration");

    let config = project.compose(mode)?;
    let has_pages = config
        .plugins()
        .iter()
        .any(|p| PluginKind::of(p) == Some(PluginKind::Html));
    if !has_pages {
        ui::warning(&format!(
            "No page templates found in {}",
            project.views_dir().display()
        ));
    }

    let rendered = render(&config, args.format)?;
    match args.out {
        Some(path) => {
            fs::write(&path, rendered).with_path(&path)?;
            ui::success(&format!(
                "Wrote {} configuration to {}",
                mode,
                path.display()
            ));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Serialize `config` in the requested format.
pub fn render(config: &Configuration, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(rendered)
}
