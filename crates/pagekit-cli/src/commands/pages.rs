//! Pages command implementation.

use pagekit_config::{PageDirective, Project};

use crate::cli::PagesArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the pages command: one line per discovered template.
pub fn execute(args: PagesArgs) -> Result<()> {
    let root = utils::project_root(&args.root)?;
    let project = Project::load(&root)?;
    let pages = project.discover_pages()?;

    if pages.is_empty() {
        ui::warning(&format!(
            "No page templates found in {}",
            project.views_dir().display()
        ));
        return Ok(());
    }

    ui::info(&format!(
        "Found {} page template(s) in {}",
        pages.len(),
        project.views_dir().display()
    ));
    for page in &pages {
        println!("{}", format_page(page));
    }
    Ok(())
}

fn format_page(page: &PageDirective) -> String {
    format!("{} <- {}", page.filename, page.template.display())
}
