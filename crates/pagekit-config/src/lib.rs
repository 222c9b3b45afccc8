pub mod compose;
pub mod config;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod plugins;
pub mod presets;
pub mod settings;

// Re-export main types
pub use compose::*;
pub use config::*;
pub use error::*;
pub use mode::*;
pub use settings::*;

pub use discovery::{PageDirective, TEMPLATE_EXTENSION, TemplateScan, discover_templates};
pub use plugins::PluginKind;
pub use presets::{Overlays, base_config, development_overlay, production_overlay};
