pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    diagnostics::TracingDiagnostics,
    display::{HtmlFileRegion, MemoryRegion},
    http::{HttpDogSource, DEFAULT_ENDPOINT},
};
pub use core::{
    fetch_render::FetchAndRender,
    render::{image_markup, FALLBACK_ALT},
};
pub use domain::model::DogImageResponse;
pub use utils::error::{Result, WoofError};
