pub mod fetch_render;
pub mod render;

pub use crate::domain::model::DogImageResponse;
pub use crate::domain::ports::{ConfigProvider, Diagnostics, DisplayRegion, DogSource};
pub use crate::utils::error::Result;
