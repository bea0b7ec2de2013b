use crate::domain::model::DogImageResponse;
use crate::utils::error::{Result, WoofError};
use async_trait::async_trait;

/// Where dog descriptors come from. One call is one outbound request.
#[async_trait]
pub trait DogSource: Send + Sync {
    async fn fetch(&self) -> Result<DogImageResponse>;
}

/// The single container whose content gets replaced on success.
pub trait DisplayRegion: Send + Sync {
    fn replace_content(&self, markup: String) -> Result<()>;
}

/// Default diagnostic stream: one entry per success, one per failure.
pub trait Diagnostics: Send + Sync {
    fn payload(&self, response: &DogImageResponse);
    fn failure(&self, error: &WoofError);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn clicks(&self) -> usize;
}

impl<T: DisplayRegion + ?Sized> DisplayRegion for std::sync::Arc<T> {
    fn replace_content(&self, markup: String) -> Result<()> {
        (**self).replace_content(markup)
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for std::sync::Arc<T> {
    fn payload(&self, response: &DogImageResponse) {
        (**self).payload(response)
    }

    fn failure(&self, error: &WoofError) {
        (**self).failure(error)
    }
}
