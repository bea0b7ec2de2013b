use crate::adapters::diagnostics::TracingDiagnostics;
use crate::core::render::image_markup;
use crate::domain::ports::{Diagnostics, DisplayRegion, DogSource};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One trigger, one request, one render (or one error log).
///
/// Invocations are independent: nothing here serialises them, disables the
/// trigger, or drops stale responses. When several are in flight the one that
/// resolves last owns the display region.
pub struct FetchAndRender<S: DogSource, D: DisplayRegion, L: Diagnostics = TracingDiagnostics> {
    source: S,
    region: D,
    diagnostics: L,
}

impl<S: DogSource, D: DisplayRegion> FetchAndRender<S, D, TracingDiagnostics> {
    pub fn new(source: S, region: D) -> Self {
        Self::with_diagnostics(source, region, TracingDiagnostics)
    }
}

impl<S: DogSource, D: DisplayRegion, L: Diagnostics> FetchAndRender<S, D, L> {
    pub fn with_diagnostics(source: S, region: D, diagnostics: L) -> Self {
        Self {
            source,
            region,
            diagnostics,
        }
    }

    pub fn region(&self) -> &D {
        &self.region
    }

    /// Runs a single fetch-and-render cycle to completion.
    ///
    /// Every failure ends up in the diagnostic stream; the caller never sees
    /// one and the region keeps whatever it showed before.
    pub async fn handle_trigger(&self) {
        if let Err(e) = self.fetch_and_render().await {
            self.diagnostics.failure(&e);
        }
    }

    async fn fetch_and_render(&self) -> Result<()> {
        let response = self.source.fetch().await?;
        self.diagnostics.payload(&response);
        let markup = image_markup(&response.url)?;
        self.region.replace_content(markup)
    }
}

impl<S, D, L> FetchAndRender<S, D, L>
where
    S: DogSource + 'static,
    D: DisplayRegion + 'static,
    L: Diagnostics + 'static,
{
    /// Fire-and-forget trigger. The handle is only useful to tests and to a
    /// host that wants to wait for quiescence before exiting.
    pub fn spawn_trigger(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.handle_trigger().await })
    }
}
