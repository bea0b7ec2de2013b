// Adapters layer: concrete implementations of the domain ports (http source, display regions, diagnostics).

pub mod diagnostics;
pub mod display;
pub mod http;
