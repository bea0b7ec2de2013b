use crate::utils::error::Result;
use askama::Template;

/// Alt text shown when the fetched image cannot be displayed.
pub const FALLBACK_ALT: &str = "Ruh roh! Dog won't fetch, please try again";

// `alt` is always FALLBACK_ALT and is emitted unescaped; `url` comes from the
// remote service and goes through askama's HTML escaping.
#[derive(Debug, Template)]
#[template(path = "region.html")]
struct RegionImage<'a> {
    url: &'a str,
    alt: &'a str,
}

/// Markup that replaces the display region on success.
pub fn image_markup(url: &str) -> Result<String> {
    Ok(RegionImage {
        url,
        alt: FALLBACK_ALT,
    }
    .render()?)
}
