//! Asset discovery: stylesheet links, script sources and image sources.
//!
//! Only `link[rel~=stylesheet][href]`, `script[src]` and `img[src]` are
//! inspected. `srcset`, `data-src`, `<picture>` sources and CSS `url()`
//! references are not followed.

use scraper::{Html, Selector};
use std::fmt;
use url::Url;

/// Asset category; decides the destination subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Stylesheet,
    Script,
    Image,
}

impl AssetCategory {
    /// Download order: stylesheets, then scripts, then images.
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::Stylesheet,
        AssetCategory::Script,
        AssetCategory::Image,
    ];

    /// Subdirectory name under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetCategory::Stylesheet => "css",
            AssetCategory::Script => "js",
            AssetCategory::Image => "images",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetCategory::Stylesheet => "stylesheet",
            AssetCategory::Script => "script",
            AssetCategory::Image => "image",
        };
        f.write_str(name)
    }
}

/// Absolute asset URLs discovered in a page, in document order per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAssets {
    pub stylesheets: Vec<Url>,
    pub scripts: Vec<Url>,
    pub images: Vec<Url>,
}

impl PageAssets {
    pub fn get(&self, category: AssetCategory) -> &[Url] {
        match category {
            AssetCategory::Stylesheet => &self.stylesheets,
            AssetCategory::Script => &self.scripts,
            AssetCategory::Image => &self.images,
        }
    }

    pub fn len(&self) -> usize {
        self.stylesheets.len() + self.scripts.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All references as (category, url) pairs in download order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, &Url)> + '_ {
        AssetCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |u| (c, u)))
    }
}

/// Extracts stylesheet, script and image URLs from `markup`, resolved against `base`.
///
/// Never fails: elements with missing, empty or unresolvable attributes are skipped.
pub fn extract_assets(markup: &str, base: &Url) -> PageAssets {
    let document = Html::parse_document(markup);
    let mut assets = PageAssets::default();

    if let Ok(sel) = Selector::parse("link[href]") {
        assets.stylesheets = document
            .select(&sel)
            .filter(|el| el.value().attr("rel").is_some_and(is_stylesheet_rel))
            .filter_map(|el| resolve(base, el.value().attr("href")?))
            .collect();
    }

    if let Ok(sel) = Selector::parse("script[src]") {
        assets.scripts = document
            .select(&sel)
            .filter_map(|el| resolve(base, el.value().attr("src")?))
            .collect();
    }

    if let Ok(sel) = Selector::parse("img[src]") {
        assets.images = document
            .select(&sel)
            .filter_map(|el| resolve(base, el.value().attr("src")?))
            .collect();
    }

    tracing::debug!(
        stylesheets = assets.stylesheets.len(),
        scripts = assets.scripts.len(),
        images = assets.images.len(),
        "extracted asset references"
    );
    assets
}

/// `rel` is a space-separated token list; `"alternate stylesheet"` counts.
fn is_stylesheet_rel(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("stylesheet"))
}

/// Standard base + reference join. Absolute references pass through.
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    base.join(reference).ok()
}
