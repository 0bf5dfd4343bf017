//! Open Graph tag extraction.
//!
//! Reads `og:title`, `og:description` and `og:image` from a page. Pages
//! usually declare them with `property="og:*"`; some use `name="og:*"`
//! instead, which is accepted as a fallback.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

static OG_TITLE_PROPERTY: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property="og:title"]"#, "OG_TITLE_PROPERTY")
});
static OG_TITLE_NAME: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[name="og:title"]"#, "OG_TITLE_NAME"));
static OG_DESCRIPTION_PROPERTY: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"meta[property="og:description"]"#,
        "OG_DESCRIPTION_PROPERTY",
    )
});
static OG_DESCRIPTION_NAME: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[name="og:description"]"#, "OG_DESCRIPTION_NAME")
});
static OG_IMAGE_PROPERTY: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property="og:image"]"#, "OG_IMAGE_PROPERTY")
});
static OG_IMAGE_NAME: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[name="og:image"]"#, "OG_IMAGE_NAME"));

/// The Open Graph tags used to describe an ad. Each one may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraph {
    /// `og:title`
    pub title: Option<String>,
    /// `og:description`
    pub description: Option<String>,
    /// `og:image`
    pub image: Option<String>,
}

impl OpenGraph {
    /// True when the page declared a non-empty `og:image`.
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Extracts the Open Graph tags from an HTML document.
///
/// Never fails: malformed or empty HTML yields an all-absent result.
pub fn extract_open_graph(html: &str) -> OpenGraph {
    let document = Html::parse_document(html);
    OpenGraph {
        title: og_content(&document, &OG_TITLE_PROPERTY, &OG_TITLE_NAME),
        description: og_content(&document, &OG_DESCRIPTION_PROPERTY, &OG_DESCRIPTION_NAME),
        image: og_content(&document, &OG_IMAGE_PROPERTY, &OG_IMAGE_NAME),
    }
}

/// Content of the first `property` match, else of the first `name` match.
/// An empty `content` counts as absent.
fn og_content(document: &Html, by_property: &Selector, by_name: &Selector) -> Option<String> {
    let tag = document
        .select(by_property)
        .next()
        .or_else(|| document.select(by_name).next())?;
    tag.value()
        .attr("content")
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}
