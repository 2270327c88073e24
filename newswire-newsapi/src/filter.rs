//! Article image filter
//!
//! Articles without a usable thumbnail render poorly in feeds, so the proxy
//! drops any article whose `urlToImage` is missing, relative, or looks like
//! a stock placeholder. The placeholder check is a plain substring match,
//! so a legitimate URL containing e.g. "myimg2024.png" is dropped too.

use serde_json::Value;

/// Substrings that mark an image URL as a likely placeholder
const PLACEHOLDER_MARKERS: [&str; 3] = ["img", "default", "placeholder"];

/// Retain only articles with a real, absolute image URL
///
/// Order-preserving: survivors keep their relative input order. Article
/// records are otherwise opaque and pass through unmodified.
pub fn filter_articles(articles: Vec<Value>) -> Vec<Value> {
    articles.into_iter().filter(has_usable_image).collect()
}

fn has_usable_image(article: &Value) -> bool {
    let Some(url) = article.get("urlToImage").and_then(Value::as_str) else {
        return false;
    };
    !url.is_empty() && is_absolute_http(url) && !is_placeholder_image(url)
}

/// Literal prefix test, no URL parsing beyond the scheme
fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn is_placeholder_image(url: &str) -> bool {
    PLACEHOLDER_MARKERS.iter().any(|marker| url.contains(marker))
}
