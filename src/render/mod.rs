//! Counter renderers
//!
//! Every mode turns a single integer (or a map of them) into a body, a
//! content type and a cache policy. Nothing here touches the store.

use std::collections::BTreeMap;

pub mod json;
pub mod svg;

pub use json::{badgen_json, shields_json, stats_batch_json, stats_json};
pub use svg::{BadgeLayout, badge_svg};

/// Label shown on every badge.
pub const LABEL: &str = "views";

pub const CONTENT_TYPE_SVG: &str = "image/svg+xml";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Response headers that disable caching, in emission order.
pub const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Badge flavours that bump the counter before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeFormat {
    Svg,
    Badgen,
    Shields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// 徽章必须每次回源，否则计数不会增长
    NoStore,
    /// 不额外设置缓存头
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub content_type: &'static str,
    pub cache: CachePolicy,
}

pub fn render_badge(format: BadgeFormat, count: u64) -> Rendered {
    let (body, content_type) = match format {
        BadgeFormat::Svg => (badge_svg(count), CONTENT_TYPE_SVG),
        BadgeFormat::Badgen => (badgen_json(count), CONTENT_TYPE_JSON),
        BadgeFormat::Shields => (shields_json(count), CONTENT_TYPE_JSON),
    };
    Rendered {
        body,
        content_type,
        cache: CachePolicy::NoStore,
    }
}

pub fn render_stats(count: u64) -> Rendered {
    Rendered {
        body: stats_json(count),
        content_type: CONTENT_TYPE_JSON,
        cache: CachePolicy::Default,
    }
}

pub fn render_stats_batch(counts: &BTreeMap<String, u64>) -> Rendered {
    Rendered {
        body: stats_batch_json(counts),
        content_type: CONTENT_TYPE_JSON,
        cache: CachePolicy::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_are_never_cached() {
        for format in [BadgeFormat::Svg, BadgeFormat::Badgen, BadgeFormat::Shields] {
            assert_eq!(render_badge(format, 1).cache, CachePolicy::NoStore);
        }
    }

    #[test]
    fn test_content_types() {
        assert_eq!(render_badge(BadgeFormat::Svg, 1).content_type, "image/svg+xml");
        assert_eq!(
            render_badge(BadgeFormat::Shields, 1).content_type,
            "application/json"
        );
        assert_eq!(render_stats(1).content_type, "application/json");
        assert_eq!(render_stats(1).cache, CachePolicy::Default);
    }
}
