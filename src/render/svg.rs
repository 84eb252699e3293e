//! Flat two-segment SVG badge in the shields.io style.
//!
//! All geometry is in a 10x coordinate space (viewBox height 200) and the
//! exported image is scaled down to 20px high.

use std::fmt::Write;

use super::LABEL;

const LEFT_WIDTH: u32 = 390;
const LABEL_TEXT_LENGTH: u32 = 290;
const DIGIT_WIDTH: u32 = 80;
const RIGHT_PADDING: u32 = 60;
const MIN_RIGHT_WIDTH: u32 = 150;
const VIEWBOX_HEIGHT: u32 = 200;
const EXPORT_HEIGHT: u32 = 20;
const SCALE: u32 = 10;

const LABEL_COLOR: &str = "#555";
const VALUE_COLOR: &str = "#08C";
const FONT_FAMILY: &str = "Verdana,DejaVu Sans,sans-serif";
const FONT_SIZE: u32 = 110;

/// Segment widths for a given message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLayout {
    pub left_width: u32,
    pub right_width: u32,
    /// `textLength` of the value text
    pub message_text_length: u32,
}

impl BadgeLayout {
    pub fn for_message(message: &str) -> Self {
        let chars = message.chars().count() as u32;
        Self {
            left_width: LEFT_WIDTH,
            right_width: (chars * DIGIT_WIDTH + RIGHT_PADDING).max(MIN_RIGHT_WIDTH),
            message_text_length: (chars * DIGIT_WIDTH).saturating_sub(10),
        }
    }

    pub fn total_width(&self) -> u32 {
        self.left_width + self.right_width
    }

    /// Exported pixel width (`total / 10`).
    pub fn export_width(&self) -> u32 {
        self.total_width() / SCALE
    }
}

/// Render the `views: <count>` badge.
pub fn badge_svg(count: u64) -> String {
    let message = count.to_string();
    let layout = BadgeLayout::for_message(&message);
    let left = layout.left_width;
    let total = layout.total_width();

    let mut svg = String::with_capacity(1024);
    // write! 到 String 不会失败
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{EXPORT_HEIGHT}" viewBox="0 0 {total} {VIEWBOX_HEIGHT}" role="img" aria-label="{LABEL}: {message}">
  <title>{LABEL}: {message}</title>
  <g>
    <rect fill="{LABEL_COLOR}" width="{left}" height="{VIEWBOX_HEIGHT}"/>
    <rect fill="{VALUE_COLOR}" x="{left}" width="{right}" height="{VIEWBOX_HEIGHT}"/>
  </g>
  <g aria-hidden="true" fill="#fff" text-anchor="start" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}">
    <text x="60" y="148" textLength="{LABEL_TEXT_LENGTH}" fill="#000" opacity="0.1">{LABEL}</text>
    <text x="50" y="138" textLength="{LABEL_TEXT_LENGTH}">{LABEL}</text>
    <text x="{shadow_x}" y="148" textLength="{text_len}" fill="#000" opacity="0.1">{message}</text>
    <text x="{value_x}" y="138" textLength="{text_len}">{message}</text>
  </g>
</svg>"##,
        width = layout.export_width(),
        right = layout.right_width,
        shadow_x = left + 40,
        value_x = left + 30,
        text_len = layout.message_text_length,
    );
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_uses_minimum_width() {
        let layout = BadgeLayout::for_message("1");
        assert_eq!(layout.right_width, 150);
        assert_eq!(layout.total_width(), 540);
        assert_eq!(layout.export_width(), 54);
        assert_eq!(layout.message_text_length, 70);
    }

    #[test]
    fn test_right_width_grows_with_digits() {
        let mut previous = 0;
        for digits in 1..=20 {
            let message = "9".repeat(digits);
            let width = BadgeLayout::for_message(&message).right_width;
            assert!(width >= previous, "width shrank at {} digits", digits);
            assert!(width >= 150);
            previous = width;
        }
        assert_eq!(BadgeLayout::for_message("12").right_width, 220);
        assert_eq!(BadgeLayout::for_message("12345").right_width, 460);
    }

    #[test]
    fn test_badge_svg_structure() {
        let svg = badge_svg(1234);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="77" height="20""#));
        assert!(svg.contains(r#"viewBox="0 0 770 200""#));
        assert!(svg.contains(r#"aria-label="views: 1234""#));
        assert!(svg.contains("<title>views: 1234</title>"));
        assert!(svg.contains(r##"<rect fill="#555" width="390" height="200"/>"##));
        assert!(svg.contains(r##"<rect fill="#08C" x="390" width="380" height="200"/>"##));
        assert!(svg.contains(r#"<text x="430" y="148" textLength="310""#));
        assert!(svg.contains(r#"<text x="420" y="138" textLength="310">1234</text>"#));
        assert_eq!(svg.matches("<text ").count(), 4);
        assert_eq!(svg.matches(r#"opacity="0.1""#).count(), 2);
    }

    #[test]
    fn test_badge_svg_zero() {
        let svg = badge_svg(0);
        assert!(svg.contains(">0</text>"));
        assert!(!svg.contains(">00</text>"));
    }
}
