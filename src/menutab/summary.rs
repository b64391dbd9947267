//! # Summary and Title Helpers
//!
//! Small HTML-snippet operations used when building cards and tabs. The host
//! hands over already formatted HTML; nothing here parses it into a tree. The
//! patterns only need to find the first `<img>` of a summary and the first
//! `<h2>` of a label, the same way the stored content is authored.

use crate::host::SectionView;
use crate::strings::Strings;
use once_cell::sync::Lazy;
use regex::Regex;

/// Titles at least this many characters long get the `longtitle` class.
pub const LONG_TITLE_LENGTH: usize = 65;

/// Number of default card images (`0.png` .. `6.png`).
pub const DEFAULT_IMAGE_POOL: usize = 7;

const CARD_IMAGE_ATTRS: &str = r#"class="card-image-top"  style="height: 160px; width: 100%; object-position: center; object-fit: cover" alt="Image"/>"#;

const WORD_JOINER: &str = "&#8288;";
const LINEBREAK_MIN_CHARS: usize = 15;

static FIRST_IMG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img(.*?)src(.*?)=(.*?)"(.*?)""#).unwrap());

static ANY_IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]+>").unwrap());

static H2_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<\s*h2\b[^>]*>(.*?)</h2\b[^>]*>").unwrap());

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Summary split into the card image and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    /// The promoted `<img>` tag, if the summary had one.
    pub image: Option<String>,
    /// Summary with every `<img>` tag removed.
    pub body: String,
}

/// Promotes the first image of a summary to a card image and strips all
/// images from the body.
pub fn extract_card_image(summary: &str) -> CardSummary {
    let image = FIRST_IMG_RE
        .find(summary)
        .map(|m| format!("{} {}", m.as_str(), CARD_IMAGE_ATTRS));
    let body = ANY_IMG_RE.replace_all(summary, "").into_owned();
    CardSummary { image, body }
}

/// Rotating pick from the default image pool.
///
/// The counter lives for one grid build and is threaded through it
/// explicitly; it only advances when a default image is actually used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageRotation {
    next: usize,
}

impl ImageRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next pool index, wrapping to 0 after the last image.
    pub fn advance(&mut self) -> usize {
        let current = self.next;
        self.next += 1;
        if self.next >= DEFAULT_IMAGE_POOL {
            self.next = 0;
        }
        current
    }

    pub fn default_image(&mut self, base_url: &str) -> String {
        let index = self.advance();
        format!(
            "<img src=\"{}/{}.png\" {}",
            base_url.trim_end_matches('/'),
            index,
            CARD_IMAGE_ATTRS
        )
    }
}

/// `" longtitle"` for titles that need the smaller card font, `""` otherwise.
pub fn title_class(title: &str) -> &'static str {
    if title.chars().count() >= LONG_TITLE_LENGTH {
        " longtitle"
    } else {
        ""
    }
}

/// Turns the word-joiner marker in long titles into a visible break.
///
/// Long titles get `"- "` in place of the marker; short titles, or any title
/// when `remove` is set, just lose the marker.
pub fn apply_linebreak_filter(text: &str, remove: bool) -> String {
    if !remove && text.chars().count() > LINEBREAK_MIN_CHARS {
        text.replace(WORD_JOINER, "- ")
    } else {
        text.replace(WORD_JOINER, "")
    }
}

pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Plain text of the first `<h2>` in `html`, or `None` when there is no
/// heading or it has no text.
///
/// Tag names match in any case (`<H2>` counts) and the text is trimmed, so a
/// heading holding only whitespace gives `None`. Keep both: tests below and
/// the tab scan rely on them.
pub fn heading_text(html: &str) -> Option<String> {
    let captures = H2_RE.captures(html)?;
    let text = decode_entities(&strip_tags(&captures[1]));
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Display title of a section: its name, or "Section N".
pub fn section_title<S: SectionView>(section: &S, strings: &Strings) -> String {
    match section.name() {
        Some(name) => name.to_string(),
        None => strings.section_name(section.number()),
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, SectionSnapshot};

    #[test]
    fn promotes_first_image_and_strips_all() {
        let summary = r#"<p>Intro</p><img src="a.png" alt="x"><p>More</p><IMG src="b.png">"#;
        let result = extract_card_image(summary);

        let image = result.image.unwrap();
        assert!(image.starts_with(r#"<img src="a.png" class="card-image-top""#));
        assert!(image.ends_with(r#"alt="Image"/>"#));
        assert_eq!(result.body, "<p>Intro</p><p>More</p>");
    }

    #[test]
    fn summary_without_image_is_untouched() {
        let result = extract_card_image("<p>No pictures</p>");
        assert_eq!(result.image, None);
        assert_eq!(result.body, "<p>No pictures</p>");
    }

    #[test]
    fn rotation_wraps_after_six() {
        let mut rotation = ImageRotation::new();
        let picks: Vec<usize> = (0..8).map(|_| rotation.advance()).collect();
        assert_eq!(picks, vec![0, 1, 2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn default_image_points_into_pool() {
        let mut rotation = ImageRotation::new();
        rotation.advance();
        let image = rotation.default_image("https://lms.example/images/");
        assert!(image.starts_with(r#"<img src="https://lms.example/images/1.png" class="card-image-top""#));
    }

    #[test]
    fn long_titles_get_class() {
        assert_eq!(title_class("Short"), "");
        assert_eq!(title_class(&"x".repeat(64)), "");
        assert_eq!(title_class(&"x".repeat(65)), " longtitle");
    }

    #[test]
    fn linebreak_filter() {
        let long = "Donaudampfschiff&#8288;fahrt";
        assert_eq!(apply_linebreak_filter(long, false), "Donaudampfschiff- fahrt");
        assert_eq!(apply_linebreak_filter(long, true), "Donaudampfschifffahrt");
        assert_eq!(apply_linebreak_filter("Kurz&#8288;er", false), "Kurzer");
    }

    #[test]
    fn heading_text_strips_inner_markup() {
        assert_eq!(
            heading_text("<h2>Setup</h2><p>go</p>").as_deref(),
            Some("Setup")
        );
        assert_eq!(
            heading_text(r#"<div><h2 class="x"> <strong>Week&nbsp;1 &amp; 2</strong> </h2></div>"#)
                .as_deref(),
            Some("Week 1 & 2")
        );
        assert_eq!(heading_text("<H2>Loud</H2>").as_deref(), Some("Loud"));
    }

    #[test]
    fn heading_text_spans_lines() {
        assert_eq!(heading_text("<h2>\nMulti\nline\n</h2>").as_deref(), Some("Multi\nline"));
    }

    #[test]
    fn empty_or_missing_heading_is_none() {
        assert_eq!(heading_text("<p>no heading</p>"), None);
        assert_eq!(heading_text("<h2></h2>"), None);
        assert_eq!(heading_text("<h2> <span></span> </h2>"), None);
        assert_eq!(heading_text("<h3>Wrong level</h3>"), None);
    }

    #[test]
    fn section_title_falls_back_to_number() {
        let strings = Strings::new(Language::En);
        let mut section = SectionSnapshot::new(1, 4);
        assert_eq!(section_title(&section, &strings), "Section 4");
        section.name = Some("Week four".into());
        assert_eq!(section_title(&section, &strings), "Week four");
    }
}
