use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const TITLE: &str = "title";
    pub const ZERO: &str = "zero";
    pub const CARD: &str = "card";
    pub const CARD_CURRENT: &str = "card_current";
    pub const CARD_RESTRICTED: &str = "card_restricted";
    pub const DIM: &str = "dim";
    pub const TAB: &str = "tab";
    pub const TAB_ACTIVE: &str = "tab_active";
    pub const DANGER: &str = "danger";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
}

pub static PREVIEW_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::TITLE, Style::new().bold()),
        (names::ZERO, Style::new().cyan()),
        (names::CARD, Style::new()),
        (names::CARD_CURRENT, Style::new().bold().underlined()),
        (names::CARD_RESTRICTED, Style::new().dim().italic()),
        (names::DIM, Style::new().dim()),
        (names::TAB, Style::new()),
        (names::TAB_ACTIVE, Style::new().reverse()),
        (names::DANGER, Style::new().red()),
        (names::WARNING, Style::new().yellow()),
        (names::SUCCESS, Style::new().green()),
    ])
});

/// Applies a named style. Unknown names are flagged so template typos show up.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match PREVIEW_STYLES.get(name) {
        Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
        Some(_) => text.to_string(),
        None => format!("(!?) {}", text),
    }
}

/// Style name for a progress band class.
pub fn band_style(background_color: &str) -> &'static str {
    match background_color {
        "bg-success" => names::SUCCESS,
        "bg-warning" => names::WARNING,
        _ => names::DANGER,
    }
}
