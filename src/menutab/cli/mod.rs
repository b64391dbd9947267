//! Binary-only helpers: logging setup, message printing and the terminal
//! preview.

pub mod logging;
pub mod preview;
pub mod styles;
pub mod templates;

use console::Style;
use menutab::api::{MessageLevel, PageMessage};

/// Page messages go to stderr; stdout carries only the page.
pub fn print_messages(messages: &[PageMessage], use_color: bool) {
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => Style::new().dim(),
            MessageLevel::Warning => Style::new().yellow(),
        };
        eprintln!(
            "{}",
            style.force_styling(use_color).apply_to(&message.content)
        );
    }
}
