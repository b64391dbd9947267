//! # Terminal Preview
//!
//! A rough sketch of a page for checking a snapshot without a browser: the
//! card grid as fixed-width columns with colored progress, or a section's
//! tabs with the modules under each.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! require Unicode-aware processing. Templates only choose styles.

use super::styles::{self, band_style, names};
use super::templates::{HOME_PREVIEW_TEMPLATE, SECTION_PREVIEW_TEMPLATE};
use menutab::api::{HomePage, SectionPage, SectionStatus};
use menutab::error::Result;
use menutab::grid::SectionCard;
use menutab::progress::ProgressIndicator;
use menutab::summary::strip_tags;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of one card column, separator included.
pub const CELL_WIDTH: usize = 30;
pub const LINE_WIDTH: usize = 100;

#[derive(Serialize)]
struct CardCell {
    label: String,
    style: &'static str,
    progress: String,
    progress_style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    cells: Vec<CardCell>,
}

#[derive(Serialize)]
struct HomePreview {
    title: String,
    section_zero: Option<String>,
    overall: Option<String>,
    overall_style: &'static str,
    rows: Vec<RowData>,
    empty: bool,
}

#[derive(Serialize)]
struct TabPreview {
    label: String,
    style: &'static str,
    title: String,
    modules: Vec<String>,
}

#[derive(Serialize)]
struct SectionPreview {
    status: SectionStatus,
    title: String,
    availability: Option<String>,
    progress: Option<String>,
    progress_style: &'static str,
    tabs: Vec<TabPreview>,
    message: String,
}

pub fn render_home_preview(page: &HomePage, use_color: bool) -> Result<String> {
    let rows = page
        .grid
        .rows
        .iter()
        .map(|row| RowData {
            cells: row.sections.iter().map(card_cell).collect(),
        })
        .collect();

    let data = HomePreview {
        title: page.basic.coursename.clone(),
        section_zero: page.section_zero.as_ref().map(|zero| {
            format!(
                "{} ({} modules)",
                truncate_to_width(&zero.title, LINE_WIDTH),
                zero.modules.len()
            )
        }),
        overall: page
            .overall_progress_indicator
            .as_ref()
            .map(|p| format!("Overall progress: {}", progress_text(p))),
        overall_style: page
            .overall_progress_indicator
            .as_ref()
            .map(|p| band_style(p.background_color))
            .unwrap_or(names::DIM),
        rows,
        empty: page.has_no_sections,
    };
    render_preview(HOME_PREVIEW_TEMPLATE, &data, use_color)
}

pub fn render_section_preview(page: &SectionPage, use_color: bool) -> Result<String> {
    let tabs = page
        .tabs
        .iter()
        .map(|tab| TabPreview {
            label: format!("[{}]", truncate_to_width(&tab.title, CELL_WIDTH)),
            style: if tab.active {
                names::TAB_ACTIVE
            } else {
                names::TAB
            },
            title: tab.title.clone(),
            modules: tab
                .modules
                .iter()
                .map(|html| truncate_to_width(strip_tags(html).trim(), LINE_WIDTH - 4))
                .collect(),
        })
        .collect();

    let message = match page.status {
        SectionStatus::NotFound => format!("Section {} not found.", page.section_number),
        _ => String::new(),
    };

    let data = SectionPreview {
        status: page.status,
        title: strip_tags(&page.title),
        availability: page.availability_message.as_deref().map(strip_tags),
        progress: page.progress.as_ref().map(progress_text),
        progress_style: page
            .progress
            .as_ref()
            .map(|p| band_style(p.background_color))
            .unwrap_or(names::DIM),
        tabs,
        message,
    };
    render_preview(SECTION_PREVIEW_TEMPLATE, &data, use_color)
}

fn card_cell(card: &SectionCard) -> CardCell {
    let number = card
        .section_number
        .map(|n| format!("{}. ", n))
        .unwrap_or_default();
    let label = truncate_to_width(
        &format!("{}{}", number, strip_tags(&card.title)),
        CELL_WIDTH - 2,
    );
    let (progress, progress_style) = match &card.progress {
        Some(p) => (progress_text(p), band_style(p.background_color)),
        None if card.restricted => ("restricted".to_string(), names::DIM),
        None => (String::new(), names::DIM),
    };
    let style = if card.restricted {
        names::CARD_RESTRICTED
    } else if card.current {
        names::CARD_CURRENT
    } else {
        names::CARD
    };
    CardCell {
        label: pad_to_width(&label, CELL_WIDTH),
        style,
        progress: pad_to_width(&progress, CELL_WIDTH),
        progress_style,
    }
}

fn progress_text(progress: &ProgressIndicator) -> String {
    format!(
        "{}/{} ({}%)",
        progress.num_complete, progress.num_out_of, progress.percent
    )
}

fn render_preview<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    Ok(env.render_str(template, data)?)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
