//! # Tab Partitioning
//!
//! A section page splits the section's modules into tabs. Authors mark where a
//! tab starts by adding a label whose text contains a level-2 heading; the
//! heading text becomes the tab title and the label itself is not shown.
//!
//! ## Scan
//!
//! The scan is a two-state machine over the ordered module list:
//!
//! ```text
//!              BoundaryLabelFound                BoundaryLabelFound
//!   NoTabOpen ───────────────────▶ TabOpen ◀──────────────────────┐
//!       │                            │  │                          │
//!       │ content at position 0      │  └── close current tab ─────┘
//!       └──── open "Contents" ──────▶│
//!                                    │ content: stays in the open tab
//! ```
//!
//! - Modules pending deletion produce no event at all. They still occupy a
//!   position, so indexes always refer to the host's full list.
//! - A label without a usable `<h2>` is ordinary content.
//! - The default "Contents" tab (`skip_index == None`, starting at position 0)
//!   is only opened when the module at position 0 is live and not a label.
//!   Otherwise content before the first heading label belongs to no tab and is
//!   not shown, so a section that opens with a heading-less label and has no
//!   heading after it gives no tabs at all.
//!
//! Each tab covers `[start_index, end_index)`, where `end_index` is the next
//! tab's boundary position or the list length. Ranges are contiguous and
//! ordered. When the first module is live content or a heading label, every
//! non-boundary, non-deleted module lands in exactly one tab.

use crate::host::ModuleView;
use crate::strings::{StringKey, Strings};
use crate::summary::heading_text;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<T> {
    pub title: String,
    /// Ordinal of the tab on the page.
    pub index: usize,
    /// Position of the module that opened the tab.
    pub tab_id: usize,
    /// Position of the boundary label, `None` for the default tab.
    pub skip_index: Option<usize>,
    /// First position included in the tab.
    pub start_index: usize,
    /// One past the last position included in the tab.
    pub end_index: usize,
    /// Modules in the tab, in section order, deleted ones left out.
    pub items: Vec<T>,
    pub active: bool,
}

impl<T> Tab<T> {
    pub fn is_default(&self) -> bool {
        self.skip_index.is_none()
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start_index..self.end_index
    }
}

/// Where a tab begins, before its end is known.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TabStart {
    title: String,
    tab_id: usize,
    skip_index: Option<usize>,
    start_index: usize,
}

#[derive(Debug)]
enum ScanState {
    NoTabOpen,
    TabOpen(TabStart),
}

#[derive(Debug)]
enum ScanEvent {
    BoundaryLabelFound(String),
    Content,
}

#[derive(Debug, Clone)]
pub struct TabPartitioner {
    default_title: String,
}

impl TabPartitioner {
    pub fn new(strings: &Strings) -> Self {
        Self::with_default_title(strings.get(StringKey::Content))
    }

    pub fn with_default_title(title: &str) -> Self {
        Self {
            default_title: title.to_string(),
        }
    }

    /// Splits `items` into tabs. The first tab is active. An empty (or
    /// entirely deleted) list gives no tabs.
    pub fn partition<M: ModuleView + Clone>(&self, items: &[M]) -> Vec<Tab<M>> {
        let mut state = ScanState::NoTabOpen;
        let mut bounds: Vec<(TabStart, usize)> = Vec::new();

        for (position, item) in items.iter().enumerate() {
            let Some(event) = classify(item) else {
                continue;
            };

            state = match (state, event) {
                (ScanState::NoTabOpen, ScanEvent::Content) if position == 0 && !item.is_label() => {
                    ScanState::TabOpen(TabStart {
                        title: self.default_title.clone(),
                        tab_id: 0,
                        skip_index: None,
                        start_index: 0,
                    })
                }
                (ScanState::NoTabOpen, ScanEvent::Content) => {
                    debug!(module = item.id(), "content before the first tab heading dropped");
                    ScanState::NoTabOpen
                }
                (ScanState::NoTabOpen, ScanEvent::BoundaryLabelFound(title)) => {
                    ScanState::TabOpen(boundary_tab(title, position))
                }
                (ScanState::TabOpen(open), ScanEvent::BoundaryLabelFound(title)) => {
                    bounds.push((open, position));
                    ScanState::TabOpen(boundary_tab(title, position))
                }
                (open @ ScanState::TabOpen(_), ScanEvent::Content) => open,
            };
        }

        if let ScanState::TabOpen(open) = state {
            bounds.push((open, items.len()));
        }

        bounds
            .into_iter()
            .enumerate()
            .map(|(index, (start, end_index))| Tab {
                items: items[start.start_index..end_index]
                    .iter()
                    .filter(|item| !item.deletion_in_progress())
                    .cloned()
                    .collect(),
                title: start.title,
                index,
                tab_id: start.tab_id,
                skip_index: start.skip_index,
                start_index: start.start_index,
                end_index,
                active: index == 0,
            })
            .collect()
    }
}

fn boundary_tab(title: String, position: usize) -> TabStart {
    TabStart {
        title,
        tab_id: position,
        skip_index: Some(position),
        start_index: position + 1,
    }
}

fn classify<M: ModuleView>(item: &M) -> Option<ScanEvent> {
    if item.deletion_in_progress() {
        return None;
    }
    if !item.is_label() {
        return Some(ScanEvent::Content);
    }
    match heading_text(item.formatted_content()) {
        Some(title) => Some(ScanEvent::BoundaryLabelFound(title)),
        None => {
            debug!(module = item.id(), "label has no heading, kept as tab content");
            Some(ScanEvent::Content)
        }
    }
}
