//! # Host Layer
//!
//! The course structure, visibility rules and completion records all belong to
//! the host platform. This module defines the narrow, read-only views the
//! layout code needs from it, so that host-native objects are adapted rather
//! than subclassed.
//!
//! ## Traits
//!
//! - [`ModuleView`]: one course module (activity, resource or label)
//! - [`SectionView`]: one course section and its ordered module ids
//! - [`CourseHost`]: the per-request snapshot: course facts, section index,
//!   module lookup, opaque module rendering and capability checks
//!
//! ## Implementations
//!
//! - [`memory::InMemoryHost`]: built in code, used throughout the tests
//! - [`snapshot::load_snapshot`]: an in-memory host deserialized from a JSON
//!   course snapshot
//!
//! Every view is immutable. A host is built at the start of a request and
//! dropped when the page has been rendered.

use crate::model::{
    CompletionState, CourseInfo, ModuleSnapshot, SectionSnapshot, TrackingMode, LABEL_COMPONENT,
};

pub mod memory;
pub mod snapshot;

pub trait ModuleView {
    fn id(&self) -> u64;

    /// Module type name, e.g. `"label"`, `"quiz"`.
    fn component(&self) -> &str;

    fn name(&self) -> &str;

    fn deletion_in_progress(&self) -> bool;

    fn uservisible(&self) -> bool;

    /// Formatted module text. Only labels carry anything meaningful here.
    fn formatted_content(&self) -> &str;

    fn completion_tracking(&self) -> TrackingMode;

    fn completion_state(&self) -> CompletionState;

    fn is_label(&self) -> bool {
        self.component() == LABEL_COMPONENT
    }
}

impl<T: ModuleView + ?Sized> ModuleView for &T {
    fn id(&self) -> u64 {
        (**self).id()
    }

    fn component(&self) -> &str {
        (**self).component()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn deletion_in_progress(&self) -> bool {
        (**self).deletion_in_progress()
    }

    fn uservisible(&self) -> bool {
        (**self).uservisible()
    }

    fn formatted_content(&self) -> &str {
        (**self).formatted_content()
    }

    fn completion_tracking(&self) -> TrackingMode {
        (**self).completion_tracking()
    }

    fn completion_state(&self) -> CompletionState {
        (**self).completion_state()
    }

    fn is_label(&self) -> bool {
        (**self).is_label()
    }
}

pub trait SectionView {
    fn id(&self) -> u64;

    /// Ordinal of the section within the course; 0 is section zero.
    fn number(&self) -> u32;

    fn name(&self) -> Option<&str>;

    /// Formatted summary HTML.
    fn summary(&self) -> &str;

    fn visible(&self) -> bool;

    fn uservisible(&self) -> bool;

    fn available(&self) -> bool;

    /// Why the section is restricted, if it is.
    fn available_info(&self) -> &str;

    fn module_ids(&self) -> &[u64];
}

/// The per-request view of one course.
pub trait CourseHost {
    type Section: SectionView;
    type Module: ModuleView;

    fn course(&self) -> &CourseInfo;

    /// All sections, in ascending ordinal order, section zero included.
    fn sections(&self) -> Vec<&Self::Section>;

    fn section(&self, number: u32) -> Option<&Self::Section>;

    fn module(&self, id: u64) -> Option<&Self::Module>;

    /// Renders one module to markup. The result is embedded as-is.
    fn render_module(&self, module: &Self::Module) -> String;

    /// Explains why a section is restricted or hidden.
    fn availability_message(&self, section: &Self::Section) -> String;

    fn can_view_hidden(&self) -> bool;

    fn can_edit(&self) -> bool;
}

impl ModuleView for ModuleSnapshot {
    fn id(&self) -> u64 {
        self.id
    }

    fn component(&self) -> &str {
        &self.modname
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn deletion_in_progress(&self) -> bool {
        self.deletion_in_progress
    }

    fn uservisible(&self) -> bool {
        self.uservisible
    }

    fn formatted_content(&self) -> &str {
        &self.content
    }

    fn completion_tracking(&self) -> TrackingMode {
        self.completion
    }

    fn completion_state(&self) -> CompletionState {
        self.state
    }
}

impl SectionView for SectionSnapshot {
    fn id(&self) -> u64 {
        self.id
    }

    fn number(&self) -> u32 {
        self.section
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn uservisible(&self) -> bool {
        self.uservisible
    }

    fn available(&self) -> bool {
        self.available
    }

    fn available_info(&self) -> &str {
        &self.available_info
    }

    fn module_ids(&self) -> &[u64] {
        &self.modules
    }
}

/// Default module markup for snapshot-backed hosts: the pre-rendered HTML if
/// the host supplied it, otherwise a minimal activity line.
pub(crate) fn fallback_module_html(module: &ModuleSnapshot) -> String {
    if let Some(html) = &module.html {
        return html.clone();
    }
    if module.is_label() {
        return format!(
            "<div class=\"activity label\" data-id=\"{}\">{}</div>",
            module.id, module.content
        );
    }
    format!(
        "<div class=\"activity {}\" data-id=\"{}\">{}</div>",
        module.modname,
        module.id,
        escape_text(&module.name)
    )
}

/// Availability text for snapshot-backed hosts.
pub(crate) fn fallback_availability(section: &SectionSnapshot, hidden_label: &str) -> String {
    let mut parts = Vec::new();
    if !section.visible {
        parts.push(hidden_label.to_string());
    }
    if !section.available_info.is_empty() {
        parts.push(section.available_info.clone());
    }
    parts.join(" ")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
