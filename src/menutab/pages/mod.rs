//! # Pages
//!
//! Each page module turns a [`CourseHost`] snapshot into the plain data a
//! template needs. Pages never render markup themselves, apart from embedding
//! the module HTML the host produced.
//!
//! - [`home`]: section zero plus the card grid and overall progress
//! - [`section`]: one section split into tabs
//! - [`section_zero`]: the block shown above the grid on the home page
//!
//! Every page returns a [`PageResult`] carrying the page data and any
//! messages for the caller (missing sections, empty courses).

use crate::config::FormatOptions;
use crate::host::CourseHost;
use serde::Serialize;

pub mod home;
pub mod section;
pub mod section_zero;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl PageMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub page: T,
    pub messages: Vec<PageMessage>,
}

impl<T> PageResult<T> {
    pub fn new(page: T) -> Self {
        Self {
            page,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: PageMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: PageMessage) -> Self {
        self.add_message(message);
        self
    }
}

/// Data shared by every page of the format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicData {
    pub courseid: u64,
    pub coursename: String,
    pub completion_enabled: bool,
    pub editing: bool,
    pub can_view_hidden: bool,
    pub course_image: Option<String>,
    pub print_section_number: bool,
    /// Palette name of the tab background color.
    pub tab_background_name: Option<String>,
    #[serde(flatten)]
    pub options: FormatOptions,
}

impl BasicData {
    pub fn from_host<H: CourseHost>(host: &H) -> Self {
        let course = host.course();
        Self {
            courseid: course.id,
            coursename: course.fullname.clone(),
            completion_enabled: course.completion_enabled(),
            editing: host.can_edit(),
            can_view_hidden: host.can_view_hidden(),
            course_image: course.course_image.clone(),
            print_section_number: course.options.print_section_number,
            tab_background_name: course.options.tab_background_name(),
            options: course.options.clone(),
        }
    }
}
