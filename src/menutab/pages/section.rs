//! Single-section page.
//!
//! The requested section is split into tabs at its heading labels. A section
//! that does not exist, or that the user may not see, yields a page with a
//! status flag and no content instead of an error, so the caller can tell an
//! absent section from an empty one.

use super::{BasicData, PageMessage, PageResult};
use crate::error::{MenutabError, Result};
use crate::host::{CourseHost, SectionView};
use crate::progress::{tally, ProgressIndicator};
use crate::strings::{StringKey, Strings};
use crate::summary::section_title;
use crate::tabs::TabPartitioner;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Found,
    NotFound,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub title: String,
    pub index: usize,
    pub tab_id: usize,
    pub active: bool,
    /// Module markup from the host, embedded verbatim.
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionPage {
    #[serde(flatten)]
    pub basic: BasicData,
    pub status: SectionStatus,
    pub section_number: u32,
    pub secid: Option<u64>,
    pub title: String,
    pub summary: String,
    pub tabs: Vec<TabView>,
    pub has_content: bool,
    pub visible: bool,
    pub availability_message: Option<String>,
    pub completion_help: bool,
    pub progress: Option<ProgressIndicator>,
    pub progress_label: Option<String>,
}

impl SectionPage {
    /// Turns an absent section into an error, for callers that treat it as one.
    pub fn require_found(&self) -> Result<()> {
        match self.status {
            SectionStatus::NotFound => Err(MenutabError::SectionNotFound(self.section_number)),
            _ => Ok(()),
        }
    }

    fn empty<H: CourseHost>(host: &H, number: u32, status: SectionStatus) -> Self {
        Self {
            basic: BasicData::from_host(host),
            status,
            section_number: number,
            secid: None,
            title: String::new(),
            summary: String::new(),
            tabs: Vec::new(),
            has_content: false,
            visible: false,
            availability_message: None,
            completion_help: false,
            progress: None,
            progress_label: None,
        }
    }
}

pub fn run<H: CourseHost>(host: &H, number: u32) -> PageResult<SectionPage> {
    let course = host.course();
    let strings = Strings::new(course.lang);

    let Some(section) = host.section(number) else {
        warn!(section = number, "requested section not found");
        return PageResult::new(SectionPage::empty(host, number, SectionStatus::NotFound))
            .with_message(PageMessage::warning(format!(
                "Section {} does not exist",
                number
            )));
    };

    if !section.uservisible() && !host.can_view_hidden() {
        let mut page = SectionPage::empty(host, number, SectionStatus::Hidden);
        page.secid = Some(section.id());
        page.title = section_title(section, &strings);
        page.visible = section.visible();
        if section.visible() {
            page.availability_message =
                Some(host.availability_message(section)).filter(|m| !m.is_empty());
        }
        return PageResult::new(page).with_message(PageMessage::warning(format!(
            "Section {} is not available",
            number
        )));
    }

    let items: Vec<&H::Module> = section
        .module_ids()
        .iter()
        .filter_map(|id| {
            let module = host.module(*id);
            if module.is_none() {
                warn!(section = number, module = id, "unknown course module skipped");
            }
            module
        })
        .collect();

    let tabs: Vec<TabView> = TabPartitioner::new(&strings)
        .partition(&items)
        .into_iter()
        .map(|tab| TabView {
            modules: tab.items.iter().map(|m| host.render_module(m)).collect(),
            title: tab.title,
            index: tab.index,
            tab_id: tab.tab_id,
            active: tab.active,
        })
        .collect();

    let availability_message = if host.can_view_hidden() {
        Some(host.availability_message(section)).filter(|m| !m.is_empty())
    } else {
        None
    };

    let section_tally = course
        .completion_enabled()
        .then(|| tally(section.module_ids(), |id| host.module(id)))
        .filter(|t| t.outof > 0);
    let progress = section_tally.map(|t| ProgressIndicator {
        cardid: Some(number),
        ..ProgressIndicator::new(t, true, false)
    });
    let progress_label = progress.as_ref().map(|p| {
        format!(
            "{}{}%",
            strings.get(StringKey::YourSectionProgress),
            p.percent
        )
    });

    let page = SectionPage {
        basic: BasicData::from_host(host),
        status: SectionStatus::Found,
        section_number: number,
        secid: Some(section.id()),
        title: section_title(section, &strings),
        summary: section.summary().to_string(),
        has_content: !tabs.is_empty(),
        tabs,
        visible: section.visible(),
        availability_message,
        completion_help: progress.is_some(),
        progress,
        progress_label,
    };
    PageResult::new(page)
}
