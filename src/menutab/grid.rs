//! # Card Grid
//!
//! Builds one summary card per eligible section and lays the cards out in
//! rows of a fixed column count, for the course home page.
//!
//! Section zero never gets a card; it is rendered by its own page block. Its
//! modules still count towards the course-wide completion tally.
//!
//! A section is eligible when the user can see it, or when it is visible but
//! restricted and the host explains why. Restricted cards are shown (greyed
//! out by the templates) with the availability message attached.

use crate::config::GridOptions;
use crate::host::{CourseHost, SectionView};
use crate::progress::{tally, CompletionTally, ProgressIndicator};
use crate::strings::Strings;
use crate::summary::{
    apply_linebreak_filter, extract_card_image, section_title, title_class, ImageRotation,
};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionCard {
    /// Card id used by the templates; the section ordinal.
    pub cardid: u32,
    pub secid: u64,
    pub courseid: u64,
    pub title: String,
    /// Summary HTML with the promoted image removed.
    pub summary: String,
    pub image: Option<String>,
    pub available: bool,
    pub uservisible: bool,
    pub visible: bool,
    pub restricted: bool,
    pub userclickable: bool,
    pub current: bool,
    pub isactive: bool,
    pub titleclass: &'static str,
    pub progress: Option<ProgressIndicator>,
    pub availabilitymessage: Option<String>,
    /// Number printed on the card, counted from the configured start section.
    pub section_number: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridRow {
    pub sections: Vec<SectionCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    #[serde(rename = "sectionrows")]
    pub rows: Vec<GridRow>,
    pub columns: usize,
    pub stretch: bool,
}

impl Grid {
    /// Chunks cards row-major into rows of at most `columns` cards.
    pub fn from_cards(cards: Vec<SectionCard>, columns: usize, stretch: bool) -> Self {
        let columns = columns.max(1);
        let rows = cards
            .chunks(columns)
            .map(|chunk| GridRow {
                sections: chunk.to_vec(),
            })
            .collect();
        Self {
            rows,
            columns,
            stretch,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.rows.iter().map(|row| row.sections.len()).sum()
    }

    pub fn cards(&self) -> impl Iterator<Item = &SectionCard> {
        self.rows.iter().flat_map(|row| row.sections.iter())
    }
}

/// Result of one grid build.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBuild {
    pub grid: Grid,
    /// Course-wide tally; stays empty when completion is off for the viewer.
    pub tally: CompletionTally,
}

pub struct CardGridBuilder<'a> {
    options: &'a GridOptions,
    strings: Strings,
}

impl<'a> CardGridBuilder<'a> {
    pub fn new(options: &'a GridOptions, strings: Strings) -> Self {
        Self { options, strings }
    }

    /// Builds the grid for every section after section zero, in ordinal order.
    ///
    /// `rotation` picks default images; pass the same counter to successive
    /// builds of one request to continue the sequence.
    pub fn build<H: CourseHost>(&self, host: &H, rotation: &mut ImageRotation) -> GridBuild {
        let course = host.course();
        let track_completion = course.completion_enabled();
        let mut total = CompletionTally::default();
        let mut cards = Vec::new();

        if track_completion {
            if let Some(zero) = host.section(0).filter(|s| s.uservisible()) {
                total += tally(zero.module_ids(), |id| host.module(id));
            }
        }

        let mut expected = 1;
        for section in host.sections() {
            let number = section.number();
            if number == 0 {
                continue;
            }
            if number > expected {
                warn!(
                    from = expected,
                    to = number - 1,
                    "sections not found in course index"
                );
            }
            expected = number.saturating_add(1);

            if !is_eligible(section) {
                debug!(section = number, "section not shown on home page");
                continue;
            }

            let section_tally = if track_completion {
                let t = tally(section.module_ids(), |id| host.module(id));
                total += t;
                Some(t)
            } else {
                None
            };

            cards.push(self.card(host, section, section_tally, rotation));
        }

        GridBuild {
            grid: Grid::from_cards(cards, self.options.columns, self.options.stretch_columns),
            tally: total,
        }
    }

    fn card<H: CourseHost>(
        &self,
        host: &H,
        section: &H::Section,
        section_tally: Option<CompletionTally>,
        rotation: &mut ImageRotation,
    ) -> SectionCard {
        let course = host.course();
        let number = section.number();

        let title = apply_linebreak_filter(
            &section_title(section, &self.strings),
            !self.options.linebreak_filter,
        );

        let extracted = extract_card_image(section.summary());
        let (image, summary) = match extracted.image {
            Some(image) => (Some(image), extracted.body),
            None if self.options.default_images => (
                Some(rotation.default_image(&self.options.image_base_url)),
                section.summary().to_string(),
            ),
            None => (None, section.summary().to_string()),
        };

        let restricted = !section.available();
        let availabilitymessage = if restricted || !section.visible() {
            Some(host.availability_message(section)).filter(|m| !m.is_empty())
        } else {
            None
        };

        let progress = section_tally
            .filter(|t| self.options.show_progress && t.outof > 0)
            .map(|t| ProgressIndicator {
                cardid: Some(number),
                ..ProgressIndicator::new(t, true, false)
            });

        let current = course.marker != 0 && course.marker == number;
        let section_number = (self.options.print_section_number
            && number >= self.options.start_section_number)
            .then(|| number - self.options.start_section_number + 1);

        SectionCard {
            cardid: number,
            secid: section.id(),
            courseid: course.id,
            titleclass: title_class(&title),
            title,
            summary,
            image,
            available: section.available(),
            uservisible: section.uservisible(),
            visible: section.visible(),
            restricted,
            userclickable: section.available() || section.uservisible(),
            current,
            isactive: current,
            progress,
            availabilitymessage,
            section_number,
        }
    }
}

/// Whether a section gets a card: visible to the user, or visibly restricted
/// with an explanation.
pub fn is_eligible<S: SectionView>(section: &S) -> bool {
    section.uservisible()
        || (section.visible() && !section.available() && !section.available_info().is_empty())
}
