use super::section_zero::{self, SectionZero};
use super::{BasicData, PageMessage, PageResult};
use crate::grid::{CardGridBuilder, Grid};
use crate::host::CourseHost;
use crate::progress::{CompletionTally, ProgressIndicator};
use crate::strings::Strings;
use crate::summary::ImageRotation;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    #[serde(flatten)]
    pub basic: BasicData,
    pub section_zero: Option<SectionZero>,
    #[serde(flatten)]
    pub grid: Grid,
    pub overall_progress: CompletionTally,
    pub overall_progress_indicator: Option<ProgressIndicator>,
    pub has_no_sections: bool,
}

pub fn run<H: CourseHost>(host: &H) -> PageResult<HomePage> {
    let course = host.course();
    let strings = Strings::new(course.lang);
    let options = course.options.grid_options();

    let mut rotation = ImageRotation::new();
    let build = CardGridBuilder::new(&options, strings).build(host, &mut rotation);

    let overall_progress_indicator = (course.completion_enabled()
        && course.options.print_overall_progress
        && build.tally.outof > 0)
        .then(|| ProgressIndicator::overall(build.tally));

    let has_no_sections = build.grid.is_empty();
    let page = HomePage {
        basic: BasicData::from_host(host),
        section_zero: section_zero::build(host, &strings),
        grid: build.grid,
        overall_progress: build.tally,
        overall_progress_indicator,
        has_no_sections,
    };

    let mut result = PageResult::new(page);
    if has_no_sections {
        result.add_message(PageMessage::info("Course has no sections to show"));
    }
    result
}
