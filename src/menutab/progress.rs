//! # Completion Aggregation
//!
//! Counts how many tracked modules of a section the user has completed, and
//! turns counts into the indicator data the templates draw (a bar on cards,
//! a donut for the course).
//!
//! A module only counts when it is visible to the user, not pending deletion
//! and has completion tracking switched on. Everything else is left out of
//! both counters.

use crate::host::ModuleView;
use serde::Serialize;
use std::ops::AddAssign;

/// Circumference of the progress donut, in SVG units.
pub const DONUT_CIRCUMFERENCE: f64 = 106.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionTally {
    pub completed: usize,
    pub outof: usize,
}

impl CompletionTally {
    pub fn new(completed: usize, outof: usize) -> Self {
        Self { completed, outof }
    }

    /// Rounded percentage, 0 when nothing is tracked.
    pub fn percent(&self) -> u8 {
        if self.outof == 0 {
            return 0;
        }
        let ratio = self.completed.min(self.outof) as f64 / self.outof as f64;
        (ratio * 100.0).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.completed > 0 && self.completed == self.outof
    }

    pub fn band(&self) -> ProgressBand {
        ProgressBand::for_percent(self.percent())
    }
}

impl AddAssign for CompletionTally {
    fn add_assign(&mut self, other: Self) {
        self.completed += other.completed;
        self.outof += other.outof;
    }
}

/// Color band of a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    Danger,
    Warning,
    Success,
}

impl ProgressBand {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=59 => ProgressBand::Danger,
            60..=99 => ProgressBand::Warning,
            _ => ProgressBand::Success,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProgressBand::Danger => "bg-danger",
            ProgressBand::Warning => "bg-warning",
            ProgressBand::Success => "bg-success",
        }
    }
}

/// Tallies the modules of one section.
///
/// `module_ids` is the section's module list; `lookup` resolves an id to the
/// host's module. Ids the host does not know are ignored.
pub fn tally<M, F>(module_ids: &[u64], lookup: F) -> CompletionTally
where
    M: ModuleView,
    F: Fn(u64) -> Option<M>,
{
    let mut result = CompletionTally::default();
    for module in module_ids.iter().filter_map(|id| lookup(*id)) {
        if !module.uservisible()
            || module.deletion_in_progress()
            || !module.completion_tracking().is_tracked()
        {
            continue;
        }
        result.outof += 1;
        if module.completion_state().is_complete() {
            result.completed += 1;
        }
    }
    result
}

/// Template data for a progress indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressIndicator {
    pub num_complete: usize,
    pub num_out_of: usize,
    pub percent: u8,
    pub is_complete: bool,
    pub is_overall: bool,
    pub background_color: &'static str,
    pub show_as_percent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_circumf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_offset: Option<u32>,
    pub is_single_digit: bool,
    /// Card the indicator belongs to; 0 for the course-wide one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardid: Option<u32>,
}

impl ProgressIndicator {
    pub fn new(tally: CompletionTally, as_percent: bool, is_overall: bool) -> Self {
        let percent = tally.percent();
        let (percent_circumf, percent_offset) = if as_percent {
            let offset = (f64::from(100 - percent) / 100.0 * DONUT_CIRCUMFERENCE).round() as u32;
            (Some(DONUT_CIRCUMFERENCE), Some(offset))
        } else {
            (None, None)
        };
        Self {
            num_complete: tally.completed,
            num_out_of: tally.outof,
            percent,
            is_complete: tally.is_complete(),
            is_overall,
            background_color: tally.band().css_class(),
            show_as_percent: as_percent,
            percent_circumf,
            percent_offset,
            is_single_digit: percent < 10,
            cardid: None,
        }
    }

    /// The course-wide donut.
    pub fn overall(tally: CompletionTally) -> Self {
        Self {
            cardid: Some(0),
            ..Self::new(tally, true, true)
        }
    }
}
