use crate::config::FormatOptions;
use serde::{Deserialize, Serialize};

/// Module type name the host gives to labels.
pub const LABEL_COMPONENT: &str = "label";

/// Completion tracking configured on a course module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    #[default]
    None,
    Manual,
    Automatic,
}

impl TrackingMode {
    pub fn is_tracked(self) -> bool {
        self != TrackingMode::None
    }
}

/// Completion state of a course module for the current user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    #[default]
    Incomplete,
    Complete,
    CompletePass,
    CompleteFail,
}

impl CompletionState {
    /// Only plain completion and completion with a passing grade count as done.
    pub fn is_complete(self) -> bool {
        matches!(self, CompletionState::Complete | CompletionState::CompletePass)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

/// Course-level facts the host hands over with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: u64,
    #[serde(default)]
    pub fullname: String,
    /// Section number highlighted as current by the course editor (0 = none).
    #[serde(default)]
    pub marker: u32,
    #[serde(default)]
    pub enable_completion: bool,
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub course_image: Option<String>,
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub options: FormatOptions,
}

impl CourseInfo {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fullname: String::new(),
            marker: 0,
            enable_completion: false,
            is_guest: false,
            course_image: None,
            lang: Language::default(),
            options: FormatOptions::default(),
        }
    }

    /// Guests never get completion data, even on tracked courses.
    pub fn completion_enabled(&self) -> bool {
        self.enable_completion && !self.is_guest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub id: u64,
    pub modname: String,
    #[serde(default)]
    pub name: String,
    /// Formatted text of the module; for labels this is the label body.
    #[serde(default)]
    pub content: String,
    /// Pre-rendered markup for the module, embedded verbatim in pages.
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default = "default_true")]
    pub uservisible: bool,
    #[serde(default)]
    pub deletion_in_progress: bool,
    #[serde(default)]
    pub completion: TrackingMode,
    #[serde(default)]
    pub state: CompletionState,
}

impl ModuleSnapshot {
    pub fn new(id: u64, modname: &str) -> Self {
        Self {
            id,
            modname: modname.to_string(),
            name: String::new(),
            content: String::new(),
            html: None,
            uservisible: true,
            deletion_in_progress: false,
            completion: TrackingMode::None,
            state: CompletionState::Incomplete,
        }
    }

    pub fn label(id: u64, content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::new(id, LABEL_COMPONENT)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub id: u64,
    pub section: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub uservisible: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub available_info: String,
    #[serde(default)]
    pub modules: Vec<u64>,
}

impl SectionSnapshot {
    pub fn new(id: u64, section: u32) -> Self {
        Self {
            id,
            section,
            name: None,
            summary: String::new(),
            visible: true,
            uservisible: true,
            available: true,
            available_info: String::new(),
            modules: Vec::new(),
        }
    }
}

/// Everything the host knows about one course for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub course: CourseInfo,
    #[serde(default)]
    pub sections: Vec<SectionSnapshot>,
    #[serde(default)]
    pub modules: Vec<ModuleSnapshot>,
    #[serde(default)]
    pub can_view_hidden: bool,
    #[serde(default)]
    pub can_edit: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_complete_and_pass_count_as_complete() {
        assert!(CompletionState::Complete.is_complete());
        assert!(CompletionState::CompletePass.is_complete());
        assert!(!CompletionState::CompleteFail.is_complete());
        assert!(!CompletionState::Incomplete.is_complete());
    }

    #[test]
    fn guests_have_no_completion() {
        let mut course = CourseInfo::new(1);
        course.enable_completion = true;
        assert!(course.completion_enabled());
        course.is_guest = true;
        assert!(!course.completion_enabled());
    }

    #[test]
    fn module_defaults_from_json() {
        let json = r#"{"id": 4, "modname": "quiz"}"#;
        let module: ModuleSnapshot = serde_json::from_str(json).unwrap();
        assert!(module.uservisible);
        assert!(!module.deletion_in_progress);
        assert_eq!(module.completion, TrackingMode::None);
        assert_eq!(module.state, CompletionState::Incomplete);
    }

    #[test]
    fn completion_enums_use_snake_case() {
        let state: CompletionState = serde_json::from_str(r#""complete_pass""#).unwrap();
        assert_eq!(state, CompletionState::CompletePass);
        let mode: TrackingMode = serde_json::from_str(r#""automatic""#).unwrap();
        assert!(mode.is_tracked());
    }
}
