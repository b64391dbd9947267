use super::{fallback_availability, fallback_module_html, CourseHost};
use crate::model::{CourseInfo, CourseSnapshot, ModuleSnapshot, SectionSnapshot};
use crate::strings::{StringKey, Strings};
use std::collections::HashMap;

/// Host backed by plain snapshot structs held in memory.
///
/// Used by the tests, and by the CLI once a snapshot file has been parsed.
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    course: CourseInfo,
    sections: Vec<SectionSnapshot>,
    modules: HashMap<u64, ModuleSnapshot>,
    can_view_hidden: bool,
    can_edit: bool,
}

impl InMemoryHost {
    pub fn new(course: CourseInfo) -> Self {
        Self {
            course,
            sections: Vec::new(),
            modules: HashMap::new(),
            can_view_hidden: false,
            can_edit: false,
        }
    }

    pub fn from_snapshot(snapshot: CourseSnapshot) -> Self {
        let mut host = Self::new(snapshot.course);
        host.can_view_hidden = snapshot.can_view_hidden;
        host.can_edit = snapshot.can_edit;
        for module in snapshot.modules {
            host.modules.insert(module.id, module);
        }
        for section in snapshot.sections {
            host.insert_section(section);
        }
        host
    }

    /// Adds (or replaces) a section, keeping ordinal order.
    pub fn insert_section(&mut self, section: SectionSnapshot) {
        match self
            .sections
            .binary_search_by_key(&section.section, |s| s.section)
        {
            Ok(pos) => self.sections[pos] = section,
            Err(pos) => self.sections.insert(pos, section),
        }
    }

    pub fn insert_module(&mut self, module: ModuleSnapshot) {
        self.modules.insert(module.id, module);
    }

    pub fn with_section(mut self, section: SectionSnapshot) -> Self {
        self.insert_section(section);
        self
    }

    pub fn with_module(mut self, module: ModuleSnapshot) -> Self {
        self.insert_module(module);
        self
    }

    pub fn with_capabilities(mut self, can_view_hidden: bool, can_edit: bool) -> Self {
        self.can_view_hidden = can_view_hidden;
        self.can_edit = can_edit;
        self
    }

    pub fn course_mut(&mut self) -> &mut CourseInfo {
        &mut self.course
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Module ids referenced by sections but unknown to the host.
    pub fn dangling_module_ids(&self) -> Vec<(u32, u64)> {
        self.sections
            .iter()
            .flat_map(|s| s.modules.iter().map(move |id| (s.section, *id)))
            .filter(|(_, id)| !self.modules.contains_key(id))
            .collect()
    }
}

impl CourseHost for InMemoryHost {
    type Section = SectionSnapshot;
    type Module = ModuleSnapshot;

    fn course(&self) -> &CourseInfo {
        &self.course
    }

    fn sections(&self) -> Vec<&SectionSnapshot> {
        self.sections.iter().collect()
    }

    fn section(&self, number: u32) -> Option<&SectionSnapshot> {
        self.sections
            .binary_search_by_key(&number, |s| s.section)
            .ok()
            .map(|pos| &self.sections[pos])
    }

    fn module(&self, id: u64) -> Option<&ModuleSnapshot> {
        self.modules.get(&id)
    }

    fn render_module(&self, module: &ModuleSnapshot) -> String {
        fallback_module_html(module)
    }

    fn availability_message(&self, section: &SectionSnapshot) -> String {
        let strings = Strings::new(self.course.lang);
        fallback_availability(section, strings.get(StringKey::Hidden))
    }

    fn can_view_hidden(&self) -> bool {
        self.can_view_hidden
    }

    fn can_edit(&self) -> bool {
        self.can_edit
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CompletionState, TrackingMode};

    /// Builds courses section by section, handing out module ids as it goes.
    pub struct CourseFixture {
        pub host: InMemoryHost,
        next_module_id: u64,
    }

    impl Default for CourseFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CourseFixture {
        /// A course with an empty section zero.
        pub fn new() -> Self {
            let host = InMemoryHost::new(CourseInfo::new(1)).with_section(SectionSnapshot::new(100, 0));
            Self {
                host,
                next_module_id: 1,
            }
        }

        pub fn with_completion(mut self) -> Self {
            self.host.course_mut().enable_completion = true;
            self
        }

        /// Adds a plain visible section with the given modules.
        pub fn section(mut self, number: u32, modules: Vec<ModuleSnapshot>) -> Self {
            let mut section = SectionSnapshot::new(100 + u64::from(number), number);
            section.modules = self.add_modules(modules);
            self.host.insert_section(section);
            self
        }

        /// Adds a fully specified section; its module list is replaced by `modules`.
        pub fn custom_section(
            mut self,
            mut section: SectionSnapshot,
            modules: Vec<ModuleSnapshot>,
        ) -> Self {
            section.modules = self.add_modules(modules);
            self.host.insert_section(section);
            self
        }

        pub fn build(self) -> InMemoryHost {
            self.host
        }

        fn add_modules(&mut self, modules: Vec<ModuleSnapshot>) -> Vec<u64> {
            modules
                .into_iter()
                .map(|mut module| {
                    module.id = self.next_module_id;
                    self.next_module_id += 1;
                    let id = module.id;
                    self.host.insert_module(module);
                    id
                })
                .collect()
        }
    }

    pub fn activity(name: &str) -> ModuleSnapshot {
        let mut module = ModuleSnapshot::new(0, "page");
        module.name = name.to_string();
        module
    }

    pub fn heading_label(title: &str) -> ModuleSnapshot {
        ModuleSnapshot::label(0, &format!("<h2>{}</h2>", title))
    }

    pub fn plain_label(text: &str) -> ModuleSnapshot {
        ModuleSnapshot::label(0, &format!("<p>{}</p>", text))
    }

    pub fn tracked(name: &str, state: CompletionState) -> ModuleSnapshot {
        let mut module = activity(name);
        module.completion = TrackingMode::Manual;
        module.state = state;
        module
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn sections_stay_in_ordinal_order() {
        let host = InMemoryHost::new(CourseInfo::new(1))
            .with_section(SectionSnapshot::new(3, 3))
            .with_section(SectionSnapshot::new(1, 1))
            .with_section(SectionSnapshot::new(2, 2));

        let numbers: Vec<u32> = host.sections().iter().map(|s| s.section).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn inserting_same_ordinal_replaces() {
        let mut named = SectionSnapshot::new(9, 1);
        named.name = Some("Renamed".into());
        let host = InMemoryHost::new(CourseInfo::new(1))
            .with_section(SectionSnapshot::new(1, 1))
            .with_section(named);

        assert_eq!(host.section_count(), 1);
        assert_eq!(host.section(1).unwrap().id, 9);
    }

    #[test]
    fn missing_section_is_none() {
        let host = CourseFixture::new().section(1, vec![]).build();
        assert!(host.section(1).is_some());
        assert!(host.section(5).is_none());
    }

    #[test]
    fn fixture_assigns_module_ids() {
        let host = CourseFixture::new()
            .section(1, vec![activity("A"), activity("B")])
            .section(2, vec![activity("C")])
            .build();

        assert_eq!(host.section(1).unwrap().modules, vec![1, 2]);
        assert_eq!(host.section(2).unwrap().modules, vec![3]);
        assert_eq!(host.module(3).unwrap().name, "C");
    }

    #[test]
    fn reports_dangling_module_ids() {
        let mut section = SectionSnapshot::new(1, 1);
        section.modules = vec![1, 42];
        let host = InMemoryHost::new(CourseInfo::new(1))
            .with_module(ModuleSnapshot::new(1, "page"))
            .with_section(section);

        assert_eq!(host.dangling_module_ids(), vec![(1, 42)]);
    }

    #[test]
    fn availability_message_uses_course_language() {
        let mut section = SectionSnapshot::new(1, 1);
        section.visible = false;
        let host = InMemoryHost::new(CourseInfo::new(1)).with_section(section.clone());
        assert_eq!(host.availability_message(&section), "Unavailable for students");
    }
}
