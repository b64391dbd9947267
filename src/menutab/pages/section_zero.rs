use crate::host::{CourseHost, ModuleView, SectionView};
use crate::strings::{StringKey, Strings};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionZero {
    pub secid: u64,
    pub title: String,
    pub summary: String,
    /// Rendered module markup, in section order.
    pub modules: Vec<String>,
    pub collapsed: bool,
    pub visible: bool,
    pub is_section_zero: bool,
}

/// Builds the section zero block, or `None` when the course has no section
/// zero or the user cannot see it.
pub fn build<H: CourseHost>(host: &H, strings: &Strings) -> Option<SectionZero> {
    let section = host.section(0)?;
    if !section.uservisible() && !host.can_view_hidden() {
        debug!("section zero hidden from user");
        return None;
    }

    let modules = section
        .module_ids()
        .iter()
        .filter_map(|id| host.module(*id))
        .filter(|module| !module.deletion_in_progress())
        .map(|module| host.render_module(module))
        .collect();

    let title = section
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| strings.get(StringKey::SectionZeroName).to_string());

    Some(SectionZero {
        secid: section.id(),
        title,
        summary: section.summary().to_string(),
        modules,
        collapsed: host.course().options.collapsed,
        visible: section.visible(),
        is_section_zero: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::fixtures::*;
    use crate::model::{Language, SectionSnapshot};

    #[test]
    fn renders_live_modules_with_default_title() {
        let mut deleting = activity("Gone");
        deleting.deletion_in_progress = true;
        let host = CourseFixture::new()
            .custom_section(
                SectionSnapshot::new(100, 0),
                vec![activity("Forum"), deleting, activity("Syllabus")],
            )
            .build();

        let zero = build(&host, &Strings::new(Language::En)).unwrap();
        assert_eq!(zero.title, "Start");
        assert_eq!(zero.modules.len(), 2);
        assert!(zero.modules[0].contains("Forum"));
        assert!(zero.modules[1].contains("Syllabus"));
        assert!(zero.collapsed);
        assert!(zero.is_section_zero);
    }

    #[test]
    fn french_title_and_custom_name() {
        let host = CourseFixture::new().build();
        let zero = build(&host, &Strings::new(Language::Fr)).unwrap();
        assert_eq!(zero.title, "Commencer ici");

        let mut named = SectionSnapshot::new(100, 0);
        named.name = Some("Welcome".into());
        let host = CourseFixture::new().custom_section(named, vec![]).build();
        assert_eq!(build(&host, &Strings::new(Language::Fr)).unwrap().title, "Welcome");
    }

    #[test]
    fn hidden_section_zero_only_for_privileged_viewers() {
        let mut hidden = SectionSnapshot::new(100, 0);
        hidden.visible = false;
        hidden.uservisible = false;
        let host = CourseFixture::new().custom_section(hidden, vec![]).build();
        assert!(build(&host, &Strings::default()).is_none());

        let host = host.with_capabilities(true, false);
        let zero = build(&host, &Strings::default()).unwrap();
        assert!(!zero.visible);
    }
}
