//! Language strings emitted by the layout code itself.
//!
//! Everything else a page shows comes from the templates or the host.

use crate::model::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey {
    /// Title of the tab opened for content before the first heading label.
    Content,
    SectionName,
    SectionZeroName,
    Hidden,
    YourSectionProgress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strings {
    lang: Language,
}

impl Strings {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn get(&self, key: StringKey) -> &'static str {
        match self.lang {
            Language::En => english(key),
            Language::Fr => french(key).unwrap_or_else(|| english(key)),
        }
    }

    /// Default title for an unnamed section, e.g. "Section 4".
    pub fn section_name(&self, number: u32) -> String {
        format!("{} {}", self.get(StringKey::SectionName), number)
    }
}

fn english(key: StringKey) -> &'static str {
    match key {
        StringKey::Content => "Contents",
        StringKey::SectionName => "Section",
        StringKey::SectionZeroName => "Start",
        StringKey::Hidden => "Unavailable for students",
        StringKey::YourSectionProgress => "Your progress in this section is currently at ",
    }
}

fn french(key: StringKey) -> Option<&'static str> {
    match key {
        StringKey::SectionZeroName => Some("Commencer ici"),
        _ => None,
    }
}
