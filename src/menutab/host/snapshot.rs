//! JSON course snapshots.
//!
//! A snapshot is the serialized form of everything a host would hand over for
//! one request: the course, its sections in any order, and the module table.
//!
//! ```text
//! {
//!   "course":   { "id": 2, "marker": 3, "enable_completion": true, "options": { ... } },
//!   "sections": [ { "id": 10, "section": 0, "modules": [1, 2] }, ... ],
//!   "modules":  [ { "id": 1, "modname": "label", "content": "<h2>Intro</h2>" }, ... ]
//! }
//! ```

use super::memory::InMemoryHost;
use crate::error::{MenutabError, Result};
use crate::model::CourseSnapshot;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads and parses a snapshot file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<InMemoryHost> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading course snapshot");
    let content = fs::read_to_string(path).map_err(MenutabError::Io)?;
    parse_snapshot(&content)
}

pub fn parse_snapshot(json: &str) -> Result<InMemoryHost> {
    let snapshot: CourseSnapshot =
        serde_json::from_str(json).map_err(MenutabError::Serialization)?;
    snapshot.course.options.validate()?;

    let mut seen = HashSet::new();
    for section in &snapshot.sections {
        if !seen.insert(section.section) {
            warn!(
                section = section.section,
                "duplicate section ordinal in snapshot, last one wins"
            );
        }
    }

    let host = InMemoryHost::from_snapshot(snapshot);
    for (section, module) in host.dangling_module_ids() {
        warn!(section, module, "section references an unknown course module");
    }
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{CourseHost, SectionView};

    const SNAPSHOT: &str = r#"{
        "course": {"id": 7, "marker": 2, "options": {"numcolumns": 2}},
        "sections": [
            {"id": 12, "section": 2, "name": "Two", "modules": [3]},
            {"id": 10, "section": 0, "modules": [1]},
            {"id": 11, "section": 1, "modules": [2]}
        ],
        "modules": [
            {"id": 1, "modname": "forum", "name": "News"},
            {"id": 2, "modname": "label", "content": "<h2>Intro</h2>"},
            {"id": 3, "modname": "quiz", "completion": "automatic", "state": "complete"}
        ]
    }"#;

    #[test]
    fn parses_and_orders_sections() {
        let host = parse_snapshot(SNAPSHOT).unwrap();
        let numbers: Vec<u32> = host.sections().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
        assert_eq!(host.course().options.numcolumns, 2);
        assert_eq!(host.section(2).unwrap().name(), Some("Two"));
        assert!(host.module(3).unwrap().state.is_complete());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_snapshot("{ not json"),
            Err(MenutabError::Serialization(_))
        ));
    }

    #[test]
    fn rejects_zero_columns() {
        let json = r#"{"course": {"id": 1, "options": {"numcolumns": 0}}}"#;
        assert!(matches!(parse_snapshot(json), Err(MenutabError::Config(_))));
    }

    #[test]
    fn dangling_module_ids_are_not_fatal() {
        let json = r#"{"course": {"id": 1}, "sections": [{"id": 1, "section": 1, "modules": [99]}]}"#;
        let host = parse_snapshot(json).unwrap();
        assert_eq!(host.dangling_module_ids(), vec![(1, 99)]);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        fs::write(&path, SNAPSHOT).unwrap();
        let host = load_snapshot(&path).unwrap();
        assert_eq!(host.course().id, 7);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_snapshot(dir.path().join("nope.json")),
            Err(MenutabError::Io(_))
        ));
    }
}
