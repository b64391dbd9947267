//! # Menutab Architecture
//!
//! Menutab is the layout core of a tabbed course format for a learning
//! platform. The host owns the course: its sections, modules, visibility
//! rules, completion records and markup. Menutab decides how that content is
//! arranged: section cards in a grid on the course home page, and a
//! section's modules split into tabs on the single-section page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Loads a course snapshot, prints HTML / JSON / preview    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over pages and the template renderer         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page Layer (pages/*.rs)                                    │
//! │  - Home page, single-section page, section zero             │
//! │  - Plain serializable data, no markup of its own            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Layout Core (tabs.rs, grid.rs, progress.rs, summary.rs)    │
//! │  - Tab partitioning, card grid, completion tallies          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (host/)                                         │
//! │  - CourseHost / SectionView / ModuleView traits             │
//! │  - InMemoryHost (tests, snapshot files)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Model
//!
//! Everything is built fresh for one page request from an immutable host
//! snapshot and dropped afterwards. Nothing is cached between requests and
//! nothing is shared between threads. Anomalies (a missing section, a label
//! without a heading, a section with nothing tracked) make the page render
//! less; they are never errors. Errors only come from I/O, snapshot parsing,
//! configuration and templates.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for producing pages
//! - [`pages`]: Page data for the home page and single-section page
//! - [`tabs`]: Splits a section's modules into tabs at heading labels
//! - [`grid`]: Section cards and their row layout
//! - [`progress`]: Completion tallies and progress indicators
//! - [`summary`]: Card image extraction, titles and other HTML snippets
//! - [`host`]: The host capability traits and the in-memory host
//! - [`render`]: Template rendering
//! - [`config`]: Course format options
//! - [`strings`]: Language strings
//! - [`model`]: Snapshot data types
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and terminal preview for the binary (not part of the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod grid;
pub mod host;
pub mod model;
pub mod pages;
pub mod progress;
pub mod render;
pub mod strings;
pub mod summary;
pub mod tabs;
