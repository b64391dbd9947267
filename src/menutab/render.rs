//! # Rendering
//!
//! Page data is turned into markup by a template engine the host provides.
//! [`TemplateRenderer`] is that seam; [`Renderer`] is the bundled
//! implementation on top of minijinja, with the format's own templates
//! registered at construction.
//!
//! Templates are named after their file and auto-escape HTML. Markup that
//! comes pre-rendered from the host (summaries, card images, module HTML) is
//! emitted with `|safe`.
//!
//! ```rust
//! use menutab::render::{Renderer, TemplateRenderer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Hello { name: String }
//!
//! let mut renderer = Renderer::new().unwrap();
//! renderer.add_template("hello.html", "<b>{{ name }}</b>").unwrap();
//! let html = renderer.render("hello.html", &Hello { name: "<x>".into() }).unwrap();
//! assert_eq!(html, "<b>&lt;x&gt;</b>");
//! ```

use crate::error::Result;
use minijinja::Environment;
use serde::Serialize;

pub const HOME_PAGE_TEMPLATE: &str = "home_page.html";
pub const SECTION_PAGE_TEMPLATE: &str = "single_section_page.html";

const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    (HOME_PAGE_TEMPLATE, include_str!("templates/home_page.html")),
    (
        SECTION_PAGE_TEMPLATE,
        include_str!("templates/single_section_page.html"),
    ),
    ("card.html", include_str!("templates/card.html")),
    ("progress.html", include_str!("templates/progress.html")),
];

/// Renders a named template with serializable page data.
pub trait TemplateRenderer {
    fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String>;
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the bundled page templates.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in BUNDLED_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Registers (or replaces) a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }
}

impl TemplateRenderer for Renderer {
    fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenutabError;
    use crate::host::memory::fixtures::*;
    use crate::model::{CompletionState, SectionSnapshot};
    use crate::pages::{home, section};

    fn renderer() -> Renderer {
        Renderer::new().unwrap()
    }

    #[test]
    fn renders_home_page_cards() {
        let mut summary = SectionSnapshot::new(101, 1);
        summary.summary = r#"<p>Cells</p><img src="cell.png">"#.into();
        let host = CourseFixture::new()
            .custom_section(summary, vec![])
            .section(2, vec![])
            .build();

        let page = home::run(&host).page;
        let html = renderer().render(HOME_PAGE_TEMPLATE, &page).unwrap();

        assert!(html.contains(r#"id="card-1""#));
        assert!(html.contains(r#"id="card-2""#));
        assert!(html.contains(r#"<img src="cell.png" class="card-image-top""#));
        assert!(html.contains("/course/format/menutab/images/0.png"));
        assert!(html.contains("columns-3"));
        assert!(html.contains(r#"class="section-zero collapsed""#));
    }

    #[test]
    fn renders_overall_donut() {
        let mut host = CourseFixture::new()
            .with_completion()
            .section(1, vec![tracked("Q", CompletionState::Complete)])
            .build();
        host.course_mut().options.print_overall_progress = true;

        let page = home::run(&host).page;
        let html = renderer().render(HOME_PAGE_TEMPLATE, &page).unwrap();
        assert!(html.contains("progress-circle overall"));
        assert!(html.contains(r#"stroke-dashoffset="0""#));
    }

    #[test]
    fn renders_tabs_with_module_markup() {
        let host = CourseFixture::new()
            .section(
                1,
                vec![heading_label("Theory"), activity("Read me"), heading_label("Lab")],
            )
            .build();

        let page = section::run(&host, 1).page;
        let html = renderer().render(SECTION_PAGE_TEMPLATE, &page).unwrap();

        assert!(html.contains(r##"<a class="nav-link active" href="#tab-0""##));
        assert!(html.contains(">Lab</a>"));
        assert!(html.contains(r#"data-color-name="Dark Blue""#));
        assert!(html.contains(r#"<div class="activity page" data-id="2">Read me</div>"#));
    }

    #[test]
    fn renders_not_found_section() {
        let host = CourseFixture::new().build();
        let page = section::run(&host, 4).page;
        let html = renderer().render(SECTION_PAGE_TEMPLATE, &page).unwrap();
        assert!(html.contains("section-not-found"));
        assert!(!html.contains("nav-tabs"));
    }

    #[test]
    fn unknown_template_is_error() {
        let err = renderer().render("nope.html", &()).unwrap_err();
        assert!(matches!(err, MenutabError::Template(_)));
    }

    #[test]
    fn custom_templates_escape_html() {
        let mut renderer = renderer();
        renderer
            .add_template("title.html", "{{ title }}|{{ title|safe }}")
            .unwrap();
        let html = renderer
            .render("title.html", &serde_json::json!({"title": "<b>"}))
            .unwrap();
        assert_eq!(html, "&lt;b&gt;|<b>");
    }

    #[test]
    fn invalid_template_syntax_is_rejected() {
        assert!(renderer().add_template("bad.html", "{% if %}").is_err());
    }
}
