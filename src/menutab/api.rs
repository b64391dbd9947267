//! # API Facade
//!
//! The API layer is a **thin facade** over the page layer. It is the single
//! entry point for producing course pages, whatever drives it (the CLI, a host
//! plugin, tests).
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the page builders in `pages/*.rs`
//! - **Renders** page data through a [`TemplateRenderer`]
//! - **Returns structured types**: page data with messages, or rendered HTML
//!   with messages
//!
//! It does no layout itself (that belongs in `tabs`, `grid` and `progress`)
//! and writes nothing to stdout or stderr.
//!
//! ## Generic Over CourseHost
//!
//! `CourseOutput<H: CourseHost, R: TemplateRenderer>`:
//! - CLI: `CourseOutput<InMemoryHost>` over a parsed snapshot file
//! - Tests: `CourseOutput<InMemoryHost>` built from fixtures
//! - Embedding hosts: their own `CourseHost` adapter and, if they want,
//!   their own template engine

use crate::error::{MenutabError, Result};
use crate::host::CourseHost;
use crate::pages::{home, section};
use crate::render::{Renderer, TemplateRenderer, HOME_PAGE_TEMPLATE, SECTION_PAGE_TEMPLATE};

pub use crate::pages::home::HomePage;
pub use crate::pages::section::{SectionPage, SectionStatus, TabView};
pub use crate::pages::{BasicData, MessageLevel, PageMessage, PageResult};

/// Rendered markup plus the messages produced while building the page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub messages: Vec<PageMessage>,
}

/// The main facade for producing course pages.
pub struct CourseOutput<H: CourseHost, R: TemplateRenderer = Renderer> {
    host: H,
    renderer: R,
}

impl<H: CourseHost> CourseOutput<H> {
    /// Facade with the bundled templates.
    pub fn new(host: H) -> Result<Self> {
        Ok(Self::with_renderer(host, Renderer::new()?))
    }
}

impl<H: CourseHost, R: TemplateRenderer> CourseOutput<H, R> {
    pub fn with_renderer(host: H, renderer: R) -> Self {
        Self { host, renderer }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn home_page(&self) -> PageResult<HomePage> {
        home::run(&self.host)
    }

    pub fn section_page(&self, number: u32) -> PageResult<SectionPage> {
        section::run(&self.host, number)
    }

    /// Markup of a single module, as the host renders it.
    pub fn module_html(&self, id: u64) -> Result<String> {
        let module = self
            .host
            .module(id)
            .ok_or(MenutabError::ModuleNotFound(id))?;
        Ok(self.host.render_module(module))
    }

    pub fn render_home(&self) -> Result<RenderedPage> {
        let result = self.home_page();
        let html = self.renderer.render(HOME_PAGE_TEMPLATE, &result.page)?;
        Ok(RenderedPage {
            html,
            messages: result.messages,
        })
    }

    pub fn render_section(&self, number: u32) -> Result<RenderedPage> {
        let result = self.section_page(number);
        let html = self.renderer.render(SECTION_PAGE_TEMPLATE, &result.page)?;
        Ok(RenderedPage {
            html,
            messages: result.messages,
        })
    }
}
