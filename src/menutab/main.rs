use clap::Parser;
use console::Term;
use menutab::api::CourseOutput;
use menutab::config::FormatOptions;
use menutab::error::Result;
use menutab::host::memory::InMemoryHost;
use menutab::host::CourseHost;
use menutab::host::snapshot::load_snapshot;
use tracing::{debug, info};

mod args;
mod cli;

use args::{Cli, Commands, OutputFormat};
use cli::logging::{init_logging, LogConfig};
use cli::preview::{render_home_preview, render_section_preview};
use cli::print_messages;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CourseOutput<InMemoryHost>,
    format: OutputFormat,
    use_color: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_ansi(!cli.no_color && Term::stderr().features().colors_supported()),
    );

    let ctx = init_context(&cli, use_color)?;
    match cli.command {
        Commands::Home => handle_home(&ctx),
        Commands::Section { number, strict } => handle_section(&ctx, number, strict),
    }
}

fn init_context(cli: &Cli, use_color: bool) -> Result<AppContext> {
    let mut host = load_snapshot(&cli.snapshot)?;
    info!(
        course = host.course().id,
        sections = host.section_count(),
        "loaded course snapshot"
    );

    if let Some(dir) = &cli.config {
        debug!(dir = %dir.display(), "loading format options");
        host.course_mut().options = FormatOptions::load(dir)?;
    }

    Ok(AppContext {
        api: CourseOutput::new(host)?,
        format: cli.format,
        use_color,
    })
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Html => {
            let page = ctx.api.render_home()?;
            print_messages(&page.messages, ctx.use_color);
            println!("{}", page.html);
        }
        OutputFormat::Json => {
            let result = ctx.api.home_page();
            print_messages(&result.messages, ctx.use_color);
            println!("{}", serde_json::to_string_pretty(&result.page)?);
        }
        OutputFormat::Preview => {
            let result = ctx.api.home_page();
            print_messages(&result.messages, ctx.use_color);
            print!("{}", render_home_preview(&result.page, ctx.use_color)?);
        }
    }
    Ok(())
}

fn handle_section(ctx: &AppContext, number: u32, strict: bool) -> Result<()> {
    if strict {
        ctx.api.section_page(number).page.require_found()?;
    }
    match ctx.format {
        OutputFormat::Html => {
            let page = ctx.api.render_section(number)?;
            print_messages(&page.messages, ctx.use_color);
            println!("{}", page.html);
        }
        OutputFormat::Json => {
            let result = ctx.api.section_page(number);
            print_messages(&result.messages, ctx.use_color);
            println!("{}", serde_json::to_string_pretty(&result.page)?);
        }
        OutputFormat::Preview => {
            let result = ctx.api.section_page(number);
            print_messages(&result.messages, ctx.use_color);
            print!("{}", render_section_preview(&result.page, ctx.use_color)?);
        }
    }
    Ok(())
}
