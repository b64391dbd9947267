use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered page markup
    Html,
    /// The template context as pretty JSON
    Json,
    /// A terminal sketch of the page
    Preview,
}

#[derive(Parser, Debug)]
#[command(name = "menutab", bin_name = "menutab", version)]
#[command(about = "Render tabbed course pages from a course snapshot", long_about = None)]
pub struct Cli {
    /// Course snapshot (JSON) to render
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding a config.json with format options, overriding the snapshot's
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Html,
        global = true,
        help_heading = "Options"
    )]
    pub format: OutputFormat,

    /// Disable colors in preview output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Render the course home page: section zero and the card grid
    Home,

    /// Render one section, split into tabs
    #[command(alias = "s")]
    Section {
        /// Section number
        number: u32,

        /// Fail instead of rendering a placeholder when the section does not exist
        #[arg(long)]
        strict: bool,
    },
}
