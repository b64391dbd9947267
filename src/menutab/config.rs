use crate::error::{MenutabError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_IMAGE_BASE_URL: &str = "/course/format/menutab/images";

/// Site palette offered for tab backgrounds, one `#hex|Name` entry per line.
pub const DEFAULT_PALETTE: &str =
    "#1b4c88|Dark Blue\n#af0d1a|Dark Red\n#339999|Teal\n#ffcc00|Yellow\n#993366|Plum\n#00a057|Green";

/// Per-course format options, stored in config.json.
///
/// Every field has a default so a partial (or missing) file is always valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatOptions {
    /// Cards per row on the course home page.
    pub numcolumns: usize,
    /// Let the last row's cards fill the remaining columns.
    pub stretch_columns: bool,
    /// Show a progress indicator on each card.
    pub print_progress: bool,
    /// Show the course-wide progress donut on the start bar.
    pub print_overall_progress: bool,
    pub print_start_button: bool,
    /// Whether section zero starts collapsed.
    pub collapsed: bool,
    /// Use the rotating default image when a summary has none.
    pub print_default_section_image: bool,
    pub use_image_css: bool,
    pub print_section_number: bool,
    /// Section ordinal that is labelled "1" on the cards.
    pub start_section_number: u32,
    pub show_summary: bool,
    pub hidden_sections_in_container: bool,
    pub course_title_show: bool,
    pub course_title_position: String,
    pub course_title_color: String,
    pub darken_background_image: bool,
    /// One of the `palette` colors.
    pub section_zero_background_color: String,
    pub section_number_text_color: String,
    /// One of the `palette` colors.
    pub tab_background_color: String,
    pub tab_text_color: String,
    pub use_edit_mode_reminder: bool,
    pub enable_linebreak_filter: bool,
    pub custom_css: String,
    /// Where the default card images `0.png` .. `6.png` are served from.
    pub image_base_url: String,
    /// Site-wide background choices, see [`parse_palette`].
    pub palette: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            numcolumns: 3,
            stretch_columns: false,
            print_progress: false,
            print_overall_progress: false,
            print_start_button: true,
            collapsed: true,
            print_default_section_image: true,
            use_image_css: true,
            print_section_number: true,
            start_section_number: 1,
            show_summary: false,
            hidden_sections_in_container: false,
            course_title_show: true,
            course_title_position: "middle-center".to_string(),
            course_title_color: "#000000".to_string(),
            darken_background_image: false,
            section_zero_background_color: "#1b4c88".to_string(),
            section_number_text_color: "#ffffff".to_string(),
            tab_background_color: "#1b4c88".to_string(),
            tab_text_color: "#ffffff".to_string(),
            use_edit_mode_reminder: true,
            enable_linebreak_filter: false,
            custom_css: String::new(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            palette: DEFAULT_PALETTE.to_string(),
        }
    }
}

impl FormatOptions {
    /// Load options from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MenutabError::Io)?;
        let options: FormatOptions =
            serde_json::from_str(&content).map_err(MenutabError::Serialization)?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MenutabError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MenutabError::Serialization)?;
        fs::write(config_path, content).map_err(MenutabError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.numcolumns == 0 {
            return Err(MenutabError::Config(
                "numcolumns must be at least 1".to_string(),
            ));
        }

        let palette = parse_palette(&self.palette);
        for (option, value) in [
            ("tab_background_color", &self.tab_background_color),
            (
                "section_zero_background_color",
                &self.section_zero_background_color,
            ),
        ] {
            if !palette.iter().any(|c| c.hex.eq_ignore_ascii_case(value)) {
                return Err(MenutabError::Config(format!(
                    "{} {} is not in the site palette",
                    option, value
                )));
            }
        }
        Ok(())
    }

    /// Palette name of the tab background, if it has one.
    pub fn tab_background_name(&self) -> Option<String> {
        parse_palette(&self.palette)
            .into_iter()
            .find(|c| c.hex.eq_ignore_ascii_case(&self.tab_background_color))
            .map(|c| c.name)
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            columns: self.numcolumns.max(1),
            show_progress: self.print_progress,
            stretch_columns: self.stretch_columns,
            print_section_number: self.print_section_number,
            start_section_number: self.start_section_number,
            default_images: self.print_default_section_image,
            linebreak_filter: self.enable_linebreak_filter,
            image_base_url: self.image_base_url.clone(),
        }
    }
}

/// The subset of options the card grid needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub columns: usize,
    pub show_progress: bool,
    pub stretch_columns: bool,
    pub print_section_number: bool,
    pub start_section_number: u32,
    pub default_images: bool,
    pub linebreak_filter: bool,
    pub image_base_url: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        FormatOptions::default().grid_options()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub hex: String,
    pub name: String,
}

/// Parses the admin palette setting. Lines that are not `#hex|Name` are skipped.
pub fn parse_palette(text: &str) -> Vec<PaletteColor> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let parsed = line.split_once('|').and_then(|(hex, name)| {
                let hex = hex.trim();
                let name = name.trim();
                let valid = hex.len() > 1
                    && hex.starts_with('#')
                    && hex[1..].chars().all(|c| c.is_ascii_hexdigit())
                    && !name.is_empty();
                valid.then(|| PaletteColor {
                    hex: hex.to_string(),
                    name: name.to_string(),
                })
            });
            if parsed.is_none() {
                debug!(line, "skipping malformed palette entry");
            }
            parsed
        })
        .collect()
}
