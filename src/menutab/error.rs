use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenutabError {
    #[error("Section not found: {0}")]
    SectionNotFound(u32),

    #[error("Course module not found: {0}")]
    ModuleNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MenutabError>;
