use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrgmapError>;

#[derive(Error, Debug)]
pub enum OrgmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git error: {0}")]
    Git(String),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Ignore pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Color config error: {0}")]
    ColorConfig(String),
}
