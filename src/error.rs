#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No sort strategy configured")]
    NoStrategy,

    #[error("Config: {0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
