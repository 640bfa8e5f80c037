use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchoolDeskError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error in {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
