use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown token class: {value}")]
    UnknownTokenClass { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
