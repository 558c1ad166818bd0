use thiserror::Error;

#[derive(Error, Debug)]
pub enum Er2SqlError {
    #[error("io error: `{0}`")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse model: `{0}`")]
    ModelParseError(#[from] serde_json::Error),

    #[error("The catalog does not contain any schemas")]
    NoSchema,

    #[error("No table named '{0}' exists in the schema")]
    UnknownTable(String),

    #[error("Unknown datatype '{0}'")]
    UnknownDatatype(String),

    #[error("Malformed type definition '{0}'")]
    MalformedTypeDefinition(String),

    #[error("The comment for column '{column}' could not be re-encoded: {reason}")]
    InvalidCommentEncoding {
        column: String,
        reason: String,
    },
}

pub type Result<T = ()> = std::result::Result<T, Er2SqlError>;
