use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagEnumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {path} at line {line}, column {column}: {msg}")]
    ParseError {
        path:   String,
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("enum struct tag did not contain name: {tag}")]
    MalformedTag {
        tag: String,
    },

    #[error("{type_name}.{field} at line {line}, column {column}: {source}")]
    Field {
        type_name: String,
        field:     String,
        line:      usize,
        column:    usize,
        source:    Box<TagEnumError>,
    },

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("no values defined for type {0}")]
    EmptyEnum(String),

    #[error("Verifier error: {0}")]
    VerifierError(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Format error: {0}")]
    Format(String),
}
