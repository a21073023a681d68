//! Module containing the `shadergen` universal error type
use thiserror::Error;

/// Universal error type for `shadergen`
#[derive(Error, Debug)]
pub enum Error {
    /// A name is not a valid C identifier
    #[error("shader `{shader}`: {kind} `{name}` is not a valid C identifier")]
    BadIdentifier {
        /// Shader in which the name appears
        shader: String,
        /// What the name was used for (e.g. "attribute")
        kind: &'static str,
        /// The offending name
        name: String,
    },

    /// Two handles in one shader would share a struct field
    #[error("shader `{shader}`: field `{field}` is declared more than once")]
    DuplicateField {
        /// Shader containing the duplicate
        shader: String,
        /// Name of the duplicated field
        field: String,
    },

    /// A subroutine group lists the same handle twice
    #[error(
        "shader `{shader}`: subroutine group `{group}` declares \
         `{variant}` more than once"
    )]
    DuplicateVariant {
        /// Shader containing the group
        shader: String,
        /// Subroutine group containing the duplicate
        group: String,
        /// Name of the duplicated variant
        variant: String,
    },

    /// Two shaders in the catalog have the same name
    #[error("shader `{0}` is declared more than once")]
    DuplicateShader(String),

    /// A shader has an empty source path
    #[error("shader `{shader}`: {stage} source path is empty")]
    EmptyPath {
        /// Shader with the missing path
        shader: String,
        /// Which stage's path is empty
        stage: &'static str,
    },

    /// The catalog has no shaders
    #[error("catalog is empty")]
    EmptyCatalog,

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
