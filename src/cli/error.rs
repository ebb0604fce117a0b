use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid --data JSON: {message}")]
    #[diagnostic(
        code(studiodesk::cli::invalid_data),
        help("Pass a camelCase JSON object, e.g. --data '{{\"name\": \"Andi\"}}'")
    )]
    InvalidData { message: String },

    #[error("Refusing to delete {entity} '{id}' without --force")]
    #[diagnostic(code(studiodesk::cli::delete_not_confirmed))]
    DeleteNotConfirmed { entity: &'static str, id: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(studiodesk::cli::output))]
    Output { message: String },
}

pub type CliResult<T> = Result<T, CliError>;
