//! Tipos de error del crate.
//!
//! Sólo las condiciones que abortan una operación son errores; lo que ocurre
//! línea a línea durante la extracción se reporta como `Advisory`.

use std::path::PathBuf;
use thiserror::Error;

/// Errores del orquestador de extracción
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// El texto del histórico está vacío o sólo tiene espacios
    #[error("no transcript data was provided")]
    EmptyInput,
}

/// Errores al acceder al archivo de referencia de días de la semana
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("failed to access reference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// El archivo existe pero no contiene ninguna fila válida
    #[error("reference file '{0}' has no code/weekday rows")]
    Empty(PathBuf),
}

/// Selector de filtro desconocido
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter '{0}' (expected all, approved, not-taken, even-semester-pending or odd-semester-pending)")]
    UnknownSelector(String),
}

/// Valor de configuración inválido en el entorno
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: String, value: String },
}
