//! Archivo de referencia de horarios: código de disciplina -> día de la semana.
//!
//! Submódulos:
//! - `weekdays`: parseo del texto de dos columnas a `WeekdayMap`
//! - `io`: lectura y escritura del archivo en disco

/// Parseo del archivo de dos columnas: `load_weekday_map`
mod weekdays;

/// Lectura/escritura en disco: `read_weekday_file`, `load_weekday_file`, `save_weekday_file`
mod io;

pub use weekdays::load_weekday_map;
pub use io::{load_weekday_file, read_weekday_file, save_weekday_file};
