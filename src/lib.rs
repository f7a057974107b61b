// Biblioteca raíz del crate `historico`.
// Reexporta el motor de extracción (texto del histórico -> alumno + disciplinas)
// y el servidor HTTP que lo expone como API JSON.
pub mod models;
pub mod error;
pub mod config;
pub mod reference;
pub mod extract;
pub mod filters;
pub mod api_json;
pub mod server;

pub use config::AppConfig;
pub use error::{ConfigError, ExtractError, FilterError, ReferenceError};
pub use extract::extract;
pub use filters::{filter_courses, summarize, summarize_with_requirement, CourseFilter};
pub use models::{Advisory, Course, ElectiveCourse, ExtractionResult, StudentInfo, Summary, WeekdayMap};
pub use reference::{load_weekday_file, load_weekday_map, read_weekday_file, save_weekday_file};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
