// Motor de extracción del histórico.
// Cada extractor es una función pura sobre el mismo slice de líneas; el
// controlador los compone y une los días de la semana.
pub mod status;
pub mod student;
pub mod required;
pub mod electives;
pub mod controller;

// Reexportar la API pública del motor
pub use controller::extract;
pub use electives::extract_electives;
pub use required::{extract_required_courses, is_course_code, ELECTIVES_MARKER};
pub use status::{normalize_status, NOT_TAKEN};
pub use student::extract_student_info;
