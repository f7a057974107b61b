// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Datos de identificación y situación del alumno.
/// Todos los campos son opcionales en la práctica: un campo vacío o `None`
/// significa que su línea marcador no apareció en el histórico.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub registration_number: String,
    pub email: String,
    pub status: String,
    pub shift: String,
    pub course_duration_semesters: Option<u8>,
    /// Año de 4 dígitos, se guarda como texto tal cual aparece
    pub curriculum_year: Option<String>,
    pub current_period: Option<u8>,
}

/// Disciplina obligatoria, agrupada por semestre (1..=10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub semester: u8,
    pub status: String,
    pub weekday: Option<String>,
}

/// Disciplina de la sección "Outras disciplinas". No tiene semestre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveCourse {
    pub code: String,
    pub name: String,
    pub status: String,
    pub weekday: Option<String>,
}

/// Mapa código de disciplina -> día de la semana.
/// Se construye una sola vez por archivo de referencia y no se modifica después.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekdayMap {
    dias: HashMap<String, String>,
}

impl WeekdayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye el mapa a partir de pares (código, día). Si un código se repite
    /// se conserva el último.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        WeekdayMap { dias: pairs.into_iter().collect() }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.dias.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.dias.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.dias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dias.is_empty()
    }
}

/// Condición no fatal detectada durante la extracción.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Se encontró la línea marcador pero la línea siguiente no tenía el valor.
    /// `line` es 1-based.
    FieldUnparsed { line: usize, field: String },
    NoCoursesFound,
    NoElectivesFound,
    /// El mapa de días está vacío: ninguna disciplina recibió día de la semana
    MissingReferenceData,
    WeekdaysNotFound { codes: Vec<String> },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::FieldUnparsed { line, field } => {
                format!("line {}: could not read {}", line, field)
            }
            Advisory::NoCoursesFound => {
                "no required courses were extracted, check the transcript format".to_string()
            }
            Advisory::NoElectivesFound => "no elective courses were extracted".to_string(),
            Advisory::MissingReferenceData => {
                "weekday reference data is not loaded; weekdays were left empty".to_string()
            }
            Advisory::WeekdaysNotFound { codes } => {
                format!("no weekday found for {} course(s): {}", codes.len(), codes.join(", "))
            }
        }
    }
}

/// Resultado completo de una extracción. Es inmutable: cada nueva extracción
/// produce un valor nuevo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub student: StudentInfo,
    pub courses: Vec<Course>,
    pub electives: Vec<ElectiveCourse>,
    pub advisories: Vec<Advisory>,
}

/// Conteos agregados para el resumen de disciplinas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub approved: usize,
    pub not_taken: usize,
    pub electives_approved: usize,
    /// Cantidad de optativas exigidas; sólo para mostrar, no limita nada
    pub elective_requirement: usize,
}

impl Summary {
    pub fn electives_pending(&self) -> usize {
        self.elective_requirement.saturating_sub(self.electives_approved)
    }
}
