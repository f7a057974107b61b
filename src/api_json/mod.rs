use serde::{Deserialize, Serialize};

use crate::models::{Advisory, Course, ElectiveCourse, ExtractionResult, StudentInfo, Summary};

pub mod handlers;

/// Clave de sesión usada cuando el cliente no envía `session`
pub const DEFAULT_SESSION: &str = "default";

/// Cuerpo de `POST /extract`
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "text": "Maria da Silva\nmaria@aluno.edu.br\n...\n1\nGestão\nADM1011\nAprovado\n..."
/// }
/// ```
///
/// # Campos:
/// - `text`: histórico completo copiado del sistema académico (requerido)
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

pub fn parse_json_input(json_str: &str) -> Result<ExtractRequest, serde_json::Error> {
    serde_json::from_str::<ExtractRequest>(json_str)
}

/// Query string común: `?session=...`
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session: Option<String>,
}

impl SessionQuery {
    pub fn key(&self) -> String {
        session_key(self.session.as_deref())
    }
}

/// Query de `GET /courses`: `?filter=...&session=...`
#[derive(Debug, Default, Deserialize)]
pub struct CoursesQuery {
    pub filter: Option<String>,
    pub session: Option<String>,
}

/// Normaliza la clave de sesión; vacía o ausente -> `DEFAULT_SESSION`
pub fn session_key(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SESSION.to_string(),
    }
}

/// Aviso con su mensaje legible para el cliente
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryDto {
    #[serde(flatten)]
    pub advisory: Advisory,
    pub message: String,
}

impl From<&Advisory> for AdvisoryDto {
    fn from(a: &Advisory) -> Self {
        AdvisoryDto { advisory: a.clone(), message: a.message() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    pub approved: usize,
    pub not_taken: usize,
    pub electives_approved: usize,
    pub elective_requirement: usize,
    pub electives_pending: usize,
}

impl From<Summary> for SummaryDto {
    fn from(s: Summary) -> Self {
        SummaryDto {
            approved: s.approved,
            not_taken: s.not_taken,
            electives_approved: s.electives_approved,
            elective_requirement: s.elective_requirement,
            electives_pending: s.electives_pending(),
        }
    }
}

/// Respuesta de `POST /extract`
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub session: String,
    pub student: StudentInfo,
    pub courses: Vec<Course>,
    pub electives: Vec<ElectiveCourse>,
    pub advisories: Vec<AdvisoryDto>,
    pub summary: SummaryDto,
}

impl ExtractResponse {
    pub fn new(session: String, result: &ExtractionResult, summary: Summary) -> Self {
        ExtractResponse {
            session,
            student: result.student.clone(),
            courses: result.courses.clone(),
            electives: result.electives.clone(),
            advisories: result.advisories.iter().map(AdvisoryDto::from).collect(),
            summary: summary.into(),
        }
    }
}
