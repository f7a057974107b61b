use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{Advisory, StudentInfo};

// Marcadores del histórico (líneas etiqueta seguidas de la línea valor)
const STATUS_LABEL: &str = "Situação atual";
const COURSE_LABEL: &str = "Curso";
const DURATION_LABEL: &str = "Tempo de curso em semestre";
const CURRICULUM_LABEL: &str = "Ano currículo";
const PERIOD_LABEL: &str = "Período Atual";

/// Nombre del programa usado en la etiqueta de turno
const PROGRAM_NAME: &str = "Administração";

static REGISTRATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{9,}").ok());
static DURATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{1,2}").ok());
static YEAR_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{4}").ok());
static PERIOD_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d{1,2}$").ok());

fn first_match<'a>(re: &LazyLock<Option<Regex>>, text: &'a str) -> Option<&'a str> {
    re.as_ref()?.find(text).map(|m| m.as_str())
}

fn shift_label(course_line: &str) -> Option<String> {
    if course_line.contains("Noturno") {
        Some(format!("{} - Noturno", PROGRAM_NAME))
    } else if course_line.contains("Diurno") {
        Some(format!("{} - Diurno", PROGRAM_NAME))
    } else {
        None
    }
}

/// "Situação atual Ativo (desde 2021)" -> "Ativo"
fn status_text(line: &str) -> String {
    let antes_parentesis = line.split('(').next().unwrap_or(line);
    antes_parentesis.replace(STATUS_LABEL, "").trim().to_string()
}

/// Extrae los datos del alumno en una sola pasada hacia adelante.
///
/// Cada línea se compara con las reglas en orden de prioridad y sólo se aplica
/// la primera que coincide. Las reglas basadas en etiqueta leen el valor de la
/// línea siguiente; si el valor no aparece el campo queda vacío y se registra
/// un `Advisory::FieldUnparsed` con el número (1-based) de la línea etiqueta.
/// Si un marcador aparece varias veces gana la última ocurrencia.
pub fn extract_student_info(lines: &[&str]) -> (StudentInfo, Vec<Advisory>) {
    let mut info = StudentInfo::default();
    let mut avisos: Vec<Advisory> = Vec::new();

    let mut no_leido = |idx: usize, field: &str, line: &str| {
        debug!(line = idx + 1, field, text = line, "student field not found after label");
        avisos.push(Advisory::FieldUnparsed { line: idx + 1, field: field.to_string() });
    };

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let siguiente = lines.get(i + 1).map(|l| l.trim());

        if line.contains('@') {
            info.email = line.to_string();
            if let Some(prev) = i.checked_sub(1).and_then(|p| lines.get(p)) {
                info.name = prev.trim().to_string();
            }
        } else if line.contains(STATUS_LABEL) {
            info.status = status_text(line);
        } else if line.contains(COURSE_LABEL) {
            match siguiente.and_then(|s| first_match(&REGISTRATION_RE, s)) {
                Some(matricula) => info.registration_number = matricula.to_string(),
                None => no_leido(i, "registration_number", line),
            }
            if let Some(turno) = siguiente.and_then(shift_label) {
                info.shift = turno;
            }
        } else if line.contains(DURATION_LABEL) {
            match siguiente
                .and_then(|s| first_match(&DURATION_RE, s))
                .and_then(|d| d.parse::<u8>().ok())
            {
                Some(semestres) => info.course_duration_semesters = Some(semestres),
                None => no_leido(i, "course_duration_semesters", line),
            }
        } else if line.contains(CURRICULUM_LABEL) {
            match siguiente.and_then(|s| first_match(&YEAR_RE, s)) {
                Some(anio) => info.curriculum_year = Some(anio.to_string()),
                None => no_leido(i, "curriculum_year", line),
            }
        } else if line.contains(PERIOD_LABEL) {
            match siguiente
                .and_then(|s| first_match(&PERIOD_RE, s))
                .and_then(|p| p.parse::<u8>().ok())
            {
                Some(periodo) => info.current_period = Some(periodo),
                None => no_leido(i, "current_period", line),
            }
        }
    }

    (info, avisos)
}
