//! Orquestador de la extracción: divide el texto una vez, ejecuta los tres
//! extractores sobre las mismas líneas y une los días de la semana.

use tracing::info;

use crate::error::ExtractError;
use crate::extract::electives::extract_electives;
use crate::extract::required::extract_required_courses;
use crate::extract::student::extract_student_info;
use crate::models::{Advisory, Course, ElectiveCourse, ExtractionResult, WeekdayMap};

/// Asigna el día de la semana a cada disciplina según su código.
/// Devuelve los códigos que no están en el mapa (sin repetir, en orden).
fn join_weekdays(
    courses: &mut [Course],
    electives: &mut [ElectiveCourse],
    weekdays: &WeekdayMap,
) -> Vec<String> {
    let mut sin_dia: Vec<String> = Vec::new();
    let mut lookup = |code: &str| -> Option<String> {
        let dia = weekdays.get(code).map(str::to_string);
        if dia.is_none() && !sin_dia.iter().any(|c| c == code) {
            sin_dia.push(code.to_string());
        }
        dia
    };

    for c in courses.iter_mut() {
        c.weekday = lookup(&c.code);
    }
    for e in electives.iter_mut() {
        e.weekday = lookup(&e.code);
    }
    sin_dia
}

/// Extrae alumno, obligatorias y optativas de un histórico en texto plano.
///
/// Sólo falla si el texto está vacío. El resto de anomalías (sin obligatorias,
/// sin optativas, códigos sin día) se devuelven como `advisories` junto al
/// resultado parcial. La función no guarda estado: la misma entrada con el
/// mismo mapa produce siempre el mismo resultado.
pub fn extract(text: &str, weekdays: &WeekdayMap) -> Result<ExtractionResult, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let lines: Vec<&str> = text.split('\n').collect();

    let (student, mut advisories) = extract_student_info(&lines);
    let mut courses = extract_required_courses(&lines);
    let mut electives = extract_electives(&lines);

    if courses.is_empty() {
        advisories.push(Advisory::NoCoursesFound);
    }
    if electives.is_empty() {
        advisories.push(Advisory::NoElectivesFound);
    }

    let sin_dia = join_weekdays(&mut courses, &mut electives, weekdays);
    if weekdays.is_empty() {
        if !courses.is_empty() || !electives.is_empty() {
            advisories.push(Advisory::MissingReferenceData);
        }
    } else if !sin_dia.is_empty() {
        advisories.push(Advisory::WeekdaysNotFound { codes: sin_dia });
    }

    info!(
        lines = lines.len(),
        courses = courses.len(),
        electives = electives.len(),
        advisories = advisories.len(),
        "transcript extracted"
    );

    Ok(ExtractionResult { student, courses, electives, advisories })
}
