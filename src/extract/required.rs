use regex::Regex;
use std::sync::LazyLock;

use crate::extract::status::{normalize_status, NOT_TAKEN};
use crate::models::Course;

/// Marcador que abre la sección de optativas y cierra la de obligatorias
pub const ELECTIVES_MARKER: &str = "Outras disciplinas";

pub const MIN_SEMESTER: u8 = 1;
pub const MAX_SEMESTER: u8 = 10;

// 3 letras mayúsculas + 4 dígitos, p. ej. ADM1011
static CODE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").ok());

/// true si la línea (ya recortada) es un código de disciplina
pub fn is_course_code(line: &str) -> bool {
    CODE_RE.as_ref().is_some_and(|re| re.is_match(line))
}

fn is_bare_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Devuelve el semestre si la línea es sólo un entero en [1, 10]
fn semester_header(line: &str) -> Option<u8> {
    if !is_bare_number(line) {
        return None;
    }
    line.parse::<u8>()
        .ok()
        .filter(|s| (MIN_SEMESTER..=MAX_SEMESTER).contains(s))
}

/// Fin del bloque de un semestre: cualquier número suelto o el inicio de optativas
fn closes_semester(line: &str) -> bool {
    is_bare_number(line) || line.starts_with(ELECTIVES_MARKER)
}

/// Extrae las disciplinas obligatorias agrupadas por semestre.
///
/// Una línea que sólo contiene un entero entre 1 y 10 abre un semestre. Dentro
/// del bloque, cada línea con formato de código forma una disciplina con la
/// línea anterior como nombre y la siguiente como situación (`Não Cursada` si
/// no hay línea siguiente); después se saltan el código y la situación. El
/// bloque termina, sin consumirla, en la próxima línea numérica o en
/// "Outras disciplinas".
pub fn extract_required_courses(lines: &[&str]) -> Vec<Course> {
    let mut courses: Vec<Course> = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        let Some(semester) = semester_header(lines[i].trim()) else {
            i += 1;
            continue;
        };
        i += 1;

        while i < lines.len() && !closes_semester(lines[i].trim()) {
            let line = lines[i].trim();
            if !is_course_code(line) {
                i += 1;
                continue;
            }

            // i >= 1 siempre aquí: la cabecera del semestre está antes
            let name = lines[i - 1].trim().to_string();
            let status = lines
                .get(i + 1)
                .map(|s| normalize_status(s.trim()))
                .unwrap_or_else(|| NOT_TAKEN.to_string());

            courses.push(Course {
                code: line.to_string(),
                name,
                semester,
                status,
                weekday: None,
            });
            i += 2;
        }
    }

    courses
}
