use crate::extract::required::ELECTIVES_MARKER;
use crate::models::ElectiveCourse;

/// Parsea una fila "Nombre\tCódigo\tSituación"; cualquier otra forma se descarta
fn parse_elective_row(line: &str) -> Option<ElectiveCourse> {
    let partes: Vec<&str> = line.split('\t').collect();
    match partes.as_slice() {
        [name, code, status] => Some(ElectiveCourse {
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            status: status.trim().to_string(),
            weekday: None,
        }),
        _ => None,
    }
}

/// Extrae las optativas de la sección "Outras disciplinas".
///
/// Tras cada línea marcador se consumen las líneas no vacías siguientes, cada
/// una separada por tabulaciones en exactamente tres campos (nombre, código,
/// situación). El bloque termina en la primera línea vacía; si el marcador
/// vuelve a aparecer más adelante se abre otro bloque.
pub fn extract_electives(lines: &[&str]) -> Vec<ElectiveCourse> {
    let mut electives: Vec<ElectiveCourse> = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        if !lines[i].contains(ELECTIVES_MARKER) {
            i += 1;
            continue;
        }
        i += 1;
        while i < lines.len() && !lines[i].trim().is_empty() {
            if let Some(e) = parse_elective_row(lines[i].trim()) {
                electives.push(e);
            }
            i += 1;
        }
    }

    electives
}
