//! Vocabulario de situación de una disciplina en el histórico.
//!
//! La comparación es siempre por subcadena y sin distinguir mayúsculas, de
//! modo que "Aprovado por nota" cuenta como aprobado.

/// Etiqueta canónica para disciplinas reprobadas o no cursadas
pub const NOT_TAKEN: &str = "Não Cursada";

const APPROVED_MARKERS: [&str; 2] = ["aprovado", "dispensado"];
const NOT_TAKEN_MARKERS: [&str; 2] = ["reprovado", "não cursada"];

fn contains_any(status: &str, markers: &[&str]) -> bool {
    let lower = status.to_lowercase();
    markers.iter().any(|m| lower.contains(m))
}

/// Colapsa "Reprovado" y "Não cursada" (en cualquier capitalización) a
/// `NOT_TAKEN`; el resto pasa sin cambios.
pub fn normalize_status(raw: &str) -> String {
    if contains_any(raw, &NOT_TAKEN_MARKERS) {
        NOT_TAKEN.to_string()
    } else {
        raw.to_string()
    }
}

pub fn is_approved(status: &str) -> bool {
    contains_any(status, &APPROVED_MARKERS)
}

/// true para el estado canónico `NOT_TAKEN`
pub fn is_not_taken(status: &str) -> bool {
    status.to_lowercase().contains("não cursada")
}

/// Reprobada o no cursada, antes o después de normalizar
pub fn is_failed_or_not_taken(status: &str) -> bool {
    contains_any(status, &NOT_TAKEN_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_and_not_taken_collapse() {
        for raw in ["Reprovado", "reprovado por falta", "Não cursada", "NÃO CURSADA", "não cursada"] {
            assert_eq!(normalize_status(raw), NOT_TAKEN, "status {:?}", raw);
        }
    }

    #[test]
    fn approved_statuses_pass_through() {
        assert_eq!(normalize_status("Aprovado"), "Aprovado");
        assert_eq!(normalize_status("Dispensado"), "Dispensado");
        assert_eq!(normalize_status("Matriculado"), "Matriculado");
    }

    #[test]
    fn predicates() {
        assert!(is_approved("Aprovado"));
        assert!(is_approved("DISPENSADO"));
        assert!(!is_approved(NOT_TAKEN));
        assert!(is_not_taken(NOT_TAKEN));
        assert!(!is_not_taken("Reprovado"));
        assert!(is_failed_or_not_taken("Reprovado"));
        assert!(!is_failed_or_not_taken("Aprovado"));
    }
}
