use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::WeekdayMap;

/// Etiqueta de la primera columna; una fila con este valor es el encabezado
const CODE_COLUMN_LABEL: &str = "Código";

// tab o 2+ espacios entre columnas
static COLUMN_SEPARATOR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s{2,}|\t").ok());

/// Separa una línea del archivo de referencia en (código, día).
/// Devuelve `None` si la línea no tiene exactamente dos campos no vacíos.
fn parse_row(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let sep = COLUMN_SEPARATOR.as_ref()?;
    let campos: Vec<&str> = sep.split(line).map(str::trim).collect();
    match campos.as_slice() {
        [codigo, dia] if !codigo.is_empty() && !dia.is_empty() => {
            Some((codigo.to_string(), dia.to_string()))
        }
        _ => None,
    }
}

/// Construye el `WeekdayMap` a partir del contenido del archivo de horarios.
///
/// Formato esperado, una fila por línea:
/// `<Código><tab o 2+ espacios><Dia da Semana>`. Las filas mal formadas se
/// descartan en silencio y el encabezado `Código ...` se ignora. Si un código
/// aparece más de una vez gana la última fila.
pub fn load_weekday_map(text: &str) -> WeekdayMap {
    let mut descartadas = 0usize;
    let pairs: Vec<(String, String)> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| {
            let row = parse_row(l);
            if row.is_none() {
                descartadas += 1;
            }
            row
        })
        .filter(|(codigo, _)| codigo != CODE_COLUMN_LABEL)
        .collect();

    let map = WeekdayMap::from_pairs(pairs);
    debug!(entries = map.len(), skipped = descartadas, "weekday reference parsed");
    map
}
