use std::fs;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::error::ReferenceError;
use crate::models::WeekdayMap;
use crate::reference::weekdays::load_weekday_map;

/// Lee el archivo de horarios y construye el mapa. Falla si el archivo no se
/// puede leer o no contiene ninguna fila válida.
pub fn read_weekday_file<P: AsRef<Path>>(path: P) -> Result<WeekdayMap, ReferenceError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let map = load_weekday_map(&contents);
    if map.is_empty() {
        return Err(ReferenceError::Empty(path.to_path_buf()));
    }
    Ok(map)
}

/// Versión tolerante de `read_weekday_file`: si el archivo falta, no se puede
/// leer o está vacío devuelve un mapa vacío y sólo deja un aviso en el log.
/// Los días de la semana son opcionales para el resto del flujo.
pub fn load_weekday_file<P: AsRef<Path>>(path: P) -> WeekdayMap {
    let path = path.as_ref();
    match read_weekday_file(path) {
        Ok(map) => {
            info!(path = %path.display(), entries = map.len(), "weekday reference loaded");
            map
        }
        Err(e) => {
            warn!("{}; continuing without weekday data", e);
            WeekdayMap::new()
        }
    }
}

/// Guarda el contenido del archivo de horarios en `path`, creando el
/// directorio si no existe. Sobrescribe el archivo anterior.
pub async fn save_weekday_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ReferenceError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ReferenceError::Io { path: path.to_path_buf(), source };

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await.map_err(io_err)?;
        }
    }
    let mut f = tokio::fs::File::create(path).await.map_err(io_err)?;
    f.write_all(contents.as_bytes()).await.map_err(io_err)?;
    f.flush().await.map_err(io_err)?;
    info!(path = %path.display(), bytes = contents.len(), "weekday reference saved");
    Ok(())
}
