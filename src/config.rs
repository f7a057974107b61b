//! Configuración del servicio leída desde variables de entorno (y `.env`).
//!
//! Variables:
//! - `HISTORICO_BIND`: dirección de escucha del servidor HTTP
//! - `HISTORICO_WEEKDAYS_FILE`: archivo de referencia código -> día de la semana
//! - `HISTORICO_ELECTIVE_REQUIREMENT`: optativas exigidas (sólo para el resumen)
//! - `HISTORICO_MAX_SESSIONS`: resultados guardados a la vez antes de descartar el más antiguo

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::filters::DEFAULT_ELECTIVE_REQUIREMENT;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Ruta por defecto del archivo de horarios (relativa al directorio de trabajo)
pub const DEFAULT_WEEKDAYS_FILE: &str = "data/h20251.txt";

pub const DEFAULT_MAX_SESSIONS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: String,
    pub weekdays_file: PathBuf,
    pub elective_requirement: usize,
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.to_string(),
            weekdays_file: PathBuf::from(DEFAULT_WEEKDAYS_FILE),
            elective_requirement: DEFAULT_ELECTIVE_REQUIREMENT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso, cargando antes `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Versión parametrizable para pruebas: `lookup` devuelve el valor de una
    /// variable o `None` si no está definida.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        // valores vacíos cuentan como no definidos
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(bind) = get("HISTORICO_BIND") {
            cfg.bind = bind;
        }
        if let Some(path) = get("HISTORICO_WEEKDAYS_FILE") {
            cfg.weekdays_file = PathBuf::from(path);
        }
        if let Some(raw) = get("HISTORICO_ELECTIVE_REQUIREMENT") {
            cfg.elective_requirement = raw.parse::<usize>().map_err(|_| ConfigError::Invalid {
                key: "HISTORICO_ELECTIVE_REQUIREMENT".to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = get("HISTORICO_MAX_SESSIONS") {
            cfg.max_sessions = raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "HISTORICO_MAX_SESSIONS".to_string(),
                    value: raw.clone(),
                })?;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.weekdays_file, PathBuf::from("data/h20251.txt"));
        assert_eq!(cfg.elective_requirement, 5);
    }

    #[test]
    fn overrides_from_environment() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HISTORICO_BIND", "0.0.0.0:9000"),
            ("HISTORICO_WEEKDAYS_FILE", "/tmp/horarios.txt"),
            ("HISTORICO_ELECTIVE_REQUIREMENT", " 3 "),
            ("HISTORICO_MAX_SESSIONS", "10"),
        ]))
        .unwrap();
        assert_eq!(cfg.max_sessions, 10);
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.weekdays_file, PathBuf::from("/tmp/horarios.txt"));
        assert_eq!(cfg.elective_requirement, 3);
    }

    #[test]
    fn rejects_non_numeric_requirement() {
        let err = AppConfig::from_lookup(lookup_from(&[("HISTORICO_ELECTIVE_REQUIREMENT", "cinco")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "HISTORICO_ELECTIVE_REQUIREMENT".to_string(),
                value: "cinco".to_string()
            }
        );
    }

    #[test]
    fn rejects_zero_max_sessions() {
        let err = AppConfig::from_lookup(lookup_from(&[("HISTORICO_MAX_SESSIONS", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { key: "HISTORICO_MAX_SESSIONS".to_string(), value: "0".to_string() }
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("HISTORICO_BIND", "   ")])).unwrap();
        assert_eq!(cfg.bind, DEFAULT_BIND);
    }
}
