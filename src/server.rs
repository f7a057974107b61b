use actix_web::{web, App, HttpServer};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, info};

use crate::api_json::handlers::{
    courses_handler, electives_handler, extract_handler, help_handler, student_handler,
    summary_handler, weekdays_get_handler, weekdays_put_handler, weekdays_upload_handler,
};
use crate::config::AppConfig;
use crate::models::{ExtractionResult, WeekdayMap};
use crate::reference::load_weekday_file;

/// Resultado guardado para una sesión
#[derive(Debug, Clone)]
pub struct StoredResult {
    pub result: Arc<ExtractionResult>,
    pub stored_at: DateTime<Utc>,
}

/// Estado compartido del servidor.
///
/// El mapa de días se reemplaza entero (nunca se edita en sitio) y cada
/// extracción trabaja sobre una instantánea `Arc`. Los resultados se guardan
/// por clave de sesión y sólo se publican cuando la extracción terminó. Como
/// mucho se guardan `config.max_sessions` resultados; al pasarse se descarta
/// el de `stored_at` más antiguo.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    weekdays: RwLock<Arc<WeekdayMap>>,
    sessions: Mutex<HashMap<String, StoredResult>>,
}

impl AppState {
    /// Crea el estado cargando el archivo de horarios configurado (si existe)
    pub fn new(config: AppConfig) -> Self {
        let weekdays = load_weekday_file(&config.weekdays_file);
        Self::with_weekdays(config, weekdays)
    }

    pub fn with_weekdays(config: AppConfig, weekdays: WeekdayMap) -> Self {
        AppState {
            config,
            weekdays: RwLock::new(Arc::new(weekdays)),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Instantánea del mapa de días vigente
    pub fn weekdays(&self) -> Arc<WeekdayMap> {
        let guard = self.weekdays.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    pub fn replace_weekdays(&self, map: WeekdayMap) {
        let entries = map.len();
        let mut guard = self.weekdays.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(map);
        info!(entries, "weekday reference replaced");
    }

    /// Publica el resultado de una sesión, sustituyendo el anterior
    pub fn store(&self, session: &str, result: ExtractionResult) -> StoredResult {
        let stored = StoredResult { result: Arc::new(result), stored_at: Utc::now() };
        let mut guard = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(session.to_string(), stored.clone());

        while guard.len() > self.config.max_sessions.max(1) {
            let oldest = guard
                .iter()
                .filter(|(key, _)| key.as_str() != session)
                .min_by_key(|(_, s)| s.stored_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    guard.remove(&key);
                    debug!(session = %key, "evicted oldest stored result");
                }
                None => break,
            }
        }
        stored
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn get(&self, session: &str) -> Option<StoredResult> {
        let guard = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        guard.get(session).cloned()
    }
}

/// Registra todas las rutas de la API. Se usa tanto en `run_server` como en
/// las pruebas de integración.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/help", web::get().to(help_handler))
        .route("/weekdays", web::get().to(weekdays_get_handler))
        .route("/weekdays", web::put().to(weekdays_put_handler))
        .route("/weekdays/upload", web::post().to(weekdays_upload_handler))
        .route("/extract", web::post().to(extract_handler))
        .route("/student", web::get().to(student_handler))
        .route("/courses", web::get().to(courses_handler))
        .route("/electives", web::get().to(electives_handler))
        .route("/summary", web::get().to(summary_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let state = web::Data::new(AppState::new(config));

    info!("Iniciando servidor en http://{}", bind);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind.as_str())?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estado(max_sessions: usize) -> AppState {
        let config = AppConfig { max_sessions, ..AppConfig::default() };
        AppState::with_weekdays(config, WeekdayMap::new())
    }

    #[test]
    fn store_replaces_result_of_same_session() {
        let state = estado(4);
        state.store("s1", ExtractionResult::default());
        state.store("s1", ExtractionResult::default());
        assert_eq!(state.session_count(), 1);
    }

    #[test]
    fn oldest_session_is_evicted_over_the_cap() {
        let state = estado(2);
        state.store("s0", ExtractionResult::default());
        std::thread::sleep(std::time::Duration::from_millis(2));
        state.store("s1", ExtractionResult::default());
        std::thread::sleep(std::time::Duration::from_millis(2));
        state.store("s2", ExtractionResult::default());

        assert_eq!(state.session_count(), 2);
        assert!(state.get("s0").is_none());
        assert!(state.get("s1").is_some());
        assert!(state.get("s2").is_some());
    }

    #[test]
    fn many_sessions_stay_bounded() {
        let state = estado(8);
        for i in 0..100 {
            state.store(&format!("s{}", i), ExtractionResult::default());
        }
        assert_eq!(state.session_count(), 8);
        assert!(state.get("s99").is_some());
    }
}
