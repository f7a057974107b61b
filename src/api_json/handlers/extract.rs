use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::warn;

use crate::api_json::{parse_json_input, AdvisoryDto, ExtractResponse, SessionQuery};
use crate::extract::extract;
use crate::filters::summarize_with_requirement;
use crate::server::AppState;

/// POST /extract?session=...
/// Extrae alumno y disciplinas del histórico enviado en `text` y guarda el
/// resultado para la sesión. Si no se identificó ninguna disciplina el
/// resultado no se publica y la sesión conserva el anterior.
pub async fn extract_handler(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
    body: String,
) -> impl Responder {
    let session = query.key();

    let req = match parse_json_input(&body) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let weekdays = state.weekdays();
    let result = match extract(&req.text, &weekdays) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    if result.courses.is_empty() && result.electives.is_empty() {
        warn!(session = %session, "no courses identified; keeping previous result");
        let advisories: Vec<AdvisoryDto> = result.advisories.iter().map(AdvisoryDto::from).collect();
        return HttpResponse::UnprocessableEntity().json(json!({
            "error": "no courses were identified in the transcript",
            "advisories": advisories
        }));
    }

    let summary = summarize_with_requirement(
        &result.courses,
        &result.electives,
        state.config.elective_requirement,
    );
    let stored = state.store(&session, result);

    HttpResponse::Ok().json(ExtractResponse::new(session, &stored.result, summary))
}
