use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::{session_key, CoursesQuery, SessionQuery, SummaryDto};
use crate::filters::{filter_courses, summarize_with_requirement, CourseFilter};
use crate::server::{AppState, StoredResult};

fn not_found(session: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": format!("no extraction stored for session '{}'", session)}))
}

fn stored_or_404(state: &AppState, session: &str) -> Result<StoredResult, HttpResponse> {
    state.get(session).ok_or_else(|| not_found(session))
}

/// GET /student?session=...
pub async fn student_handler(state: web::Data<AppState>, query: web::Query<SessionQuery>) -> impl Responder {
    let session = query.key();
    match stored_or_404(&state, &session) {
        Ok(stored) => HttpResponse::Ok().json(json!({
            "session": session,
            "stored_at": stored.stored_at,
            "student": stored.result.student
        })),
        Err(resp) => resp,
    }
}

/// GET /courses?filter=...&session=...
/// `filter`: all | approved | not-taken | even-semester-pending | odd-semester-pending
pub async fn courses_handler(state: web::Data<AppState>, query: web::Query<CoursesQuery>) -> impl Responder {
    let session = session_key(query.session.as_deref());
    let filter = match query.filter.as_deref().unwrap_or("all").parse::<CourseFilter>() {
        Ok(f) => f,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match stored_or_404(&state, &session) {
        Ok(stored) => {
            let cursos = filter_courses(&stored.result.courses, filter);
            HttpResponse::Ok().json(json!({
                "session": session,
                "filter": filter.as_str(),
                "total": cursos.len(),
                "courses": cursos
            }))
        }
        Err(resp) => resp,
    }
}

/// GET /electives?session=...
pub async fn electives_handler(state: web::Data<AppState>, query: web::Query<SessionQuery>) -> impl Responder {
    let session = query.key();
    match stored_or_404(&state, &session) {
        Ok(stored) => HttpResponse::Ok().json(json!({
            "session": session,
            "total": stored.result.electives.len(),
            "electives": stored.result.electives
        })),
        Err(resp) => resp,
    }
}

/// GET /summary?session=...
pub async fn summary_handler(state: web::Data<AppState>, query: web::Query<SessionQuery>) -> impl Responder {
    let session = query.key();
    match stored_or_404(&state, &session) {
        Ok(stored) => {
            let summary = summarize_with_requirement(
                &stored.result.courses,
                &stored.result.electives,
                state.config.elective_requirement,
            );
            HttpResponse::Ok().json(json!({
                "session": session,
                "summary": SummaryDto::from(summary)
            }))
        }
        Err(resp) => resp,
    }
}
