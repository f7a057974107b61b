use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::json;
use tracing::{error, warn};

use crate::models::Advisory;
use crate::reference::{load_weekday_map, save_weekday_file};
use crate::server::AppState;

/// Tamaño máximo aceptado para el archivo de horarios subido
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Construye el nuevo mapa, lo guarda en el archivo configurado y lo publica.
/// Si el archivo no se puede escribir el mapa se publica igual (`persisted: false`).
async fn replace_reference(state: &AppState, contents: &str) -> HttpResponse {
    let map = load_weekday_map(contents);
    let entries = map.len();

    let persisted = match save_weekday_file(&state.config.weekdays_file, contents).await {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            false
        }
    };
    state.replace_weekdays(map);

    let mut body = json!({
        "status": "ok",
        "entries": entries,
        "persisted": persisted,
        "path": state.config.weekdays_file.to_string_lossy(),
    });
    if entries == 0 {
        body["advisory"] = json!(Advisory::MissingReferenceData.message());
    }
    HttpResponse::Ok().json(body)
}

/// GET /weekdays
pub async fn weekdays_get_handler(state: web::Data<AppState>) -> impl Responder {
    let map = state.weekdays();
    HttpResponse::Ok().json(json!({"entries": map.len(), "weekdays": &*map}))
}

/// PUT /weekdays
/// El cuerpo es el archivo de horarios en texto plano.
pub async fn weekdays_put_handler(state: web::Data<AppState>, body: String) -> impl Responder {
    replace_reference(&state, &body).await
}

/// POST /weekdays/upload
/// Carga multipart del archivo de horarios (.txt). Se usa el primer campo con contenido.
pub async fn weekdays_upload_handler(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let mut contents: Vec<u8> = Vec::new();

    while let Some(field_res) = payload.next().await {
        match field_res {
            Ok(mut field) => {
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => {
                            if contents.len() + bytes.len() > MAX_UPLOAD_BYTES {
                                warn!(limit = MAX_UPLOAD_BYTES, "weekday upload too large");
                                return HttpResponse::PayloadTooLarge().json(
                                    json!({"error": format!("upload exceeds {} bytes", MAX_UPLOAD_BYTES)}),
                                );
                            }
                            contents.extend_from_slice(&bytes);
                        }
                        Err(e) => {
                            warn!("upload stream error: {}", e);
                            return HttpResponse::BadRequest().json(json!({"error": format!("upload stream error: {}", e)}));
                        }
                    }
                }
                if !contents.is_empty() {
                    break;
                }
            }
            Err(e) => {
                warn!("multipart field error: {}", e);
                return HttpResponse::BadRequest().json(json!({"error": format!("multipart field error: {}", e)}));
            }
        }
    }

    if contents.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "no file content received"}));
    }

    let text = String::from_utf8_lossy(&contents);
    replace_reference(&state, &text).await
}
