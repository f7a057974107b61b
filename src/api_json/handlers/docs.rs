use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ExtractRequest;

/// GET /help
pub async fn help_handler() -> impl Responder {
    // Ejemplo mínimo de histórico: perfil, un semestre y la sección de optativas
    let example = ExtractRequest {
        text: [
            "Maria da Silva",
            "maria.silva@aluno.edu.br",
            "Curso",
            "Administração - 202100012345 - Noturno",
            "1",
            "Introdução à Administração",
            "ADM1001",
            "Aprovado",
            "Outras disciplinas",
            "Economia\tECO2010\tAprovado",
        ]
        .join("\n"),
    };

    let help = json!({
        "description": "API de extracción de históricos. Cargue primero el archivo de horarios (PUT /weekdays o POST /weekdays/upload) y luego envíe el histórico a POST /extract.",
        "post_extract_example": example,
        "weekdays_format": "una fila por línea: <Código><tab o 2+ espacios><Dia da Semana>; el encabezado 'Código' se ignora",
        "course_filters": ["all", "approved", "not-taken", "even-semester-pending", "odd-semester-pending"],
        "routes": {
            "PUT /weekdays": "reemplaza el archivo de horarios (texto plano)",
            "POST /weekdays/upload": "reemplaza el archivo de horarios (multipart)",
            "GET /weekdays": "mapa código -> día vigente",
            "POST /extract?session=": "extrae y guarda el resultado de la sesión",
            "GET /student?session=": "datos del alumno",
            "GET /courses?filter=&session=": "disciplinas obligatorias filtradas",
            "GET /electives?session=": "outras disciplinas",
            "GET /summary?session=": "totales aprobadas / no cursadas / optativas"
        },
        "note": "session es opcional; sin ella se usa 'default'"
    });

    HttpResponse::Ok().json(help)
}
