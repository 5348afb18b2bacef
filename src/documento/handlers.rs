//! Capture endpoints for the catalog documents.
//!
//! Every POST follows the same flow the capture screens expect: validate the
//! whole submission, persist parent and children atomically, remember the
//! fresh document as the session's pending download, and answer with the id
//! and download URL. The pending marker is consumed exactly once via
//! `GET /api/descargas/pendiente`.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::middleware::claims_opcionales;
use crate::db::AppState;
use crate::documento::models::{
    CrearCriteriosRequest, CrearCvRequest, CrearDiagnosticoRequest, CrearEncuestaRequest,
    CrearFichaRequest, CrearInscripcionRequest, CrearProgramaRequest,
};
use crate::documento::validators::Validador;
use crate::documento::{DescargaPendiente, DocTipo};
use crate::{ErrorResponse, ValidationErrorResponse};

/// Session key for the pending-download store: the authenticated username
/// when a bearer token is present, else the client-supplied session header.
pub fn clave_sesion(req: &HttpRequest) -> Option<String> {
    if let Some(claims) = claims_opcionales(req) {
        return Some(format!("usuario:{}", claims.username));
    }

    req.headers()
        .get("X-Client-Session")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("sesion:{s}"))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentoCreadoResponse {
    pub id: i64,
    pub descarga: DescargaPendiente,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DescargaPendienteResponse {
    pub descarga: Option<DescargaPendiente>,
}

async fn responder_creado(
    req: &HttpRequest,
    state: &AppState,
    tipo: DocTipo,
    id: i64,
    message: &str,
) -> HttpResponse {
    let descarga = DescargaPendiente::new(tipo, id);
    if let Some(clave) = clave_sesion(req) {
        state.guardar_descarga(&clave, descarga.clone()).await;
    }

    HttpResponse::Created().json(DocumentoCreadoResponse {
        id,
        descarga,
        message: message.to_string(),
    })
}

fn responder_invalido(errors: crate::validation::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ValidationErrorResponse::new(
        "Formulario incompleto. Revisa los campos marcados.",
        errors,
    ))
}

fn responder_error_db(contexto: &str, e: sqlx::Error) -> HttpResponse {
    log::error!("Error al guardar {contexto}: {e:?}");
    HttpResponse::InternalServerError()
        .json(ErrorResponse::internal_error("No se pudo guardar el documento"))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/inscripcion",
    request_body = CrearInscripcionRequest,
    responses(
        (status = 201, description = "Inscripción guardada", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_inscripcion(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearInscripcionRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_inscripcion(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Inscripcion,
                id,
                "Inscripción guardada exitosamente.",
            )
            .await
        }
        Err(e) => responder_error_db("inscripción", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/ficha",
    request_body = CrearFichaRequest,
    responses(
        (status = 201, description = "Ficha técnica guardada", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_ficha(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearFichaRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_ficha(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Ficha,
                id,
                "Ficha Técnica guardada exitosamente.",
            )
            .await
        }
        Err(e) => responder_error_db("ficha técnica", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/criterios",
    request_body = CrearCriteriosRequest,
    responses(
        (status = 201, description = "Criterios guardados", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_criterios(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearCriteriosRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_criterios(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Criterios,
                id,
                "Criterios guardados exitosamente.",
            )
            .await
        }
        Err(e) => responder_error_db("criterios de selección", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/encuesta",
    request_body = CrearEncuestaRequest,
    responses(
        (status = 201, description = "Encuesta enviada", body = DocumentoCreadoResponse),
        (status = 400, description = "Encuesta incompleta", body = ValidationErrorResponse)
    )
)]
pub async fn crear_encuesta(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearEncuestaRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_encuesta(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Encuesta,
                id,
                "Encuesta enviada correctamente.",
            )
            .await
        }
        Err(e) => responder_error_db("encuesta", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/programa",
    request_body = CrearProgramaRequest,
    responses(
        (status = 201, description = "Programa guardado", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_programa(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearProgramaRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_programa(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Programa,
                id,
                "Programa guardado exitosamente.",
            )
            .await
        }
        Err(e) => responder_error_db("programa institucional", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/diagnostico",
    request_body = CrearDiagnosticoRequest,
    responses(
        (status = 201, description = "Diagnóstico guardado", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_diagnostico(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearDiagnosticoRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_diagnostico(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Diagnostico,
                id,
                "Diagnóstico guardado exitosamente.",
            )
            .await
        }
        Err(e) => responder_error_db("diagnóstico", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/cv",
    request_body = CrearCvRequest,
    responses(
        (status = 201, description = "Currículum guardado", body = DocumentoCreadoResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse)
    )
)]
pub async fn crear_cv(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearCvRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return responder_invalido(errors);
    }

    match state.crear_cv(&body).await {
        Ok(id) => {
            responder_creado(
                &req,
                &state,
                DocTipo::Cv,
                id,
                "Curriculum guardado correctamente.",
            )
            .await
        }
        Err(e) => responder_error_db("currículum", e),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    get,
    path = "/descargas/pendiente",
    responses(
        (status = 200, description = "Marcador de descarga, consumido al leerlo", body = DescargaPendienteResponse)
    )
)]
pub async fn descarga_pendiente(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let descarga = match clave_sesion(&req) {
        Some(clave) => state.tomar_descarga(&clave).await,
        None => None,
    };

    HttpResponse::Ok().json(DescargaPendienteResponse { descarga })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/inscripcion").route(web::post().to(crear_inscripcion)))
        .service(web::resource("/ficha").route(web::post().to(crear_ficha)))
        .service(web::resource("/criterios").route(web::post().to(crear_criterios)))
        .service(web::resource("/encuesta").route(web::post().to(crear_encuesta)))
        .service(web::resource("/programa").route(web::post().to(crear_programa)))
        .service(web::resource("/diagnostico").route(web::post().to(crear_diagnostico)))
        .service(web::resource("/cv").route(web::post().to(crear_cv)))
        .service(web::resource("/descargas/pendiente").route(web::get().to(descarga_pendiente)));
}
