//! General registry endpoint.
//!
//! The whole submission is validated up front and written in one
//! transaction: a bad row rejects the POST with nothing persisted, so the
//! end state always matches the pre-request state.

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::db::AppState;
use crate::documento::handlers::{clave_sesion, DocumentoCreadoResponse};
use crate::documento::{DescargaPendiente, DocTipo};
use crate::registro::models::CrearRegistroRequest;
use crate::{ErrorResponse, ValidationErrorResponse};

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/registro",
    request_body = CrearRegistroRequest,
    responses(
        (status = 201, description = "Registro general guardado", body = DocumentoCreadoResponse),
        (status = 400, description = "Alguna fila es inválida; no se guardó nada", body = ValidationErrorResponse)
    )
)]
pub async fn crear_registro(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearRegistroRequest>,
) -> impl Responder {
    if let Err(errors) = body.validar() {
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(
            "Error en el formulario",
            errors,
        ));
    }

    let registro_id = match state.crear_registro(&body).await {
        Ok(id) => id,
        Err(e) => {
            log::error!("Error al guardar registro general: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo guardar el registro"));
        }
    };

    let descarga = DescargaPendiente::new(DocTipo::Registro, registro_id);
    if let Some(clave) = clave_sesion(&req) {
        state.guardar_descarga(&clave, descarga.clone()).await;
    }

    HttpResponse::Created().json(DocumentoCreadoResponse {
        id: registro_id,
        descarga,
        message: "Registro General guardado exitosamente.".to_string(),
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/registro").route(web::post().to(crear_registro)));
}
