//! Attendance list endpoints.
//!
//! Entry without an id resolves the caller's most recent open draft, the
//! "continue where you left off" behavior of the capture screen. Saves
//! branch on the requested state: drafts upsert in place, finalizing closes
//! the list and leaves the download marker behind.

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::asistencia::models::{
    filas_participantes, AsistenciaEntradaResponse, EstadoLista, GuardarAsistenciaRequest,
    GuardarAsistenciaResponse, ListaAsistencia, ListaConParticipantes,
};
use crate::auth::middleware::validate_request_token;
use crate::db::AppState;
use crate::documento::{DescargaPendiente, DocTipo};
use crate::{ErrorResponse, ValidationErrorResponse};

fn clave_descargas(usuario: &str) -> String {
    format!("usuario:{usuario}")
}

async fn cargar_con_participantes(
    state: &AppState,
    lista: ListaAsistencia,
) -> Result<ListaConParticipantes, sqlx::Error> {
    let participantes = state.get_participantes(lista.id).await?;
    Ok(ListaConParticipantes {
        lista,
        participantes: filas_participantes(&participantes),
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asistencia",
    get,
    path = "/asistencia",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Borrador abierto del usuario, si existe", body = AsistenciaEntradaResponse),
        (status = 401, description = "Sin sesión")
    )
)]
pub async fn entrada_asistencia(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return HttpResponse::from_error(e),
    };

    let borrador = match state.get_borrador_reciente(&claims.username).await {
        Ok(Some(lista)) => match cargar_con_participantes(&state, lista).await {
            Ok(detalle) => Some(detalle),
            Err(e) => {
                log::error!("Error al cargar participantes: {:?}", e);
                return HttpResponse::InternalServerError()
                    .json(ErrorResponse::internal_error("No se pudo cargar el borrador"));
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::error!("Error al buscar borrador: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo cargar el borrador"));
        }
    };

    let descarga = state.tomar_descarga(&clave_descargas(&claims.username)).await;

    HttpResponse::Ok().json(AsistenciaEntradaResponse { borrador, descarga })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asistencia",
    get,
    path = "/asistencia/{id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Identificador de la lista")
    ),
    responses(
        (status = 200, description = "Lista con su cuadrícula de participantes", body = ListaConParticipantes),
        (status = 404, description = "Lista inexistente o de otro usuario", body = ErrorResponse)
    )
)]
pub async fn get_asistencia(
    req: HttpRequest,
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .get_lista_de_usuario(path.into_inner(), &claims.username)
        .await
    {
        Ok(Some(lista)) => match cargar_con_participantes(&state, lista).await {
            Ok(detalle) => HttpResponse::Ok().json(detalle),
            Err(e) => {
                log::error!("Error al cargar participantes: {:?}", e);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::internal_error("No se pudo cargar la lista"))
            }
        },
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Lista no encontrada")),
        Err(e) => {
            log::error!("Error al cargar lista: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo cargar la lista"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asistencia",
    get,
    path = "/mis_listas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Listas del usuario, la más reciente primero", body = [ListaAsistencia])
    )
)]
pub async fn mis_listas(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.get_listas_de_usuario(&claims.username).await {
        Ok(listas) => HttpResponse::Ok().json(listas),
        Err(e) => {
            log::error!("Error al listar asistencias: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo listar las asistencias"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Asistencia",
    post,
    path = "/asistencia",
    security(("bearer_auth" = [])),
    request_body = GuardarAsistenciaRequest,
    responses(
        (status = 200, description = "Lista guardada", body = GuardarAsistenciaResponse),
        (status = 400, description = "Formulario incompleto", body = ValidationErrorResponse),
        (status = 404, description = "Lista inexistente o de otro usuario", body = ErrorResponse)
    )
)]
pub async fn guardar_asistencia(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<GuardarAsistenciaRequest>,
) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return HttpResponse::from_error(e),
    };

    if let Err(errors) = body.validar() {
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(
            "Error en el formulario",
            errors,
        ));
    }

    let estado = body.estado;
    let lista_id = match state
        .guardar_lista(&claims.username, estado.as_str(), &body)
        .await
    {
        Ok(Some(id)) => id,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Lista no encontrada"));
        }
        Err(e) => {
            log::error!("Error al guardar lista: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo guardar la lista"));
        }
    };

    match estado {
        EstadoLista::Finalizado => {
            let descarga = DescargaPendiente::new(DocTipo::Asistencia, lista_id);
            state
                .guardar_descarga(&clave_descargas(&claims.username), descarga.clone())
                .await;

            HttpResponse::Ok().json(GuardarAsistenciaResponse {
                id: lista_id,
                estado,
                message: "Lista finalizada exitosamente.".to_string(),
                descarga: Some(descarga),
            })
        }
        EstadoLista::Borrador => HttpResponse::Ok().json(GuardarAsistenciaResponse {
            id: lista_id,
            estado,
            message: "Progreso guardado correctamente.".to_string(),
            descarga: None,
        }),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/asistencia")
            .route(web::get().to(entrada_asistencia))
            .route(web::post().to(guardar_asistencia)),
    )
    .service(web::resource("/asistencia/{id}").route(web::get().to(get_asistencia)))
    .service(web::resource("/mis_listas").route(web::get().to(mis_listas)));
}
