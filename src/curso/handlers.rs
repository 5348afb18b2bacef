//! Course catalog endpoints: CRUD for administrators plus the public
//! autocomplete lookup the capture forms use.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::middleware::require_admin;
use crate::curso::models::{
    ActualizarCursoRequest, BusquedaCursoResponse, CrearCursoRequest, Curso, ESTADOS_CURSO,
};
use crate::db::AppState;
use crate::validation::{validate_required, ValidationError, ValidationErrors};
use crate::{ErrorResponse, ValidationErrorResponse};

fn validar_estado(estado: &str, errors: &mut ValidationErrors) {
    if !ESTADOS_CURSO.contains(&estado) {
        errors.add(
            ValidationError::new("estado", "Estado de curso no reconocido")
                .with_suggestion("Usa disponible, pausa o cancelado"),
        );
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Cursos",
    get,
    path = "/cursos",
    responses(
        (status = 200, description = "Catálogo de cursos, el más reciente primero", body = [Curso])
    )
)]
pub async fn get_all_cursos(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_cursos().await {
        Ok(cursos) => HttpResponse::Ok().json(cursos),
        Err(e) => {
            log::error!("Error al listar cursos: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo listar los cursos"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Cursos",
    post,
    path = "/cursos",
    request_body = CrearCursoRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Curso creado", body = Curso),
        (status = 400, description = "Datos incompletos", body = ValidationErrorResponse),
        (status = 403, description = "Requiere rol de administrador")
    )
)]
pub async fn create_curso(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CrearCursoRequest>,
) -> impl Responder {
    if let Err(e) = require_admin(&req) {
        return HttpResponse::from_error(e);
    }

    let mut errors = ValidationErrors::new();
    validate_required(&body.nombre, "nombre", "Nombre", &mut errors);
    validate_required(&body.clave, "clave", "Clave", &mut errors);
    validate_required(&body.instructor, "instructor", "Instructor", &mut errors);
    validate_required(&body.periodo, "periodo", "Periodo", &mut errors);
    if let Some(estado) = &body.estado {
        validar_estado(estado, &mut errors);
    }
    if let Err(errors) = errors.into_result() {
        return HttpResponse::BadRequest()
            .json(ValidationErrorResponse::new("Formulario incompleto", errors));
    }

    match state.create_curso(&body).await {
        Ok(curso) => HttpResponse::Created().json(curso),
        Err(e) => {
            log::error!("Error al crear curso: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo crear el curso"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Cursos",
    put,
    path = "/cursos/{id}",
    request_body = ActualizarCursoRequest,
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Identificador del curso")
    ),
    responses(
        (status = 200, description = "Curso actualizado", body = Curso),
        (status = 404, description = "Curso inexistente", body = ErrorResponse),
        (status = 403, description = "Requiere rol de administrador")
    )
)]
pub async fn update_curso(
    req: HttpRequest,
    path: web::Path<i64>,
    state: web::Data<AppState>,
    body: web::Json<ActualizarCursoRequest>,
) -> impl Responder {
    if let Err(e) = require_admin(&req) {
        return HttpResponse::from_error(e);
    }

    let mut errors = ValidationErrors::new();
    if let Some(estado) = &body.estado {
        validar_estado(estado, &mut errors);
    }
    if let Err(errors) = errors.into_result() {
        return HttpResponse::BadRequest()
            .json(ValidationErrorResponse::new("Formulario incompleto", errors));
    }

    match state.update_curso(path.into_inner(), &body).await {
        Ok(Some(curso)) => HttpResponse::Ok().json(curso),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Curso no encontrado")),
        Err(e) => {
            log::error!("Error al actualizar curso: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo actualizar el curso"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Cursos",
    delete,
    path = "/cursos/{id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Identificador del curso")
    ),
    responses(
        (status = 204, description = "Curso eliminado"),
        (status = 404, description = "Curso inexistente", body = ErrorResponse),
        (status = 403, description = "Requiere rol de administrador")
    )
)]
pub async fn delete_curso(
    req: HttpRequest,
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> impl Responder {
    if let Err(e) = require_admin(&req) {
        return HttpResponse::from_error(e);
    }

    match state.delete_curso(path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse::not_found("Curso no encontrado")),
        Err(e) => {
            log::error!("Error al eliminar curso: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo eliminar el curso"))
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BusquedaCursoQuery {
    /// Clave única del curso
    pub clave: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Cursos",
    get,
    path = "/buscar-curso",
    params(BusquedaCursoQuery),
    responses(
        (status = 200, description = "Resultado de la búsqueda", body = BusquedaCursoResponse)
    )
)]
pub async fn buscar_curso(
    query: web::Query<BusquedaCursoQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let clave = query
        .clave
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let Some(clave) = clave else {
        return HttpResponse::Ok().json(BusquedaCursoResponse::no_encontrado());
    };

    match state.get_curso_by_clave(clave).await {
        Ok(Some(curso)) => HttpResponse::Ok().json(BusquedaCursoResponse::encontrado(&curso)),
        Ok(None) => HttpResponse::Ok().json(BusquedaCursoResponse::no_encontrado()),
        Err(e) => {
            log::error!("Error en búsqueda de curso: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Búsqueda no disponible"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cursos")
            .route(web::get().to(get_all_cursos))
            .route(web::post().to(create_curso)),
    )
    .service(
        web::resource("/cursos/{id}")
            .route(web::put().to(update_curso))
            .route(web::delete().to(delete_curso)),
    )
    .service(web::resource("/buscar-curso").route(web::get().to(buscar_curso)));
}
