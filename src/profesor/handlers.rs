//! Instructor autocomplete endpoint.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::db::AppState;
use crate::profesor::models::BusquedaProfesorResponse;
use crate::ErrorResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct BusquedaProfesorQuery {
    /// RFC o CURP del profesor, sin distinguir mayúsculas
    pub q: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Profesores",
    get,
    path = "/buscar-profesor",
    params(BusquedaProfesorQuery),
    responses(
        (status = 200, description = "Resultado de la búsqueda", body = BusquedaProfesorResponse)
    )
)]
pub async fn buscar_profesor(
    query: web::Query<BusquedaProfesorQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let Some(q) = q else {
        return HttpResponse::Ok().json(BusquedaProfesorResponse::no_encontrado());
    };

    match state.buscar_profesor(q).await {
        Ok(Some(profesor)) => {
            HttpResponse::Ok().json(BusquedaProfesorResponse::encontrado(&profesor))
        }
        Ok(None) => HttpResponse::Ok().json(BusquedaProfesorResponse::no_encontrado()),
        Err(e) => {
            log::error!("Error en búsqueda de profesor: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Búsqueda no disponible"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/buscar-profesor").route(web::get().to(buscar_profesor)));
}
