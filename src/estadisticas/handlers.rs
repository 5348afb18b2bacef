//! Statistics dashboard endpoint.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::db::AppState;
use crate::estadisticas::{etiquetas, promedios};
use crate::ErrorResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EstadisticasQuery {
    /// Filtro de igualdad por periodo
    pub periodo: Option<String>,
    /// Filtro de igualdad por facilitador
    pub facilitador: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstadisticasResponse {
    /// Etiquetas "P1".."P20"
    pub labels: Vec<String>,
    /// Promedio por pregunta, 0 cuando no hay encuestas
    pub valores: Vec<f64>,
    /// Valores distintos disponibles para el filtro de periodo
    pub periodos: Vec<String>,
    /// Valores distintos disponibles para el filtro de facilitador
    pub facilitadores: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilitador_actual: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Estadísticas",
    get,
    path = "/estadisticas",
    params(EstadisticasQuery),
    responses(
        (status = 200, description = "Promedios por pregunta", body = EstadisticasResponse)
    )
)]
pub async fn estadisticas(
    query: web::Query<EstadisticasQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    // An empty filter value reads the same as no filter.
    let periodo = query
        .periodo
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let facilitador = query
        .facilitador
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());

    let encuestas = match state.get_encuestas_filtradas(periodo, facilitador).await {
        Ok(encuestas) => encuestas,
        Err(e) => {
            log::error!("Error al cargar encuestas: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Estadísticas no disponibles"));
        }
    };

    let periodos = match state.get_periodos_encuesta().await {
        Ok(periodos) => periodos,
        Err(e) => {
            log::error!("Error al cargar periodos: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Estadísticas no disponibles"));
        }
    };

    let facilitadores = match state.get_facilitadores_encuesta().await {
        Ok(facilitadores) => facilitadores,
        Err(e) => {
            log::error!("Error al cargar facilitadores: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Estadísticas no disponibles"));
        }
    };

    HttpResponse::Ok().json(EstadisticasResponse {
        labels: etiquetas(),
        valores: promedios(&encuestas),
        periodos,
        facilitadores,
        periodo_actual: periodo.map(str::to_string),
        facilitador_actual: facilitador.map(str::to_string),
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/estadisticas").route(web::get().to(estadisticas)));
}
