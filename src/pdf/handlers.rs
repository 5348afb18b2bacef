//! Generic PDF download endpoint.
//!
//! One handler serves every document type: the URL's type key selects the
//! dispatch entry, the record id selects the stored document, and the
//! response is the compiled PDF forced as an attachment download.

use actix_web::{http::header, web, HttpResponse, Responder};
use std::fs;
use std::str::FromStr;

use crate::db::AppState;
use crate::documento::DocTipo;
use crate::pdf::{common, context, TypstRenderEngine};
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/pdf/{tipo}/{id}",
    tag = "Documentos",
    params(
        ("tipo" = String, Path, description = "Clave del tipo de documento"),
        ("id" = i64, Path, description = "Identificador del documento")
    ),
    responses(
        (status = 200, description = "PDF generado", content_type = "application/pdf"),
        (status = 404, description = "Tipo o documento inexistente", body = ErrorResponse),
        (status = 500, description = "Fallo al generar el PDF", body = ErrorResponse)
    )
)]
pub async fn descargar_pdf(
    path: web::Path<(String, i64)>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (tipo_raw, id) = path.into_inner();

    let tipo = match DocTipo::from_str(&tipo_raw) {
        Ok(tipo) => tipo,
        Err(_) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Tipo de documento no válido"));
        }
    };

    let contexto = match construir_contexto(&state, tipo, id).await {
        Ok(Some(contexto)) => contexto,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Documento no encontrado"));
        }
        Err(e) => {
            log::error!("Error de base de datos al cargar {}/{}: {:?}", tipo, id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo cargar el documento"));
        }
    };

    let descriptor = tipo.descriptor();
    let plantilla = match fs::read_to_string(common::get_static_dir().join(descriptor.plantilla)) {
        Ok(plantilla) => plantilla,
        Err(e) => {
            log::error!("No se pudo leer la plantilla {}: {:?}", descriptor.plantilla, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Plantilla no disponible"));
        }
    };

    let principal = format!(
        "#import \"{}\": documento\n\n#documento({})\n",
        descriptor.plantilla, contexto
    );

    match TypstRenderEngine::render(descriptor.plantilla, &plantilla, &principal) {
        Ok(pdf) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", tipo.nombre_archivo(id)),
            ))
            .body(pdf),
        Err(e) => {
            log::error!("Fallo al renderizar {}/{}: {}", tipo, id, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("No se pudo generar el PDF"))
        }
    }
}

/// Load the parent (and children, for grid-bearing types) and build the
/// template context. `Ok(None)` means the record id does not exist.
async fn construir_contexto(
    state: &AppState,
    tipo: DocTipo,
    id: i64,
) -> Result<Option<String>, sqlx::Error> {
    use crate::documento::models::{
        TABLA_DOCENTE, TABLA_ESPECIALIDAD, TABLA_GENERICA, TABLA_PROFESIONAL,
    };

    match tipo {
        DocTipo::Inscripcion => Ok(state
            .get_inscripcion(id)
            .await?
            .map(|d| context::contexto_inscripcion(&d))),
        DocTipo::Ficha => Ok(state.get_ficha(id).await?.map(|d| context::contexto_ficha(&d))),
        DocTipo::Criterios => Ok(state
            .get_criterios(id)
            .await?
            .map(|d| context::contexto_criterios(&d))),
        DocTipo::Encuesta => Ok(state
            .get_encuesta(id)
            .await?
            .map(|d| context::contexto_encuesta(&d))),
        DocTipo::Programa => {
            let Some(programa) = state.get_programa(id).await? else {
                return Ok(None);
            };
            let detalles = state.get_programa_detalles(id).await?;
            Ok(Some(context::contexto_programa(&programa, &detalles)))
        }
        DocTipo::Diagnostico => {
            let Some(diagnostico) = state.get_diagnostico(id).await? else {
                return Ok(None);
            };
            let genericas = state.get_diagnostico_asignaturas(id, TABLA_GENERICA).await?;
            let especialidad = state
                .get_diagnostico_asignaturas(id, TABLA_ESPECIALIDAD)
                .await?;
            let docentes = state.get_diagnostico_actividades(id, TABLA_DOCENTE).await?;
            let profesionales = state
                .get_diagnostico_actividades(id, TABLA_PROFESIONAL)
                .await?;
            Ok(Some(context::contexto_diagnostico(
                &diagnostico,
                &genericas,
                &especialidad,
                &docentes,
                &profesionales,
            )))
        }
        DocTipo::Cv => {
            let Some(cv) = state.get_cv(id).await? else {
                return Ok(None);
            };
            let laboral = state.get_cv_experiencias_laborales(id).await?;
            let docente = state.get_cv_experiencias_docentes(id).await?;
            let productos = state.get_cv_productos_academicos(id).await?;
            let instructor = state.get_cv_participaciones_instructor(id).await?;
            Ok(Some(context::contexto_cv(
                &cv,
                &laboral,
                &docente,
                &productos,
                &instructor,
            )))
        }
        DocTipo::Asistencia => {
            let Some(lista) = state.get_lista_asistencia(id).await? else {
                return Ok(None);
            };
            let participantes = state.get_participantes(id).await?;
            Ok(Some(context::contexto_asistencia(&lista, &participantes)))
        }
        DocTipo::Registro => {
            let Some(registro) = state.get_registro(id).await? else {
                return Ok(None);
            };
            let filas = state.get_registro_filas(id).await?;
            Ok(Some(context::contexto_registro(&registro, &filas)))
        }
    }
}
