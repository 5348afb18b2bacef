use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ESTADOS_CURSO: [&str; 3] = ["disponible", "pausa", "cancelado"];

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Curso {
    pub id: i64,
    #[schema(example = "Evaluación por competencias")]
    pub nombre: String,
    #[schema(example = "TNM-2025-01")]
    pub clave: String,
    pub instructor: String,
    #[schema(example = "Agosto-Diciembre 2025")]
    pub periodo: String,
    #[schema(example = "disponible")]
    pub estado: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CrearCursoRequest {
    pub nombre: String,
    pub clave: String,
    pub instructor: String,
    pub periodo: String,
    /// Defaults to "disponible" when omitted.
    pub estado: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActualizarCursoRequest {
    pub nombre: Option<String>,
    pub instructor: Option<String>,
    pub periodo: Option<String>,
    pub estado: Option<String>,
}

/// Autocomplete lookup result: a found flag plus the flat field set.
#[derive(Debug, Serialize, ToSchema)]
pub struct BusquedaCursoResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo: Option<String>,
}

impl BusquedaCursoResponse {
    pub fn no_encontrado() -> Self {
        Self {
            found: false,
            nombre: None,
            instructor: None,
            periodo: None,
        }
    }

    pub fn encontrado(curso: &Curso) -> Self {
        Self {
            found: true,
            nombre: Some(curso.nombre.clone()),
            instructor: Some(curso.instructor.clone()),
            periodo: Some(curso.periodo.clone()),
        }
    }
}
