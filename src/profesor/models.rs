use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Profesor {
    pub id: i64,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub rfc: String,
    pub curp: String,
    pub cct: String,
    pub municipio: String,
}

impl Profesor {
    pub fn nombre_completo(&self) -> String {
        format!(
            "{} {} {}",
            self.nombre, self.apellido_paterno, self.apellido_materno
        )
        .trim()
        .to_string()
    }
}

/// Autocomplete lookup result: a found flag plus the flat field set.
#[derive(Debug, Serialize, ToSchema)]
pub struct BusquedaProfesorResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curp: Option<String>,
}

impl BusquedaProfesorResponse {
    pub fn no_encontrado() -> Self {
        Self {
            found: false,
            nombre_completo: None,
            rfc: None,
            curp: None,
        }
    }

    pub fn encontrado(profesor: &Profesor) -> Self {
        Self {
            found: true,
            nombre_completo: Some(profesor.nombre_completo()),
            rfc: Some(profesor.rfc.clone()),
            curp: Some(profesor.curp.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profesor() -> Profesor {
        Profesor {
            id: 1,
            nombre: "Laura".into(),
            apellido_paterno: "Fuentes".into(),
            apellido_materno: "".into(),
            rfc: "FULA800101AB1".into(),
            curp: "FULA800101MTSNRR02".into(),
            cct: "".into(),
            municipio: "Reynosa".into(),
        }
    }

    #[test]
    fn nombre_completo_sin_apellido_materno() {
        assert_eq!(profesor().nombre_completo(), "Laura Fuentes");
    }

    #[test]
    fn respuesta_encontrado_copia_identificadores() {
        let r = BusquedaProfesorResponse::encontrado(&profesor());
        assert!(r.found);
        assert_eq!(r.rfc.as_deref(), Some("FULA800101AB1"));
        assert_eq!(r.nombre_completo.as_deref(), Some("Laura Fuentes"));
    }
}
