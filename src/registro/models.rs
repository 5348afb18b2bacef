//! General training registry models.

use crate::documento::grid::{validar_posiciones, Posicionada};
use crate::documento::FILAS_REGISTRO;
use crate::validation::{validate_fecha, validate_required, ValidationError, ValidationErrors};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct RegistroGeneral {
    pub id: i64,
    pub periodo: String,
    pub jefe_desarrollo: String,
    pub subdirector: String,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct RegistroFila {
    pub id: i64,
    pub registro_id: i64,
    pub no_consecutivo: i32,
    pub instituto: String,
    pub nombre_curso: String,
    pub es_formacion: bool,
    pub es_actualizacion: bool,
    pub instructor: String,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_termino: Option<NaiveDate>,
    pub horas: Option<i32>,
    pub modalidad: String,
    pub docentes_inscritos: i32,
    pub docentes_terminaron: i32,
    pub docentes_acreditados: i32,
    pub tipo: String,
}

impl Posicionada for RegistroFila {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegistroFilaRequest {
    pub no: i32,
    #[serde(default)]
    pub instituto: String,
    pub nombre_curso: String,
    #[serde(default)]
    pub es_formacion: bool,
    #[serde(default)]
    pub es_actualizacion: bool,
    #[serde(default)]
    pub instructor: String,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_termino: Option<NaiveDate>,
    pub horas: Option<i32>,
    #[serde(default)]
    pub modalidad: String,
    #[serde(default)]
    pub docentes_inscritos: i32,
    #[serde(default)]
    pub docentes_terminaron: i32,
    #[serde(default)]
    pub docentes_acreditados: i32,
    #[serde(default)]
    pub tipo: String,
}

impl Posicionada for RegistroFilaRequest {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

fn periodo_default() -> String {
    "Periodo Actual".to_string()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearRegistroRequest {
    #[serde(default = "periodo_default")]
    pub periodo: String,
    #[serde(default)]
    pub jefe_desarrollo: String,
    #[serde(default)]
    pub subdirector: String,
    #[serde(default)]
    pub filas: Vec<RegistroFilaRequest>,
}

impl CrearRegistroRequest {
    /// Whole-submission check: an empty registry saves nothing, and every
    /// row must be complete before any row persists.
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.filas.is_empty() {
            errors.add(ValidationError::new("filas", "El formulario está vacío"));
            return errors.into_result();
        }

        validar_posiciones(&self.filas, FILAS_REGISTRO, "filas", &mut errors);

        for fila in &self.filas {
            let campo = |nombre: &str| format!("filas[{}].{}", fila.no, nombre);
            validate_required(&fila.nombre_curso, &campo("nombre_curso"), "Nombre del curso", &mut errors);
            validate_fecha(
                fila.fecha_inicio,
                &campo("fecha_inicio"),
                "La fecha de inicio",
                &mut errors,
            );
            validate_fecha(
                fila.fecha_termino,
                &campo("fecha_termino"),
                "La fecha de término",
                &mut errors,
            );
            if fila.horas.is_none() {
                errors.add(ValidationError::new(
                    campo("horas"),
                    "Las horas son obligatorias",
                ));
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(no: i32) -> RegistroFilaRequest {
        RegistroFilaRequest {
            no,
            instituto: "REYNOSA".into(),
            nombre_curso: "Curso de actualización".into(),
            es_formacion: false,
            es_actualizacion: true,
            instructor: "M.C. Laura Fuentes".into(),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 2, 3),
            fecha_termino: NaiveDate::from_ymd_opt(2025, 2, 7),
            horas: Some(30),
            modalidad: "Presencial".into(),
            docentes_inscritos: 25,
            docentes_terminaron: 23,
            docentes_acreditados: 20,
            tipo: "FD".into(),
        }
    }

    #[test]
    fn registro_vacio_es_invalido() {
        let req = CrearRegistroRequest {
            periodo: "2025".into(),
            jefe_desarrollo: String::new(),
            subdirector: String::new(),
            filas: vec![],
        };
        let err = req.validar().unwrap_err();
        assert_eq!(err.errors()[0].message, "El formulario está vacío");
    }

    #[test]
    fn fila_sin_fechas_nombra_la_fila() {
        let mut mala = fila(2);
        mala.fecha_inicio = None;
        mala.horas = None;
        let req = CrearRegistroRequest {
            periodo: "2025".into(),
            jefe_desarrollo: String::new(),
            subdirector: String::new(),
            filas: vec![fila(1), mala],
        };
        let err = req.validar().unwrap_err();
        assert!(err.errors().iter().all(|e| e.field.starts_with("filas[2]")));
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn registro_completo_pasa() {
        let req = CrearRegistroRequest {
            periodo: "2025".into(),
            jefe_desarrollo: "Ing. Juan Pérez".into(),
            subdirector: "Lic. María López".into(),
            filas: (1..=15).map(fila).collect(),
        };
        assert!(req.validar().is_ok());
    }
}
