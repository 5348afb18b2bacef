//! Attendance list models.
//!
//! A list lives as a draft while the instructor fills it across sessions and
//! becomes terminal once finalized. The capture grid always shows the full
//! 23 participant slots.

use crate::documento::grid::{reconstruir, Posicionada};
use crate::documento::{DescargaPendiente, FILAS_ASISTENCIA};
use crate::validation::{validate_required, ValidationError, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ESTADO_BORRADOR: &str = "borrador";
pub const ESTADO_FINALIZADO: &str = "finalizado";

/// Draft/finalized lifecycle selector on a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstadoLista {
    Borrador,
    Finalizado,
}

impl EstadoLista {
    pub fn as_str(self) -> &'static str {
        match self {
            EstadoLista::Borrador => ESTADO_BORRADOR,
            EstadoLista::Finalizado => ESTADO_FINALIZADO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ListaAsistencia {
    pub id: i64,
    pub usuario: String,
    pub estado: String,
    pub hoja_actual: String,
    pub hoja_total: String,
    pub instituto: String,
    pub clave_curso: String,
    pub folio: String,
    pub nombre_curso: String,
    pub instructor: String,
    pub periodo: String,
    pub duracion: String,
    pub horario: String,
    pub instructor_rfc: String,
    pub instructor_curp: String,
    pub coordinador_rfc: String,
    pub coordinador_curp: String,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AsistenciaParticipante {
    pub id: i64,
    pub lista_id: i64,
    pub no_consecutivo: i32,
    pub nombre: String,
    pub rfc: String,
    pub puesto: String,
    pub sexo: String,
    pub asist_l: String,
    pub asist_m1: String,
    pub asist_m2: String,
    pub asist_j: String,
    pub asist_v: String,
    pub concluyo: String,
}

impl Posicionada for AsistenciaParticipante {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

/// One capture-grid row, both as submitted and as echoed back to the form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipanteFila {
    pub no: i32,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub rfc: String,
    #[serde(default)]
    pub puesto: String,
    #[serde(default)]
    pub sexo: String,
    #[serde(default)]
    pub asist_l: String,
    #[serde(default)]
    pub asist_m1: String,
    #[serde(default)]
    pub asist_m2: String,
    #[serde(default)]
    pub asist_j: String,
    #[serde(default)]
    pub asist_v: String,
    #[serde(default)]
    pub concluyo: String,
}

impl Posicionada for ParticipanteFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

impl ParticipanteFila {
    fn vacia(no: i32) -> Self {
        Self {
            no,
            nombre: String::new(),
            rfc: String::new(),
            puesto: String::new(),
            sexo: String::new(),
            asist_l: String::new(),
            asist_m1: String::new(),
            asist_m2: String::new(),
            asist_j: String::new(),
            asist_v: String::new(),
            concluyo: String::new(),
        }
    }

    fn desde(p: &AsistenciaParticipante) -> Self {
        Self {
            no: p.no_consecutivo,
            nombre: p.nombre.clone(),
            rfc: p.rfc.clone(),
            puesto: p.puesto.clone(),
            sexo: p.sexo.clone(),
            asist_l: p.asist_l.clone(),
            asist_m1: p.asist_m1.clone(),
            asist_m2: p.asist_m2.clone(),
            asist_j: p.asist_j.clone(),
            asist_v: p.asist_v.clone(),
            concluyo: p.concluyo.clone(),
        }
    }
}

/// Full 23-slot grid for the capture form: stored rows in their positions,
/// blank rows everywhere else.
pub fn filas_participantes(participantes: &[AsistenciaParticipante]) -> Vec<ParticipanteFila> {
    reconstruir(participantes, FILAS_ASISTENCIA)
        .iter()
        .enumerate()
        .map(|(i, p)| match p {
            Some(p) => ParticipanteFila::desde(p),
            None => ParticipanteFila::vacia(i as i32 + 1),
        })
        .collect()
}

fn hoja_default() -> String {
    "1".to_string()
}

fn instituto_default() -> String {
    "REYNOSA".to_string()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GuardarAsistenciaRequest {
    /// Draft being continued; omit to open a new list.
    pub id: Option<i64>,
    pub estado: EstadoLista,
    #[serde(default = "hoja_default")]
    pub hoja_actual: String,
    #[serde(default = "hoja_default")]
    pub hoja_total: String,
    #[serde(default = "instituto_default")]
    pub instituto: String,
    pub clave_curso: String,
    pub folio: String,
    pub nombre_curso: String,
    pub instructor: String,
    pub periodo: String,
    pub duracion: String,
    pub horario: String,
    pub instructor_rfc: String,
    pub instructor_curp: String,
    pub coordinador_rfc: String,
    pub coordinador_curp: String,
    #[serde(default)]
    pub participantes: Vec<ParticipanteFila>,
}

impl GuardarAsistenciaRequest {
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.clave_curso, "clave_curso", "Clave del curso", &mut errors);
        validate_required(&self.folio, "folio", "Folio", &mut errors);
        validate_required(&self.nombre_curso, "nombre_curso", "Nombre del curso", &mut errors);
        validate_required(&self.instructor, "instructor", "Instructor", &mut errors);
        validate_required(&self.periodo, "periodo", "Periodo", &mut errors);
        validate_required(&self.duracion, "duracion", "Duración", &mut errors);
        validate_required(&self.horario, "horario", "Horario", &mut errors);
        validate_required(&self.instructor_rfc, "instructor_rfc", "RFC del instructor", &mut errors);
        validate_required(
            &self.instructor_curp,
            "instructor_curp",
            "CURP del instructor",
            &mut errors,
        );
        validate_required(
            &self.coordinador_rfc,
            "coordinador_rfc",
            "RFC del coordinador",
            &mut errors,
        );
        validate_required(
            &self.coordinador_curp,
            "coordinador_curp",
            "CURP del coordinador",
            &mut errors,
        );

        crate::documento::grid::validar_posiciones(
            &self.participantes,
            FILAS_ASISTENCIA,
            "participantes",
            &mut errors,
        );
        for fila in &self.participantes {
            if fila.nombre.trim().is_empty() {
                errors.add(ValidationError::new(
                    format!("participantes[{}].nombre", fila.no),
                    "El participante debe tener nombre",
                ));
            }
        }

        errors.into_result()
    }
}

/// List header plus its full capture grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListaConParticipantes {
    pub lista: ListaAsistencia,
    pub participantes: Vec<ParticipanteFila>,
}

/// Response for the entry endpoint: the open draft when one exists, plus the
/// one-shot pending download if a finalize just happened.
#[derive(Debug, Serialize, ToSchema)]
pub struct AsistenciaEntradaResponse {
    pub borrador: Option<ListaConParticipantes>,
    pub descarga: Option<DescargaPendiente>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GuardarAsistenciaResponse {
    pub id: i64,
    pub estado: EstadoLista,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descarga: Option<DescargaPendiente>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participante(no: i32, nombre: &str) -> AsistenciaParticipante {
        AsistenciaParticipante {
            id: no as i64,
            lista_id: 1,
            no_consecutivo: no,
            nombre: nombre.into(),
            rfc: "XAXX010101AB1".into(),
            puesto: "Docente".into(),
            sexo: "M".into(),
            asist_l: "X".into(),
            asist_m1: String::new(),
            asist_m2: "X".into(),
            asist_j: String::new(),
            asist_v: "X".into(),
            concluyo: "SI".into(),
        }
    }

    #[test]
    fn grid_completo_de_23_filas() {
        let filas = filas_participantes(&[participante(3, "Rosa Vela")]);
        assert_eq!(filas.len(), 23);
        assert_eq!(filas[2].nombre, "Rosa Vela");
        assert_eq!(filas[2].asist_l, "X");
        assert!(filas[0].nombre.is_empty());
        assert_eq!(filas[22].no, 23);
    }

    #[test]
    fn estado_como_texto() {
        assert_eq!(EstadoLista::Borrador.as_str(), "borrador");
        assert_eq!(EstadoLista::Finalizado.as_str(), "finalizado");
    }

    #[test]
    fn request_sin_firmas_es_invalido() {
        let req = GuardarAsistenciaRequest {
            id: None,
            estado: EstadoLista::Borrador,
            hoja_actual: "1".into(),
            hoja_total: "1".into(),
            instituto: "REYNOSA".into(),
            clave_curso: "C-1".into(),
            folio: "F-9".into(),
            nombre_curso: "Curso".into(),
            instructor: "Instructor".into(),
            periodo: "2025".into(),
            duracion: "30 horas".into(),
            horario: "9:00-14:00".into(),
            instructor_rfc: String::new(),
            instructor_curp: String::new(),
            coordinador_rfc: "XAXX010101AB1".into(),
            coordinador_curp: "XAXX010101HNERNN09".into(),
            participantes: vec![],
        };
        let err = req.validar().unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
