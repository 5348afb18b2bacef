//! Record schemas for the document catalog.
//!
//! Each document type has a stored parent record (the printed header) and,
//! where the format carries line-item tables, child rows keyed by
//! `no_consecutivo`. Request structs mirror the capture forms: the parent
//! fields plus the child rows inline, so one POST is one whole document.

use crate::documento::grid::Posicionada;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TABLA_GENERICA: &str = "generica";
pub const TABLA_ESPECIALIDAD: &str = "especialidad";
pub const TABLA_DOCENTE: &str = "docente";
pub const TABLA_PROFESIONAL: &str = "profesional";

// =======================================================
// Cédula de inscripción
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Inscripcion {
    pub id: i64,
    pub fecha: Option<NaiveDate>,
    pub clave_curso: String,
    pub nombre_curso: String,
    pub nombre_instructor: String,
    pub periodo: String,
    pub horario: String,
    pub duracion: String,
    pub genero: String,
    pub nombre_completo: String,
    pub rfc: String,
    pub curp: String,
    pub email: String,
    pub grado_estudios: String,
    pub carrera: String,
    pub instituto: String,
    pub area_adscripcion: String,
    pub puesto: String,
    pub jefe_inmediato: String,
    pub telefono: String,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearInscripcionRequest {
    pub fecha: Option<NaiveDate>,
    pub clave_curso: String,
    pub nombre_curso: String,
    pub nombre_instructor: String,
    pub periodo: String,
    pub horario: String,
    pub duracion: String,
    #[schema(example = "hombre")]
    pub genero: String,
    pub nombre_completo: String,
    pub rfc: String,
    pub curp: String,
    pub email: String,
    pub grado_estudios: String,
    pub carrera: String,
    pub instituto: String,
    pub area_adscripcion: String,
    pub puesto: String,
    pub jefe_inmediato: String,
    pub telefono: String,
    pub extension: Option<String>,
}

// =======================================================
// Ficha técnica
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct FichaTecnica {
    pub id: i64,
    pub nombre_curso: String,
    pub instructor: String,
    pub introduccion: String,
    pub justificacion: String,
    pub objetivo_general: String,
    pub desc_duracion: String,
    pub desc_contenido: String,
    pub desc_materiales: String,
    pub desc_criterios: String,
    pub resultados: String,
    pub fuentes_informacion: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearFichaRequest {
    pub nombre_curso: String,
    pub instructor: String,
    pub introduccion: String,
    pub justificacion: String,
    pub objetivo_general: String,
    pub desc_duracion: String,
    pub desc_contenido: String,
    pub desc_materiales: String,
    pub desc_criterios: String,
    pub resultados: String,
    pub fuentes_informacion: String,
}

// =======================================================
// Criterios de selección de instructor
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CriteriosSeleccion {
    pub id: i64,
    pub nombre_instructor: String,
    pub fecha_evaluacion: Option<NaiveDate>,
    pub nombre_curso: String,
    pub empresa: String,
    pub criterio_1: i32,
    pub criterio_2: i32,
    pub criterio_3: i32,
    pub criterio_4: i32,
    pub criterio_5: i32,
    pub total_puntaje: i32,
    pub aceptado: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearCriteriosRequest {
    pub nombre_instructor: String,
    pub fecha_evaluacion: Option<NaiveDate>,
    pub nombre_curso: String,
    pub empresa: String,
    /// Formación académica (1 a 5)
    pub criterio_1: i32,
    /// Experiencia impartiendo (1 a 5)
    pub criterio_2: i32,
    /// Materiales de apoyo (1 a 5)
    pub criterio_3: i32,
    /// Disponibilidad (1 a 5)
    pub criterio_4: i32,
    /// Certificaciones (1 a 5)
    pub criterio_5: i32,
    #[schema(example = "si")]
    pub aceptado: String,
}

impl CrearCriteriosRequest {
    pub fn total_puntaje(&self) -> i32 {
        self.criterio_1 + self.criterio_2 + self.criterio_3 + self.criterio_4 + self.criterio_5
    }
}

// =======================================================
// Encuesta de opinión
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EncuestaSatisfaccion {
    pub id: i64,
    pub nombre_curso: String,
    pub fecha: Option<NaiveDate>,
    pub clave: String,
    pub duracion: String,
    pub institucion: String,
    pub facilitador: String,
    pub periodo: String,
    pub horario: String,
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
    pub q6: i32,
    pub q7: i32,
    pub q8: i32,
    pub q9: i32,
    pub q10: i32,
    pub q11: i32,
    pub q12: i32,
    pub q13: i32,
    pub q14: i32,
    pub q15: i32,
    pub q16: i32,
    pub q17: i32,
    pub q18: i32,
    pub q19: i32,
    pub q20: i32,
    pub comentarios: Option<String>,
}

impl EncuestaSatisfaccion {
    /// The 20 answers in question order.
    pub fn respuestas(&self) -> [i32; 20] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8, self.q9,
            self.q10, self.q11, self.q12, self.q13, self.q14, self.q15, self.q16, self.q17,
            self.q18, self.q19, self.q20,
        ]
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearEncuestaRequest {
    pub nombre_curso: String,
    pub fecha: Option<NaiveDate>,
    pub clave: String,
    pub duracion: String,
    pub institucion: String,
    pub facilitador: String,
    pub periodo: String,
    pub horario: String,
    /// Respuestas a las 20 preguntas, en orden, escala 1 a 5.
    pub respuestas: Vec<i32>,
    pub comentarios: Option<String>,
}

// =======================================================
// Programa institucional de formación
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ProgramaInstitucional {
    pub id: i64,
    pub periodo: String,
    pub elaboro_nombre: String,
    pub elaboro_fecha: Option<NaiveDate>,
    pub aprobo_nombre: String,
    pub aprobo_fecha: Option<NaiveDate>,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ProgramaDetalle {
    pub id: i64,
    pub programa_id: i64,
    pub no_consecutivo: i32,
    pub nombre_curso: String,
    pub objetivo: String,
    pub periodo_realizacion: String,
    pub lugar: String,
    pub horas: Option<i32>,
    pub instructor: String,
    pub dirigido_a: String,
    pub observaciones: Option<String>,
}

impl Posicionada for ProgramaDetalle {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProgramaDetalleFila {
    pub no: i32,
    pub nombre_curso: String,
    pub objetivo: String,
    pub periodo_realizacion: String,
    pub lugar: String,
    pub horas: Option<i32>,
    pub instructor: String,
    pub dirigido_a: String,
    pub observaciones: Option<String>,
}

impl Posicionada for ProgramaDetalleFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearProgramaRequest {
    pub periodo: String,
    pub elaboro_nombre: String,
    pub elaboro_fecha: Option<NaiveDate>,
    pub aprobo_nombre: String,
    pub aprobo_fecha: Option<NaiveDate>,
    #[serde(default)]
    pub filas: Vec<ProgramaDetalleFila>,
}

// =======================================================
// Diagnóstico de necesidades
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DiagnosticoNecesidades {
    pub id: i64,
    pub departamento_academico: String,
    pub carrera: String,
    pub dept_origen: String,
    pub fecha_realizacion: Option<NaiveDate>,
    pub jefe_nombre: String,
    pub presidente_nombre: String,
    pub secretario_nombre: String,
    pub fecha_concentrado: Option<NaiveDate>,
    pub subdirector_nombre: String,
    pub jefe1_nombre: String,
    pub jefe1_depto: String,
    pub jefe2_nombre: String,
    pub jefe2_depto: String,
    pub jefe3_nombre: String,
    pub jefe3_depto: String,
    pub jefe4_nombre: String,
    pub jefe4_depto: String,
    pub created_at: DateTime<Utc>,
}

/// Tablas a) genéricas y b) de especialidad.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DiagnosticoAsignatura {
    pub id: i64,
    pub diagnostico_id: i64,
    pub tipo_tabla: String,
    pub no_consecutivo: i32,
    pub asignatura: String,
    pub contenido: String,
    pub num_profesores: Option<i32>,
    pub periodo: String,
    pub instructor_propuesto: String,
}

impl Posicionada for DiagnosticoAsignatura {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

/// Tablas del concentrado: c) formación docente y d) profesional.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DiagnosticoActividad {
    pub id: i64,
    pub diagnostico_id: i64,
    pub tipo_tabla: String,
    pub no_consecutivo: i32,
    pub actividad: String,
    pub carrera_atendida: String,
    pub fecha_evento: String,
}

impl Posicionada for DiagnosticoActividad {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AsignaturaFila {
    pub no: i32,
    pub asignatura: String,
    pub contenido: String,
    pub num_profesores: Option<i32>,
    pub periodo: String,
    pub instructor_propuesto: String,
}

impl Posicionada for AsignaturaFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ActividadFila {
    pub no: i32,
    pub actividad: String,
    pub carrera_atendida: String,
    pub fecha_evento: String,
}

impl Posicionada for ActividadFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearDiagnosticoRequest {
    pub departamento_academico: String,
    pub carrera: String,
    pub dept_origen: String,
    pub fecha_realizacion: Option<NaiveDate>,
    pub jefe_nombre: String,
    pub presidente_nombre: String,
    pub secretario_nombre: String,
    pub fecha_concentrado: Option<NaiveDate>,
    pub subdirector_nombre: String,
    #[serde(default)]
    pub jefe1_nombre: String,
    #[serde(default)]
    pub jefe1_depto: String,
    #[serde(default)]
    pub jefe2_nombre: String,
    #[serde(default)]
    pub jefe2_depto: String,
    #[serde(default)]
    pub jefe3_nombre: String,
    #[serde(default)]
    pub jefe3_depto: String,
    #[serde(default)]
    pub jefe4_nombre: String,
    #[serde(default)]
    pub jefe4_depto: String,
    #[serde(default)]
    pub asignaturas_genericas: Vec<AsignaturaFila>,
    #[serde(default)]
    pub asignaturas_especialidad: Vec<AsignaturaFila>,
    #[serde(default)]
    pub actividades_docentes: Vec<ActividadFila>,
    #[serde(default)]
    pub actividades_profesionales: Vec<ActividadFila>,
}

// =======================================================
// Currículum vitae
// =======================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CurriculumVitae {
    pub id: i64,
    pub nombre: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub curp: String,
    pub rfc: String,
    pub telefono: String,
    pub correo: String,
    pub lic_institucion: String,
    pub lic_titulacion: String,
    pub lic_cedula: String,
    pub maestria_institucion: String,
    pub maestria_titulacion: String,
    pub maestria_cedula: String,
    pub doc_institucion: String,
    pub doc_titulacion: String,
    pub doc_cedula: String,
    pub esp_institucion: String,
    pub esp_titulacion: String,
    pub esp_cedula: String,
    pub otros_institucion: String,
    pub otros_titulacion: String,
    pub otros_cedula: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CvExperienciaLaboral {
    pub id: i64,
    pub cv_id: i64,
    pub no_consecutivo: i32,
    pub puesto: String,
    pub empresa: String,
    pub permanencia: String,
    pub actividades: String,
}

impl Posicionada for CvExperienciaLaboral {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CvExperienciaDocente {
    pub id: i64,
    pub cv_id: i64,
    pub no_consecutivo: i32,
    pub materia: String,
    pub periodo: String,
}

impl Posicionada for CvExperienciaDocente {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CvProductoAcademico {
    pub id: i64,
    pub cv_id: i64,
    pub no_consecutivo: i32,
    pub actividad: String,
    pub descripcion: String,
    pub fecha: String,
}

impl Posicionada for CvProductoAcademico {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CvParticipacionInstructor {
    pub id: i64,
    pub cv_id: i64,
    pub no_consecutivo: i32,
    pub nombre_curso: String,
    pub institucion: String,
    pub duracion: String,
    pub fecha: String,
}

impl Posicionada for CvParticipacionInstructor {
    fn no_consecutivo(&self) -> i32 {
        self.no_consecutivo
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ExperienciaLaboralFila {
    pub no: i32,
    pub puesto: String,
    pub empresa: String,
    pub permanencia: String,
    pub actividades: String,
}

impl Posicionada for ExperienciaLaboralFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ExperienciaDocenteFila {
    pub no: i32,
    pub materia: String,
    pub periodo: String,
}

impl Posicionada for ExperienciaDocenteFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductoAcademicoFila {
    pub no: i32,
    pub actividad: String,
    pub descripcion: String,
    pub fecha: String,
}

impl Posicionada for ProductoAcademicoFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ParticipacionInstructorFila {
    pub no: i32,
    pub nombre_curso: String,
    pub institucion: String,
    pub duracion: String,
    pub fecha: String,
}

impl Posicionada for ParticipacionInstructorFila {
    fn no_consecutivo(&self) -> i32 {
        self.no
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CrearCvRequest {
    pub nombre: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub curp: String,
    pub rfc: String,
    pub telefono: String,
    pub correo: String,
    #[serde(default)]
    pub lic_institucion: String,
    #[serde(default)]
    pub lic_titulacion: String,
    #[serde(default)]
    pub lic_cedula: String,
    #[serde(default)]
    pub maestria_institucion: String,
    #[serde(default)]
    pub maestria_titulacion: String,
    #[serde(default)]
    pub maestria_cedula: String,
    #[serde(default)]
    pub doc_institucion: String,
    #[serde(default)]
    pub doc_titulacion: String,
    #[serde(default)]
    pub doc_cedula: String,
    #[serde(default)]
    pub esp_institucion: String,
    #[serde(default)]
    pub esp_titulacion: String,
    #[serde(default)]
    pub esp_cedula: String,
    #[serde(default)]
    pub otros_institucion: String,
    #[serde(default)]
    pub otros_titulacion: String,
    #[serde(default)]
    pub otros_cedula: String,
    #[serde(default)]
    pub experiencia_laboral: Vec<ExperienciaLaboralFila>,
    #[serde(default)]
    pub experiencia_docente: Vec<ExperienciaDocenteFila>,
    #[serde(default)]
    pub productos_academicos: Vec<ProductoAcademicoFila>,
    #[serde(default)]
    pub participacion_instructor: Vec<ParticipacionInstructorFila>,
}
