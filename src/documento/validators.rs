//! Per-document validators.
//!
//! Submissions are validated whole: every field problem in the parent and in
//! every child row is collected before anything touches the database, so a
//! rejected POST never persists a partial document.

use super::models::*;
use super::{FILAS_CV, FILAS_DIAGNOSTICO, FILAS_PROGRAMA};
use crate::documento::grid::validar_posiciones;
use crate::validation::{
    validate_calificacion, validate_curp, validate_email, validate_fecha, validate_required,
    validate_rfc, ValidationError, ValidationErrors,
};

/// Trait for validating capture requests.
pub trait Validador {
    /// Validate the state of the object.
    fn validar(&self) -> Result<(), ValidationErrors>;
}

impl Validador for CrearInscripcionRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_fecha(self.fecha, "fecha", "La fecha", &mut errors);
        validate_required(&self.clave_curso, "clave_curso", "Clave del curso", &mut errors);
        validate_required(&self.nombre_curso, "nombre_curso", "Nombre del curso", &mut errors);
        validate_required(
            &self.nombre_instructor,
            "nombre_instructor",
            "Nombre del instructor",
            &mut errors,
        );
        validate_required(&self.periodo, "periodo", "Periodo", &mut errors);
        validate_required(&self.horario, "horario", "Horario", &mut errors);
        validate_required(&self.duracion, "duracion", "Duración", &mut errors);

        if self.genero != "hombre" && self.genero != "mujer" {
            errors.add(
                ValidationError::new("genero", "Género no reconocido")
                    .with_suggestion("Usa \"hombre\" o \"mujer\""),
            );
        }

        validate_required(
            &self.nombre_completo,
            "nombre_completo",
            "Nombre completo",
            &mut errors,
        );
        validate_rfc(&self.rfc, "rfc", &mut errors);
        validate_curp(&self.curp, "curp", &mut errors);
        validate_email(&self.email, "email", &mut errors);
        validate_required(&self.grado_estudios, "grado_estudios", "Grado de estudios", &mut errors);
        validate_required(&self.carrera, "carrera", "Carrera", &mut errors);
        validate_required(&self.instituto, "instituto", "Instituto", &mut errors);
        validate_required(
            &self.area_adscripcion,
            "area_adscripcion",
            "Área de adscripción",
            &mut errors,
        );
        validate_required(&self.puesto, "puesto", "Puesto", &mut errors);
        validate_required(&self.jefe_inmediato, "jefe_inmediato", "Jefe inmediato", &mut errors);
        validate_required(&self.telefono, "telefono", "Teléfono", &mut errors);

        errors.into_result()
    }
}

impl Validador for CrearFichaRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nombre_curso, "nombre_curso", "Nombre del curso", &mut errors);
        validate_required(&self.instructor, "instructor", "Instructor", &mut errors);
        validate_required(&self.introduccion, "introduccion", "Introducción", &mut errors);
        validate_required(&self.justificacion, "justificacion", "Justificación", &mut errors);
        validate_required(
            &self.objetivo_general,
            "objetivo_general",
            "Objetivo general",
            &mut errors,
        );
        validate_required(&self.desc_duracion, "desc_duracion", "Duración", &mut errors);
        validate_required(&self.desc_contenido, "desc_contenido", "Contenido", &mut errors);
        validate_required(&self.desc_materiales, "desc_materiales", "Materiales", &mut errors);
        validate_required(
            &self.desc_criterios,
            "desc_criterios",
            "Criterios de evaluación",
            &mut errors,
        );
        validate_required(&self.resultados, "resultados", "Resultados esperados", &mut errors);
        validate_required(
            &self.fuentes_informacion,
            "fuentes_informacion",
            "Fuentes de información",
            &mut errors,
        );

        errors.into_result()
    }
}

impl Validador for CrearCriteriosRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(
            &self.nombre_instructor,
            "nombre_instructor",
            "Nombre del instructor",
            &mut errors,
        );
        validate_fecha(
            self.fecha_evaluacion,
            "fecha_evaluacion",
            "La fecha de evaluación",
            &mut errors,
        );
        validate_required(&self.nombre_curso, "nombre_curso", "Nombre del curso", &mut errors);
        validate_required(&self.empresa, "empresa", "Empresa", &mut errors);

        validate_calificacion(self.criterio_1, "criterio_1", "Formación académica", &mut errors);
        validate_calificacion(self.criterio_2, "criterio_2", "Experiencia", &mut errors);
        validate_calificacion(self.criterio_3, "criterio_3", "Materiales", &mut errors);
        validate_calificacion(self.criterio_4, "criterio_4", "Disponibilidad", &mut errors);
        validate_calificacion(self.criterio_5, "criterio_5", "Certificaciones", &mut errors);

        if self.aceptado != "si" && self.aceptado != "no" {
            errors.add(
                ValidationError::new("aceptado", "El dictamen debe ser \"si\" o \"no\""),
            );
        }

        errors.into_result()
    }
}

impl Validador for CrearEncuestaRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nombre_curso, "nombre_curso", "Nombre del curso", &mut errors);
        validate_fecha(self.fecha, "fecha", "La fecha", &mut errors);
        validate_required(&self.clave, "clave", "Clave", &mut errors);
        validate_required(&self.duracion, "duracion", "Duración", &mut errors);
        validate_required(&self.institucion, "institucion", "Institución", &mut errors);
        validate_required(&self.facilitador, "facilitador", "Facilitador", &mut errors);
        validate_required(&self.periodo, "periodo", "Periodo", &mut errors);
        validate_required(&self.horario, "horario", "Horario", &mut errors);

        if self.respuestas.len() != 20 {
            errors.add(ValidationError::new(
                "respuestas",
                format!(
                    "La encuesta está incompleta: se esperaban 20 respuestas y llegaron {}",
                    self.respuestas.len()
                ),
            ));
        } else {
            for (i, &r) in self.respuestas.iter().enumerate() {
                validate_calificacion(
                    r,
                    &format!("respuestas[{}]", i + 1),
                    &format!("La pregunta {}", i + 1),
                    &mut errors,
                );
            }
        }

        errors.into_result()
    }
}

impl Validador for CrearProgramaRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.periodo, "periodo", "Periodo", &mut errors);
        validate_required(&self.elaboro_nombre, "elaboro_nombre", "Elaboró", &mut errors);
        validate_fecha(
            self.elaboro_fecha,
            "elaboro_fecha",
            "La fecha de elaboración",
            &mut errors,
        );
        validate_required(&self.aprobo_nombre, "aprobo_nombre", "Aprobó", &mut errors);
        validate_fecha(
            self.aprobo_fecha,
            "aprobo_fecha",
            "La fecha de aprobación",
            &mut errors,
        );

        validar_posiciones(&self.filas, FILAS_PROGRAMA, "filas", &mut errors);
        for fila in &self.filas {
            let campo = |nombre: &str| format!("filas[{}].{}", fila.no, nombre);
            validate_required(&fila.nombre_curso, &campo("nombre_curso"), "Nombre del curso", &mut errors);
            validate_required(&fila.objetivo, &campo("objetivo"), "Objetivo", &mut errors);
            validate_required(
                &fila.periodo_realizacion,
                &campo("periodo_realizacion"),
                "Periodo de realización",
                &mut errors,
            );
            validate_required(&fila.lugar, &campo("lugar"), "Lugar", &mut errors);
            validate_required(&fila.instructor, &campo("instructor"), "Instructor", &mut errors);
            validate_required(&fila.dirigido_a, &campo("dirigido_a"), "Dirigido a", &mut errors);
        }

        errors.into_result()
    }
}

impl Validador for CrearDiagnosticoRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(
            &self.departamento_academico,
            "departamento_academico",
            "Departamento académico",
            &mut errors,
        );
        validate_required(&self.carrera, "carrera", "Carrera", &mut errors);
        validate_required(&self.dept_origen, "dept_origen", "Departamento de origen", &mut errors);
        validate_fecha(
            self.fecha_realizacion,
            "fecha_realizacion",
            "La fecha de realización",
            &mut errors,
        );
        validate_required(&self.jefe_nombre, "jefe_nombre", "Jefe de departamento", &mut errors);
        validate_required(
            &self.presidente_nombre,
            "presidente_nombre",
            "Presidente de academia",
            &mut errors,
        );
        validate_required(
            &self.secretario_nombre,
            "secretario_nombre",
            "Secretario de academia",
            &mut errors,
        );
        validate_fecha(
            self.fecha_concentrado,
            "fecha_concentrado",
            "La fecha del concentrado",
            &mut errors,
        );
        validate_required(&self.subdirector_nombre, "subdirector_nombre", "Subdirector", &mut errors);

        validar_posiciones(
            &self.asignaturas_genericas,
            FILAS_DIAGNOSTICO,
            "asignaturas_genericas",
            &mut errors,
        );
        validar_posiciones(
            &self.asignaturas_especialidad,
            FILAS_DIAGNOSTICO,
            "asignaturas_especialidad",
            &mut errors,
        );
        validar_posiciones(
            &self.actividades_docentes,
            FILAS_DIAGNOSTICO,
            "actividades_docentes",
            &mut errors,
        );
        validar_posiciones(
            &self.actividades_profesionales,
            FILAS_DIAGNOSTICO,
            "actividades_profesionales",
            &mut errors,
        );

        for (tabla, filas) in [
            ("asignaturas_genericas", &self.asignaturas_genericas),
            ("asignaturas_especialidad", &self.asignaturas_especialidad),
        ] {
            for fila in filas {
                let campo = |nombre: &str| format!("{}[{}].{}", tabla, fila.no, nombre);
                validate_required(&fila.asignatura, &campo("asignatura"), "Asignatura", &mut errors);
                validate_required(&fila.contenido, &campo("contenido"), "Contenido", &mut errors);
                validate_required(&fila.periodo, &campo("periodo"), "Periodo", &mut errors);
                validate_required(
                    &fila.instructor_propuesto,
                    &campo("instructor_propuesto"),
                    "Instructor propuesto",
                    &mut errors,
                );
            }
        }

        for (tabla, filas) in [
            ("actividades_docentes", &self.actividades_docentes),
            ("actividades_profesionales", &self.actividades_profesionales),
        ] {
            for fila in filas {
                let campo = |nombre: &str| format!("{}[{}].{}", tabla, fila.no, nombre);
                validate_required(&fila.actividad, &campo("actividad"), "Actividad", &mut errors);
                validate_required(
                    &fila.carrera_atendida,
                    &campo("carrera_atendida"),
                    "Carrera atendida",
                    &mut errors,
                );
                validate_required(&fila.fecha_evento, &campo("fecha_evento"), "Fecha del evento", &mut errors);
            }
        }

        errors.into_result()
    }
}

impl Validador for CrearCvRequest {
    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nombre, "nombre", "Nombre", &mut errors);
        validate_fecha(
            self.fecha_nacimiento,
            "fecha_nacimiento",
            "La fecha de nacimiento",
            &mut errors,
        );
        validate_curp(&self.curp, "curp", &mut errors);
        validate_rfc(&self.rfc, "rfc", &mut errors);
        validate_required(&self.telefono, "telefono", "Teléfono", &mut errors);
        validate_email(&self.correo, "correo", &mut errors);

        validar_posiciones(&self.experiencia_laboral, FILAS_CV, "experiencia_laboral", &mut errors);
        validar_posiciones(&self.experiencia_docente, FILAS_CV, "experiencia_docente", &mut errors);
        validar_posiciones(
            &self.productos_academicos,
            FILAS_CV,
            "productos_academicos",
            &mut errors,
        );
        validar_posiciones(
            &self.participacion_instructor,
            FILAS_CV,
            "participacion_instructor",
            &mut errors,
        );

        for fila in &self.experiencia_laboral {
            let campo = |nombre: &str| format!("experiencia_laboral[{}].{}", fila.no, nombre);
            validate_required(&fila.puesto, &campo("puesto"), "Puesto", &mut errors);
            validate_required(&fila.empresa, &campo("empresa"), "Empresa", &mut errors);
            validate_required(&fila.permanencia, &campo("permanencia"), "Permanencia", &mut errors);
            validate_required(&fila.actividades, &campo("actividades"), "Actividades", &mut errors);
        }
        for fila in &self.experiencia_docente {
            let campo = |nombre: &str| format!("experiencia_docente[{}].{}", fila.no, nombre);
            validate_required(&fila.materia, &campo("materia"), "Materia", &mut errors);
            validate_required(&fila.periodo, &campo("periodo"), "Periodo", &mut errors);
        }
        for fila in &self.productos_academicos {
            let campo = |nombre: &str| format!("productos_academicos[{}].{}", fila.no, nombre);
            validate_required(&fila.actividad, &campo("actividad"), "Actividad", &mut errors);
            validate_required(&fila.descripcion, &campo("descripcion"), "Descripción", &mut errors);
            validate_required(&fila.fecha, &campo("fecha"), "Fecha", &mut errors);
        }
        for fila in &self.participacion_instructor {
            let campo = |nombre: &str| format!("participacion_instructor[{}].{}", fila.no, nombre);
            validate_required(&fila.nombre_curso, &campo("nombre_curso"), "Nombre del curso", &mut errors);
            validate_required(&fila.institucion, &campo("institucion"), "Institución", &mut errors);
            validate_required(&fila.duracion, &campo("duracion"), "Duración", &mut errors);
            validate_required(&fila.fecha, &campo("fecha"), "Fecha", &mut errors);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn inscripcion_valida() -> CrearInscripcionRequest {
        CrearInscripcionRequest {
            fecha: NaiveDate::from_ymd_opt(2025, 8, 18),
            clave_curso: "TNM-2025-01".into(),
            nombre_curso: "Evaluación por competencias".into(),
            nombre_instructor: "M.C. Laura Fuentes".into(),
            periodo: "Agosto-Diciembre 2025".into(),
            horario: "9:00-14:00".into(),
            duracion: "30 horas".into(),
            genero: "mujer".into(),
            nombre_completo: "Sandra Patricia Ávila Ruiz".into(),
            rfc: "AARS800101AB1".into(),
            curp: "AARS800101MTSVZN08".into(),
            email: "savila@tecreynosa.edu.mx".into(),
            grado_estudios: "Maestría".into(),
            carrera: "Ingeniería Industrial".into(),
            instituto: "REYNOSA".into(),
            area_adscripcion: "Ciencias Básicas".into(),
            puesto: "Docente".into(),
            jefe_inmediato: "Ing. Raúl Medina".into(),
            telefono: "8991234567".into(),
            extension: None,
        }
    }

    #[test]
    fn inscripcion_completa_pasa() {
        assert!(inscripcion_valida().validar().is_ok());
    }

    #[test]
    fn inscripcion_sin_fecha_ni_rfc_acumula_errores() {
        let mut req = inscripcion_valida();
        req.fecha = None;
        req.rfc = "".into();
        let err = req.validar().unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn inscripcion_genero_invalido() {
        let mut req = inscripcion_valida();
        req.genero = "otro".into();
        let err = req.validar().unwrap_err();
        assert_eq!(err.errors()[0].field, "genero");
    }

    fn criterios_validos() -> CrearCriteriosRequest {
        CrearCriteriosRequest {
            nombre_instructor: "Dr. Hugo Cervantes".into(),
            fecha_evaluacion: NaiveDate::from_ymd_opt(2025, 3, 10),
            nombre_curso: "Docker para docentes".into(),
            empresa: "Capacitación TI del Norte".into(),
            criterio_1: 5,
            criterio_2: 4,
            criterio_3: 4,
            criterio_4: 5,
            criterio_5: 3,
            aceptado: "si".into(),
        }
    }

    #[test]
    fn criterios_calcula_total() {
        assert_eq!(criterios_validos().total_puntaje(), 21);
    }

    #[test]
    fn criterios_rechaza_puntaje_fuera_de_escala() {
        let mut req = criterios_validos();
        req.criterio_3 = 0;
        req.criterio_5 = 9;
        let err = req.validar().unwrap_err();
        assert_eq!(err.len(), 2);
    }

    fn encuesta_valida() -> CrearEncuestaRequest {
        CrearEncuestaRequest {
            nombre_curso: "Aula invertida".into(),
            fecha: NaiveDate::from_ymd_opt(2025, 6, 20),
            clave: "AI-25".into(),
            duracion: "20 horas".into(),
            institucion: "REYNOSA".into(),
            facilitador: "Lic. Nora Salas".into(),
            periodo: "Enero-Junio 2025".into(),
            horario: "16:00-20:00".into(),
            respuestas: vec![4; 20],
            comentarios: Some("Muy buen curso".into()),
        }
    }

    #[test]
    fn encuesta_completa_pasa() {
        assert!(encuesta_valida().validar().is_ok());
    }

    #[test]
    fn encuesta_exige_20_respuestas() {
        let mut req = encuesta_valida();
        req.respuestas = vec![4; 19];
        let err = req.validar().unwrap_err();
        assert_eq!(err.errors()[0].field, "respuestas");
    }

    #[test]
    fn encuesta_rechaza_respuesta_fuera_de_escala() {
        let mut req = encuesta_valida();
        req.respuestas[7] = 0;
        let err = req.validar().unwrap_err();
        assert_eq!(err.errors()[0].field, "respuestas[8]");
    }

    #[test]
    fn programa_rechaza_fila_duplicada() {
        let fila = ProgramaDetalleFila {
            no: 1,
            nombre_curso: "Curso".into(),
            objetivo: "Objetivo".into(),
            periodo_realizacion: "Marzo".into(),
            lugar: "Sala A".into(),
            horas: Some(20),
            instructor: "Instructor".into(),
            dirigido_a: "Docentes".into(),
            observaciones: None,
        };
        let req = CrearProgramaRequest {
            periodo: "2025".into(),
            elaboro_nombre: "Ing. Juan Pérez".into(),
            elaboro_fecha: NaiveDate::from_ymd_opt(2025, 1, 15),
            aprobo_nombre: "Lic. María López".into(),
            aprobo_fecha: NaiveDate::from_ymd_opt(2025, 1, 20),
            filas: vec![fila.clone(), fila],
        };
        let err = req.validar().unwrap_err();
        assert!(err.errors().iter().any(|e| e.field == "filas[1]"));
    }

    #[test]
    fn cv_valida_tablas_hijas() {
        let req = CrearCvRequest {
            nombre: "Elena Torres".into(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1985, 4, 2),
            curp: "TOEL850402MTSRRL05".into(),
            rfc: "TOEL850402QX9".into(),
            telefono: "8990001122".into(),
            correo: "etorres@tecreynosa.edu.mx".into(),
            lic_institucion: String::new(),
            lic_titulacion: String::new(),
            lic_cedula: String::new(),
            maestria_institucion: String::new(),
            maestria_titulacion: String::new(),
            maestria_cedula: String::new(),
            doc_institucion: String::new(),
            doc_titulacion: String::new(),
            doc_cedula: String::new(),
            esp_institucion: String::new(),
            esp_titulacion: String::new(),
            esp_cedula: String::new(),
            otros_institucion: String::new(),
            otros_titulacion: String::new(),
            otros_cedula: String::new(),
            experiencia_laboral: vec![ExperienciaLaboralFila {
                no: 4,
                puesto: "Docente".into(),
                empresa: "ITR".into(),
                permanencia: "2010-2020".into(),
                actividades: "Clases".into(),
            }],
            experiencia_docente: vec![],
            productos_academicos: vec![],
            participacion_instructor: vec![],
        };
        // fila 4 no cabe en una tabla de 3
        let err = req.validar().unwrap_err();
        assert!(err.errors().iter().any(|e| e.field.starts_with("experiencia_laboral")));
    }
}
