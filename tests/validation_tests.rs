//! Submission validation: all-or-nothing semantics at the validator level.
//! Every problem in a submission is reported at once, with the field (and
//! row, for child tables) that caused it.

use capacitacion_docente_server::documento::models::*;
use capacitacion_docente_server::documento::validators::Validador;
use chrono::NaiveDate;

fn fecha(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn diagnostico_base() -> CrearDiagnosticoRequest {
    CrearDiagnosticoRequest {
        departamento_academico: "Ciencias Básicas".into(),
        carrera: "Ingeniería Industrial".into(),
        dept_origen: "Desarrollo Académico".into(),
        fecha_realizacion: fecha(2025, 3, 12),
        jefe_nombre: "Ing. Raúl Medina".into(),
        presidente_nombre: "M.C. Laura Fuentes".into(),
        secretario_nombre: "Lic. Nora Salas".into(),
        fecha_concentrado: fecha(2025, 3, 20),
        subdirector_nombre: "Lic. María López".into(),
        jefe1_nombre: String::new(),
        jefe1_depto: String::new(),
        jefe2_nombre: String::new(),
        jefe2_depto: String::new(),
        jefe3_nombre: String::new(),
        jefe3_depto: String::new(),
        jefe4_nombre: String::new(),
        jefe4_depto: String::new(),
        asignaturas_genericas: vec![],
        asignaturas_especialidad: vec![],
        actividades_docentes: vec![],
        actividades_profesionales: vec![],
    }
}

#[test]
fn diagnostico_sin_tablas_es_valido() {
    // Las tablas hijas pueden venir vacías; el PDF rellena en blanco.
    assert!(diagnostico_base().validar().is_ok());
}

#[test]
fn diagnostico_acumula_errores_de_varias_tablas() {
    let mut req = diagnostico_base();
    req.asignaturas_genericas = vec![AsignaturaFila {
        no: 9, // fuera del cupo de 3
        asignatura: "Cálculo".into(),
        contenido: "Derivadas".into(),
        num_profesores: Some(4),
        periodo: "2025".into(),
        instructor_propuesto: "Dr. Cervantes".into(),
    }];
    req.actividades_docentes = vec![ActividadFila {
        no: 1,
        actividad: String::new(), // requerido
        carrera_atendida: "Industrial".into(),
        fecha_evento: "Mayo 2025".into(),
    }];

    let errores = req.validar().unwrap_err();
    let campos: Vec<&str> = errores.errors().iter().map(|e| e.field.as_str()).collect();
    assert!(campos.iter().any(|c| c.starts_with("asignaturas_genericas[9]")));
    assert!(campos.iter().any(|c| c == &"actividades_docentes[1].actividad"));
}

#[test]
fn diagnostico_fila_duplicada_en_tabla_b() {
    let fila = AsignaturaFila {
        no: 2,
        asignatura: "Redes".into(),
        contenido: "Enrutamiento".into(),
        num_profesores: None,
        periodo: "2025".into(),
        instructor_propuesto: "Externo".into(),
    };
    let mut req = diagnostico_base();
    req.asignaturas_especialidad = vec![fila.clone(), fila];

    let errores = req.validar().unwrap_err();
    assert!(errores
        .errors()
        .iter()
        .any(|e| e.field == "asignaturas_especialidad[2]" && e.message.contains("repetido")));
}

#[test]
fn ficha_reporta_todos_los_campos_faltantes() {
    let req = CrearFichaRequest {
        nombre_curso: "Curso".into(),
        instructor: String::new(),
        introduccion: String::new(),
        justificacion: "Porque sí".into(),
        objetivo_general: "Mejorar".into(),
        desc_duracion: "30 horas".into(),
        desc_contenido: "Temas".into(),
        desc_materiales: "Proyector".into(),
        desc_criterios: "Asistencia".into(),
        resultados: "Constancia".into(),
        fuentes_informacion: "Bibliografía".into(),
    };

    let errores = req.validar().unwrap_err();
    assert_eq!(errores.len(), 2);
}

#[test]
fn encuesta_valida_todas_las_respuestas() {
    let mut respuestas = vec![4; 20];
    respuestas[0] = 0;
    respuestas[19] = 9;

    let req = CrearEncuestaRequest {
        nombre_curso: "Aula invertida".into(),
        fecha: fecha(2025, 6, 20),
        clave: "AI-25".into(),
        duracion: "20 horas".into(),
        institucion: "REYNOSA".into(),
        facilitador: "Lic. Nora Salas".into(),
        periodo: "Enero-Junio 2025".into(),
        horario: "16:00-20:00".into(),
        respuestas,
        comentarios: None,
    };

    let errores = req.validar().unwrap_err();
    assert_eq!(errores.len(), 2);
    assert!(errores.errors().iter().any(|e| e.field == "respuestas[1]"));
    assert!(errores.errors().iter().any(|e| e.field == "respuestas[20]"));
}

#[test]
fn criterios_con_dictamen_invalido() {
    let req = CrearCriteriosRequest {
        nombre_instructor: "Dr. Hugo Cervantes".into(),
        fecha_evaluacion: fecha(2025, 3, 10),
        nombre_curso: "Docker para docentes".into(),
        empresa: "Capacitación TI".into(),
        criterio_1: 5,
        criterio_2: 4,
        criterio_3: 4,
        criterio_4: 5,
        criterio_5: 3,
        aceptado: "quizas".into(),
    };

    let errores = req.validar().unwrap_err();
    assert_eq!(errores.errors()[0].field, "aceptado");
}

#[test]
fn mensaje_resumen_cuenta_errores() {
    let req = CrearFichaRequest {
        nombre_curso: String::new(),
        instructor: String::new(),
        introduccion: String::new(),
        justificacion: String::new(),
        objetivo_general: String::new(),
        desc_duracion: String::new(),
        desc_contenido: String::new(),
        desc_materiales: String::new(),
        desc_criterios: String::new(),
        resultados: String::new(),
        fuentes_informacion: String::new(),
    };

    let errores = req.validar().unwrap_err();
    assert!(errores.to_message().contains("11 errores"));
}
