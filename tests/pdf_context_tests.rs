//! Context-builder properties: reconstructed grids always carry the full
//! slot count, stored values come through verbatim, empty slots render
//! blank, and Typst-hostile characters are escaped.

use capacitacion_docente_server::asistencia::models::{AsistenciaParticipante, ListaAsistencia};
use capacitacion_docente_server::documento::models::{
    EncuestaSatisfaccion, ProgramaDetalle, ProgramaInstitucional,
};
use capacitacion_docente_server::pdf::context::{
    contexto_asistencia, contexto_encuesta, contexto_programa, contexto_registro,
};
use capacitacion_docente_server::registro::models::{RegistroFila, RegistroGeneral};
use chrono::{NaiveDate, Utc};

fn programa() -> ProgramaInstitucional {
    ProgramaInstitucional {
        id: 1,
        periodo: "Enero-Junio 2025".into(),
        elaboro_nombre: "Ing. Juan Pérez".into(),
        elaboro_fecha: NaiveDate::from_ymd_opt(2025, 1, 15),
        aprobo_nombre: "Lic. María López".into(),
        aprobo_fecha: NaiveDate::from_ymd_opt(2025, 1, 20),
        fecha_creacion: Utc::now(),
    }
}

fn detalle(no: i32, curso: &str) -> ProgramaDetalle {
    ProgramaDetalle {
        id: no as i64,
        programa_id: 1,
        no_consecutivo: no,
        nombre_curso: curso.into(),
        objetivo: "Actualizar al personal docente".into(),
        periodo_realizacion: "Marzo".into(),
        lugar: "Sala de usos múltiples".into(),
        horas: Some(30),
        instructor: "M.C. Laura Fuentes".into(),
        dirigido_a: "Docentes de ciencias básicas".into(),
        observaciones: None,
    }
}

#[test]
fn programa_rellena_diez_filas() {
    let contexto = contexto_programa(&programa(), &[detalle(2, "Docker para docentes")]);

    // Siempre 10 posiciones, llenas o no.
    for no in 1..=10 {
        assert!(contexto.contains(&format!("no: \"{no}\"")), "falta fila {no}");
    }
    assert!(contexto.contains("Docker para docentes"));
    assert!(contexto.contains("30"));
    // Las posiciones sin fila quedan en blanco.
    assert_eq!(contexto.matches("Docker para docentes").count(), 1);
}

#[test]
fn programa_posiciones_duplicadas_gana_la_ultima() {
    let filas = vec![detalle(1, "Curso viejo"), detalle(1, "Curso nuevo")];
    let contexto = contexto_programa(&programa(), &filas);
    assert!(contexto.contains("Curso nuevo"));
    assert!(!contexto.contains("Curso viejo"));
}

#[test]
fn programa_posiciones_fuera_de_cupo_se_omiten() {
    let contexto = contexto_programa(&programa(), &[detalle(11, "Fila extraviada")]);
    assert!(!contexto.contains("Fila extraviada"));
}

#[test]
fn programa_escapa_comillas() {
    let mut fila = detalle(1, "Taller \"especial\"");
    fila.observaciones = Some("línea 1\nlínea 2".into());
    let contexto = contexto_programa(&programa(), &[fila]);
    assert!(contexto.contains(r#"Taller \"especial\""#));
    assert!(contexto.contains(r"línea 1\nlínea 2"));
}

fn encuesta() -> EncuestaSatisfaccion {
    EncuestaSatisfaccion {
        id: 7,
        nombre_curso: "Aula invertida".into(),
        fecha: NaiveDate::from_ymd_opt(2025, 6, 20),
        clave: "AI-25".into(),
        duracion: "20 horas".into(),
        institucion: "REYNOSA".into(),
        facilitador: "Lic. Nora Salas".into(),
        periodo: "Enero-Junio 2025".into(),
        horario: "16:00-20:00".into(),
        q1: 1,
        q2: 2,
        q3: 3,
        q4: 4,
        q5: 5,
        q6: 4,
        q7: 4,
        q8: 4,
        q9: 4,
        q10: 4,
        q11: 4,
        q12: 4,
        q13: 4,
        q14: 4,
        q15: 4,
        q16: 4,
        q17: 4,
        q18: 4,
        q19: 4,
        q20: 5,
        comentarios: None,
    }
}

#[test]
fn encuesta_con_veinte_respuestas_y_fecha_formateada() {
    let contexto = contexto_encuesta(&encuesta());
    assert!(contexto.contains("20 de junio de 2025"));
    // 20 respuestas en orden; la primera y la última son reconocibles.
    assert!(contexto.contains(r#"respuestas: ("1", "2", "3", "4", "5""#));
    assert!(contexto.ends_with(")") || contexto.contains("comentarios"));
}

fn lista() -> ListaAsistencia {
    ListaAsistencia {
        id: 3,
        usuario: "instructor1".into(),
        estado: "finalizado".into(),
        hoja_actual: "1".into(),
        hoja_total: "1".into(),
        instituto: "REYNOSA".into(),
        clave_curso: "TNM-2025-01".into(),
        folio: "F-77".into(),
        nombre_curso: "Evaluación por competencias".into(),
        instructor: "M.C. Laura Fuentes".into(),
        periodo: "Agosto-Diciembre 2025".into(),
        duracion: "30 horas".into(),
        horario: "9:00-14:00".into(),
        instructor_rfc: "FULA800101AB1".into(),
        instructor_curp: "FULA800101MTSNRR02".into(),
        coordinador_rfc: "XAXX010101AB1".into(),
        coordinador_curp: "XAXX010101HNERNN09".into(),
        fecha_creacion: Utc::now(),
    }
}

fn participante(no: i32, nombre: &str) -> AsistenciaParticipante {
    AsistenciaParticipante {
        id: no as i64,
        lista_id: 3,
        no_consecutivo: no,
        nombre: nombre.into(),
        rfc: "VEPR900101AB1".into(),
        puesto: "Docente".into(),
        sexo: "M".into(),
        asist_l: "X".into(),
        asist_m1: "X".into(),
        asist_m2: String::new(),
        asist_j: "X".into(),
        asist_v: String::new(),
        concluyo: "SI".into(),
    }
}

#[test]
fn asistencia_siempre_23_posiciones() {
    let contexto = contexto_asistencia(&lista(), &[participante(23, "Rosa Vela")]);
    for no in 1..=23 {
        assert!(contexto.contains(&format!("no: \"{no}\"")), "falta fila {no}");
    }
    assert!(contexto.contains("Rosa Vela"));
    assert!(contexto.contains("F-77"));
}

#[test]
fn registro_marca_formacion_con_x() {
    let registro = RegistroGeneral {
        id: 5,
        periodo: "2025".into(),
        jefe_desarrollo: "Ing. Juan Pérez".into(),
        subdirector: "Lic. María López".into(),
        fecha_creacion: Utc::now(),
    };
    let fila = RegistroFila {
        id: 1,
        registro_id: 5,
        no_consecutivo: 1,
        instituto: "REYNOSA".into(),
        nombre_curso: "Curso de actualización".into(),
        es_formacion: true,
        es_actualizacion: false,
        instructor: "M.C. Laura Fuentes".into(),
        fecha_inicio: NaiveDate::from_ymd_opt(2025, 2, 3),
        fecha_termino: NaiveDate::from_ymd_opt(2025, 2, 7),
        horas: Some(30),
        modalidad: "Presencial".into(),
        docentes_inscritos: 25,
        docentes_terminaron: 23,
        docentes_acreditados: 20,
        tipo: "FD".into(),
    };

    let contexto = contexto_registro(&registro, &[fila]);
    assert!(contexto.contains(r#"es_formacion: "X""#));
    assert!(contexto.contains(r#"es_actualizacion: """#));
    assert!(contexto.contains("3 de febrero de 2025"));
    // 15 posiciones siempre.
    for no in 1..=15 {
        assert!(contexto.contains(&format!("no: \"{no}\"")), "falta fila {no}");
    }
}
