//! Request/response model shapes as the clients see them.

use capacitacion_docente_server::asistencia::models::{EstadoLista, GuardarAsistenciaRequest};
use capacitacion_docente_server::curso::models::BusquedaCursoResponse;
use capacitacion_docente_server::documento::models::{CrearCvRequest, CrearProgramaRequest};
use capacitacion_docente_server::profesor::models::BusquedaProfesorResponse;
use capacitacion_docente_server::registro::models::CrearRegistroRequest;

#[test]
fn programa_request_desde_json() {
    let json = r#"{
        "periodo": "Enero-Junio 2025",
        "elaboro_nombre": "Ing. Juan Pérez",
        "elaboro_fecha": "2025-01-15",
        "aprobo_nombre": "Lic. María López",
        "aprobo_fecha": "2025-01-20",
        "filas": [
            {
                "no": 1,
                "nombre_curso": "Docker para docentes",
                "objetivo": "Actualizar al personal",
                "periodo_realizacion": "Marzo",
                "lugar": "Sala A",
                "horas": 30,
                "instructor": "M.C. Laura Fuentes",
                "dirigido_a": "Docentes"
            }
        ]
    }"#;

    let request: CrearProgramaRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.filas.len(), 1);
    assert_eq!(request.filas[0].no, 1);
    assert_eq!(request.filas[0].horas, Some(30));
    assert!(request.filas[0].observaciones.is_none());
}

#[test]
fn programa_request_sin_filas_usa_default() {
    let json = r#"{
        "periodo": "2025",
        "elaboro_nombre": "Ing. Juan Pérez",
        "elaboro_fecha": "2025-01-15",
        "aprobo_nombre": "Lic. María López",
        "aprobo_fecha": "2025-01-20"
    }"#;

    let request: CrearProgramaRequest = serde_json::from_str(json).unwrap();
    assert!(request.filas.is_empty());
}

#[test]
fn cv_request_con_tablas_parciales() {
    let json = r#"{
        "nombre": "Elena Torres",
        "fecha_nacimiento": "1985-04-02",
        "curp": "TOEL850402MTSRRL05",
        "rfc": "TOEL850402QX9",
        "telefono": "8990001122",
        "correo": "etorres@tecreynosa.edu.mx",
        "lic_institucion": "ITR",
        "experiencia_docente": [
            { "no": 1, "materia": "Cálculo diferencial", "periodo": "2019-2024" }
        ]
    }"#;

    let request: CrearCvRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.lic_institucion, "ITR");
    assert!(request.maestria_institucion.is_empty());
    assert_eq!(request.experiencia_docente.len(), 1);
    assert!(request.experiencia_laboral.is_empty());
}

#[test]
fn registro_request_con_defaults() {
    let json = r#"{ "filas": [] }"#;
    let request: CrearRegistroRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.periodo, "Periodo Actual");
    assert!(request.jefe_desarrollo.is_empty());
}

#[test]
fn asistencia_request_estado_en_minusculas() {
    let json = r#"{
        "estado": "finalizado",
        "clave_curso": "TNM-2025-01",
        "folio": "F-77",
        "nombre_curso": "Evaluación por competencias",
        "instructor": "M.C. Laura Fuentes",
        "periodo": "2025",
        "duracion": "30 horas",
        "horario": "9:00-14:00",
        "instructor_rfc": "FULA800101AB1",
        "instructor_curp": "FULA800101MTSNRR02",
        "coordinador_rfc": "XAXX010101AB1",
        "coordinador_curp": "XAXX010101HNERNN09",
        "participantes": [
            { "no": 1, "nombre": "Rosa Vela", "sexo": "M", "asist_l": "X" }
        ]
    }"#;

    let request: GuardarAsistenciaRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.estado, EstadoLista::Finalizado);
    assert!(request.id.is_none());
    assert_eq!(request.hoja_actual, "1");
    assert_eq!(request.instituto, "REYNOSA");
    // Campos de participante no enviados quedan vacíos.
    assert!(request.participantes[0].rfc.is_empty());
    assert_eq!(request.participantes[0].asist_l, "X");
}

#[test]
fn asistencia_estado_invalido_no_deserializa() {
    let json = r#"{ "estado": "archivado", "clave_curso": "C", "folio": "F",
        "nombre_curso": "N", "instructor": "I", "periodo": "P", "duracion": "D",
        "horario": "H", "instructor_rfc": "R", "instructor_curp": "C",
        "coordinador_rfc": "R", "coordinador_curp": "C" }"#;
    assert!(serde_json::from_str::<GuardarAsistenciaRequest>(json).is_err());
}

#[test]
fn busqueda_no_encontrada_omite_campos() {
    let json = serde_json::to_value(BusquedaCursoResponse::no_encontrado()).unwrap();
    assert_eq!(json, serde_json::json!({ "found": false }));

    let json = serde_json::to_value(BusquedaProfesorResponse::no_encontrado()).unwrap();
    assert_eq!(json, serde_json::json!({ "found": false }));
}
