//! Dispatch table properties: the set of document types is closed, every
//! entry resolves a template and a filename, and unknown keys never parse.

use capacitacion_docente_server::documento::{DescargaPendiente, DocTipo};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn todas_las_claves_registradas() {
    let claves: Vec<&str> = DocTipo::TODOS.iter().map(|t| t.clave()).collect();
    assert_eq!(
        claves,
        vec![
            "inscripcion",
            "ficha",
            "criterios",
            "encuesta",
            "programa",
            "diagnostico",
            "cv",
            "asistencia",
            "registro"
        ]
    );
}

#[test]
fn claves_sin_duplicados() {
    let claves: HashSet<&str> = DocTipo::TODOS.iter().map(|t| t.clave()).collect();
    assert_eq!(claves.len(), DocTipo::TODOS.len());
}

#[test]
fn roundtrip_clave_a_tipo() {
    for tipo in DocTipo::TODOS {
        let parsed = DocTipo::from_str(tipo.clave()).unwrap();
        assert_eq!(parsed, tipo);
    }
}

#[test]
fn clave_desconocida_no_parsea() {
    for clave in ["", "factura", "asistencias", "INSCRIPCION", "cv "] {
        assert!(DocTipo::from_str(clave).is_err(), "parsed: {clave:?}");
    }
}

#[test]
fn cada_tipo_tiene_plantilla_typ() {
    for tipo in DocTipo::TODOS {
        let descriptor = tipo.descriptor();
        assert!(descriptor.plantilla.ends_with(".typ"));
        assert_eq!(descriptor.clave, tipo.clave());
    }
}

#[test]
fn plantillas_existen_en_static() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    for tipo in DocTipo::TODOS {
        let ruta = dir.join(tipo.descriptor().plantilla);
        assert!(ruta.exists(), "falta {}", ruta.display());
    }
}

#[test]
fn nombre_de_archivo_por_tipo_e_id() {
    for tipo in DocTipo::TODOS {
        let nombre = tipo.nombre_archivo(42);
        assert_eq!(nombre, format!("{}_42.pdf", tipo.clave()));
    }
}

#[test]
fn cupos_de_cuadricula_documentados() {
    // 10 filas del programa, 4 tablas de 3 en diagnóstico y CV, 23
    // participantes de asistencia y 15 filas del registro.
    assert_eq!(DocTipo::Programa.descriptor().cupos, &[10]);
    assert_eq!(DocTipo::Diagnostico.descriptor().cupos, &[3, 3, 3, 3]);
    assert_eq!(DocTipo::Cv.descriptor().cupos, &[3, 3, 3, 3]);
    assert_eq!(DocTipo::Asistencia.descriptor().cupos, &[23]);
    assert_eq!(DocTipo::Registro.descriptor().cupos, &[15]);
}

#[test]
fn marcador_de_descarga_serializa_con_url() {
    let descarga = DescargaPendiente::new(DocTipo::Ficha, 9);
    let json = serde_json::to_value(&descarga).unwrap();
    assert_eq!(json["tipo"], "ficha");
    assert_eq!(json["id"], 9);
    assert_eq!(json["url"], "/pdf/ficha/9");
}
