//! Document catalog - the closed set of document types and their dispatch
//! descriptors.
//!
//! Every document the system knows how to persist and render as PDF is one
//! variant of [`DocTipo`]. Adding a document type means adding one variant
//! and one descriptor entry; an unknown key in a URL never gets past
//! `FromStr`.

pub mod grid;
pub mod handlers;
pub mod models;
pub mod validators;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Closed set of document-type keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocTipo {
    Inscripcion,
    Ficha,
    Criterios,
    Encuesta,
    Programa,
    Diagnostico,
    Cv,
    Asistencia,
    Registro,
}

/// Dispatch entry for one document type: URL key, Typst template and the
/// fixed row counts of its child tables (empty for flat documents).
#[derive(Debug)]
pub struct DocDescriptor {
    pub clave: &'static str,
    pub plantilla: &'static str,
    pub cupos: &'static [usize],
}

/// Fixed grid sizes, one place only.
pub const FILAS_PROGRAMA: usize = 10;
pub const FILAS_DIAGNOSTICO: usize = 3;
pub const FILAS_CV: usize = 3;
pub const FILAS_ASISTENCIA: usize = 23;
pub const FILAS_REGISTRO: usize = 15;

static DESCRIPTORES: [DocDescriptor; 9] = [
    DocDescriptor {
        clave: "inscripcion",
        plantilla: "inscripcion.typ",
        cupos: &[],
    },
    DocDescriptor {
        clave: "ficha",
        plantilla: "ficha.typ",
        cupos: &[],
    },
    DocDescriptor {
        clave: "criterios",
        plantilla: "criterios.typ",
        cupos: &[],
    },
    DocDescriptor {
        clave: "encuesta",
        plantilla: "encuesta.typ",
        cupos: &[],
    },
    DocDescriptor {
        clave: "programa",
        plantilla: "programa.typ",
        cupos: &[FILAS_PROGRAMA],
    },
    DocDescriptor {
        clave: "diagnostico",
        plantilla: "diagnostico.typ",
        cupos: &[
            FILAS_DIAGNOSTICO,
            FILAS_DIAGNOSTICO,
            FILAS_DIAGNOSTICO,
            FILAS_DIAGNOSTICO,
        ],
    },
    DocDescriptor {
        clave: "cv",
        plantilla: "cv.typ",
        cupos: &[FILAS_CV, FILAS_CV, FILAS_CV, FILAS_CV],
    },
    DocDescriptor {
        clave: "asistencia",
        plantilla: "asistencia.typ",
        cupos: &[FILAS_ASISTENCIA],
    },
    DocDescriptor {
        clave: "registro",
        plantilla: "registro.typ",
        cupos: &[FILAS_REGISTRO],
    },
];

impl DocTipo {
    pub const TODOS: [DocTipo; 9] = [
        DocTipo::Inscripcion,
        DocTipo::Ficha,
        DocTipo::Criterios,
        DocTipo::Encuesta,
        DocTipo::Programa,
        DocTipo::Diagnostico,
        DocTipo::Cv,
        DocTipo::Asistencia,
        DocTipo::Registro,
    ];

    pub fn descriptor(self) -> &'static DocDescriptor {
        &DESCRIPTORES[self as usize]
    }

    pub fn clave(self) -> &'static str {
        self.descriptor().clave
    }

    /// Download filename for a rendered document.
    pub fn nombre_archivo(self, id: i64) -> String {
        format!("{}_{}.pdf", self.clave(), id)
    }
}

impl fmt::Display for DocTipo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clave())
    }
}

impl FromStr for DocTipo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocTipo::TODOS
            .iter()
            .copied()
            .find(|t| t.clave() == s)
            .ok_or(())
    }
}

/// One-shot "download available" marker stashed after a successful save and
/// consumed on the next poll.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DescargaPendiente {
    pub tipo: DocTipo,
    pub id: i64,
    pub url: String,
}

impl DescargaPendiente {
    pub fn new(tipo: DocTipo, id: i64) -> Self {
        Self {
            tipo,
            id,
            url: format!("/pdf/{}/{}", tipo, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_acepta_las_nueve_claves() {
        for tipo in DocTipo::TODOS {
            assert_eq!(tipo.clave().parse::<DocTipo>(), Ok(tipo));
        }
    }

    #[test]
    fn from_str_rechaza_claves_desconocidas() {
        assert!("factura".parse::<DocTipo>().is_err());
        assert!("".parse::<DocTipo>().is_err());
        assert!("INSCRIPCION".parse::<DocTipo>().is_err());
    }

    #[test]
    fn descriptores_alineados_con_el_enum() {
        // DESCRIPTORES is indexed by discriminant; keep them in lockstep.
        for tipo in DocTipo::TODOS {
            assert_eq!(tipo.descriptor().clave, tipo.clave());
            assert!(tipo.descriptor().plantilla.ends_with(".typ"));
        }
    }

    #[test]
    fn cupos_por_tipo() {
        assert_eq!(DocTipo::Programa.descriptor().cupos, &[10]);
        assert_eq!(DocTipo::Asistencia.descriptor().cupos, &[23]);
        assert_eq!(DocTipo::Registro.descriptor().cupos, &[15]);
        assert_eq!(DocTipo::Cv.descriptor().cupos.len(), 4);
        assert!(DocTipo::Inscripcion.descriptor().cupos.is_empty());
    }

    #[test]
    fn nombre_archivo_sigue_el_patron() {
        assert_eq!(DocTipo::Encuesta.nombre_archivo(7), "encuesta_7.pdf");
        assert_eq!(DocTipo::Cv.nombre_archivo(123), "cv_123.pdf");
    }

    #[test]
    fn descarga_pendiente_url() {
        let d = DescargaPendiente::new(DocTipo::Programa, 42);
        assert_eq!(d.url, "/pdf/programa/42");
    }
}
