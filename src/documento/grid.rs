//! Fixed-length grid reconstruction for child rows.
//!
//! Child rows carry a caller-assigned `no_consecutivo` starting at 1. The
//! printed formats always show a fixed number of rows, so rendering
//! rebuilds a full grid where unfilled positions come out blank. Duplicate
//! positions resolve last-wins here; the write path rejects them before
//! they ever reach storage.

use crate::validation::{ValidationError, ValidationErrors};
use std::collections::HashMap;

/// A child row that knows its position inside the parent's grid.
pub trait Posicionada {
    fn no_consecutivo(&self) -> i32;
}

/// Rebuild a `cupo`-slot grid from stored rows.
///
/// Slot `i` (1-based) holds the row whose position is `i`, or `None` when no
/// row matches. Rows with positions outside `1..=cupo` are dropped.
pub fn reconstruir<T: Posicionada + Clone>(filas: &[T], cupo: usize) -> Vec<Option<T>> {
    let mut por_posicion: HashMap<i32, &T> = HashMap::with_capacity(filas.len());
    for fila in filas {
        por_posicion.insert(fila.no_consecutivo(), fila);
    }

    (1..=cupo as i32)
        .map(|i| por_posicion.get(&i).copied().cloned())
        .collect()
}

/// Write-time position check: every row must land in `1..=cupo` and no two
/// rows may share a position.
pub fn validar_posiciones<T: Posicionada>(
    filas: &[T],
    cupo: usize,
    campo: &str,
    errors: &mut ValidationErrors,
) {
    let mut vistas: HashMap<i32, usize> = HashMap::new();

    for fila in filas {
        let no = fila.no_consecutivo();
        if no < 1 || no > cupo as i32 {
            errors.add(ValidationError::new(
                format!("{}[{}]", campo, no),
                format!("La fila {} está fuera del rango 1 a {}", no, cupo),
            ));
        }
        *vistas.entry(no).or_insert(0) += 1;
    }

    for (no, veces) in vistas {
        if veces > 1 {
            errors.add(ValidationError::new(
                format!("{}[{}]", campo, no),
                format!("El número consecutivo {} está repetido", no),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Fila {
        no: i32,
        valor: &'static str,
    }

    impl Posicionada for Fila {
        fn no_consecutivo(&self) -> i32 {
            self.no
        }
    }

    #[test]
    fn grid_siempre_tiene_cupo_posiciones() {
        let filas = vec![Fila { no: 2, valor: "b" }];
        let grid = reconstruir(&filas, 5);
        assert_eq!(grid.len(), 5);
        assert!(grid[0].is_none());
        assert_eq!(grid[1].as_ref().unwrap().valor, "b");
        assert!(grid[2].is_none());
    }

    #[test]
    fn grid_vacio_para_cero_filas() {
        let grid = reconstruir::<Fila>(&[], 23);
        assert_eq!(grid.len(), 23);
        assert!(grid.iter().all(Option::is_none));
    }

    #[test]
    fn posiciones_fuera_de_rango_se_descartan() {
        let filas = vec![
            Fila { no: 1, valor: "a" },
            Fila { no: 99, valor: "x" },
            Fila { no: 0, valor: "y" },
        ];
        let grid = reconstruir(&filas, 3);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].as_ref().unwrap().valor, "a");
        assert!(grid[1].is_none());
        assert!(grid[2].is_none());
    }

    #[test]
    fn posiciones_duplicadas_gana_la_ultima() {
        let filas = vec![Fila { no: 1, valor: "vieja" }, Fila { no: 1, valor: "nueva" }];
        let grid = reconstruir(&filas, 2);
        assert_eq!(grid[0].as_ref().unwrap().valor, "nueva");
    }

    #[test]
    fn validar_rechaza_duplicados_y_fuera_de_rango() {
        let filas = vec![
            Fila { no: 1, valor: "a" },
            Fila { no: 1, valor: "b" },
            Fila { no: 30, valor: "c" },
        ];
        let mut errors = ValidationErrors::new();
        validar_posiciones(&filas, 23, "participantes", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn validar_acepta_grid_completo() {
        let filas: Vec<Fila> = (1..=10).map(|no| Fila { no, valor: "x" }).collect();
        let mut errors = ValidationErrors::new();
        validar_posiciones(&filas, 10, "filas", &mut errors);
        assert!(errors.is_empty());
    }
}
