//! Survey statistics: per-question averages over the stored satisfaction
//! surveys, optionally filtered by period and facilitator.

pub mod handlers;

use crate::documento::models::EncuestaSatisfaccion;

pub const NUM_PREGUNTAS: usize = 20;

/// Chart labels "P1".."P20", order-stable by question number.
pub fn etiquetas() -> Vec<String> {
    (1..=NUM_PREGUNTAS).map(|i| format!("P{i}")).collect()
}

/// Mean of each question across the given surveys, rounded to 2 decimals.
///
/// No surveys means every average reports as 0, never as a missing value.
pub fn promedios(encuestas: &[EncuestaSatisfaccion]) -> Vec<f64> {
    if encuestas.is_empty() {
        return vec![0.0; NUM_PREGUNTAS];
    }

    let mut sumas = [0i64; NUM_PREGUNTAS];
    for encuesta in encuestas {
        for (i, respuesta) in encuesta.respuestas().iter().enumerate() {
            sumas[i] += *respuesta as i64;
        }
    }

    let total = encuestas.len() as f64;
    sumas
        .iter()
        .map(|&suma| ((suma as f64 / total) * 100.0).round() / 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encuesta(respuestas: [i32; 20]) -> EncuestaSatisfaccion {
        EncuestaSatisfaccion {
            id: 1,
            nombre_curso: "Curso".into(),
            fecha: None,
            clave: "C-1".into(),
            duracion: "20 horas".into(),
            institucion: "REYNOSA".into(),
            facilitador: "Facilitador".into(),
            periodo: "2025".into(),
            horario: "9:00-14:00".into(),
            q1: respuestas[0],
            q2: respuestas[1],
            q3: respuestas[2],
            q4: respuestas[3],
            q5: respuestas[4],
            q6: respuestas[5],
            q7: respuestas[6],
            q8: respuestas[7],
            q9: respuestas[8],
            q10: respuestas[9],
            q11: respuestas[10],
            q12: respuestas[11],
            q13: respuestas[12],
            q14: respuestas[13],
            q15: respuestas[14],
            q16: respuestas[15],
            q17: respuestas[16],
            q18: respuestas[17],
            q19: respuestas[18],
            q20: respuestas[19],
            comentarios: None,
        }
    }

    #[test]
    fn sin_encuestas_todo_cero() {
        let valores = promedios(&[]);
        assert_eq!(valores.len(), NUM_PREGUNTAS);
        assert!(valores.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn promedio_de_dos_encuestas() {
        let a = encuesta([5; 20]);
        let b = encuesta([4; 20]);
        let valores = promedios(&[a, b]);
        assert_eq!(valores, vec![4.5; 20]);
    }

    #[test]
    fn redondeo_a_dos_decimales() {
        let a = encuesta([5; 20]);
        let b = encuesta([4; 20]);
        let c = encuesta([4; 20]);
        let valores = promedios(&[a, b, c]);
        // 13/3 = 4.333...
        assert_eq!(valores[0], 4.33);
    }

    #[test]
    fn orden_estable_por_pregunta() {
        let mut respuestas = [3; 20];
        respuestas[0] = 1;
        respuestas[19] = 5;
        let valores = promedios(&[encuesta(respuestas)]);
        assert_eq!(valores[0], 1.0);
        assert_eq!(valores[19], 5.0);

        let labels = etiquetas();
        assert_eq!(labels.first().map(String::as_str), Some("P1"));
        assert_eq!(labels.last().map(String::as_str), Some("P20"));
    }
}
