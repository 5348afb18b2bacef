//! Satisfaction survey database operations, including the aggregation
//! queries behind the statistics dashboard.

use super::AppState;
use crate::documento::models::{CrearEncuestaRequest, EncuestaSatisfaccion};

impl AppState {
    pub async fn crear_encuesta(&self, req: &CrearEncuestaRequest) -> Result<i64, sqlx::Error> {
        // The validator guarantees exactly 20 answers; missing slots would be
        // a programming error upstream, not user input.
        let r = |i: usize| req.respuestas.get(i).copied().unwrap_or(0);

        let mut query = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO encuestas_satisfaccion (
                nombre_curso, fecha, clave, duracion, institucion, facilitador,
                periodo, horario,
                q1, q2, q3, q4, q5, q6, q7, q8, q9, q10,
                q11, q12, q13, q14, q15, q16, q17, q18, q19, q20,
                comentarios
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                    $9, $10, $11, $12, $13, $14, $15, $16, $17, $18,
                    $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
                    $29)
            RETURNING id
            "#,
        )
        .bind(&req.nombre_curso)
        .bind(req.fecha)
        .bind(&req.clave)
        .bind(&req.duracion)
        .bind(&req.institucion)
        .bind(&req.facilitador)
        .bind(&req.periodo)
        .bind(&req.horario);

        for i in 0..20 {
            query = query.bind(r(i));
        }

        query
            .bind(req.comentarios.as_deref())
            .fetch_one(&self.pool)
            .await
    }

    pub async fn get_encuesta(&self, id: i64) -> Result<Option<EncuestaSatisfaccion>, sqlx::Error> {
        sqlx::query_as::<_, EncuestaSatisfaccion>(
            "SELECT * FROM encuestas_satisfaccion WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Surveys matching the optional equality filters, both combinable.
    pub async fn get_encuestas_filtradas(
        &self,
        periodo: Option<&str>,
        facilitador: Option<&str>,
    ) -> Result<Vec<EncuestaSatisfaccion>, sqlx::Error> {
        sqlx::query_as::<_, EncuestaSatisfaccion>(
            r#"
            SELECT * FROM encuestas_satisfaccion
            WHERE ($1::text IS NULL OR periodo = $1)
              AND ($2::text IS NULL OR facilitador = $2)
            ORDER BY id
            "#,
        )
        .bind(periodo)
        .bind(facilitador)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_periodos_encuesta(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT periodo FROM encuestas_satisfaccion ORDER BY periodo",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_facilitadores_encuesta(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT facilitador FROM encuestas_satisfaccion ORDER BY facilitador",
        )
        .fetch_all(&self.pool)
        .await
    }
}
