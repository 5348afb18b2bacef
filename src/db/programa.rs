//! Institutional training program: parent header plus up to ten course rows,
//! written atomically.

use super::AppState;
use crate::documento::models::{CrearProgramaRequest, ProgramaDetalle, ProgramaInstitucional};

impl AppState {
    /// Persist the program header and all its rows in one transaction.
    pub async fn crear_programa(&self, req: &CrearProgramaRequest) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let programa_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO programas_institucionales (
                periodo, elaboro_nombre, elaboro_fecha, aprobo_nombre, aprobo_fecha
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&req.periodo)
        .bind(&req.elaboro_nombre)
        .bind(req.elaboro_fecha)
        .bind(&req.aprobo_nombre)
        .bind(req.aprobo_fecha)
        .fetch_one(&mut *tx)
        .await?;

        for fila in &req.filas {
            sqlx::query(
                r#"
                INSERT INTO programa_detalles (
                    programa_id, no_consecutivo, nombre_curso, objetivo,
                    periodo_realizacion, lugar, horas, instructor, dirigido_a,
                    observaciones
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(programa_id)
            .bind(fila.no)
            .bind(&fila.nombre_curso)
            .bind(&fila.objetivo)
            .bind(&fila.periodo_realizacion)
            .bind(&fila.lugar)
            .bind(fila.horas)
            .bind(&fila.instructor)
            .bind(&fila.dirigido_a)
            .bind(fila.observaciones.as_deref())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(programa_id)
    }

    pub async fn get_programa(&self, id: i64) -> Result<Option<ProgramaInstitucional>, sqlx::Error> {
        sqlx::query_as::<_, ProgramaInstitucional>(
            "SELECT * FROM programas_institucionales WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_programa_detalles(
        &self,
        programa_id: i64,
    ) -> Result<Vec<ProgramaDetalle>, sqlx::Error> {
        sqlx::query_as::<_, ProgramaDetalle>(
            "SELECT * FROM programa_detalles WHERE programa_id = $1 ORDER BY no_consecutivo",
        )
        .bind(programa_id)
        .fetch_all(&self.pool)
        .await
    }
}
