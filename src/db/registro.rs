//! General training registry: one header plus up to fifteen course rows.
//!
//! The whole submission commits in a single transaction; a failing row means
//! nothing persists, so there is never an orphaned header to clean up.

use super::AppState;
use crate::registro::models::{CrearRegistroRequest, RegistroFila, RegistroGeneral};

impl AppState {
    pub async fn crear_registro(&self, req: &CrearRegistroRequest) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let registro_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO registros_generales (periodo, jefe_desarrollo, subdirector)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&req.periodo)
        .bind(&req.jefe_desarrollo)
        .bind(&req.subdirector)
        .fetch_one(&mut *tx)
        .await?;

        for fila in &req.filas {
            sqlx::query(
                r#"
                INSERT INTO registro_filas (
                    registro_id, no_consecutivo, instituto, nombre_curso,
                    es_formacion, es_actualizacion, instructor, fecha_inicio,
                    fecha_termino, horas, modalidad, docentes_inscritos,
                    docentes_terminaron, docentes_acreditados, tipo
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                "#,
            )
            .bind(registro_id)
            .bind(fila.no)
            .bind(&fila.instituto)
            .bind(&fila.nombre_curso)
            .bind(fila.es_formacion)
            .bind(fila.es_actualizacion)
            .bind(&fila.instructor)
            .bind(fila.fecha_inicio)
            .bind(fila.fecha_termino)
            .bind(fila.horas)
            .bind(&fila.modalidad)
            .bind(fila.docentes_inscritos)
            .bind(fila.docentes_terminaron)
            .bind(fila.docentes_acreditados)
            .bind(&fila.tipo)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(registro_id)
    }

    pub async fn get_registro(&self, id: i64) -> Result<Option<RegistroGeneral>, sqlx::Error> {
        sqlx::query_as::<_, RegistroGeneral>("SELECT * FROM registros_generales WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_registro_filas(
        &self,
        registro_id: i64,
    ) -> Result<Vec<RegistroFila>, sqlx::Error> {
        sqlx::query_as::<_, RegistroFila>(
            "SELECT * FROM registro_filas WHERE registro_id = $1 ORDER BY no_consecutivo",
        )
        .bind(registro_id)
        .fetch_all(&self.pool)
        .await
    }
}
