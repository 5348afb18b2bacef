//! Attendance list database operations.
//!
//! Drafts are upserted in place and their participant rows are fully
//! replaced on every save; concurrent saves of the same draft race last
//! write wins at this layer.

use super::AppState;
use crate::asistencia::models::{AsistenciaParticipante, GuardarAsistenciaRequest, ListaAsistencia};

impl AppState {
    pub async fn get_lista_asistencia(
        &self,
        id: i64,
    ) -> Result<Option<ListaAsistencia>, sqlx::Error> {
        sqlx::query_as::<_, ListaAsistencia>("SELECT * FROM listas_asistencia WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_lista_de_usuario(
        &self,
        id: i64,
        usuario: &str,
    ) -> Result<Option<ListaAsistencia>, sqlx::Error> {
        sqlx::query_as::<_, ListaAsistencia>(
            "SELECT * FROM listas_asistencia WHERE id = $1 AND usuario = $2",
        )
        .bind(id)
        .bind(usuario)
        .fetch_optional(&self.pool)
        .await
    }

    /// Most recent open draft for the user, if any.
    pub async fn get_borrador_reciente(
        &self,
        usuario: &str,
    ) -> Result<Option<ListaAsistencia>, sqlx::Error> {
        sqlx::query_as::<_, ListaAsistencia>(
            r#"
            SELECT * FROM listas_asistencia
            WHERE usuario = $1 AND estado = 'borrador'
            ORDER BY fecha_creacion DESC
            LIMIT 1
            "#,
        )
        .bind(usuario)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_listas_de_usuario(
        &self,
        usuario: &str,
    ) -> Result<Vec<ListaAsistencia>, sqlx::Error> {
        sqlx::query_as::<_, ListaAsistencia>(
            "SELECT * FROM listas_asistencia WHERE usuario = $1 ORDER BY fecha_creacion DESC",
        )
        .bind(usuario)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_participantes(
        &self,
        lista_id: i64,
    ) -> Result<Vec<AsistenciaParticipante>, sqlx::Error> {
        sqlx::query_as::<_, AsistenciaParticipante>(
            "SELECT * FROM asistencia_participantes WHERE lista_id = $1 ORDER BY no_consecutivo",
        )
        .bind(lista_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Create or update a list and replace its participant rows, atomically.
    ///
    /// Returns `Ok(None)` when an explicit id does not exist or belongs to a
    /// different user; nothing is written in that case.
    pub async fn guardar_lista(
        &self,
        usuario: &str,
        estado: &str,
        req: &GuardarAsistenciaRequest,
    ) -> Result<Option<i64>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let lista_id = match req.id {
            Some(id) => {
                let actualizado = sqlx::query_scalar::<_, i64>(
                    r#"
                    UPDATE listas_asistencia SET
                        estado = $3, hoja_actual = $4, hoja_total = $5, instituto = $6,
                        clave_curso = $7, folio = $8, nombre_curso = $9, instructor = $10,
                        periodo = $11, duracion = $12, horario = $13,
                        instructor_rfc = $14, instructor_curp = $15,
                        coordinador_rfc = $16, coordinador_curp = $17
                    WHERE id = $1 AND usuario = $2
                    RETURNING id
                    "#,
                )
                .bind(id)
                .bind(usuario)
                .bind(estado)
                .bind(&req.hoja_actual)
                .bind(&req.hoja_total)
                .bind(&req.instituto)
                .bind(&req.clave_curso)
                .bind(&req.folio)
                .bind(&req.nombre_curso)
                .bind(&req.instructor)
                .bind(&req.periodo)
                .bind(&req.duracion)
                .bind(&req.horario)
                .bind(&req.instructor_rfc)
                .bind(&req.instructor_curp)
                .bind(&req.coordinador_rfc)
                .bind(&req.coordinador_curp)
                .fetch_optional(&mut *tx)
                .await?;

                match actualizado {
                    Some(id) => id,
                    None => return Ok(None),
                }
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO listas_asistencia (
                        usuario, estado, hoja_actual, hoja_total, instituto, clave_curso,
                        folio, nombre_curso, instructor, periodo, duracion, horario,
                        instructor_rfc, instructor_curp, coordinador_rfc, coordinador_curp
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                            $13, $14, $15, $16)
                    RETURNING id
                    "#,
                )
                .bind(usuario)
                .bind(estado)
                .bind(&req.hoja_actual)
                .bind(&req.hoja_total)
                .bind(&req.instituto)
                .bind(&req.clave_curso)
                .bind(&req.folio)
                .bind(&req.nombre_curso)
                .bind(&req.instructor)
                .bind(&req.periodo)
                .bind(&req.duracion)
                .bind(&req.horario)
                .bind(&req.instructor_rfc)
                .bind(&req.instructor_curp)
                .bind(&req.coordinador_rfc)
                .bind(&req.coordinador_curp)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        sqlx::query("DELETE FROM asistencia_participantes WHERE lista_id = $1")
            .bind(lista_id)
            .execute(&mut *tx)
            .await?;

        for fila in &req.participantes {
            sqlx::query(
                r#"
                INSERT INTO asistencia_participantes (
                    lista_id, no_consecutivo, nombre, rfc, puesto, sexo,
                    asist_l, asist_m1, asist_m2, asist_j, asist_v, concluyo
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(lista_id)
            .bind(fila.no)
            .bind(&fila.nombre)
            .bind(&fila.rfc)
            .bind(&fila.puesto)
            .bind(&fila.sexo)
            .bind(&fila.asist_l)
            .bind(&fila.asist_m1)
            .bind(&fila.asist_m2)
            .bind(&fila.asist_j)
            .bind(&fila.asist_v)
            .bind(&fila.concluyo)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(lista_id))
    }
}
