//! Needs diagnostic: parent header plus four categorized sub-tables
//! (subject tables a/b, activity tables c/d), written atomically.

use super::AppState;
use crate::documento::models::{
    ActividadFila, AsignaturaFila, CrearDiagnosticoRequest, DiagnosticoActividad,
    DiagnosticoAsignatura, DiagnosticoNecesidades, TABLA_DOCENTE, TABLA_ESPECIALIDAD,
    TABLA_GENERICA, TABLA_PROFESIONAL,
};
use sqlx::{Postgres, Transaction};

async fn insertar_asignaturas(
    tx: &mut Transaction<'_, Postgres>,
    diagnostico_id: i64,
    tipo_tabla: &str,
    filas: &[AsignaturaFila],
) -> Result<(), sqlx::Error> {
    for fila in filas {
        sqlx::query(
            r#"
            INSERT INTO diagnostico_asignaturas (
                diagnostico_id, tipo_tabla, no_consecutivo, asignatura, contenido,
                num_profesores, periodo, instructor_propuesto
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(diagnostico_id)
        .bind(tipo_tabla)
        .bind(fila.no)
        .bind(&fila.asignatura)
        .bind(&fila.contenido)
        .bind(fila.num_profesores)
        .bind(&fila.periodo)
        .bind(&fila.instructor_propuesto)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insertar_actividades(
    tx: &mut Transaction<'_, Postgres>,
    diagnostico_id: i64,
    tipo_tabla: &str,
    filas: &[ActividadFila],
) -> Result<(), sqlx::Error> {
    for fila in filas {
        sqlx::query(
            r#"
            INSERT INTO diagnostico_actividades (
                diagnostico_id, tipo_tabla, no_consecutivo, actividad,
                carrera_atendida, fecha_evento
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(diagnostico_id)
        .bind(tipo_tabla)
        .bind(fila.no)
        .bind(&fila.actividad)
        .bind(&fila.carrera_atendida)
        .bind(&fila.fecha_evento)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

impl AppState {
    pub async fn crear_diagnostico(
        &self,
        req: &CrearDiagnosticoRequest,
    ) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let diagnostico_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO diagnosticos_necesidades (
                departamento_academico, carrera, dept_origen, fecha_realizacion,
                jefe_nombre, presidente_nombre, secretario_nombre,
                fecha_concentrado, subdirector_nombre,
                jefe1_nombre, jefe1_depto, jefe2_nombre, jefe2_depto,
                jefe3_nombre, jefe3_depto, jefe4_nombre, jefe4_depto
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                    $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id
            "#,
        )
        .bind(&req.departamento_academico)
        .bind(&req.carrera)
        .bind(&req.dept_origen)
        .bind(req.fecha_realizacion)
        .bind(&req.jefe_nombre)
        .bind(&req.presidente_nombre)
        .bind(&req.secretario_nombre)
        .bind(req.fecha_concentrado)
        .bind(&req.subdirector_nombre)
        .bind(&req.jefe1_nombre)
        .bind(&req.jefe1_depto)
        .bind(&req.jefe2_nombre)
        .bind(&req.jefe2_depto)
        .bind(&req.jefe3_nombre)
        .bind(&req.jefe3_depto)
        .bind(&req.jefe4_nombre)
        .bind(&req.jefe4_depto)
        .fetch_one(&mut *tx)
        .await?;

        insertar_asignaturas(&mut tx, diagnostico_id, TABLA_GENERICA, &req.asignaturas_genericas)
            .await?;
        insertar_asignaturas(
            &mut tx,
            diagnostico_id,
            TABLA_ESPECIALIDAD,
            &req.asignaturas_especialidad,
        )
        .await?;
        insertar_actividades(&mut tx, diagnostico_id, TABLA_DOCENTE, &req.actividades_docentes)
            .await?;
        insertar_actividades(
            &mut tx,
            diagnostico_id,
            TABLA_PROFESIONAL,
            &req.actividades_profesionales,
        )
        .await?;

        tx.commit().await?;
        Ok(diagnostico_id)
    }

    pub async fn get_diagnostico(
        &self,
        id: i64,
    ) -> Result<Option<DiagnosticoNecesidades>, sqlx::Error> {
        sqlx::query_as::<_, DiagnosticoNecesidades>(
            "SELECT * FROM diagnosticos_necesidades WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_diagnostico_asignaturas(
        &self,
        diagnostico_id: i64,
        tipo_tabla: &str,
    ) -> Result<Vec<DiagnosticoAsignatura>, sqlx::Error> {
        sqlx::query_as::<_, DiagnosticoAsignatura>(
            r#"
            SELECT * FROM diagnostico_asignaturas
            WHERE diagnostico_id = $1 AND tipo_tabla = $2
            ORDER BY no_consecutivo
            "#,
        )
        .bind(diagnostico_id)
        .bind(tipo_tabla)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_diagnostico_actividades(
        &self,
        diagnostico_id: i64,
        tipo_tabla: &str,
    ) -> Result<Vec<DiagnosticoActividad>, sqlx::Error> {
        sqlx::query_as::<_, DiagnosticoActividad>(
            r#"
            SELECT * FROM diagnostico_actividades
            WHERE diagnostico_id = $1 AND tipo_tabla = $2
            ORDER BY no_consecutivo
            "#,
        )
        .bind(diagnostico_id)
        .bind(tipo_tabla)
        .fetch_all(&self.pool)
        .await
    }
}
