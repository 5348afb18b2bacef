//! Curriculum vitae: personal/academic header plus four experience tables,
//! written atomically.

use super::AppState;
use crate::documento::models::{
    CrearCvRequest, CurriculumVitae, CvExperienciaDocente, CvExperienciaLaboral,
    CvParticipacionInstructor, CvProductoAcademico,
};

impl AppState {
    pub async fn crear_cv(&self, req: &CrearCvRequest) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let cv_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO curriculums (
                nombre, fecha_nacimiento, curp, rfc, telefono, correo,
                lic_institucion, lic_titulacion, lic_cedula,
                maestria_institucion, maestria_titulacion, maestria_cedula,
                doc_institucion, doc_titulacion, doc_cedula,
                esp_institucion, esp_titulacion, esp_cedula,
                otros_institucion, otros_titulacion, otros_cedula
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING id
            "#,
        )
        .bind(&req.nombre)
        .bind(req.fecha_nacimiento)
        .bind(&req.curp)
        .bind(&req.rfc)
        .bind(&req.telefono)
        .bind(&req.correo)
        .bind(&req.lic_institucion)
        .bind(&req.lic_titulacion)
        .bind(&req.lic_cedula)
        .bind(&req.maestria_institucion)
        .bind(&req.maestria_titulacion)
        .bind(&req.maestria_cedula)
        .bind(&req.doc_institucion)
        .bind(&req.doc_titulacion)
        .bind(&req.doc_cedula)
        .bind(&req.esp_institucion)
        .bind(&req.esp_titulacion)
        .bind(&req.esp_cedula)
        .bind(&req.otros_institucion)
        .bind(&req.otros_titulacion)
        .bind(&req.otros_cedula)
        .fetch_one(&mut *tx)
        .await?;

        for fila in &req.experiencia_laboral {
            sqlx::query(
                r#"
                INSERT INTO cv_experiencias_laborales (
                    cv_id, no_consecutivo, puesto, empresa, permanencia, actividades
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(cv_id)
            .bind(fila.no)
            .bind(&fila.puesto)
            .bind(&fila.empresa)
            .bind(&fila.permanencia)
            .bind(&fila.actividades)
            .execute(&mut *tx)
            .await?;
        }

        for fila in &req.experiencia_docente {
            sqlx::query(
                r#"
                INSERT INTO cv_experiencias_docentes (cv_id, no_consecutivo, materia, periodo)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(cv_id)
            .bind(fila.no)
            .bind(&fila.materia)
            .bind(&fila.periodo)
            .execute(&mut *tx)
            .await?;
        }

        for fila in &req.productos_academicos {
            sqlx::query(
                r#"
                INSERT INTO cv_productos_academicos (
                    cv_id, no_consecutivo, actividad, descripcion, fecha
                )
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(cv_id)
            .bind(fila.no)
            .bind(&fila.actividad)
            .bind(&fila.descripcion)
            .bind(&fila.fecha)
            .execute(&mut *tx)
            .await?;
        }

        for fila in &req.participacion_instructor {
            sqlx::query(
                r#"
                INSERT INTO cv_participaciones_instructor (
                    cv_id, no_consecutivo, nombre_curso, institucion, duracion, fecha
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(cv_id)
            .bind(fila.no)
            .bind(&fila.nombre_curso)
            .bind(&fila.institucion)
            .bind(&fila.duracion)
            .bind(&fila.fecha)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(cv_id)
    }

    pub async fn get_cv(&self, id: i64) -> Result<Option<CurriculumVitae>, sqlx::Error> {
        sqlx::query_as::<_, CurriculumVitae>("SELECT * FROM curriculums WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_cv_experiencias_laborales(
        &self,
        cv_id: i64,
    ) -> Result<Vec<CvExperienciaLaboral>, sqlx::Error> {
        sqlx::query_as::<_, CvExperienciaLaboral>(
            "SELECT * FROM cv_experiencias_laborales WHERE cv_id = $1 ORDER BY no_consecutivo",
        )
        .bind(cv_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_cv_experiencias_docentes(
        &self,
        cv_id: i64,
    ) -> Result<Vec<CvExperienciaDocente>, sqlx::Error> {
        sqlx::query_as::<_, CvExperienciaDocente>(
            "SELECT * FROM cv_experiencias_docentes WHERE cv_id = $1 ORDER BY no_consecutivo",
        )
        .bind(cv_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_cv_productos_academicos(
        &self,
        cv_id: i64,
    ) -> Result<Vec<CvProductoAcademico>, sqlx::Error> {
        sqlx::query_as::<_, CvProductoAcademico>(
            "SELECT * FROM cv_productos_academicos WHERE cv_id = $1 ORDER BY no_consecutivo",
        )
        .bind(cv_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_cv_participaciones_instructor(
        &self,
        cv_id: i64,
    ) -> Result<Vec<CvParticipacionInstructor>, sqlx::Error> {
        sqlx::query_as::<_, CvParticipacionInstructor>(
            "SELECT * FROM cv_participaciones_instructor WHERE cv_id = $1 ORDER BY no_consecutivo",
        )
        .bind(cv_id)
        .fetch_all(&self.pool)
        .await
    }
}
