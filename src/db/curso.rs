//! Course catalog database operations

use super::AppState;
use crate::curso::models::{ActualizarCursoRequest, CrearCursoRequest, Curso};

pub const CURSO_CACHE_KEY: &str = "cursos";

impl AppState {
    pub async fn get_all_cursos(&self) -> Result<Vec<Curso>, sqlx::Error> {
        if let Some(cursos) = self.curso_cache.get(CURSO_CACHE_KEY).await {
            return Ok(cursos);
        }

        let cursos = sqlx::query_as::<_, Curso>(
            "SELECT id, nombre, clave, instructor, periodo, estado FROM cursos ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        self.curso_cache
            .insert(CURSO_CACHE_KEY.to_string(), cursos.clone())
            .await;

        Ok(cursos)
    }

    pub async fn get_curso_by_id(&self, id: i64) -> Result<Option<Curso>, sqlx::Error> {
        sqlx::query_as::<_, Curso>(
            "SELECT id, nombre, clave, instructor, periodo, estado FROM cursos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Exact-match lookup by the course's unique key.
    pub async fn get_curso_by_clave(&self, clave: &str) -> Result<Option<Curso>, sqlx::Error> {
        sqlx::query_as::<_, Curso>(
            "SELECT id, nombre, clave, instructor, periodo, estado FROM cursos WHERE clave = $1",
        )
        .bind(clave)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create_curso(&self, req: &CrearCursoRequest) -> Result<Curso, sqlx::Error> {
        let curso = sqlx::query_as::<_, Curso>(
            r#"
            INSERT INTO cursos (nombre, clave, instructor, periodo, estado)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nombre, clave, instructor, periodo, estado
            "#,
        )
        .bind(&req.nombre)
        .bind(&req.clave)
        .bind(&req.instructor)
        .bind(&req.periodo)
        .bind(req.estado.as_deref().unwrap_or("disponible"))
        .fetch_one(&self.pool)
        .await?;

        self.curso_cache.invalidate(CURSO_CACHE_KEY).await;
        Ok(curso)
    }

    pub async fn update_curso(
        &self,
        id: i64,
        req: &ActualizarCursoRequest,
    ) -> Result<Option<Curso>, sqlx::Error> {
        let curso = sqlx::query_as::<_, Curso>(
            r#"
            UPDATE cursos SET
                nombre = COALESCE($2, nombre),
                instructor = COALESCE($3, instructor),
                periodo = COALESCE($4, periodo),
                estado = COALESCE($5, estado)
            WHERE id = $1
            RETURNING id, nombre, clave, instructor, periodo, estado
            "#,
        )
        .bind(id)
        .bind(req.nombre.as_deref())
        .bind(req.instructor.as_deref())
        .bind(req.periodo.as_deref())
        .bind(req.estado.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        if curso.is_some() {
            self.curso_cache.invalidate(CURSO_CACHE_KEY).await;
        }
        Ok(curso)
    }

    pub async fn delete_curso(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cursos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            self.curso_cache.invalidate(CURSO_CACHE_KEY).await;
            return Ok(true);
        }
        Ok(false)
    }
}
