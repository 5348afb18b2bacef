//! Database operations for the flat documents: enrollment sheet, technical
//! sheet and instructor selection criteria. Documents with child tables live
//! in their own submodules.

use super::AppState;
use crate::documento::models::{
    CrearCriteriosRequest, CrearFichaRequest, CrearInscripcionRequest, CriteriosSeleccion,
    FichaTecnica, Inscripcion,
};

impl AppState {
    pub async fn crear_inscripcion(
        &self,
        req: &CrearInscripcionRequest,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO inscripciones (
                fecha, clave_curso, nombre_curso, nombre_instructor, periodo, horario,
                duracion, genero, nombre_completo, rfc, curp, email, grado_estudios,
                carrera, instituto, area_adscripcion, puesto, jefe_inmediato, telefono,
                extension
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING id
            "#,
        )
        .bind(req.fecha)
        .bind(&req.clave_curso)
        .bind(&req.nombre_curso)
        .bind(&req.nombre_instructor)
        .bind(&req.periodo)
        .bind(&req.horario)
        .bind(&req.duracion)
        .bind(&req.genero)
        .bind(&req.nombre_completo)
        .bind(&req.rfc)
        .bind(&req.curp)
        .bind(&req.email)
        .bind(&req.grado_estudios)
        .bind(&req.carrera)
        .bind(&req.instituto)
        .bind(&req.area_adscripcion)
        .bind(&req.puesto)
        .bind(&req.jefe_inmediato)
        .bind(&req.telefono)
        .bind(req.extension.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_inscripcion(&self, id: i64) -> Result<Option<Inscripcion>, sqlx::Error> {
        sqlx::query_as::<_, Inscripcion>("SELECT * FROM inscripciones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn crear_ficha(&self, req: &CrearFichaRequest) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO fichas_tecnicas (
                nombre_curso, instructor, introduccion, justificacion, objetivo_general,
                desc_duracion, desc_contenido, desc_materiales, desc_criterios,
                resultados, fuentes_informacion
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&req.nombre_curso)
        .bind(&req.instructor)
        .bind(&req.introduccion)
        .bind(&req.justificacion)
        .bind(&req.objetivo_general)
        .bind(&req.desc_duracion)
        .bind(&req.desc_contenido)
        .bind(&req.desc_materiales)
        .bind(&req.desc_criterios)
        .bind(&req.resultados)
        .bind(&req.fuentes_informacion)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_ficha(&self, id: i64) -> Result<Option<FichaTecnica>, sqlx::Error> {
        sqlx::query_as::<_, FichaTecnica>("SELECT * FROM fichas_tecnicas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn crear_criterios(&self, req: &CrearCriteriosRequest) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO criterios_seleccion (
                nombre_instructor, fecha_evaluacion, nombre_curso, empresa,
                criterio_1, criterio_2, criterio_3, criterio_4, criterio_5,
                total_puntaje, aceptado
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&req.nombre_instructor)
        .bind(req.fecha_evaluacion)
        .bind(&req.nombre_curso)
        .bind(&req.empresa)
        .bind(req.criterio_1)
        .bind(req.criterio_2)
        .bind(req.criterio_3)
        .bind(req.criterio_4)
        .bind(req.criterio_5)
        .bind(req.total_puntaje())
        .bind(&req.aceptado)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_criterios(&self, id: i64) -> Result<Option<CriteriosSeleccion>, sqlx::Error> {
        sqlx::query_as::<_, CriteriosSeleccion>("SELECT * FROM criterios_seleccion WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
