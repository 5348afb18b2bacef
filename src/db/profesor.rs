//! Instructor registry lookups
//!
//! The registry itself is maintained outside this service; here we only
//! resolve autocomplete queries.

use super::AppState;
use crate::profesor::models::Profesor;

impl AppState {
    /// Case-insensitive lookup by RFC or CURP.
    ///
    /// Exactly one matching row resolves; zero or several matches both read
    /// as "not found" to the caller.
    pub async fn buscar_profesor(&self, query: &str) -> Result<Option<Profesor>, sqlx::Error> {
        let mut encontrados = sqlx::query_as::<_, Profesor>(
            r#"
            SELECT id, nombre, apellido_paterno, apellido_materno, rfc, curp, cct, municipio
            FROM profesores
            WHERE LOWER(rfc) = LOWER($1) OR LOWER(curp) = LOWER($1)
            LIMIT 2
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        if encontrados.len() == 1 {
            Ok(encontrados.pop())
        } else {
            Ok(None)
        }
    }
}
