//! Database module - AppState and database operations
//!
//! This module is split into submodules for better separation of concerns,
//! one per entity family: `curso`, `profesor`, `documento` (flat documents),
//! `encuesta`, `programa`, `diagnostico`, `cv`, `asistencia`, `registro`
//! and `admin` for authentication.

mod admin;
mod asistencia;
mod curso;
mod cv;
mod diagnostico;
mod documento;
mod encuesta;
mod profesor;
mod programa;
mod registro;

pub use curso::CURSO_CACHE_KEY;

use moka::future::Cache;
use sqlx::PgPool;
use std::env;
use std::time::Duration;

use crate::curso::models::Curso;
use crate::documento::DescargaPendiente;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub curso_cache: Cache<String, Vec<Curso>>,
    /// One-shot pending-download markers, keyed per session.
    pub descargas: Cache<String, DescargaPendiente>,
}

impl AppState {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok(); // Load .env file
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(50)
            .min_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(900))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&database_url)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self::new_with_pool(pool))
    }

    pub fn new_with_pool(pool: PgPool) -> Self {
        let curso_cache = Cache::builder()
            .time_to_live(Duration::from_secs(10 * 60))
            .max_capacity(10)
            .build();

        let descargas = Cache::builder()
            .time_to_live(Duration::from_secs(10 * 60))
            .max_capacity(1_000)
            .build();

        AppState {
            pool,
            curso_cache,
            descargas,
        }
    }

    /// Stash the "download available" marker for a session key.
    pub async fn guardar_descarga(&self, clave_sesion: &str, descarga: DescargaPendiente) {
        self.descargas
            .insert(clave_sesion.to_string(), descarga)
            .await;
    }

    /// Consume the marker: the first read after a save returns it, any later
    /// read returns `None`.
    pub async fn tomar_descarga(&self, clave_sesion: &str) -> Option<DescargaPendiente> {
        let descarga = self.descargas.get(clave_sesion).await;
        if descarga.is_some() {
            self.descargas.invalidate(clave_sesion).await;
        }
        descarga
    }
}
