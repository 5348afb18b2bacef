use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod asistencia;
pub mod auth;
pub mod curso;
pub mod db;
pub mod documento;
pub mod estadisticas;
pub mod pdf;
pub mod profesor;
pub mod registro;
pub mod validation;

pub use crate::db::AppState;
use crate::validation::{ValidationError, ValidationErrors};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Field-level validation failure: the submission was rejected whole and
/// nothing was persisted.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: Vec<ValidationError>,
    pub timestamp: String,
}

impl ValidationErrorResponse {
    pub fn new(message: &str, errors: ValidationErrors) -> Self {
        Self {
            error: "ValidationError".to_string(),
            message: message.to_string(),
            errors: errors.into_errors(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Landing endpoint.
async fn inicio() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "servicio": "capacitacion-docente-server",
        "version": env!("CARGO_PKG_VERSION"),
        "documentacion": "/swagger-ui/"
    }))
}

pub async fn run() -> std::io::Result<()> {
    unsafe {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::auth::handlers::login,
            crate::auth::handlers::refresh_token,
            crate::auth::handlers::logout,
            crate::documento::handlers::crear_inscripcion,
            crate::documento::handlers::crear_ficha,
            crate::documento::handlers::crear_criterios,
            crate::documento::handlers::crear_encuesta,
            crate::documento::handlers::crear_programa,
            crate::documento::handlers::crear_diagnostico,
            crate::documento::handlers::crear_cv,
            crate::documento::handlers::descarga_pendiente,
            crate::registro::handlers::crear_registro,
            crate::asistencia::handlers::entrada_asistencia,
            crate::asistencia::handlers::get_asistencia,
            crate::asistencia::handlers::mis_listas,
            crate::asistencia::handlers::guardar_asistencia,
            crate::curso::handlers::get_all_cursos,
            crate::curso::handlers::create_curso,
            crate::curso::handlers::update_curso,
            crate::curso::handlers::delete_curso,
            crate::curso::handlers::buscar_curso,
            crate::profesor::handlers::buscar_profesor,
            crate::estadisticas::handlers::estadisticas,
            crate::pdf::handlers::descargar_pdf
        ),
        components(
            schemas(
                ErrorResponse,
                ValidationErrorResponse,
                crate::validation::ValidationError,
                crate::documento::DocTipo,
                crate::documento::DescargaPendiente,
                crate::documento::handlers::DocumentoCreadoResponse,
                crate::documento::handlers::DescargaPendienteResponse,
                crate::documento::models::CrearInscripcionRequest,
                crate::documento::models::CrearFichaRequest,
                crate::documento::models::CrearCriteriosRequest,
                crate::documento::models::CrearEncuestaRequest,
                crate::documento::models::CrearProgramaRequest,
                crate::documento::models::CrearDiagnosticoRequest,
                crate::documento::models::CrearCvRequest,
                crate::registro::models::CrearRegistroRequest,
                crate::asistencia::models::GuardarAsistenciaRequest,
                crate::asistencia::models::GuardarAsistenciaResponse,
                crate::asistencia::models::AsistenciaEntradaResponse,
                crate::asistencia::models::ListaConParticipantes,
                crate::asistencia::models::ListaAsistencia,
                crate::curso::models::Curso,
                crate::curso::models::CrearCursoRequest,
                crate::curso::models::ActualizarCursoRequest,
                crate::curso::models::BusquedaCursoResponse,
                crate::profesor::models::BusquedaProfesorResponse,
                crate::estadisticas::handlers::EstadisticasResponse,
                crate::auth::model::LoginRequest,
                crate::auth::model::TokenResponse,
                crate::auth::model::RefreshRequest,
            )
        ),
        tags(
            (name = "Documentos", description = "Captura de formatos y descarga de PDF."),
            (name = "Asistencia", description = "Listas de asistencia con ciclo borrador/finalizado."),
            (name = "Cursos", description = "Catálogo de cursos y búsqueda por clave."),
            (name = "Profesores", description = "Búsqueda de profesores por RFC o CURP."),
            (name = "Estadísticas", description = "Promedios de la encuesta de opinión."),
            (name = "Authentication", description = "Inicio y cierre de sesión.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let app_state = match AppState::new().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to connect to database. Please check your DATABASE_URL in .env and ensure the database is running. Error: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("capacitacion_docente_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(web::resource("/").route(web::get().to(inicio)))
            .service(
                web::scope("/api")
                    .configure(auth::handlers::config)
                    .configure(documento::handlers::config)
                    .configure(registro::handlers::config)
                    .configure(asistencia::handlers::config)
                    .configure(curso::handlers::config)
                    .configure(profesor::handlers::config)
                    .configure(estadisticas::handlers::config),
            )
            .service(
                web::resource("/pdf/{tipo}/{id}")
                    .route(web::get().to(pdf::handlers::descargar_pdf)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .max_connections(25000)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
