// Matchday API v0.1
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod errors;
mod routes;
mod services;

use config::AppConfig;
use routes::AppState;
use services::football::FootballClient;
use services::venues::VenueDirectory;
use services::weather::WeatherClient;

/// OpenAPI document for the Matchday API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Matchday API",
        version = "0.1.0",
        description = "Weather-enriched fixture API for European football. \
            Fetches upcoming fixtures from football-data.org, attaches an \
            OpenWeatherMap forecast for each venue at kickoff time, and serves \
            recent team form, league standings and top scorers.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Matches", description = "Upcoming fixtures with venue weather"),
        (name = "Teams", description = "Team lookup and recent form"),
        (name = "Competitions", description = "League standings and top scorers"),
    ),
    paths(
        routes::health::health_check,
        routes::matches::get_matches,
        routes::team_form::get_team_form,
        routes::standings::get_standings,
        routes::scorers::get_scorers,
    ),
    components(
        schemas(
            routes::health::HealthResponse,
            services::enrich::EnrichedFixture,
            services::football::FixtureStatus,
            services::weather::MatchWeather,
            services::weather::WeatherSummary,
            services::weather::UnavailableReason,
            routes::team_form::TeamFormResponse,
            services::form::MatchResult,
            services::form::Outcome,
            routes::standings::StandingsResponse,
            routes::standings::StandingRow,
            routes::scorers::ScorersResponse,
            routes::scorers::ScorerRow,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchday_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    if config.football_api_key.is_none() {
        tracing::warn!("FOOTBALL_API_KEY is not set; fixture endpoints will return errors");
    }
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; weather enrichment is unavailable");
    }

    // Build shared application state
    let app_state = AppState {
        football: FootballClient::new(config.football_api_key.clone()),
        weather: WeatherClient::new(config.openweather_api_key.clone()),
        venues: VenueDirectory::with_default_table(),
        competitions: config.competitions.clone(),
    };

    // CORS: read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/api/v1/health", get(routes::health::health_check))
        .route("/api/v1/matches", get(routes::matches::get_matches))
        .route("/api/v1/team-form", get(routes::team_form::get_team_form))
        .route("/api/v1/standings", get(routes::standings::get_standings))
        .route("/api/v1/scorers", get(routes::scorers::get_scorers))
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
