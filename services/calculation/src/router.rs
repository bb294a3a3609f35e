use crate::config::ServerConfig;
use crate::handlers::{calculation, info};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(config: &ServerConfig) -> Router {
    let calculation_routes = Router::new()
        .route("/add", post(calculation::add))
        .route("/subtract", post(calculation::subtract))
        .route("/multiply", post(calculation::multiply))
        .route("/divide", post(calculation::divide))
        .route("/randomvalue", get(calculation::random_value))
        .route("/randomvalueinrange", post(calculation::random_value_in_range));

    let info_routes = Router::new()
        .route("/helloworld", get(info::hello_world))
        .route("/time", get(info::server_time));

    let router = Router::new()
        .nest("/calculation", calculation_routes)
        .nest("/api/v1", info_routes);

    let router = if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
