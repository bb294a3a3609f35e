use axum::Json;
use calc_types::prelude::ServerTime;
use chrono::Local;

pub const HELLO_WORLD: &str = "Hello Hello!";

pub async fn hello_world() -> &'static str {
    HELLO_WORLD
}

pub async fn server_time() -> Json<ServerTime> {
    Json(ServerTime {
        time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
