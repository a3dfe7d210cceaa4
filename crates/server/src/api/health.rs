use axum::Json;
use serde_json::json;

pub async fn root() -> Json<serde_json::Value> {
    super::result(json!({
        "service": "modelops-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
