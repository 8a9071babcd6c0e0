use {
    axum::Json,
    serde_json::{json, Value},
};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "aave-positions-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
