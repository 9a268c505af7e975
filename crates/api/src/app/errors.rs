use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use medstock_inventory::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    let (status, code) = match &err {
        StoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        StoreError::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists"),
        StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        StoreError::EmptyCollection => (StatusCode::UNPROCESSABLE_ENTITY, "empty_collection"),
    };
    json_error(status, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse a form-submitted price. `parse::<f64>` accepts "NaN" and "inf";
/// those still get rejected downstream by the store's finiteness check.
pub fn parse_price(raw: &str) -> Result<f64, axum::response::Response> {
    raw.trim().parse::<f64>().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_input",
            format!("price '{raw}' is not a number"),
        )
    })
}
