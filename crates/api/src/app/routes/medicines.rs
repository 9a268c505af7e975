use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_medicine))
        .route("/update", post(update_medicine))
        .route("/delete", delete(delete_medicine))
        .route("/medicines", get(list_medicines))
        .route("/medicines/average", get(average_price))
        .route("/medicines/:name", get(get_medicine))
}

pub async fn create_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::CreateMedicineRequest>,
) -> axum::response::Response {
    let price = match errors::parse_price(&body.price) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.create(&body.name, price) {
        Ok(med) => {
            tracing::info!(name = %med.name, price = med.price, "medicine created");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "message": format!("Medicine '{}' created successfully", med.name),
                    "medicine": dto::medicine_to_json(&med),
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "create rejected");
            errors::store_error_to_response(e)
        }
    }
}

pub async fn update_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::UpdateMedicineRequest>,
) -> axum::response::Response {
    let price = match errors::parse_price(&body.price) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.update(&body.name, price) {
        Ok(med) => {
            tracing::info!(name = %med.name, price = med.price, "medicine updated");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!("Medicine '{}' updated successfully", med.name),
                    "medicine": dto::medicine_to_json(&med),
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "update rejected");
            errors::store_error_to_response(e)
        }
    }
}

pub async fn delete_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::DeleteMedicineRequest>,
) -> axum::response::Response {
    match services.delete(&body.name) {
        Ok(med) => {
            tracing::info!(name = %med.name, "medicine deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!("Medicine '{}' deleted successfully", med.name),
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "delete rejected");
            errors::store_error_to_response(e)
        }
    }
}

pub async fn get_medicine(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.get(&name) {
        Ok(med) => (StatusCode::OK, Json(dto::medicine_to_json(&med))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_medicines(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let medicines = services
        .list()
        .iter()
        .map(dto::medicine_to_json)
        .collect::<Vec<_>>();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "medicines": medicines })),
    )
        .into_response()
}

pub async fn average_price(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.average_price() {
        Ok(avg) => (
            StatusCode::OK,
            Json(serde_json::json!({ "average_price": avg })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
