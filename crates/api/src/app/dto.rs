use serde::Deserialize;

use medstock_inventory::Medicine;

// -------------------------
// Request DTOs
// -------------------------

/// `price` stays a string here; it is parsed explicitly at the boundary so a
/// malformed number becomes our own `invalid_input` response instead of a
/// framework-level form rejection.
#[derive(Debug, Deserialize)]
pub struct CreateMedicineRequest {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMedicineRequest {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMedicineRequest {
    pub name: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn medicine_to_json(med: &Medicine) -> serde_json::Value {
    serde_json::json!({
        "name": med.name,
        "price": med.price,
    })
}
