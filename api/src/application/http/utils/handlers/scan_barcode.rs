use axum::{
    Extension,
    extract::{Multipart, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    barcode::{entities::BarcodeScan, ports::BarcodeService},
};

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    utils::validators::ScanBarcodeForm,
};

#[utoipa::path(
    post,
    path = "/scan-barcode",
    tag = "utils",
    summary = "Scan barcode",
    description = "Decodes the first barcode in the image and looks the product up, either in the product database or through the model depending on configuration.",
    request_body(content = ScanBarcodeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = BarcodeScan),
        (status = 400, description = "Invalid image format"),
        (status = 404, description = "No barcode detected, or product not found"),
        (status = 502, description = "Product lookup failed")
    ),
)]
pub async fn scan_barcode(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    mut multipart: Multipart,
) -> Result<Response<BarcodeScan>, ApiError> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
            image = Some(data.to_vec());
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let scan = state
        .service
        .scan_barcode(identity, image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(scan))
}
