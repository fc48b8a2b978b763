//! Endpoint handlers.
//!
//! Bodies are taken as raw bytes and parsed here so malformed JSON gets the
//! same failure shape as every other client error.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use imagers_core::{ImageFormat, RotationAngle};

use crate::error::ApiError;
use crate::orchestrator::{process, Operation};
use crate::state::AppState;
use crate::types::{
    FormatRequest, ImageResponse, ResizeRequest, RootResponse, RotateRequest, WatermarkRequest,
};

type ApiResult = Result<Json<ImageResponse>, ApiError>;

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
}

/// GET / – Liveness message
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Image Processing Server is running".to_string(),
    })
}

/// POST /change-image-format – Re-encode in another format
pub async fn change_image_format(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let req: FormatRequest = parse_body(&body)?;
    // Reject before downloading anything
    let format = ImageFormat::from_name(&req.format)?;

    let processed = process(state.fetcher(), &req.image_url, Operation::ChangeFormat(format)).await?;
    let message = format!(
        "Successfully converted image to {}",
        req.format.to_uppercase()
    );
    Ok(Json(processed.into_image_response(message)))
}

/// POST /rotate-image – Rotate by a multiple of 90 degrees
pub async fn rotate_image(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let req: RotateRequest = parse_body(&body)?;
    let angle = RotationAngle::from_degrees(req.angle);

    let processed = process(state.fetcher(), &req.image_url, Operation::Rotate(angle)).await?;
    let message = format!("Successfully rotated image by {} degrees", req.angle);
    Ok(Json(processed.into_image_response(message)))
}

/// POST /resize-image – Downscale to fit a bounding box
pub async fn resize_image(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let req: ResizeRequest = parse_body(&body)?;
    let operation = Operation::Resize {
        max_width: req.max_width,
        max_height: req.max_height,
    };

    let processed = process(state.fetcher(), &req.image_url, operation).await?;
    let (width, height) = processed.new_size;
    let message = format!("Successfully resized image to {width}x{height}");
    Ok(Json(processed.into_image_response(message)))
}

/// POST /add-watermark – Draw a text watermark, output JPEG
pub async fn add_watermark(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let req: WatermarkRequest = parse_body(&body)?;
    tracing::debug!(
        font_size = req.font_size(),
        "font_size has no effect with the built-in font"
    );

    let operation = Operation::Watermark(req.to_spec());
    let processed = process(state.fetcher(), &req.image_url, operation).await?;
    Ok(Json(
        processed.into_image_response("Successfully added watermark to image"),
    ))
}

/// Any unmatched route or method.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
