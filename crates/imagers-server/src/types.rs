//! JSON request and response bodies.

use serde::{Deserialize, Serialize};

use imagers_core::{WatermarkPosition, WatermarkSpec};

/// Accepted for compatibility; the bitmap font has a single size.
pub const DEFAULT_FONT_SIZE: f64 = 36.0;

#[derive(Debug, Clone, Deserialize)]
pub struct FormatRequest {
    pub image_url: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RotateRequest {
    pub image_url: String,
    /// Degrees clockwise; only multiples of 90 have an effect.
    pub angle: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResizeRequest {
    pub image_url: String,
    pub max_width: i64,
    pub max_height: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatermarkRequest {
    pub image_url: String,
    pub watermark_text: String,
    /// Unknown names fall back to bottom-right.
    #[serde(default)]
    pub position: Option<WatermarkPosition>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl WatermarkRequest {
    pub fn font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Build the render spec, applying defaults for omitted fields.
    pub fn to_spec(&self) -> WatermarkSpec {
        let position = self.position.unwrap_or_default();
        let opacity = self.opacity.unwrap_or(WatermarkSpec::DEFAULT_OPACITY);

        WatermarkSpec::new(self.watermark_text.clone(), position, opacity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_size: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_size: Option<[u32; 2]>,
}

impl ImageResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            image_data: None,
            original_size: None,
            new_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watermark_request(json: &str) -> WatermarkRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_watermark_defaults() {
        let req = watermark_request(r#"{"image_url":"http://x/a.png","watermark_text":"hi"}"#);
        assert_eq!(req.font_size(), 36.0);

        let spec = req.to_spec();
        assert_eq!(spec.text, "hi");
        assert_eq!(spec.position, WatermarkPosition::BottomRight);
        assert_eq!(spec.opacity, 0.7);
    }

    #[test]
    fn test_watermark_explicit_fields() {
        let req = watermark_request(
            r#"{"image_url":"http://x/a.png","watermark_text":"hi",
                "position":"top-left","font_size":12,"opacity":0}"#,
        );
        assert_eq!(req.font_size(), 12.0);

        let spec = req.to_spec();
        assert_eq!(spec.position, WatermarkPosition::TopLeft);
        assert_eq!(spec.opacity, 0.0);
    }

    #[test]
    fn test_watermark_unknown_position_falls_back() {
        let req = watermark_request(
            r#"{"image_url":"u","watermark_text":"t","position":"somewhere"}"#,
        );
        assert_eq!(req.position, Some(WatermarkPosition::BottomRight));
        assert_eq!(req.to_spec().position, WatermarkPosition::BottomRight);
    }

    #[test]
    fn test_watermark_null_position_uses_default() {
        let req = watermark_request(r#"{"image_url":"u","watermark_text":"t","position":null}"#);
        assert_eq!(req.position, None);
        assert_eq!(req.to_spec().position, WatermarkPosition::BottomRight);
    }

    #[test]
    fn test_rotate_request_accepts_negative_angle() {
        let req: RotateRequest = serde_json::from_str(r#"{"image_url":"u","angle":-90}"#).unwrap();
        assert_eq!(req.angle, -90);
    }

    #[test]
    fn test_failure_omits_optional_fields() {
        let json = serde_json::to_value(ImageResponse::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn test_success_serializes_sizes_as_pairs() {
        let response = ImageResponse {
            success: true,
            message: "ok".to_string(),
            image_data: Some("AAAA".to_string()),
            original_size: Some([4, 2]),
            new_size: Some([2, 4]),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["original_size"], serde_json::json!([4, 2]));
        assert_eq!(json["new_size"], serde_json::json!([2, 4]));
    }
}
