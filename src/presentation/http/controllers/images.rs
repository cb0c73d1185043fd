// src/presentation/http/controllers/images.rs
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Multipart,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

/// Cover image reference to store in an article's `image` field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponse {
    pub image: String,
}

/// Multipart form accepted by the upload endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    /// Image file; its name decides the MIME type.
    #[schema(format = Binary)]
    pub file: Option<String>,
    /// Remote image address, returned unchanged. An empty value counts as absent.
    pub url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/images",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image reference ready to store on an article.", body = ImageResponse),
        (status = 400, description = "No usable image in the form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<Json<ImageResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("url") => {
                let url = field
                    .text()
                    .await
                    .map_err(|err| HttpError::bad_request(err.body_text()))?;
                if !url.is_empty() {
                    return Ok(Json(ImageResponse { image: url }));
                }
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::bad_request(err.body_text()))?;
                let size = bytes.len();
                let image = state
                    .services
                    .encode_cover_image(&filename, bytes.to_vec())
                    .await
                    .into_http()?;
                info!(admin = %admin.email, filename, size, "cover image uploaded");
                return Ok(Json(ImageResponse { image }));
            }
            _ => {}
        }
    }

    Err(HttpError::bad_request(
        "form must contain a `file` upload or a `url` field",
    ))
}
