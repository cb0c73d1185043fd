// src/presentation/http/controllers/preferences.rs
use crate::application::theme::{Theme, ThemeDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::HeaderMap,
};
use serde::Deserialize;
use utoipa::IntoParams;

const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThemeParams {
    /// Client's preferred scheme (`light` or `dark`); the
    /// `Sec-CH-Prefers-Color-Scheme` header is used when absent.
    #[serde(default)]
    pub system: Option<String>,
}

/// The client's system preference, if it sent one we understand.
fn system_hint(params: &ThemeParams, headers: &HeaderMap) -> Option<Theme> {
    params
        .system
        .as_deref()
        .and_then(|value| value.parse().ok())
        .or_else(|| {
            headers
                .get(COLOR_SCHEME_HINT)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim_matches('"').parse().ok())
        })
}

#[utoipa::path(
    get,
    path = "/api/v1/preferences/theme",
    params(ThemeParams),
    responses(
        (status = 200, description = "Active theme; `saved` is false while it follows the system hint.", body = ThemeDto)
    ),
    tag = "Preferences"
)]
pub async fn get_theme(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ThemeParams>,
    headers: HeaderMap,
) -> HttpResult<Json<ThemeDto>> {
    state
        .services
        .theme
        .current(system_hint(&params, &headers))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/preferences/theme/toggle",
    params(ThemeParams),
    responses(
        (status = 200, description = "Theme flipped and saved.", body = ThemeDto)
    ),
    tag = "Preferences"
)]
pub async fn toggle_theme(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ThemeParams>,
    headers: HeaderMap,
) -> HttpResult<Json<ThemeDto>> {
    state
        .services
        .theme
        .toggle(system_hint(&params, &headers))
        .await
        .into_http()
        .map(Json)
}
