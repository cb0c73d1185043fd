// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::LoginCommand,
    dto::{CurrentUserDto, LoginResultDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeBearer};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginCommand,
    responses(
        (status = 200, description = "Signed in; the token is bound to a new session.", body = LoginResultDto),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginCommand>,
) -> HttpResult<Json<LoginResultDto>> {
    state
        .services
        .auth
        .login(payload)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current sign-in state; `signed_in` is false without a valid token.", body = CurrentUserDto)
    ),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    MaybeBearer(token): MaybeBearer,
) -> HttpResult<Json<CurrentUserDto>> {
    state
        .services
        .auth
        .current_user(token.as_deref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Session revoked.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
) -> HttpResult<Json<StatusResponse>> {
    state.services.auth.logout(&admin).await.into_http()?;

    Ok(Json(StatusResponse {
        status: "signed_out".into(),
    }))
}
