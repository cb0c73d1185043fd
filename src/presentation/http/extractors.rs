// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A signed-in admin whose session has not been revoked.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAdmin);

/// Raw bearer token, if the request carried one. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeBearer(pub Option<String>);

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let token = bearer_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "missing Authorization header".into(),
            ))
        })?;

        let admin = app_state
            .services
            .auth
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(admin))
    }
}

impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(parts)))
    }
}
