//! Request extractors that fold every body-decoding failure into `ApiError`.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{
        multipart::{Multipart, MultipartError},
        FromRequest, FromRequestParts, Request,
    },
    http::{header, request::Parts, HeaderMap},
    Form, Json,
};
use configs::AppConfig;
use serde::de::DeserializeOwned;
use service::assets::Upload;
use service::plot::domain::AddPlotInput;

use crate::errors::ApiError;
use crate::state::ServerState;

/// Body accepted either as JSON or as an urlencoded form.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|r| ApiError::from_rejection_status(r.status()))?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|r| ApiError::from_rejection_status(r.status()))?;
            Ok(Self(value))
        } else {
            Err(ApiError::invalid_request())
        }
    }
}

/// Multipart add-plot submission. Unknown parts are skipped and a repeated
/// part overwrites the earlier one.
pub struct AddPlotForm(pub AddPlotInput);

#[async_trait]
impl<S> FromRequest<S> for AddPlotForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|r| ApiError::from_rejection_status(r.status()))?;

        let mut input = AddPlotInput::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let filename = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    input.image = Some(Upload { filename, content_type, bytes: bytes.to_vec() });
                }
                "title" => input.title = field.text().await.map_err(multipart_error)?,
                "location" => input.location = field.text().await.map_err(multipart_error)?,
                "price" => input.price = field.text().await.map_err(multipart_error)?,
                "plot_number" => input.plot_number = field.text().await.map_err(multipart_error)?,
                _ => {}
            }
        }
        Ok(Self(input))
    }
}

fn multipart_error(e: MultipartError) -> ApiError {
    ApiError::from_rejection_status(e.status())
}

/// Scheme and authority used to turn stored image keys into absolute URLs.
pub struct RequestOrigin(pub String);

#[async_trait]
impl FromRequestParts<ServerState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_origin(&parts.headers, &state.config)))
    }
}

/// Configured public base URL first, then `X-Forwarded-Proto` + `Host`, then
/// the bind address.
pub fn resolve_origin(headers: &HeaderMap, config: &AppConfig) -> String {
    if let Some(base) = &config.media.public_base_url {
        return base.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| is_plausible_host(h));
    match host {
        Some(host) => {
            let scheme = headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| s == "http" || s == "https")
                .unwrap_or_else(|| "http".to_string());
            format!("{scheme}://{host}")
        }
        None => format!("http://{}:{}", config.server.host, config.server.port),
    }
}

fn is_plausible_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '[' | ']'))
}
