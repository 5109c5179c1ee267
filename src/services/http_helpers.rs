use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Appends path segments to a service base URL, percent-encoding each one.
pub fn endpoint(base: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("'{}' cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Wraps a transport failure with the operation it interrupted.
pub fn request_failed(context: &str, err: impl std::fmt::Display) -> AppError {
    AppError::RequestFailed(format!("{}: {}", context, err))
}

/// Fails on any non-2xx status.
pub fn ensure_success(response: Response, context: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        log::warn!("{} ({} {})", context, status, response.url());
        Err(AppError::RequestFailed(format!("{}: HTTP {}", context, status)))
    }
}

/// Checks the status and decodes a JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> AppResult<T> {
    ensure_success(response, context)?
        .json::<T>()
        .await
        .map_err(|e| request_failed(context, e))
}

/// Checks the status and reads a plain-text body.
pub async fn read_text(response: Response, context: &str) -> AppResult<String> {
    ensure_success(response, context)?
        .text()
        .await
        .map_err(|e| request_failed(context, e))
}
