use crate::error::ProviderError;
use reqwest::{
    RequestBuilder,
    StatusCode,
};
use serde_json::Value;
use url::Url;

/// Appends path segments to `base`, ignoring a trailing slash on it.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ProviderError::Configuration(format!("Invalid base URL: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends the request and decodes a JSON body, mapping HTTP failures onto [`ProviderError`].
pub(crate) async fn fetch_json(request: RequestBuilder) -> Result<Value, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().clone();
    trace!(%url, %status, "Provider response");

    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return Err(ProviderError::Authentication(format!(
            "{} rejected the credentials ({status})",
            url.host_str().unwrap_or("provider")
        )));
    }

    let body = response.text().await?;
    if !status.is_success() {
        let detail = body.trim();
        return Err(ProviderError::Upstream(if detail.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {detail}")
        }));
    }

    serde_json::from_str(&body)
        .map_err(|e| ProviderError::Malformed(format!("Invalid JSON from {}: {e}", url.path())))
}
