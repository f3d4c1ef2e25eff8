//! REST API Client
//!
//! Fetch wrappers over the backend collections, generic over the record
//! type. Each call is one request; nothing is retried or cancelled.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const API_BASE: &str = "/api";

/// A record type reachable as a REST collection under the API base path.
pub trait ApiRecord: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    /// Path segment of the collection, e.g. "projects".
    const RESOURCE: &'static str;
    /// Singular label used in user-facing notices, e.g. "project".
    const LABEL: &'static str;
    /// Placeholder rendered when the collection is empty.
    const EMPTY_MESSAGE: &'static str;
    /// Request body shape for create/update (no id field).
    type Draft: Serialize + Clone + Default + PartialEq + Send + Sync + 'static;

    fn id(&self) -> u32;
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS, or any other failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
}

fn collection_url<T: ApiRecord>() -> String {
    format!("{}/{}", API_BASE, T::RESOURCE)
}

fn record_url<T: ApiRecord>(id: u32) -> String {
    format!("{}/{}/{}", API_BASE, T::RESOURCE, id)
}

fn js_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Build the request and hand it to the browser. The returned future is
/// already in flight; dropping it does not abort the request.
fn dispatch(method: &str, url: &str, body: Option<&str>) -> Result<JsFuture, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(json));
    }
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Transport(js_to_string(&e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Transport(js_to_string(&e)))?;
    }
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    Ok(JsFuture::from(window.fetch_with_request(&request)))
}

/// Await the in-flight request and map non-2xx statuses to errors.
async fn into_response(pending: JsFuture) -> Result<Response, ApiError> {
    let value = pending
        .await
        .map_err(|e| ApiError::Transport(js_to_string(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Transport("fetch did not yield a Response".to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response
        .json()
        .map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET the full collection. The request is dispatched before the returned
/// future is first polled, so several lists can be fetched concurrently by
/// calling `list` for each and awaiting afterwards.
pub fn list<T: ApiRecord>() -> impl std::future::Future<Output = Result<Vec<T>, ApiError>> {
    let pending = dispatch("GET", &collection_url::<T>(), None);
    async move {
        let response = into_response(pending?).await?;
        decode_json(response).await
    }
}

/// POST a new record. The created record comes back in the response but the
/// caller re-lists anyway, so the body is discarded.
pub async fn create<T: ApiRecord>(draft: &T::Draft) -> Result<(), ApiError> {
    let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
    let pending = dispatch("POST", &collection_url::<T>(), Some(&body))?;
    into_response(pending).await?;
    Ok(())
}

/// PUT updated fields onto an existing record.
pub async fn update<T: ApiRecord>(id: u32, draft: &T::Draft) -> Result<(), ApiError> {
    let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
    let pending = dispatch("PUT", &record_url::<T>(id), Some(&body))?;
    into_response(pending).await?;
    Ok(())
}

/// DELETE a record by id.
pub async fn delete<T: ApiRecord>(id: u32) -> Result<(), ApiError> {
    let pending = dispatch("DELETE", &record_url::<T>(id), None)?;
    into_response(pending).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, InventoryItem, Project};

    #[test]
    fn urls_follow_the_collection_layout() {
        assert_eq!(collection_url::<Project>(), "/api/projects");
        assert_eq!(collection_url::<InventoryItem>(), "/api/inventory");
        assert_eq!(record_url::<Contact>(42), "/api/contacts/42");
    }

    #[test]
    fn errors_render_their_cause() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server returned status 500"
        );
        assert_eq!(
            ApiError::Transport("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
