//! Records API Bindings
//!
//! Frontend bindings to the REST endpoint behind `/api/records`.

mod records;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{js_error_message, ApiError};
use crate::models::{NewRecord, RowsResponse, WriteResponse};

pub use records::{HttpRecordsApi, RowQuery, ALL_LIMIT};

/// Transport used by the page controller
///
/// Futures are not `Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait RecordsApi {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<RowsResponse, ApiError>;
    async fn create_record(&self, record: &NewRecord) -> Result<WriteResponse, ApiError>;
}

/// One `fetch` round trip, body parsed as JSON into `T`
///
/// The HTTP status is not checked: the endpoint reports failures in the body.
async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<&str>,
) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response.dyn_into().map_err(transport)?;
    let json = JsFuture::from(response.json().map_err(decode)?)
        .await
        .map_err(decode)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(js_error_message(&err))
}

fn decode(err: JsValue) -> ApiError {
    ApiError::Decode(js_error_message(&err))
}
