//! Browser Transport
//!
//! POSTs a JSON body to `<base>/api/<endpoint>` with `fetch` and decodes the
//! JSON answer.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{Api, ApiError, Endpoint};

#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/api/{}", self.base, endpoint)
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl Api for HttpApi {
    async fn call<A, R>(&self, endpoint: Endpoint, args: &A) -> Result<R, ApiError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(args).map_err(|e| ApiError::Encode(e.to_string()))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.url(endpoint), &init).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        log::debug!("[API] {} -> {} ({} bytes)", endpoint, response.status(), text.len());

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) if !response.ok() => Err(ApiError::Status(response.status())),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(HttpApi::new("https://forum.example/").url(Endpoint::Posts), "https://forum.example/api/posts");
        assert_eq!(HttpApi::new("").url(Endpoint::Board), "/api/board");
    }
}
