//! インポートRPC（fetch）
//!
//! Connect形式: `POST {base_url}{endpoint}` にJSONボディとBearerトークンを付けて送る。

use async_trait::async_trait;
use crm_import_common::{ImportError, ImportRequest, ImportService, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone)]
pub struct FetchImportService {
    base_url: String,
}

impl FetchImportService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, request: &ImportRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint)
    }
}

/// JS側の例外を通信エラーに変換
fn js_error(value: JsValue) -> ImportError {
    let detail = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    ImportError::Network(detail)
}

#[async_trait(?Send)]
impl ImportService for FetchImportService {
    async fn send(&self, request: &ImportRequest, token: &str) -> Result<serde_json::Value> {
        let url = self.url_for(request);
        let body = serde_json::to_string(&request.body)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let fetch_request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        let headers = fetch_request.headers();
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| ImportError::Network("windowが取得できません".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            // 本文テキストをそのまま表示する
            let text = JsFuture::from(resp.text().map_err(js_error)?)
                .await
                .map_err(js_error)?;
            let detail = text
                .as_string()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("HTTP {}", resp.status()));
            return Err(ImportError::Network(detail));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(|e| ImportError::Json(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ImportError::Json(e.to_string()))
    }
}
