//! Email Scan Popup - Model (API functions)

use super::controller::{HttpReply, PredictionTransport};
use async_trait::async_trait;
use contracts::domain::a001_email_scan::{HealthResponse, ScanError};
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl PredictionTransport for FetchTransport {
    type File = web_sys::File;

    fn file_name(&self, file: &web_sys::File) -> String {
        file.name()
    }

    async fn post_file(&self, endpoint: &str, file: web_sys::File) -> Result<HttpReply, ScanError> {
        upload_email(endpoint, file)
            .await
            .map_err(ScanError::Transport)
    }
}

/// Отправить письмо на сканирование
///
/// Any HTTP status is returned as a reply; only a failed request is an error.
pub async fn upload_email(endpoint: &str, file: web_sys::File) -> Result<HttpReply, String> {
    log::debug!("Uploading {} ({} bytes)", file.name(), file.size());

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(|e| format!("{e:?}"))?;
    fetch_text(&request).await
}

/// Проверить, что сервис предсказаний запущен
pub async fn check_health(url: &str) -> Result<HealthResponse, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let reply = fetch_text(&request).await?;
    if !reply.ok() {
        return Err(format!("HTTP {}", reply.status));
    }
    serde_json::from_str(&reply.body).map_err(|e| format!("{e}"))
}

/// Send the request and read the whole body as text, whatever the status
async fn fetch_text(request: &Request) -> Result<HttpReply, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let body = text.as_string().ok_or_else(|| "bad text".to_string())?;

    Ok(HttpReply {
        status: resp.status(),
        body,
    })
}
