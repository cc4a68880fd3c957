use gloo_net::http::Request;
use shared::{RawResponse, RequestBody, Transport, TransportError};

/// Sends analysis requests with the browser's fetch API.
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type File = web_sys::File;

    async fn send(
        &self,
        url: &str,
        body: RequestBody<web_sys::File>,
    ) -> Result<RawResponse, TransportError> {
        let request = match body {
            RequestBody::Json(value) => Request::post(url).json(&value),
            RequestBody::Multipart(form) => {
                let form_data = web_sys::FormData::new()
                    .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
                form_data
                    .append_with_blob_and_filename("file", &form.file, &form.file.name())
                    .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
                for (name, value) in &form.fields {
                    form_data
                        .append_with_str(name, value)
                        .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
                }
                Request::post(url).body(form_data)
            }
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
