use async_trait::async_trait;
use common::{
    structs::Multipart,
    transport::{ApiResponse, Transport},
    FeedError,
};
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::dom::dom_err;

/// `fetch` through gloo-net. No timeout, no retry.
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    type Attachment = File;

    async fn post_multipart(&self, url: &str, form: Multipart<File>) -> Result<ApiResponse, FeedError> {
        let form_data = FormData::new().map_err(dom_err)?;
        for (name, value) in &form.fields {
            form_data.append_with_str(name, value).map_err(dom_err)?;
        }
        if let Some((name, file)) = &form.file {
            form_data
                .append_with_blob_and_filename(name, file, &file.name())
                .map_err(dom_err)?;
        }

        let res = Request::post(url)
            .body(&form_data)
            .send()
            .await
            .map_err(network_error)?;
        read(res).await
    }

    async fn post_json_value(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, FeedError> {
        let res = Request::post(url)
            .json(&body)
            .map_err(|e| FeedError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read(res).await
    }
}

async fn read(res: Response) -> Result<ApiResponse, FeedError> {
    let status = res.status();
    let body = res.text().await.map_err(network_error)?;
    Ok(ApiResponse { status, body })
}

fn network_error(e: gloo_net::Error) -> FeedError {
    match e {
        gloo_net::Error::GlooError(e) => FeedError::Network(e),
        v => FeedError::Network(v.to_string()),
    }
}
