//! HTTP binding of [`Backend`] using the Fetch API.

use gloo_net::http::{Request, Response};
use web_sys::FormData;

use super::wire::{self, CreateFolderBody};
use super::{Ack, Backend};
use crate::config::{UPLOAD_FILES_FIELD, UPLOAD_PATH_FIELD, endpoints};
use crate::core::error::BrowserError;
use crate::models::{DirectoryPath, Entry, PendingFile, StorageSummary};

/// Backend reached over HTTP at `base_url`.
#[derive(Clone, Copy, Debug)]
pub struct HttpBackend {
    base_url: &'static str,
}

impl HttpBackend {
    pub const fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `{base}{endpoint}/{escaped path}`.
    fn path_url(&self, endpoint: &str, path: &DirectoryPath) -> String {
        format!("{}{}/{}", self.base_url, endpoint, path.url_escaped())
    }
}

fn network(err: impl std::fmt::Display) -> BrowserError {
    BrowserError::Network(err.to_string())
}

fn js_error(err: wasm_bindgen::JsValue) -> BrowserError {
    BrowserError::Network(format!("{:?}", err))
}

/// Status and body text of a completed request.
async fn read(response: Result<Response, gloo_net::Error>) -> Result<(u16, String), BrowserError> {
    let response = response.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

impl Backend for HttpBackend {
    type File = web_sys::File;

    async fn list(&self, path: &DirectoryPath) -> Result<Vec<Entry>, BrowserError> {
        let url = self.path_url(endpoints::BROWSE, path);
        let (status, body) = read(Request::get(&url).send().await).await?;
        wire::decode_listing(status, &body)
    }

    async fn upload(
        &self,
        path: &DirectoryPath,
        files: &[PendingFile<web_sys::File>],
    ) -> Result<Ack, BrowserError> {
        let form = FormData::new().map_err(js_error)?;
        for file in files {
            form.append_with_blob_and_filename(UPLOAD_FILES_FIELD, &file.handle, file.upload_name())
                .map_err(js_error)?;
        }
        form.append_with_str(UPLOAD_PATH_FIELD, path.as_str())
            .map_err(js_error)?;

        let request = Request::post(&self.url(endpoints::UPLOAD))
            .body(form)
            .map_err(network)?;
        let (status, body) = read(request.send().await).await?;
        wire::decode_ack(status, &body)
    }

    async fn create_folder(&self, path: &DirectoryPath, name: &str) -> Result<Ack, BrowserError> {
        let payload = CreateFolderBody {
            name,
            path: path.as_str(),
        };
        let request = Request::post(&self.url(endpoints::CREATE_FOLDER))
            .json(&payload)
            .map_err(network)?;
        let (status, body) = read(request.send().await).await?;
        wire::decode_ack(status, &body)
    }

    async fn delete(&self, path: &DirectoryPath) -> Result<Ack, BrowserError> {
        let url = self.path_url(endpoints::DELETE, path);
        let (status, body) = read(Request::delete(&url).send().await).await?;
        wire::decode_ack(status, &body)
    }

    async fn storage_info(&self) -> Result<StorageSummary, BrowserError> {
        let url = self.url(endpoints::STORAGE_INFO);
        let (status, body) = read(Request::get(&url).send().await).await?;
        wire::decode_storage(status, &body)
    }

    fn download_url(&self, path: &DirectoryPath) -> String {
        self.path_url(endpoints::DOWNLOAD, path)
    }
}
