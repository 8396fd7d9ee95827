//! File manager operations.
//!
//! Uploads and replacements forward file metadata as JSON; binary payload
//! streaming is outside the executor's JSON body contract.

use serde_json::{json, Value};

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const UPLOAD: Endpoint = Endpoint::post("/files/v3/files", Shape::Object);
const LOAD: Endpoint = Endpoint::get("/files/v3/files/{fileId}", Shape::Object);
const LIST: Endpoint = Endpoint::get("/files/v3/files", Shape::Results);
const UPDATE: Endpoint = Endpoint::patch("/files/v3/files/{fileId}", Shape::Object);
const DELETE: FlagEndpoint = FlagEndpoint::delete("/files/v3/files/{fileId}", SuccessRule::NoContent);
const ARCHIVE: Endpoint = Endpoint::post("/files/v3/files/{fileId}/archive", Shape::Object);
const REPLACE: Endpoint = Endpoint::post("/files/v3/files/{fileId}/replace", Shape::Object);
const SIGNED_URL: Endpoint = Endpoint::get("/files/v3/files/{fileId}/signed-url", Shape::Object);
const SEARCH: Endpoint = Endpoint::get("/files/v3/files/search", Shape::Results);

/// Client for the file manager.
#[derive(Clone, Debug)]
pub struct FilesClient {
    client: Client,
}

impl FilesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Registers a file upload from its name and upload options.
    pub async fn upload(&self, file_name: &str, options: Value) -> Envelope {
        let body = json!({ "fileName": file_name, "options": options });
        self.client.dispatch(&UPLOAD, &[], &[], Some(body)).await
    }

    /// Loads file metadata by id.
    pub async fn load(&self, file_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("fileId", file_id)], &[], None).await
    }

    /// Lists files; filters travel as query parameters.
    pub async fn list(&self, filters: &[(&str, &str)]) -> Envelope {
        self.client.dispatch(&LIST, &[], filters, None).await
    }

    /// Updates file metadata.
    pub async fn update(&self, file_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&UPDATE, &[("fileId", file_id)], &[], Some(data))
            .await
    }

    /// Deletes a file; succeeds only on 204.
    pub async fn delete(&self, file_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("fileId", file_id)], &[], None)
            .await
    }

    /// Archives a file without deleting it.
    pub async fn archive(&self, file_id: &str) -> Envelope {
        self.client
            .dispatch(&ARCHIVE, &[("fileId", file_id)], &[], None)
            .await
    }

    /// Replaces a file's contents from a new source name.
    pub async fn replace(&self, file_id: &str, new_file_name: &str) -> Envelope {
        let body = json!({ "fileName": new_file_name });
        self.client
            .dispatch(&REPLACE, &[("fileId", file_id)], &[], Some(body))
            .await
    }

    /// Fetches a short-lived signed download URL for a file.
    pub async fn signed_url(&self, file_id: &str) -> Envelope {
        self.client
            .dispatch(&SIGNED_URL, &[("fileId", file_id)], &[], None)
            .await
    }

    /// Searches files by free-text query plus optional query options.
    pub async fn search(&self, query: &str, options: &[(&str, &str)]) -> Envelope {
        let mut params: Vec<(&str, &str)> = vec![("query", query)];
        params.extend_from_slice(options);
        self.client.dispatch(&SEARCH, &[], &params, None).await
    }
}
