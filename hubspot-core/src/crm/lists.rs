//! Contact list operations (legacy v1 endpoints).

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LOAD: Endpoint = Endpoint::get("/contacts/v1/lists/{listId}", Shape::Object);
const CREATE: Endpoint = Endpoint::post("/contacts/v1/lists", Shape::Object);
// The v1 list API updates through POST, not PATCH.
const UPDATE: FlagEndpoint = FlagEndpoint::post("/contacts/v1/lists/{listId}", SuccessRule::Under300);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/contacts/v1/lists/{listId}", SuccessRule::NoContent);
const CONTACTS: Endpoint = Endpoint::get("/contacts/v1/lists/{listId}/contacts/all", Shape::List);

/// Client for static and dynamic contact lists.
#[derive(Clone, Debug)]
pub struct ListsClient {
    client: Client,
}

impl ListsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads a list by id.
    pub async fn load(&self, list_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("listId", list_id)], &[], None).await
    }

    /// Creates a list from a raw definition body.
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Updates a list; succeeds on any status below 300.
    pub async fn update(&self, list_id: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(&UPDATE, &[("listId", list_id)], &[], Some(data))
            .await
    }

    /// Deletes a list; succeeds only on 204.
    pub async fn delete(&self, list_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("listId", list_id)], &[], None)
            .await
    }

    /// Fetches contacts on a list with v1 pagination parameters.
    pub async fn contacts(&self, list_id: &str, limit: u32, offset: u32) -> Envelope {
        let count = limit.to_string();
        let vid_offset = offset.to_string();
        self.client
            .dispatch(
                &CONTACTS,
                &[("listId", list_id)],
                &[("count", &count), ("vidOffset", &vid_offset)],
                None,
            )
            .await
    }
}
