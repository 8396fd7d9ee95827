//! Line item operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/line_items", Shape::Object);
const LOAD: Endpoint = Endpoint::get("/crm/v3/objects/line_items/{id}", Shape::Object);
const UPDATE: FlagEndpoint =
    FlagEndpoint::patch("/crm/v3/objects/line_items/{id}", SuccessRule::Under300);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/line_items/{id}", SuccessRule::NoContent);

/// Client for deal line items.
#[derive(Clone, Debug)]
pub struct LineItemsClient {
    client: Client,
}

impl LineItemsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a line item from a flat field map.
    pub async fn create(&self, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client.dispatch(&CREATE, &[], &[], Some(body)).await
    }

    /// Loads a line item by id.
    pub async fn load(&self, line_item_id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("id", line_item_id)], &[], None)
            .await
    }

    /// Updates a line item; succeeds on any status below 300.
    pub async fn update(&self, line_item_id: &str, data: Value) -> bool {
        let body = endpoint::properties(data);
        self.client
            .dispatch_flag(&UPDATE, &[("id", line_item_id)], &[], Some(body))
            .await
    }

    /// Deletes a line item; succeeds only on 204.
    pub async fn delete(&self, line_item_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", line_item_id)], &[], None)
            .await
    }
}
