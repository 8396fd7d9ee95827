//! Deal operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LOAD_BY_ID: Endpoint = Endpoint::get("/crm/v3/objects/deals/{id}", Shape::Object);
const LOAD_BY_NAME: Endpoint = Endpoint::post("/crm/v3/objects/deals/search", Shape::First);
const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/deals/search", Shape::Results);
const UPDATE: Endpoint = Endpoint::patch("/crm/v3/objects/deals/{id}", Shape::Object);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/deals/{id}", SuccessRule::NoContent);

/// Client for deal operations.
#[derive(Clone, Debug)]
pub struct DealsClient {
    client: Client,
}

impl DealsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads a deal by object id.
    pub async fn load_by_id(&self, id: &str) -> Envelope {
        self.client.dispatch(&LOAD_BY_ID, &[("id", id)], &[], None).await
    }

    /// Loads a deal by name, unwrapping the first search result.
    pub async fn load_by_name(&self, deal_name: &str) -> Envelope {
        let body = endpoint::single_filter_search("dealname", deal_name);
        self.client.dispatch(&LOAD_BY_NAME, &[], &[], Some(body)).await
    }

    /// Searches deals; the payload is the matching records list.
    pub async fn search(&self, filter_groups: Value, limit: u32, after: u32) -> Envelope {
        let body = endpoint::search_body(filter_groups, limit, after);
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Updates a deal from a flat field map carrying its `id`.
    pub async fn update(&self, data: Value) -> Envelope {
        let Some(id) = endpoint::object_id(&data) else {
            return Envelope::rejected("Missing deal ID in update payload.", Value::Null);
        };
        let body = endpoint::properties(data);
        self.client.dispatch(&UPDATE, &[("id", &id)], &[], Some(body)).await
    }

    /// Deletes a deal by id; succeeds only on 204.
    pub async fn delete(&self, deal_id: &str) -> bool {
        self.client.dispatch_flag(&DELETE, &[("id", deal_id)], &[], None).await
    }
}
