//! Quote operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/quotes", Shape::Object);
const LOAD: Endpoint = Endpoint::get("/crm/v3/objects/quotes/{id}", Shape::Object);
const UPDATE: FlagEndpoint =
    FlagEndpoint::patch("/crm/v3/objects/quotes/{id}", SuccessRule::Under300);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/quotes/{id}", SuccessRule::NoContent);

/// Client for quotes.
#[derive(Clone, Debug)]
pub struct QuotesClient {
    client: Client,
}

impl QuotesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a quote from a flat field map.
    pub async fn create(&self, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client.dispatch(&CREATE, &[], &[], Some(body)).await
    }

    /// Loads a quote by id.
    pub async fn load(&self, quote_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("id", quote_id)], &[], None).await
    }

    /// Updates a quote; succeeds on any status below 300.
    pub async fn update(&self, quote_id: &str, data: Value) -> bool {
        let body = endpoint::properties(data);
        self.client
            .dispatch_flag(&UPDATE, &[("id", quote_id)], &[], Some(body))
            .await
    }

    /// Deletes a quote; succeeds only on 204.
    pub async fn delete(&self, quote_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", quote_id)], &[], None)
            .await
    }
}
