//! CRM extension card operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/crm/v3/extensions/cards", Shape::Object);
const UPDATE: FlagEndpoint =
    FlagEndpoint::patch("/crm/v3/extensions/cards/{id}", SuccessRule::Under300);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/extensions/cards/{id}", SuccessRule::NoContent);

/// Client for CRM extension cards.
#[derive(Clone, Debug)]
pub struct ExtensionCardsClient {
    client: Client,
}

impl ExtensionCardsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates an extension card from a raw definition body.
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Updates an extension card; succeeds on any status below 300.
    pub async fn update(&self, card_id: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(&UPDATE, &[("id", card_id)], &[], Some(data))
            .await
    }

    /// Deletes an extension card; succeeds only on 204.
    pub async fn delete(&self, card_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", card_id)], &[], None)
            .await
    }
}
