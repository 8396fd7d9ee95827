//! Logged-call engagements (legacy v1 endpoints).

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/engagements/v1/engagements", Shape::Object);
const UPDATE: FlagEndpoint =
    FlagEndpoint::patch("/engagements/v1/engagements/{callId}", SuccessRule::Under300);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/engagements/v1/engagements/{callId}", SuccessRule::NoContent);

/// Client for logged calls.
#[derive(Clone, Debug)]
pub struct CallsClient {
    client: Client,
}

impl CallsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Logs a call engagement.
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Updates a logged call; succeeds on any status below 300.
    pub async fn update(&self, call_id: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(&UPDATE, &[("callId", call_id)], &[], Some(data))
            .await
    }

    /// Deletes a logged call; succeeds only on 204.
    pub async fn delete(&self, call_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("callId", call_id)], &[], None)
            .await
    }
}
