//! Engagement operations.

use serde_json::{json, Value};

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/engagements", Shape::Object);
const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/engagements/search", Shape::List);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/engagements/{id}", SuccessRule::NoContent);

/// Client for engagement records.
#[derive(Clone, Debug)]
pub struct EngagementsClient {
    client: Client,
}

impl EngagementsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates an engagement from a raw body (type, associations, metadata).
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Searches engagements.
    ///
    /// Unlike the object searches, `filters` is a plain filter list; it is
    /// wrapped into a single filter group here.
    pub async fn search(&self, filters: Value, limit: u32, after: u32) -> Envelope {
        let body = json!({
            "filterGroups": [{ "filters": filters }],
            "limit": limit,
            "after": after,
        });
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Deletes an engagement by id; succeeds only on 204.
    pub async fn delete(&self, engagement_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", engagement_id)], &[], None)
            .await
    }
}
