//! Marketing email operations (legacy v1 endpoints).

use serde_json::{json, Value};

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LIST: Endpoint = Endpoint::get("/marketing-emails/v1/emails", Shape::List);
const LOAD: Endpoint = Endpoint::get("/marketing-emails/v1/emails/{emailId}", Shape::Object);
const CLONE: Endpoint = Endpoint::post("/marketing-emails/v1/emails/{emailId}/clone", Shape::Object);
const SEND: FlagEndpoint = FlagEndpoint::post(
    "/marketing-emails/v1/emails/{emailId}/send",
    SuccessRule::Under300,
);
// v1 marketing email updates go through PUT.
const UPDATE: FlagEndpoint = FlagEndpoint::put(
    "/marketing-emails/v1/emails/{emailId}",
    SuccessRule::Under300,
);
const STATISTICS: Endpoint = Endpoint::get(
    "/marketing-emails/v1/emails/with-statistics/{emailId}",
    Shape::Object,
);

/// Client for marketing emails.
#[derive(Clone, Debug)]
pub struct MarketingEmailsClient {
    client: Client,
}

impl MarketingEmailsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists marketing emails with v1 pagination parameters.
    pub async fn list(&self, limit: u32, offset: u32) -> Envelope {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.client
            .dispatch(&LIST, &[], &[("limit", &limit), ("offset", &offset)], None)
            .await
    }

    /// Loads one marketing email by id.
    pub async fn load(&self, email_id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("emailId", email_id)], &[], None)
            .await
    }

    /// Clones a marketing email under a new name.
    pub async fn clone_email(&self, email_id: &str, new_name: &str) -> Envelope {
        let body = json!({ "name": new_name });
        self.client
            .dispatch(&CLONE, &[("emailId", email_id)], &[], Some(body))
            .await
    }

    /// Sends a marketing email to recipients; succeeds below 300.
    pub async fn send(&self, email_id: &str, recipient_ids: Value) -> bool {
        let body = json!({ "recipientIds": recipient_ids });
        self.client
            .dispatch_flag(&SEND, &[("emailId", email_id)], &[], Some(body))
            .await
    }

    /// Updates a marketing email; succeeds below 300.
    pub async fn update(&self, email_id: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(&UPDATE, &[("emailId", email_id)], &[], Some(data))
            .await
    }

    /// Fetches send statistics for a marketing email.
    pub async fn statistics(&self, email_id: &str) -> Envelope {
        self.client
            .dispatch(&STATISTICS, &[("emailId", email_id)], &[], None)
            .await
    }
}
