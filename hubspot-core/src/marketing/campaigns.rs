//! Email campaign lookups (legacy v1 endpoints).

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const LIST: Endpoint = Endpoint::get("/email/public/v1/campaigns", Shape::List);
const LOAD: Endpoint = Endpoint::get("/email/public/v1/campaigns/{campaignId}", Shape::Object);

/// Client for email campaigns.
#[derive(Clone, Debug)]
pub struct CampaignsClient {
    client: Client,
}

impl CampaignsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists campaigns with v1 pagination parameters.
    pub async fn list(&self, limit: u32, offset: u32) -> Envelope {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.client
            .dispatch(&LIST, &[], &[("limit", &limit), ("offset", &offset)], None)
            .await
    }

    /// Loads one campaign by id.
    pub async fn load(&self, campaign_id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("campaignId", campaign_id)], &[], None)
            .await
    }
}
