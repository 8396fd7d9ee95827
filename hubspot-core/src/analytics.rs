//! Analytics report lookups.

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const TRAFFIC_SOURCES: Endpoint =
    Endpoint::get("/analytics/v2/reports/sources/total", Shape::Object);
const PAGE_VIEWS: Endpoint = Endpoint::get("/analytics/v2/reports/pages/total", Shape::Object);

/// Client for analytics reports.
#[derive(Clone, Debug)]
pub struct AnalyticsClient {
    client: Client,
}

impl AnalyticsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches traffic source totals; filters travel as query parameters.
    pub async fn traffic_sources(&self, filters: &[(&str, &str)]) -> Envelope {
        self.client.dispatch(&TRAFFIC_SOURCES, &[], filters, None).await
    }

    /// Fetches page view totals; filters travel as query parameters.
    pub async fn page_views(&self, filters: &[(&str, &str)]) -> Envelope {
        self.client.dispatch(&PAGE_VIEWS, &[], filters, None).await
    }
}
