//! Email event lookups (legacy v1 endpoints).

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const EVENTS: Endpoint = Endpoint::get("/email/public/v1/events", Shape::List);

/// Client for email delivery events.
#[derive(Clone, Debug)]
pub struct EmailEventsClient {
    client: Client,
}

impl EmailEventsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches events recorded for one recipient address.
    pub async fn for_recipient(&self, recipient_email: &str) -> Envelope {
        self.client
            .dispatch(&EVENTS, &[], &[("recipient", recipient_email)], None)
            .await
    }
}
