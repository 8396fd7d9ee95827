//! Ticket operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LOAD: Endpoint = Endpoint::get("/crm/v3/objects/tickets/{id}", Shape::Object);
const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/tickets", Shape::Object);
const UPDATE: Endpoint = Endpoint::patch("/crm/v3/objects/tickets/{id}", Shape::Object);
const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/tickets/search", Shape::Results);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/tickets/{id}", SuccessRule::NoContent);

/// Client for support tickets.
#[derive(Clone, Debug)]
pub struct TicketsClient {
    client: Client,
}

impl TicketsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads a ticket by id.
    pub async fn load(&self, ticket_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("id", ticket_id)], &[], None).await
    }

    /// Creates or updates a ticket from a flat field map.
    ///
    /// With an `id` in `data` the ticket is PATCHed; without one a new
    /// ticket is created. Fields travel in the `properties` body either
    /// way.
    pub async fn save(&self, data: Value) -> Envelope {
        match endpoint::object_id(&data) {
            Some(id) => {
                let body = endpoint::properties(data);
                self.client.dispatch(&UPDATE, &[("id", &id)], &[], Some(body)).await
            }
            None => {
                let body = endpoint::properties(data);
                self.client.dispatch(&CREATE, &[], &[], Some(body)).await
            }
        }
    }

    /// Searches tickets; the payload is the matching records list.
    pub async fn search(&self, filter_groups: Value, limit: u32, after: u32) -> Envelope {
        let body = endpoint::search_body(filter_groups, limit, after);
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Deletes a ticket by id; succeeds only on 204.
    pub async fn delete(&self, ticket_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", ticket_id)], &[], None)
            .await
    }
}
