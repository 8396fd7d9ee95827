//! Owner lookups.

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const SEARCH: Endpoint = Endpoint::get("/owners", Shape::List);
const LOAD: Endpoint = Endpoint::get("/owners/{id}", Shape::List);

/// Client for owner information.
#[derive(Clone, Debug)]
pub struct OwnersClient {
    client: Client,
}

impl OwnersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all owners.
    pub async fn search(&self) -> Envelope {
        self.client.dispatch(&SEARCH, &[], &[], None).await
    }

    /// Loads one owner by id.
    pub async fn load(&self, id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("id", id)], &[], None).await
    }
}
