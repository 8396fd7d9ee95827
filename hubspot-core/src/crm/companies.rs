//! Company operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LOAD_BY_ID: Endpoint = Endpoint::get("/crm/v3/objects/companies/{id}", Shape::List);
const LOAD_BY_DOMAIN: Endpoint = Endpoint::post("/crm/v3/objects/companies/search", Shape::First);
const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/companies/search", Shape::Results);
const UPDATE: Endpoint = Endpoint::patch("/crm/v3/objects/companies/{id}", Shape::Object);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/companies/{id}", SuccessRule::NoContent);

/// Client for company operations.
#[derive(Clone, Debug)]
pub struct CompaniesClient {
    client: Client,
}

impl CompaniesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads a company by object id.
    pub async fn load_by_id(&self, id: &str) -> Envelope {
        self.client.dispatch(&LOAD_BY_ID, &[("id", id)], &[], None).await
    }

    /// Loads a company by its domain, unwrapping the first search result.
    pub async fn load_by_domain(&self, domain: &str) -> Envelope {
        let body = endpoint::single_filter_search("domain", domain);
        self.client.dispatch(&LOAD_BY_DOMAIN, &[], &[], Some(body)).await
    }

    /// Searches companies; the payload is the matching records list.
    pub async fn search(&self, filter_groups: Value, limit: u32, after: u32) -> Envelope {
        let body = endpoint::search_body(filter_groups, limit, after);
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Updates a company from a flat field map carrying its `id`.
    pub async fn update(&self, data: Value) -> Envelope {
        let Some(id) = endpoint::object_id(&data) else {
            return Envelope::rejected(
                "Missing required company ID in update data.",
                Value::Null,
            );
        };
        let body = endpoint::properties(data);
        self.client.dispatch(&UPDATE, &[("id", &id)], &[], Some(body)).await
    }

    /// Deletes the company registered for a domain.
    ///
    /// Two strictly sequential round trips: a lookup by domain, then the
    /// DELETE. When the lookup yields no company id the DELETE is not
    /// attempted and `false` is returned. Deletion succeeds only on 204.
    pub async fn delete(&self, domain: &str) -> bool {
        let lookup = self.load_by_domain(domain).await;
        let Some(id) = endpoint::object_id(&lookup.payload) else {
            return false;
        };
        self.client.dispatch_flag(&DELETE, &[("id", &id)], &[], None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Builder, Credentials};
    use serde_json::json;

    #[tokio::test]
    async fn update_without_id_is_rejected_locally() {
        let client = Builder::new()
            .credentials(Credentials::new("http://127.0.0.1:1", "token"))
            .build()
            .unwrap();
        let envelope = client.companies().update(json!({"name": "Acme"})).await;
        assert_eq!(envelope.status, 400);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Missing required company ID in update data.")
        );
        assert!(envelope.payload.is_null());
    }
}
