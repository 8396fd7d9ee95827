//! Contact operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LOAD_BY_ID: Endpoint = Endpoint::get("/crm/v3/objects/contacts/{id}", Shape::List);
const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/contacts/search", Shape::List);
const LOAD_BY_EMAIL: Endpoint = Endpoint::post("/crm/v3/objects/contacts/search", Shape::First);
const UPDATE: Endpoint = Endpoint::patch("/crm/v3/objects/contacts/{id}", Shape::List);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/contacts/{id}", SuccessRule::Under300);

/// Client for contact operations.
#[derive(Clone, Debug)]
pub struct ContactsClient {
    client: Client,
}

impl ContactsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads a contact by object id.
    pub async fn load_by_id(&self, id: &str) -> Envelope {
        self.client.dispatch(&LOAD_BY_ID, &[("id", id)], &[], None).await
    }

    /// Loads a contact by email address.
    ///
    /// Issues a search with a single equality filter and `limit: 1`; the
    /// payload is the first matching contact, or `null` when no contact
    /// carries the address. The raw search response shape is never
    /// returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use hubspot_core::client::{Builder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Builder::new().credentials(Credentials::from_env()).build()?;
    /// let contact = client.contacts().load_by_email("a@example.com").await;
    /// match contact.outcome() {
    ///     hubspot_core::envelope::Outcome::Success(contact) => println!("{contact}"),
    ///     hubspot_core::envelope::Outcome::Missing => println!("no such contact"),
    ///     hubspot_core::envelope::Outcome::Failed { status, message } => {
    ///         eprintln!("lookup failed [{status}]: {message}");
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load_by_email(&self, email: &str) -> Envelope {
        let body = endpoint::single_filter_search("email", email);
        self.client.dispatch(&LOAD_BY_EMAIL, &[], &[], Some(body)).await
    }

    /// Searches contacts with caller-supplied filter groups.
    ///
    /// Pagination parameters are forwarded, not iterated.
    pub async fn search(&self, filter_groups: Value, limit: u32, after: u32) -> Envelope {
        let body = endpoint::search_body(filter_groups, limit, after);
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Updates a contact from a flat field map.
    ///
    /// `data` must carry the contact's `id`; the remaining fields are sent
    /// as the `properties` body of a PATCH. A missing id is rejected
    /// locally with a 400 envelope and no network call.
    pub async fn update(&self, data: Value) -> Envelope {
        let Some(id) = endpoint::object_id(&data) else {
            return Envelope::rejected(
                "Missing contact ID in data payload.",
                serde_json::json!([]),
            );
        };
        let body = endpoint::properties(data);
        self.client.dispatch(&UPDATE, &[("id", &id)], &[], Some(body)).await
    }

    /// Deletes the contact owning an email address.
    ///
    /// Looks the contact up by email first; when the lookup yields no id,
    /// no DELETE is attempted and the operation reports failure.
    pub async fn delete(&self, email: &str) -> bool {
        let lookup = self.load_by_email(email).await;
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

    fn offline_client() -> Client {
        Builder::new()
            .credentials(Credentials::new("http://127.0.0.1:1", "token"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn update_without_id_is_rejected_locally() {
        let envelope = offline_client()
            .contacts()
            .update(json!({"firstname": "Ada"}))
            .await;
        assert_eq!(envelope.status, 400);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Missing contact ID in data payload.")
        );
        assert_eq!(envelope.payload, json!([]));
    }
}
