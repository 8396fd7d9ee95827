//! Custom object operations.
//!
//! The object type travels as a path parameter, so one set of entries
//! covers every schema defined in the portal.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/{objectType}", Shape::Object);
const LOAD: Endpoint = Endpoint::get("/crm/v3/objects/{objectType}/{id}", Shape::Object);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/{objectType}/{id}", SuccessRule::NoContent);

/// Client for portal-defined custom objects.
#[derive(Clone, Debug)]
pub struct CustomObjectsClient {
    client: Client,
}

impl CustomObjectsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a record of the given custom object type.
    pub async fn create(&self, object_type: &str, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client
            .dispatch(&CREATE, &[("objectType", object_type)], &[], Some(body))
            .await
    }

    /// Loads a record by object type and id.
    pub async fn load(&self, object_type: &str, id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("objectType", object_type), ("id", id)], &[], None)
            .await
    }

    /// Deletes a record; succeeds only on 204.
    pub async fn delete(&self, object_type: &str, id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("objectType", object_type), ("id", id)], &[], None)
            .await
    }
}
