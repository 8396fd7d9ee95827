//! Object property definition operations, generic over object type.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const LIST: Endpoint = Endpoint::get("/crm/v3/properties/{objectType}", Shape::Results);
const CREATE: Endpoint = Endpoint::post("/crm/v3/properties/{objectType}", Shape::Object);
const UPDATE: FlagEndpoint = FlagEndpoint::patch(
    "/crm/v3/properties/{objectType}/{propertyName}",
    SuccessRule::Under300,
);
const DELETE: FlagEndpoint = FlagEndpoint::delete(
    "/crm/v3/properties/{objectType}/{propertyName}",
    SuccessRule::NoContent,
);

/// Client for property definitions of any object type.
#[derive(Clone, Debug)]
pub struct PropertiesClient {
    client: Client,
}

impl PropertiesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the property definitions of an object type.
    pub async fn list(&self, object_type: &str) -> Envelope {
        self.client
            .dispatch(&LIST, &[("objectType", object_type)], &[], None)
            .await
    }

    /// Creates a property definition.
    pub async fn create(&self, object_type: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&CREATE, &[("objectType", object_type)], &[], Some(data))
            .await
    }

    /// Updates a property definition; succeeds on any status below 300.
    pub async fn update(&self, object_type: &str, property_name: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(
                &UPDATE,
                &[("objectType", object_type), ("propertyName", property_name)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a property definition; succeeds only on 204.
    pub async fn delete(&self, object_type: &str, property_name: &str) -> bool {
        self.client
            .dispatch_flag(
                &DELETE,
                &[("objectType", object_type), ("propertyName", property_name)],
                &[],
                None,
            )
            .await
    }
}
