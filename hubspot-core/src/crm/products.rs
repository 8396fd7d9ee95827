//! Product, product property, and product folder operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{self, Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const SEARCH: Endpoint = Endpoint::post("/crm/v3/objects/products/search", Shape::Results);
const CREATE: Endpoint = Endpoint::post("/crm/v3/objects/products", Shape::Object);
const LOAD: Endpoint = Endpoint::get("/crm/v3/objects/products/{id}", Shape::Object);
const UPDATE: Endpoint = Endpoint::patch("/crm/v3/objects/products/{id}", Shape::Object);
const DELETE: FlagEndpoint =
    FlagEndpoint::delete("/crm/v3/objects/products/{id}", SuccessRule::NoContent);

const PROPERTY_LIST: Endpoint = Endpoint::get("/crm/v3/properties/products", Shape::Results);
const PROPERTY_CREATE: Endpoint = Endpoint::post("/crm/v3/properties/products", Shape::Object);
const PROPERTY_UPDATE: Endpoint =
    Endpoint::patch("/crm/v3/properties/products/{propertyName}", Shape::Object);
const PROPERTY_DELETE: Endpoint =
    Endpoint::delete("/crm/v3/properties/products/{propertyName}", Shape::Object);

const FOLDER_LIST: Endpoint = Endpoint::get("/crm/v3/objects/product_folders", Shape::Results);
const FOLDER_CREATE: Endpoint = Endpoint::post("/crm/v3/objects/product_folders", Shape::Object);
const FOLDER_LOAD: Endpoint =
    Endpoint::get("/crm/v3/objects/product_folders/{folderId}", Shape::Object);
const FOLDER_UPDATE: Endpoint =
    Endpoint::patch("/crm/v3/objects/product_folders/{folderId}", Shape::Object);
const FOLDER_DELETE: Endpoint =
    Endpoint::delete("/crm/v3/objects/product_folders/{folderId}", Shape::Object);

/// Client for the product library.
#[derive(Clone, Debug)]
pub struct ProductsClient {
    client: Client,
}

impl ProductsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Searches products; the payload is the matching records list.
    pub async fn search(&self, filter_groups: Value, limit: u32, after: u32) -> Envelope {
        let body = endpoint::search_body(filter_groups, limit, after);
        self.client.dispatch(&SEARCH, &[], &[], Some(body)).await
    }

    /// Creates a product from a flat field map.
    pub async fn create(&self, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client.dispatch(&CREATE, &[], &[], Some(body)).await
    }

    /// Loads a product by id.
    pub async fn load(&self, product_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("id", product_id)], &[], None).await
    }

    /// Updates a product from a flat field map carrying its `id`.
    pub async fn update(&self, data: Value) -> Envelope {
        let Some(id) = endpoint::object_id(&data) else {
            return Envelope::rejected("Missing product ID in update data.", Value::Null);
        };
        let body = endpoint::properties(data);
        self.client.dispatch(&UPDATE, &[("id", &id)], &[], Some(body)).await
    }

    /// Deletes a product by id; succeeds only on 204.
    pub async fn delete(&self, product_id: &str) -> bool {
        self.client
            .dispatch_flag(&DELETE, &[("id", product_id)], &[], None)
            .await
    }

    /// Lists the product object's property definitions.
    pub async fn property_list(&self) -> Envelope {
        self.client.dispatch(&PROPERTY_LIST, &[], &[], None).await
    }

    /// Creates a product property definition.
    pub async fn property_create(&self, data: Value) -> Envelope {
        self.client.dispatch(&PROPERTY_CREATE, &[], &[], Some(data)).await
    }

    /// Updates a product property definition.
    pub async fn property_update(&self, property_name: &str, data: Value) -> Envelope {
        self.client
            .dispatch(
                &PROPERTY_UPDATE,
                &[("propertyName", property_name)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a product property definition.
    pub async fn property_delete(&self, property_name: &str) -> Envelope {
        self.client
            .dispatch(&PROPERTY_DELETE, &[("propertyName", property_name)], &[], None)
            .await
    }

    /// Lists product folders.
    pub async fn folders_load(&self) -> Envelope {
        self.client.dispatch(&FOLDER_LIST, &[], &[], None).await
    }

    /// Creates a product folder.
    pub async fn folder_create(&self, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client.dispatch(&FOLDER_CREATE, &[], &[], Some(body)).await
    }

    /// Loads a product folder by id.
    pub async fn folder_load(&self, folder_id: &str) -> Envelope {
        self.client
            .dispatch(&FOLDER_LOAD, &[("folderId", folder_id)], &[], None)
            .await
    }

    /// Updates a product folder.
    pub async fn folder_update(&self, folder_id: &str, data: Value) -> Envelope {
        let body = endpoint::properties(data);
        self.client
            .dispatch(&FOLDER_UPDATE, &[("folderId", folder_id)], &[], Some(body))
            .await
    }

    /// Deletes a product folder.
    pub async fn folder_delete(&self, folder_id: &str) -> Envelope {
        self.client
            .dispatch(&FOLDER_DELETE, &[("folderId", folder_id)], &[], None)
            .await
    }
}
