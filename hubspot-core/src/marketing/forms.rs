//! Form operations.

use serde_json::{json, Value};

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const SEARCH: Endpoint = Endpoint::get("/marketing/v3/forms", Shape::Results);
const LOAD: Endpoint = Endpoint::get("/marketing/v3/forms/{formId}", Shape::Object);
const CREATE: Endpoint = Endpoint::post("/marketing/v3/forms", Shape::Object);
const UPDATE: Endpoint = Endpoint::patch("/marketing/v3/forms/{formId}", Shape::Object);
const DELETE: Endpoint = Endpoint::delete("/marketing/v3/forms/{formId}", Shape::Object);
const SUBMIT: FlagEndpoint = FlagEndpoint::post(
    "/submissions/v3/integration/submit/{portalId}/{formGuid}",
    SuccessRule::Under300,
);
const SUBMISSIONS: Endpoint = Endpoint::get(
    "/form-integrations/v1/submissions/forms/{formId}",
    Shape::List,
);
const PERFORMANCE: Endpoint =
    Endpoint::get("/marketing/v3/forms/{formId}/performance", Shape::Object);
const FIELDS: Endpoint = Endpoint::get("/marketing/v3/forms/{formId}/fields", Shape::List);

/// Client for marketing forms.
#[derive(Clone, Debug)]
pub struct FormsClient {
    client: Client,
}

impl FormsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all forms.
    pub async fn search(&self) -> Envelope {
        self.client.dispatch(&SEARCH, &[], &[], None).await
    }

    /// Loads one form by id.
    pub async fn load(&self, form_id: &str) -> Envelope {
        self.client.dispatch(&LOAD, &[("formId", form_id)], &[], None).await
    }

    /// Creates a form from a raw definition body.
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Updates a form definition.
    pub async fn update(&self, form_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&UPDATE, &[("formId", form_id)], &[], Some(data))
            .await
    }

    /// Deletes a form; the remote's response envelope is returned.
    pub async fn delete(&self, form_id: &str) -> Envelope {
        self.client
            .dispatch(&DELETE, &[("formId", form_id)], &[], None)
            .await
    }

    /// Submits field values to a form; succeeds on any status below 300.
    pub async fn submit(
        &self,
        portal_id: &str,
        form_guid: &str,
        fields: Value,
        context: Value,
    ) -> bool {
        let body = json!({ "fields": fields, "context": context });
        self.client
            .dispatch_flag(
                &SUBMIT,
                &[("portalId", portal_id), ("formGuid", form_guid)],
                &[],
                Some(body),
            )
            .await
    }

    /// Fetches submissions of a form; filters travel as query parameters.
    pub async fn submissions(&self, form_id: &str, filters: &[(&str, &str)]) -> Envelope {
        self.client
            .dispatch(&SUBMISSIONS, &[("formId", form_id)], filters, None)
            .await
    }

    /// Fetches aggregate performance metrics of a form.
    pub async fn performance(&self, form_id: &str) -> Envelope {
        self.client
            .dispatch(&PERFORMANCE, &[("formId", form_id)], &[], None)
            .await
    }

    /// Fetches the field definitions of a form.
    pub async fn fields(&self, form_id: &str) -> Envelope {
        self.client
            .dispatch(&FIELDS, &[("formId", form_id)], &[], None)
            .await
    }
}
