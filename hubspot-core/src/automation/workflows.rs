//! Workflow operations.

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const SEARCH: Endpoint = Endpoint::get("/automation/v3/workflows", Shape::List);
const LOAD: Endpoint = Endpoint::get("/automation/v3/workflows/{workflowId}", Shape::Object);
// Enrollment still lives on the v2 automation API.
const ENROLL_CONTACT: Endpoint = Endpoint::post(
    "/automation/v2/workflows/{workflowId}/enrollments/contacts/{email}",
    Shape::Object,
);

/// Client for automation workflows.
#[derive(Clone, Debug)]
pub struct WorkflowsClient {
    client: Client,
}

impl WorkflowsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists workflows; filters travel as query parameters.
    pub async fn search(&self, filters: &[(&str, &str)]) -> Envelope {
        self.client.dispatch(&SEARCH, &[], filters, None).await
    }

    /// Loads one workflow by id.
    pub async fn load(&self, workflow_id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("workflowId", workflow_id)], &[], None)
            .await
    }

    /// Enrolls a contact (by email) into a workflow.
    pub async fn enroll_contact(&self, workflow_id: &str, email: &str) -> Envelope {
        self.client
            .dispatch(
                &ENROLL_CONTACT,
                &[("workflowId", workflow_id), ("email", email)],
                &[],
                None,
            )
            .await
    }
}
