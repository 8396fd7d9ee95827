//! Deal pipeline and pipeline stage operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const SEARCH: Endpoint = Endpoint::get("/crm/v3/pipelines/deals", Shape::Results);
const LOAD: Endpoint = Endpoint::get("/crm/v3/pipelines/deals/{pipelineId}", Shape::Object);
const CREATE: Endpoint = Endpoint::post("/crm/v3/pipelines/deals", Shape::Object);
const UPDATE: Endpoint = Endpoint::put("/crm/v3/pipelines/deals/{pipelineId}", Shape::Object);
const DELETE: Endpoint = Endpoint::delete("/crm/v3/pipelines/deals/{pipelineId}", Shape::Object);

const STAGE_SEARCH: Endpoint =
    Endpoint::get("/crm/v3/pipelines/deals/{pipelineId}/stages", Shape::Object);
const STAGE_LOAD: Endpoint = Endpoint::get(
    "/crm/v3/pipelines/deals/{pipelineId}/stages/{stageId}",
    Shape::Object,
);
const STAGE_CREATE: Endpoint =
    Endpoint::post("/crm/v3/pipelines/deals/{pipelineId}/stages", Shape::Object);
const STAGE_UPDATE: Endpoint = Endpoint::patch(
    "/crm/v3/pipelines/deals/{pipelineId}/stages/{stageId}",
    Shape::Object,
);
const STAGE_DELETE: Endpoint = Endpoint::delete(
    "/crm/v3/pipelines/deals/{pipelineId}/stages/{stageId}",
    Shape::Object,
);

/// Client for deal pipelines and their stages.
#[derive(Clone, Debug)]
pub struct PipelinesClient {
    client: Client,
}

impl PipelinesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all deal pipelines.
    pub async fn search(&self) -> Envelope {
        self.client.dispatch(&SEARCH, &[], &[], None).await
    }

    /// Loads one pipeline by id.
    pub async fn load(&self, pipeline_id: &str) -> Envelope {
        self.client
            .dispatch(&LOAD, &[("pipelineId", pipeline_id)], &[], None)
            .await
    }

    /// Creates a pipeline from a raw definition body.
    pub async fn create(&self, data: Value) -> Envelope {
        self.client.dispatch(&CREATE, &[], &[], Some(data)).await
    }

    /// Replaces a pipeline definition.
    pub async fn update(&self, pipeline_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&UPDATE, &[("pipelineId", pipeline_id)], &[], Some(data))
            .await
    }

    /// Deletes a pipeline; the remote's response envelope is returned.
    pub async fn delete(&self, pipeline_id: &str) -> Envelope {
        self.client
            .dispatch(&DELETE, &[("pipelineId", pipeline_id)], &[], None)
            .await
    }

    /// Lists the stages of a pipeline.
    pub async fn stage_search(&self, pipeline_id: &str) -> Envelope {
        self.client
            .dispatch(&STAGE_SEARCH, &[("pipelineId", pipeline_id)], &[], None)
            .await
    }

    /// Loads one stage.
    pub async fn stage_load(&self, pipeline_id: &str, stage_id: &str) -> Envelope {
        self.client
            .dispatch(
                &STAGE_LOAD,
                &[("pipelineId", pipeline_id), ("stageId", stage_id)],
                &[],
                None,
            )
            .await
    }

    /// Creates a stage in a pipeline.
    pub async fn stage_create(&self, pipeline_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&STAGE_CREATE, &[("pipelineId", pipeline_id)], &[], Some(data))
            .await
    }

    /// Updates a stage.
    pub async fn stage_update(&self, pipeline_id: &str, stage_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(
                &STAGE_UPDATE,
                &[("pipelineId", pipeline_id), ("stageId", stage_id)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a stage.
    pub async fn stage_delete(&self, pipeline_id: &str, stage_id: &str) -> Envelope {
        self.client
            .dispatch(
                &STAGE_DELETE,
                &[("pipelineId", pipeline_id), ("stageId", stage_id)],
                &[],
                None,
            )
            .await
    }
}
