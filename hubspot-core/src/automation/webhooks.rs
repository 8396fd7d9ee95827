//! Webhook subscription, settings, and delivery-event operations.
//!
//! All endpoints are scoped by the developer app id.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, Shape};
use crate::envelope::Envelope;

const SUBSCRIPTIONS: Endpoint = Endpoint::get("/webhooks/v3/{appId}/subscriptions", Shape::Results);
const SUBSCRIPTION_LOAD: Endpoint = Endpoint::get(
    "/webhooks/v3/{appId}/subscriptions/{subscriptionId}",
    Shape::Object,
);
const SUBSCRIPTION_CREATE: Endpoint =
    Endpoint::post("/webhooks/v3/{appId}/subscriptions", Shape::Object);
const SUBSCRIPTION_UPDATE: Endpoint = Endpoint::patch(
    "/webhooks/v3/{appId}/subscriptions/{subscriptionId}",
    Shape::Object,
);
const SUBSCRIPTION_DELETE: Endpoint = Endpoint::delete(
    "/webhooks/v3/{appId}/subscriptions/{subscriptionId}",
    Shape::Object,
);

const SETTINGS_LOAD: Endpoint = Endpoint::get("/webhooks/v3/{appId}/settings", Shape::Object);
const SETTINGS_UPDATE: Endpoint = Endpoint::put("/webhooks/v3/{appId}/settings", Shape::Object);

const RECENT_FAILURES: Endpoint =
    Endpoint::get("/webhooks/v3/{appId}/recent-failures", Shape::List);
const EVENT_RESEND: Endpoint =
    Endpoint::post("/webhooks/v3/{appId}/events/{eventId}/resend", Shape::Object);
const EVENT_STATUS: Endpoint = Endpoint::get("/webhooks/v3/{appId}/events/{eventId}", Shape::Object);

/// Client for webhook management.
#[derive(Clone, Debug)]
pub struct WebhooksClient {
    client: Client,
}

impl WebhooksClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists an app's webhook subscriptions.
    pub async fn subscriptions(&self, app_id: &str) -> Envelope {
        self.client
            .dispatch(&SUBSCRIPTIONS, &[("appId", app_id)], &[], None)
            .await
    }

    /// Loads one subscription.
    pub async fn subscription_load(&self, app_id: &str, subscription_id: &str) -> Envelope {
        self.client
            .dispatch(
                &SUBSCRIPTION_LOAD,
                &[("appId", app_id), ("subscriptionId", subscription_id)],
                &[],
                None,
            )
            .await
    }

    /// Creates a subscription from a raw definition body.
    pub async fn subscription_create(&self, app_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&SUBSCRIPTION_CREATE, &[("appId", app_id)], &[], Some(data))
            .await
    }

    /// Updates a subscription.
    pub async fn subscription_update(
        &self,
        app_id: &str,
        subscription_id: &str,
        data: Value,
    ) -> Envelope {
        self.client
            .dispatch(
                &SUBSCRIPTION_UPDATE,
                &[("appId", app_id), ("subscriptionId", subscription_id)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a subscription; the remote's response envelope is returned.
    pub async fn subscription_delete(&self, app_id: &str, subscription_id: &str) -> Envelope {
        self.client
            .dispatch(
                &SUBSCRIPTION_DELETE,
                &[("appId", app_id), ("subscriptionId", subscription_id)],
                &[],
                None,
            )
            .await
    }

    /// Loads an app's webhook settings.
    pub async fn settings_load(&self, app_id: &str) -> Envelope {
        self.client
            .dispatch(&SETTINGS_LOAD, &[("appId", app_id)], &[], None)
            .await
    }

    /// Replaces an app's webhook settings.
    pub async fn settings_update(&self, app_id: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&SETTINGS_UPDATE, &[("appId", app_id)], &[], Some(data))
            .await
    }

    /// Lists recent delivery failures for an app.
    pub async fn recent_failures(&self, app_id: &str) -> Envelope {
        self.client
            .dispatch(&RECENT_FAILURES, &[("appId", app_id)], &[], None)
            .await
    }

    /// Requests redelivery of one failed event.
    pub async fn event_resend(&self, app_id: &str, event_id: &str) -> Envelope {
        self.client
            .dispatch(
                &EVENT_RESEND,
                &[("appId", app_id), ("eventId", event_id)],
                &[],
                None,
            )
            .await
    }

    /// Fetches the delivery status of one event.
    pub async fn event_status(&self, app_id: &str, event_id: &str) -> Envelope {
        self.client
            .dispatch(
                &EVENT_STATUS,
                &[("appId", app_id), ("eventId", event_id)],
                &[],
                None,
            )
            .await
    }
}
