//! Automation surface: workflows and webhook subscriptions.

pub mod webhooks;
pub mod workflows;

pub use webhooks::WebhooksClient;
pub use workflows::WorkflowsClient;
