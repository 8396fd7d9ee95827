//! Marketing surface: forms, marketing emails, campaigns, email events.

pub mod campaigns;
pub mod emails;
pub mod events;
pub mod forms;

pub use campaigns::CampaignsClient;
pub use emails::MarketingEmailsClient;
pub use events::EmailEventsClient;
pub use forms::FormsClient;
