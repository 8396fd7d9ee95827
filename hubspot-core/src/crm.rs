//! CRM object families.
//!
//! Each submodule exposes one resource family as a thin sub-client over
//! the core [`crate::client::Client`], reached through its accessor:
//!
//! ```no_run
//! use hubspot_core::client::{Builder, Credentials};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Builder::new()
//!     .credentials(Credentials::from_env())
//!     .build()?;
//!
//! let deal = client.deals().load_by_id("123").await;
//! let gone = client.deals().delete("123").await;
//! # Ok(())
//! # }
//! ```

pub mod associations;
pub mod calls;
pub mod companies;
pub mod contacts;
pub mod custom_objects;
pub mod deals;
pub mod engagements;
pub mod extensions;
pub mod line_items;
pub mod lists;
pub mod owners;
pub mod pipelines;
pub mod products;
pub mod properties;
pub mod quotes;
pub mod tickets;

pub use associations::AssociationsClient;
pub use calls::CallsClient;
pub use companies::CompaniesClient;
pub use contacts::ContactsClient;
pub use custom_objects::CustomObjectsClient;
pub use deals::DealsClient;
pub use engagements::EngagementsClient;
pub use extensions::ExtensionCardsClient;
pub use line_items::LineItemsClient;
pub use lists::ListsClient;
pub use owners::OwnersClient;
pub use pipelines::PipelinesClient;
pub use products::ProductsClient;
pub use properties::PropertiesClient;
pub use quotes::QuotesClient;
pub use tickets::TicketsClient;
