//! Associations between contacts, companies, and deals.
//!
//! Most association pairs collapse to a boolean on 204; the deal-contact
//! pair returns the remote's envelope instead, matching the remote's own
//! asymmetry across sub-APIs.

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const CONTACT_COMPANY: &str =
    "/crm/v3/objects/contacts/{contactId}/associations/companies/{companyId}/contact_to_company";
const CONTACT_DEAL: &str =
    "/crm/v3/objects/contacts/{contactId}/associations/deals/{dealId}/contact_to_deal";
const DEAL_COMPANY: &str =
    "/crm/v3/objects/deals/{dealId}/associations/companies/{companyId}/deal_to_company";
const DEAL_CONTACT: &str =
    "/crm/v3/objects/deals/{dealId}/associations/contacts/{contactId}/deal_to_contact";

const ASSOCIATE_CONTACT_COMPANY: FlagEndpoint =
    FlagEndpoint::put(CONTACT_COMPANY, SuccessRule::NoContent);
const DISSOCIATE_CONTACT_COMPANY: FlagEndpoint =
    FlagEndpoint::delete(CONTACT_COMPANY, SuccessRule::NoContent);
const ASSOCIATE_CONTACT_DEAL: FlagEndpoint =
    FlagEndpoint::put(CONTACT_DEAL, SuccessRule::NoContent);
const DISSOCIATE_CONTACT_DEAL: FlagEndpoint =
    FlagEndpoint::delete(CONTACT_DEAL, SuccessRule::NoContent);
const ASSOCIATE_DEAL_COMPANY: FlagEndpoint =
    FlagEndpoint::put(DEAL_COMPANY, SuccessRule::NoContent);
const DISSOCIATE_DEAL_COMPANY: FlagEndpoint =
    FlagEndpoint::delete(DEAL_COMPANY, SuccessRule::NoContent);
const ASSOCIATE_DEAL_CONTACT: Endpoint = Endpoint::put(DEAL_CONTACT, Shape::List);
const DISSOCIATE_DEAL_CONTACT: Endpoint = Endpoint::delete(DEAL_CONTACT, Shape::List);

/// Client for object associations.
#[derive(Clone, Debug)]
pub struct AssociationsClient {
    client: Client,
}

impl AssociationsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Associates a contact with a company.
    pub async fn associate_contact_with_company(&self, contact_id: &str, company_id: &str) -> bool {
        self.client
            .dispatch_flag(
                &ASSOCIATE_CONTACT_COMPANY,
                &[("contactId", contact_id), ("companyId", company_id)],
                &[],
                None,
            )
            .await
    }

    /// Removes a contact-company association.
    pub async fn dissociate_contact_from_company(
        &self,
        contact_id: &str,
        company_id: &str,
    ) -> bool {
        self.client
            .dispatch_flag(
                &DISSOCIATE_CONTACT_COMPANY,
                &[("contactId", contact_id), ("companyId", company_id)],
                &[],
                None,
            )
            .await
    }

    /// Associates a contact with a deal.
    pub async fn associate_contact_with_deal(&self, contact_id: &str, deal_id: &str) -> bool {
        self.client
            .dispatch_flag(
                &ASSOCIATE_CONTACT_DEAL,
                &[("contactId", contact_id), ("dealId", deal_id)],
                &[],
                None,
            )
            .await
    }

    /// Removes a contact-deal association.
    pub async fn dissociate_contact_from_deal(&self, contact_id: &str, deal_id: &str) -> bool {
        self.client
            .dispatch_flag(
                &DISSOCIATE_CONTACT_DEAL,
                &[("contactId", contact_id), ("dealId", deal_id)],
                &[],
                None,
            )
            .await
    }

    /// Associates a deal with a company.
    pub async fn associate_deal_with_company(&self, deal_id: &str, company_id: &str) -> bool {
        self.client
            .dispatch_flag(
                &ASSOCIATE_DEAL_COMPANY,
                &[("dealId", deal_id), ("companyId", company_id)],
                &[],
                None,
            )
            .await
    }

    /// Removes a deal-company association.
    pub async fn dissociate_deal_from_company(&self, deal_id: &str, company_id: &str) -> bool {
        self.client
            .dispatch_flag(
                &DISSOCIATE_DEAL_COMPANY,
                &[("dealId", deal_id), ("companyId", company_id)],
                &[],
                None,
            )
            .await
    }

    /// Associates a deal with a contact, returning the remote envelope.
    pub async fn associate_deal_with_contact(&self, deal_id: &str, contact_id: &str) -> Envelope {
        self.client
            .dispatch(
                &ASSOCIATE_DEAL_CONTACT,
                &[("dealId", deal_id), ("contactId", contact_id)],
                &[],
                None,
            )
            .await
    }

    /// Removes a deal-contact association, returning the remote envelope.
    pub async fn dissociate_deal_from_contact(&self, deal_id: &str, contact_id: &str) -> Envelope {
        self.client
            .dispatch(
                &DISSOCIATE_DEAL_CONTACT,
                &[("dealId", deal_id), ("contactId", contact_id)],
                &[],
                None,
            )
            .await
    }
}
