use reqwest::Method;

use angebot_core::OfferId;
use angebot_offers::{OfferDetail, OfferDraft, OfferSummary};

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /offers/me`.
    pub async fn list_offers(&self) -> ClientResult<Vec<OfferSummary>> {
        self.get_json("/offers/me").await
    }

    pub async fn get_offer(&self, id: OfferId) -> ClientResult<OfferDetail> {
        self.get_json(&format!("/offers/{id}")).await
    }

    /// `POST /offers` with raw measurements only.
    pub async fn create_offer(&self, draft: &OfferDraft) -> ClientResult<OfferDetail> {
        let created: OfferDetail = self.write_json(Method::POST, "/offers", draft).await?;
        tracing::info!(id = ?created.id, customer = %draft.customer_id, "offer created");
        Ok(created)
    }

    pub async fn update_offer(&self, id: OfferId, draft: &OfferDraft) -> ClientResult<OfferDetail> {
        self.write_json(Method::PUT, &format!("/offers/{id}"), draft).await
    }

    pub async fn delete_offer(&self, id: OfferId) -> ClientResult<()> {
        self.delete(&format!("/offers/{id}")).await?;
        tracing::info!(%id, "offer deleted");
        Ok(())
    }
}
