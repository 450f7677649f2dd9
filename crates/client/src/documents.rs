use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::Serialize;

use angebot_core::OfferId;
use angebot_offers::OfferDocument;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MailOfferRequest {
    offer_id: OfferId,
}

impl ApiClient {
    /// `GET /pdf/{id}`. An empty body is an error, never an empty document.
    pub async fn offer_pdf(&self, id: OfferId) -> ClientResult<OfferDocument> {
        let path = format!("/pdf/{id}");
        let req = self.authed(Method::GET, &path)?.header(ACCEPT, "application/pdf");
        let bytes = self.send_bytes(Method::GET, &path, req).await?;
        if bytes.is_empty() {
            return Err(ClientError::EmptyDocument(id));
        }

        let doc = OfferDocument::new(id, bytes);
        if !doc.looks_like_pdf() {
            tracing::warn!(%id, "offer document does not start with a PDF header");
        }
        Ok(doc)
    }

    /// `POST /mail/offer`: the backend emails the offer to its customer.
    pub async fn send_offer_mail(&self, id: OfferId) -> ClientResult<()> {
        let path = "/mail/offer";
        let req = self.authed(Method::POST, path)?.json(&MailOfferRequest { offer_id: id });
        self.send_empty(Method::POST, path, req).await?;
        tracing::info!(%id, "offer mail requested");
        Ok(())
    }
}
