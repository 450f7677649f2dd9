use reqwest::Method;

use angebot_pricing::RateCard;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

const PATH: &str = "/ratecard/me";

impl ApiClient {
    /// `GET /ratecard/me`; fails with `NotFound` if the account has none yet.
    pub async fn rate_card(&self) -> ClientResult<RateCard> {
        self.get_json(PATH).await
    }

    /// Like [`rate_card`](Self::rate_card), but a missing card is `None`.
    pub async fn rate_card_opt(&self) -> ClientResult<Option<RateCard>> {
        match self.rate_card().await {
            Ok(card) => Ok(Some(card)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_rate_card(&self, card: &RateCard) -> ClientResult<RateCard> {
        self.write_json(Method::POST, PATH, card).await
    }

    pub async fn update_rate_card(&self, card: &RateCard) -> ClientResult<RateCard> {
        self.write_json(Method::PUT, PATH, card).await
    }

    /// Upsert: update when the account already has a rate card, create it on
    /// 404. Any other lookup failure is returned unchanged.
    pub async fn save_rate_card(&self, card: &RateCard) -> ClientResult<RateCard> {
        let saved = match self.rate_card_opt().await? {
            Some(_) => self.update_rate_card(card).await?,
            None => {
                tracing::info!("no rate card yet; creating one");
                self.create_rate_card(card).await?
            }
        };
        tracing::info!("rate card saved");
        Ok(saved)
    }
}
