use reqwest::Method;

use angebot_core::CustomerId;
use angebot_customers::Customer;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /customers/me`.
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.get_json("/customers/me").await
    }

    pub async fn get_customer(&self, id: CustomerId) -> ClientResult<Customer> {
        self.get_json(&format!("/customers/{id}")).await
    }

    /// Validates locally, then `POST /customers`.
    pub async fn create_customer(&self, customer: &Customer) -> ClientResult<Customer> {
        customer.validate()?;
        let created: Customer = self.write_json(Method::POST, "/customers", customer).await?;
        tracing::info!(id = ?created.id, "customer created");
        Ok(created)
    }

    /// Validates locally, then `PUT /customers/{id}`.
    pub async fn update_customer(&self, id: CustomerId, customer: &Customer) -> ClientResult<Customer> {
        customer.validate()?;
        self.write_json(Method::PUT, &format!("/customers/{id}"), customer).await
    }

    pub async fn delete_customer(&self, id: CustomerId) -> ClientResult<()> {
        self.delete(&format!("/customers/{id}")).await?;
        tracing::info!(%id, "customer deleted");
        Ok(())
    }
}
