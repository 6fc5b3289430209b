//! Clients Gateway

use async_trait::async_trait;

use super::traits::ResourceGateway;
use crate::domain::{Client, ClientDraft, DomainResult};
use crate::http::{ApiResult, HttpClient};

#[derive(Clone)]
pub struct ClientsGateway {
    http: HttpClient,
}

impl ClientsGateway {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl ResourceGateway for ClientsGateway {
    type Entity = Client;
    type Draft = ClientDraft;
    type Scope = ();

    const DELETE_PROMPT: &'static str = "Удалить клиента?";

    async fn list(&self, _scope: &()) -> ApiResult<Vec<Client>> {
        self.http.get("/clients/all").await?.json()
    }

    async fn get(&self, id: i64) -> ApiResult<Client> {
        self.http.get(&format!("/clients/get/{}", id)).await?.json()
    }

    async fn create(&self, _scope: &(), draft: &ClientDraft) -> ApiResult<()> {
        self.http.post("/clients/add", draft).await?;
        Ok(())
    }

    async fn update(&self, id: i64, _scope: &(), draft: &ClientDraft) -> ApiResult<()> {
        self.http.put(&format!("/clients/update/{}", id), draft).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/clients/delete/{}", id)).await?;
        Ok(())
    }

    fn draft_of(client: &Client) -> ClientDraft {
        ClientDraft::from(client)
    }

    fn validate(draft: &ClientDraft) -> DomainResult<()> {
        draft.validate()
    }
}
