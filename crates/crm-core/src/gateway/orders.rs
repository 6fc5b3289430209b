//! Orders Gateway

use async_trait::async_trait;
use serde::Serialize;

use super::traits::ResourceGateway;
use crate::domain::{DomainResult, Order, OrderDraft};
use crate::http::{ApiResult, HttpClient};

/// Full order body: the draft plus its owning client
#[derive(Serialize)]
struct OrderArgs<'a> {
    client_id: i64,
    #[serde(flatten)]
    draft: &'a OrderDraft,
}

#[derive(Clone)]
pub struct OrdersGateway {
    http: HttpClient,
}

impl OrdersGateway {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl ResourceGateway for OrdersGateway {
    type Entity = Order;
    type Draft = OrderDraft;
    /// Owning client id
    type Scope = i64;

    const DELETE_PROMPT: &'static str = "Удалить заказ?";

    async fn list(&self, client_id: &i64) -> ApiResult<Vec<Order>> {
        self.http.get(&format!("/orders/all/{}", client_id)).await?.json()
    }

    async fn get(&self, id: i64) -> ApiResult<Order> {
        self.http.get(&format!("/orders/get/{}", id)).await?.json()
    }

    async fn create(&self, client_id: &i64, draft: &OrderDraft) -> ApiResult<()> {
        let args = OrderArgs { client_id: *client_id, draft };
        self.http.post("/orders/add", &args).await?;
        Ok(())
    }

    async fn update(&self, id: i64, client_id: &i64, draft: &OrderDraft) -> ApiResult<()> {
        let args = OrderArgs { client_id: *client_id, draft };
        self.http.put(&format!("/orders/update/{}", id), &args).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/orders/delete/{}", id)).await?;
        Ok(())
    }

    fn draft_of(order: &Order) -> OrderDraft {
        OrderDraft::from(order)
    }

    fn validate(draft: &OrderDraft) -> DomainResult<()> {
        draft.validate()
    }
}
