//! Test support: an in-memory stand-in for the CRM REST backend

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::{Client, ClientDraft, Order, OrderDraft, OrderStatus};
use crate::gateway::Api;
use crate::http::{ApiError, ApiResult, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::router::{Route, Router, RouterState};
use crate::session::MemoryStorage;

pub const OWNER_EMAIL: &str = "owner@example.com";
pub const OWNER_PASSWORD: &str = "secret";
pub const OWNER_TOKEN: &str = "owner-token";

struct FakeUser {
    id: i64,
    username: String,
    email: String,
    password: String,
    token: String,
}

#[derive(Deserialize)]
struct OrderBody {
    client_id: i64,
    #[serde(flatten)]
    draft: OrderDraft,
}

#[derive(Default)]
struct FakeState {
    users: Vec<FakeUser>,
    clients: BTreeMap<i64, Client>,
    orders: BTreeMap<i64, Order>,
    next_id: i64,
    requests: Vec<HttpRequest>,
    offline: bool,
    fail_next: Option<u16>,
    issue_token_on_register: bool,
    reject_negative_prices: bool,
}

impl FakeState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

fn no_content() -> HttpResponse {
    HttpResponse {
        status: 204,
        body: String::new(),
    }
}

fn detail(status: u16, message: &str) -> HttpResponse {
    reply(status, json!({ "detail": message }))
}

fn unprocessable(message: &str) -> HttpResponse {
    reply(422, json!({ "detail": [{ "loc": ["body"], "msg": message, "type": "value_error" }] }))
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, email: &str, password: &str, token: &str) -> Self {
        self.add_user(email, password, token);
        self
    }

    pub fn add_user(&self, email: &str, password: &str, token: &str) {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == email) {
            return;
        }
        let id = state.users.len() as i64 + 1;
        state.users.push(FakeUser {
            id,
            username: email.split('@').next().unwrap_or_default().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        });
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Answer the next request with `status` regardless of route
    pub fn fail_next(&self, status: u16) {
        self.state.lock().unwrap().fail_next = Some(status);
    }

    pub fn issue_token_on_register(&self) {
        self.state.lock().unwrap().issue_token_on_register = true;
    }

    pub fn reject_negative_prices(&self) {
        self.state.lock().unwrap().reject_negative_prices = true;
    }

    /// Invalidate every issued token, as an expired JWT would be
    pub fn revoke_tokens(&self) {
        let mut state = self.state.lock().unwrap();
        for user in state.users.iter_mut() {
            user.token = format!("revoked-{}", user.id);
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.state.lock().unwrap().clients.values().cloned().collect()
    }

    pub fn seed_client(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.clients.insert(
            id,
            Client {
                id,
                name: name.to_string(),
                contact: String::new(),
                notes: String::new(),
            },
        );
        id
    }

    pub fn seed_order(&self, client_id: i64, title: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.orders.insert(
            id,
            Order {
                id,
                client_id,
                title: title.to_string(),
                description: String::new(),
                price: 100,
                status: OrderStatus::New,
                notes: String::new(),
                is_paid: false,
            },
        );
        id
    }

    fn route(state: &mut FakeState, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request.path.split('/').filter(|s| !s.is_empty()).collect();
        let body = request.body.clone().unwrap_or(Value::Null);

        match (request.method, segments.as_slice()) {
            (Method::Post, ["auth", "login"]) => {
                let email = body["email"].as_str().unwrap_or_default();
                let password = body["password"].as_str().unwrap_or_default();
                match state.users.iter().find(|u| u.email == email && u.password == password) {
                    Some(user) => reply(200, json!({ "access_token": user.token, "token_type": "bearer" })),
                    None => detail(401, "Неверный username или пароль"),
                }
            }
            (Method::Post, ["auth", "register"]) => {
                let username = body["username"].as_str().unwrap_or_default().to_string();
                let email = body["email"].as_str().unwrap_or_default().to_string();
                let password = body["password"].as_str().unwrap_or_default().to_string();
                if !email.contains('@') {
                    return unprocessable("value is not a valid email address");
                }
                if state.users.iter().any(|u| u.email == email) {
                    return detail(400, "Email already registered");
                }
                let id = state.users.len() as i64 + 1;
                let token = format!("token-{}", username);
                state.users.push(FakeUser {
                    id,
                    username: username.clone(),
                    email: email.clone(),
                    password,
                    token: token.clone(),
                });
                let mut out = json!({ "id": id, "username": username, "email": email });
                if state.issue_token_on_register {
                    out["access_token"] = json!(token);
                }
                reply(200, out)
            }
            _ => Self::route_protected(state, request, &segments, body),
        }
    }

    fn route_protected(
        state: &mut FakeState,
        request: &HttpRequest,
        segments: &[&str],
        body: Value,
    ) -> HttpResponse {
        let bearer = request
            .header("Authorization")
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_string);
        let user = bearer.and_then(|token| state.users.iter().find(|u| u.token == token));
        let Some(user) = user else {
            return detail(401, "Not authenticated");
        };
        let me = json!({ "id": user.id, "email": user.email, "username": user.username });

        let id_at = |i: usize| segments.get(i).and_then(|s| s.parse::<i64>().ok());

        match (request.method, segments) {
            (Method::Get, ["user", "me"]) => reply(200, me),

            (Method::Get, ["clients", "all"]) => {
                reply(200, json!(state.clients.values().collect::<Vec<_>>()))
            }
            (Method::Get, ["clients", "get", _]) => match id_at(2).and_then(|id| state.clients.get(&id)) {
                Some(client) => reply(200, json!(client)),
                None => detail(404, "Клиент не найден!"),
            },
            (Method::Post, ["clients", "add"]) => match serde_json::from_value::<ClientDraft>(body) {
                Ok(draft) => {
                    let id = state.next_id();
                    let client = Client {
                        id,
                        name: draft.name,
                        contact: draft.contact,
                        notes: draft.notes,
                    };
                    state.clients.insert(id, client.clone());
                    reply(200, json!(client))
                }
                Err(e) => unprocessable(&e.to_string()),
            },
            (Method::Put, ["clients", "update", _]) => {
                let Ok(draft) = serde_json::from_value::<ClientDraft>(body) else {
                    return unprocessable("invalid client body");
                };
                match id_at(2).and_then(|id| state.clients.get_mut(&id)) {
                    Some(client) => {
                        client.name = draft.name;
                        client.contact = draft.contact;
                        client.notes = draft.notes;
                        reply(200, json!(client))
                    }
                    None => detail(404, "Клиент не найден!"),
                }
            }
            (Method::Delete, ["clients", "delete", _]) => {
                match id_at(2).and_then(|id| state.clients.remove(&id)) {
                    Some(client) => {
                        state.orders.retain(|_, order| order.client_id != client.id);
                        no_content()
                    }
                    None => detail(404, "Клиент не найден!"),
                }
            }

            (Method::Get, ["orders", "all", _]) => {
                let client_id = id_at(2);
                let orders: Vec<&Order> = state
                    .orders
                    .values()
                    .filter(|o| Some(o.client_id) == client_id)
                    .collect();
                reply(200, json!(orders))
            }
            (Method::Get, ["orders", "get", _]) => match id_at(2).and_then(|id| state.orders.get(&id)) {
                Some(order) => reply(200, json!(order)),
                None => detail(404, "Заказ не найден!"),
            },
            (Method::Post, ["orders", "add"]) => {
                let Ok(OrderBody { client_id, draft }) = serde_json::from_value::<OrderBody>(body) else {
                    return unprocessable("invalid order body");
                };
                if state.reject_negative_prices && draft.price < 0 {
                    return unprocessable("price must be greater than or equal to 0");
                }
                let id = state.next_id();
                let order = Order {
                    id,
                    client_id,
                    title: draft.title,
                    description: draft.description,
                    price: draft.price,
                    status: draft.status,
                    notes: draft.notes,
                    is_paid: draft.is_paid,
                };
                state.orders.insert(id, order.clone());
                reply(200, json!(order))
            }
            (Method::Put, ["orders", "update", _]) => {
                let Ok(OrderBody { client_id, draft }) = serde_json::from_value::<OrderBody>(body) else {
                    return unprocessable("invalid order body");
                };
                match id_at(2).and_then(|id| state.orders.get_mut(&id)) {
                    Some(order) => {
                        order.client_id = client_id;
                        order.title = draft.title;
                        order.description = draft.description;
                        order.price = draft.price;
                        order.status = draft.status;
                        order.notes = draft.notes;
                        order.is_paid = draft.is_paid;
                        reply(200, json!(order))
                    }
                    None => detail(404, "Заказ не найден!"),
                }
            }
            (Method::Delete, ["orders", "delete", _]) => {
                match id_at(2).and_then(|id| state.orders.remove(&id)) {
                    Some(_) => no_content(),
                    None => detail(404, "Заказ не найден!"),
                }
            }

            _ => detail(404, "Not Found"),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        if state.offline {
            return Err(ApiError::Network("error sending request: Failed to fetch".to_string()));
        }
        if let Some(status) = state.fail_next.take() {
            return Ok(detail(status, "Injected failure"));
        }
        Ok(Self::route(&mut state, &request))
    }
}

pub type TestRouter = Router<Arc<Mutex<RouterState>>>;

pub fn cell<S>(value: S) -> Arc<Mutex<S>> {
    Arc::new(Mutex::new(value))
}

pub fn api_with(backend: &Arc<FakeBackend>) -> Api {
    Api::new(backend.clone(), Arc::new(MemoryStorage::new()))
}

/// Api whose session already holds the owner's token
pub async fn logged_in_api(backend: &Arc<FakeBackend>) -> Api {
    backend.add_user(OWNER_EMAIL, OWNER_PASSWORD, OWNER_TOKEN);
    let api = api_with(backend);
    api.auth
        .login(OWNER_EMAIL, OWNER_PASSWORD)
        .await
        .expect("owner login");
    api
}

/// Router sitting on `start`, already guarded
pub fn router_for(api: &Api, start: Route) -> Arc<TestRouter> {
    let router = Arc::new(Router::new(api.session.clone(), cell(RouterState::default())));
    router.navigate_to(start);
    router
}
