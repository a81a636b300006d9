//! In-memory reference implementation of the customer REST API.
//!
//! Mirrors the production server's wire shapes: Spring-style page envelopes
//! (`content` / `totalElements`), 400 responses carrying
//! `{"errors": ["<field>: <message>", ...]}` with the backend's `countryCode`
//! field spelling, and sequential i64 id assignment. The DTOs are defined
//! independently from the client crate; the client's integration tests catch
//! schema drift.

use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock},
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

// Server-side validation patterns. The phone pattern is looser than the
// client's: a bare digit run is accepted as the area code.
static COUNTRY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[A-Z]{2}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\(\d{1,6}\))|\d{1,6})[- .]?(\d{3}[- .]?){2}\d{1,4}$").unwrap()
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$").unwrap());

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
}

/// Incoming create/update payload; an `id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
}

#[derive(Serialize)]
struct PageBody {
    content: Vec<Customer>,
    #[serde(rename = "totalElements")]
    total_elements: usize,
}

#[derive(Serialize)]
struct CountryCount {
    country_code: String,
    count: usize,
}

#[derive(Serialize)]
struct Availability {
    available: bool,
}

#[derive(Serialize)]
struct Errors {
    errors: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Pagination {
    page: Option<usize>,
    size: Option<usize>,
}

#[derive(Default)]
pub struct Store {
    customers: BTreeMap<i64, Customer>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/count/country_code",
            get(count_by_country_code),
        )
        .route("/api/customers/name/{name}", get(find_by_name))
        .route("/api/customers/phone/{phone}", get(find_by_phone))
        .route("/api/customers/country_code/{code}", get(find_by_country_code))
        .route("/api/customers/available/phone/{phone}", get(phone_available))
        .route("/api/customers/available/email/{email}", get(email_available))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Page a filtered, id-ordered snapshot the way Spring does: zero-based
/// `page`, default size 20, with the unpaged total in `totalElements`.
fn paginate(customers: Vec<Customer>, pagination: &Pagination) -> PageBody {
    let total_elements = customers.len();
    let size = pagination.size.unwrap_or(20).max(1);
    let page = pagination.page.unwrap_or(0);
    // page and size are caller-controlled; the offset must not overflow.
    let content = customers
        .into_iter()
        .skip(page.saturating_mul(size))
        .take(size)
        .collect();
    PageBody {
        content,
        total_elements,
    }
}

/// Field-prefixed validation messages, empty when the payload is acceptable.
/// `exclude_id` skips uniqueness checks against the record being updated.
fn validate(store: &Store, payload: &CustomerPayload, exclude_id: Option<i64>) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.name.len() < 3 || payload.name.len() > 50 {
        errors.push("name: size must be between 3 and 50".to_string());
    }
    if !COUNTRY_CODE_RE.is_match(&payload.country_code) {
        errors.push("countryCode: must be two uppercase letters".to_string());
    }
    if !PHONE_RE.is_match(&payload.phone) {
        errors.push("phone: invalid phone number".to_string());
    }
    if !EMAIL_RE.is_match(&payload.email) {
        errors.push("email: invalid email address".to_string());
    }
    if payload.gender != "male" && payload.gender != "female" {
        errors.push("gender: must be male or female".to_string());
    }

    let taken = |field: fn(&Customer) -> &str, value: &str| {
        store
            .customers
            .values()
            .any(|c| Some(c.id) != exclude_id && field(c) == value)
    };
    if taken(|c| &c.phone, &payload.phone) {
        errors.push("phone: phone number already taken".to_string());
    }
    if taken(|c| &c.email, &payload.email) {
        errors.push("email: email already in use".to_string());
    }
    errors
}

async fn list_customers(
    State(db): State<Db>,
    Query(pagination): Query<Pagination>,
) -> Json<PageBody> {
    let store = db.read().await;
    let customers = store.customers.values().cloned().collect();
    Json(paginate(customers, &pagination))
}

async fn create_customer(
    State(db): State<Db>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), (StatusCode, Json<Errors>)> {
    let mut store = db.write().await;
    let errors = validate(&store, &payload, None);
    if !errors.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(Errors { errors })));
    }
    store.next_id += 1;
    let customer = Customer {
        id: store.next_id,
        name: payload.name,
        country_code: payload.country_code,
        phone: payload.phone,
        email: payload.email,
        gender: payload.gender,
    };
    store.customers.insert(customer.id, customer.clone());
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, StatusCode> {
    let store = db.read().await;
    store
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerPayload>,
) -> Response {
    let mut store = db.write().await;
    if !store.customers.contains_key(&id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let errors = validate(&store, &payload, Some(id));
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(Errors { errors })).into_response();
    }
    let Some(customer) = store.customers.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    customer.name = payload.name;
    customer.country_code = payload.country_code;
    customer.phone = payload.phone;
    customer.email = payload.email;
    customer.gender = payload.gender;
    Json(customer.clone()).into_response()
}

async fn delete_customer(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    if store.customers.remove(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn find_by_name(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Json<PageBody> {
    let store = db.read().await;
    let customers = store
        .customers
        .values()
        .filter(|c| c.name.contains(&name))
        .cloned()
        .collect();
    Json(paginate(customers, &pagination))
}

async fn find_by_country_code(
    State(db): State<Db>,
    Path(code): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Json<PageBody> {
    let store = db.read().await;
    let customers = store
        .customers
        .values()
        .filter(|c| c.country_code == code)
        .cloned()
        .collect();
    Json(paginate(customers, &pagination))
}

async fn find_by_phone(
    State(db): State<Db>,
    Path(phone): Path<String>,
) -> Result<Json<Customer>, StatusCode> {
    let store = db.read().await;
    store
        .customers
        .values()
        .find(|c| c.phone == phone)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn count_by_country_code(State(db): State<Db>) -> Json<Vec<CountryCount>> {
    let store = db.read().await;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for customer in store.customers.values() {
        *counts.entry(customer.country_code.clone()).or_default() += 1;
    }
    Json(
        counts
            .into_iter()
            .map(|(country_code, count)| CountryCount {
                country_code,
                count,
            })
            .collect(),
    )
}

async fn phone_available(
    State(db): State<Db>,
    Path(phone): Path<String>,
) -> Json<Availability> {
    let store = db.read().await;
    let available = !store.customers.values().any(|c| c.phone == phone);
    Json(Availability { available })
}

async fn email_available(
    State(db): State<Db>,
    Path(email): Path<String>,
) -> Json<Availability> {
    let store = db.read().await;
    let available = !store.customers.values().any(|c| c.email == email);
    Json(Availability { available })
}
