use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, State},
    http::{header::CONTENT_TYPE, request::Parts, StatusCode},
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use service::{contact::NewContact, pagination::ListWindow};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use models::contact;

use crate::{errors::ApiError, html, state::ServerState};

/// Public projection of a contact. `phone`, `status` and `updated_at` are
/// accepted on input but never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactOut {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<contact::Model> for ContactOut {
    fn from(m: contact::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip, default 0
    pub skip: Option<u64>,
    /// Maximum rows returned, default 100, capped at 100
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateContactParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
}

impl From<CreateContactParams> for NewContact {
    fn from(p: CreateContactParams) -> Self {
        NewContact {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
            status: p.status,
        }
    }
}

/// Create parameters taken from the query string when it carries them,
/// otherwise from a urlencoded form body. Any decode failure is a 422.
pub struct ContactParams(pub CreateContactParams);

fn has_form_body(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S> FromRequest<S> for ContactParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.uri().query().is_some_and(|q| !q.is_empty()) {
            match Query::<CreateContactParams>::try_from_uri(req.uri()) {
                Ok(Query(params)) => return Ok(ContactParams(params)),
                // unrelated query params (e.g. tracking tags) next to a form body
                Err(_) if has_form_body(&req) => {}
                Err(e) => return Err(ApiError::Validation(e.body_text())),
            }
        }
        let Form(params) = Form::<CreateContactParams>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(ContactParams(params))
    }
}

/// Integer path id. A non-integer segment is a 422; an integer too large for
/// the key column is kept so the lookup reports not found.
pub struct ContactId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(ContactId(id));
        }
        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(ContactId(i64::MAX));
        }
        Err(ApiError::Validation(format!("id: value is not a valid integer: {raw:?}")))
    }
}

/// `skip`/`limit` query; decode failures are a 422 like every other parameter.
pub struct ListParams(pub ListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(q) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(ListParams(q))
    }
}

/// List of contacts
///
/// Returns all contacts
#[utoipa::path(
    get, path = "/contacts/", tag = "contacts",
    params(ListQuery),
    responses(
        (status = 200, description = "OK", body = [ContactOut]),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    ListParams(q): ListParams,
) -> Result<Json<Vec<ContactOut>>, ApiError> {
    let rows = state.contacts.list(ListWindow { skip: q.skip, limit: q.limit }).await?;
    info!(count = rows.len(), "list contacts");
    Ok(Json(rows.into_iter().map(ContactOut::from).collect()))
}

/// Returns a single contact
///
/// To view all details related to a single contact.
#[utoipa::path(
    get, path = "/contacts/view/{id}", tag = "contacts",
    params(("id" = i64, Path, description = "The integer id of the contact you want to view details.")),
    responses(
        (status = 200, description = "OK", body = ContactOut),
        (status = 404, description = "Contact not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn view(
    State(state): State<ServerState>,
    ContactId(id): ContactId,
) -> Result<Json<ContactOut>, ApiError> {
    let found = state.contacts.get(id).await?;
    Ok(Json(found.into()))
}

/// Create a new contact
#[utoipa::path(
    post, path = "/contacts/", tag = "contacts",
    params(CreateContactParams),
    responses(
        (status = 200, description = "Created", body = ContactOut),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ContactParams(params): ContactParams,
) -> Result<Json<ContactOut>, ApiError> {
    let created = state.contacts.create(params.into()).await?;
    Ok(Json(created.into()))
}

/// Delete an individual contact
#[utoipa::path(
    delete, path = "/contacts/remove/{id}", tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact successfully deleted"),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    ContactId(id): ContactId,
) -> Result<StatusCode, ApiError> {
    match state.contacts.delete(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(service::errors::ServiceError::NotFound(_)) => Ok(StatusCode::NOT_FOUND),
        Err(e) => Err(e.into()),
    }
}

/// Returns a single contact in HTML
#[utoipa::path(
    get, path = "/contacts/view_html/{id}", tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "HTML page", body = String, content_type = "text/html"),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn view_html(
    State(state): State<ServerState>,
    ContactId(id): ContactId,
) -> Result<Html<String>, ApiError> {
    let found = state.contacts.get(id).await?;
    Ok(Html(html::render_contact(&found)))
}
