use axum::extract::{Form, Path, State};
use axum::response::Json;
use lendit_types::{Identity, Item, ItemId, NewItem, UserId};
use serde::Deserialize;
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

fn parse_item_id(raw: &str) -> ServerResult<ItemId> {
    raw.parse()
        .map_err(|e| ServerError::Validation(format!("{e}")))
}

fn parse_user_id(raw: &str) -> ServerResult<UserId> {
    raw.parse()
        .map_err(|e| ServerError::Validation(format!("{e}")))
}

/// Liveness probe.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "lendit-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/items` — all items, most recently added first.
pub async fn list_items_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<Item>>> {
    Ok(Json(state.listing.list_reverse_chronological()?))
}

/// Form body for `POST /api/items`. Field names are wire contract.
#[derive(Debug, Deserialize)]
pub struct CreateItemForm {
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemDescription")]
    pub item_description: Option<String>,
    pub owner: Option<String>,
    pub image: Option<String>,
}

/// `POST /api/items` — create an item (form-encoded).
pub async fn create_item_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateItemForm>,
) -> ServerResult<Json<Item>> {
    let owner = match form.owner.as_deref() {
        Some(raw) => parse_user_id(raw)?,
        None => return Err(ServerError::Validation("missing owner".into())),
    };

    let mut new = NewItem::new(form.item_name, owner);
    if let Some(description) = form.item_description {
        new = new.description(description);
    }
    if let Some(image) = form.image {
        new = new.image(image);
    }
    let item = state.items.create(new)?;
    tracing::debug!(item = %item.id, owner = %item.owner, "item created");
    Ok(Json(item))
}

/// JSON body for `DELETE /api/items`.
#[derive(Debug, Deserialize)]
pub struct DeleteItemBody {
    #[serde(rename = "_id")]
    pub id: String,
}

/// `DELETE /api/items` — remove the item named in the body.
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Json(body): Json<DeleteItemBody>,
) -> ServerResult<Json<serde_json::Value>> {
    let id = parse_item_id(&body.id)?;
    if !state.items.delete(&id)? {
        return Err(ServerError::NotFound(format!("item {id}")));
    }
    Ok(Json(json!({ "deleted": id })))
}

/// JSON body for `PUT /api/items/:item_id`.
#[derive(Debug, Deserialize)]
pub struct BorrowBody {
    #[serde(rename = "borrowerId")]
    pub borrower_id: String,
}

/// `PUT /api/items/:item_id` — the lending transaction.
pub async fn borrow_item_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<BorrowBody>,
) -> ServerResult<Json<Item>> {
    let item_id = parse_item_id(&item_id)?;
    let borrower_id = parse_user_id(&body.borrower_id)?;
    let updated = state.lending.borrow(&item_id, &borrower_id)?;
    Ok(Json(updated))
}

/// JSON body for `POST /api/users` (collaborator seeding).
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserBody {
    #[serde(rename = "karmaPoints")]
    pub karma_points: Option<i64>,
}

/// `POST /api/users` — register an identity with the in-process
/// collaborator backend.
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Option<Json<CreateUserBody>>,
) -> ServerResult<Json<Identity>> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let id = UserId::generate();
    let identity = match body.karma_points {
        Some(karma) => Identity::with_karma(id, karma),
        None => Identity::new(id),
    };
    state.identities.insert(identity.clone())?;
    Ok(Json(identity))
}

/// `GET /api/users/:user_id` — read an identity and its karma counter.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ServerResult<Json<Identity>> {
    let id = parse_user_id(&user_id)?;
    state
        .identities
        .find_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("user {id}")))
}
