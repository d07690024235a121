use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub content: String,
}

#[derive(Deserialize)]
pub struct NewItem {
    pub content: String,
}

#[derive(Deserialize)]
pub struct ContentChange {
    pub old_content: String,
    pub new_content: String,
}

#[derive(Deserialize)]
pub struct ItemRef {
    pub content: String,
}

/// Stored contents in insertion order. Duplicates are allowed; the mutation
/// routes address items by value and touch every match, the same way the real
/// backend's `WHERE content = ?` queries do.
pub type Db = Arc<RwLock<Vec<String>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/", get(health))
        .route("/get", get(list_items))
        .route("/post", post(create_item))
        .route("/update", put(update_item))
        .route("/delete", delete(delete_item))
        .route("/totalnum", get(total_num))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.iter().map(|content| Item { content: content.clone() }).collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<NewItem>,
) -> (StatusCode, Json<Value>) {
    db.write().await.push(input.content);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Content created successfully" })),
    )
}

// Unknown old_content still answers 200; the real backend never checks
// affected rows.
async fn update_item(
    State(db): State<Db>,
    Json(input): Json<ContentChange>,
) -> Json<Value> {
    let mut items = db.write().await;
    for content in items.iter_mut() {
        if *content == input.old_content {
            *content = input.new_content.clone();
        }
    }
    Json(json!({ "message": "Content updated successfully" }))
}

async fn delete_item(State(db): State<Db>, Json(input): Json<ItemRef>) -> Json<Value> {
    db.write().await.retain(|content| *content != input.content);
    Json(json!({ "message": "Content deleted successfully" }))
}

async fn total_num(State(db): State<Db>) -> Json<Value> {
    let items = db.read().await;
    Json(json!({ "total": items.len() }))
}
