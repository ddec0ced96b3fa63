use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Session token embedded in the form page and expected back in the
/// `X-CSRFToken` header. Fixed rather than per-session so tests can probe
/// the rejection path with a known-wrong value.
pub const CSRF_TOKEN: &str = "mock-csrf-token-0001";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub content_list: String,
}

#[derive(Deserialize)]
pub struct CreatePage {
    pub title: String,
    #[serde(default)]
    pub content_list: String,
}

pub struct ServerState {
    pages: RwLock<HashMap<u64, Page>>,
    next_id: AtomicU64,
}

pub type Db = Arc<ServerState>;

pub fn app() -> Router {
    let db: Db = Arc::new(ServerState {
        pages: RwLock::new(HashMap::new()),
        next_id: AtomicU64::new(1),
    });
    Router::new()
        .route("/", get(index))
        .route("/pages", get(list_pages).post(create_page))
        .route("/pages/{id}", get(get_page))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Form page with the hidden CSRF field, the way the real server renders it.
async fn index() -> Html<String> {
    Html(format!(
        "<html><body><form method=\"post\" action=\"/pages\">\n\
         <input type=\"hidden\" name=\"csrfmiddlewaretoken\" value=\"{CSRF_TOKEN}\">\n\
         <input type=\"text\" name=\"title\">\n\
         </form></body></html>"
    ))
}

async fn list_pages(State(db): State<Db>) -> Json<Vec<Page>> {
    let pages = db.pages.read().await;
    let mut list: Vec<Page> = pages.values().cloned().collect();
    list.sort_by_key(|p| p.id);
    Json(list)
}

async fn get_page(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Page>, StatusCode> {
    let pages = db.pages.read().await;
    pages.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_page(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreatePage>,
) -> Result<(StatusCode, Json<Page>), StatusCode> {
    check_csrf(&headers)?;
    let page = Page {
        id: db.next_id.fetch_add(1, Ordering::Relaxed),
        title: input.title,
        content_list: input.content_list,
    };
    db.pages.write().await.insert(page.id, page.clone());
    Ok((StatusCode::CREATED, Json(page)))
}

/// Reject state-changing requests whose token is absent or wrong, the way
/// the real server's CSRF middleware does.
fn check_csrf(headers: &HeaderMap) -> Result<(), StatusCode> {
    let token = headers
        .get("X-CSRFToken")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::FORBIDDEN)?;
    if token != CSRF_TOKEN {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(())
}
