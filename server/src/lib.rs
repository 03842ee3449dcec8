//! JSON HTTP front end for the todo store.
//!
//! # Design
//! The store is shared through `Db`, an `Arc<RwLock<TodoStore>>`. Reads take
//! the read guard; every mutation holds the write guard for the whole store
//! operation, so concurrent requests never interleave inside one. Items are
//! cloned out of the guard before a response is built.
//!
//! Extractor rejections (bad JSON, bad path) are taken as `Result`s and
//! turned into `ApiError`, so clients always get the JSON envelope back.

pub mod config;
pub mod envelope;
pub mod error;

use std::{future::Future, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{parse_id, validate_task, CompleteOutcome, TodoError, TodoItem, TodoStore};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub use envelope::{ApiResponse, CreateTodo, Health, UpdateTodo};
pub use error::ApiError;

pub type Db = Arc<RwLock<TodoStore>>;

type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// Tasks the server binary starts with.
pub const SAMPLE_TASKS: [&str; 3] = ["Learn Rust", "Build a REST API", "Write tests"];

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    router(Arc::new(RwLock::new(store)))
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(health).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .route(
            "/todos",
            get(list_todos)
                .post(create_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .delete(delete_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}/complete",
            post(complete_todo).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store)).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(
    listener: TcpListener,
    store: TodoStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}

fn ok<T>(status: StatusCode, message: impl Into<String>, data: T) -> ApiResult<T> {
    Ok((status, Json(ApiResponse::success(message, data))))
}

fn todo_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path.map_err(|e| TodoError::InvalidId(e.body_text()))?;
    Ok(parse_id(&raw)?)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    let Json(value) = payload.map_err(|e| TodoError::InvalidBody(e.body_text()))?;
    Ok(value)
}

async fn health(State(db): State<Db>) -> ApiResult<Health> {
    let total = db.read().await.len();
    ok(
        StatusCode::OK,
        "Todo API is running",
        Health {
            status: "ok".to_string(),
            total,
        },
    )
}

async fn list_todos(State(db): State<Db>) -> ApiResult<Vec<TodoItem>> {
    let todos = db.read().await.list().to_vec();
    ok(
        StatusCode::OK,
        format!("Found {} todos", todos.len()),
        todos,
    )
}

/// Bodies go through axum's `Json` extractor, so a request must declare
/// `Content-Type: application/json`; without it the body is rejected with
/// 400 like any other unparseable payload.
async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<TodoItem> {
    let input = body(payload)?;
    let task = validate_task(&input.task)?;
    let todo = db.write().await.insert(task);
    info!(id = todo.id, task = %todo.task, "created todo");
    ok(StatusCode::CREATED, "Todo created successfully", todo)
}

async fn get_todo(
    State(db): State<Db>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<TodoItem> {
    let id = todo_id(path)?;
    let todo = db
        .read()
        .await
        .find_by_id(id)
        .cloned()
        .ok_or(TodoError::NotFound(id))?;
    ok(StatusCode::OK, "Todo retrieved successfully", todo)
}

async fn update_todo(
    State(db): State<Db>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<TodoItem> {
    let id = todo_id(path)?;
    let input = body(payload)?;
    let todo = db
        .write()
        .await
        .update(id, input.complete)
        .ok_or(TodoError::NotFound(id))?;
    info!(id, complete = todo.complete, "updated todo");
    ok(StatusCode::OK, "Todo updated successfully", todo)
}

async fn delete_todo(
    State(db): State<Db>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<TodoItem> {
    let id = todo_id(path)?;
    let todo = db
        .write()
        .await
        .delete(id)
        .ok_or(TodoError::NotFound(id))?;
    info!(id, "deleted todo");
    ok(StatusCode::OK, "Todo deleted successfully", todo)
}

async fn complete_todo(
    State(db): State<Db>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<TodoItem> {
    let id = todo_id(path)?;
    let outcome = db.write().await.complete(id);
    match outcome {
        CompleteOutcome::Completed(todo) => {
            info!(id, "completed todo");
            ok(StatusCode::OK, "Todo marked as complete", todo)
        }
        CompleteOutcome::AlreadyComplete(_) => Err(TodoError::AlreadyComplete(id).into()),
        CompleteOutcome::NotFound => Err(TodoError::NotFound(id).into()),
    }
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed(method)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
