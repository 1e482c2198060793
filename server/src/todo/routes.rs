//! HTTP route handlers for the todo list UI
//!
//! Mutating routes follow post/redirect/get: trim the input, run the
//! mutator inside the session store's write lock, flash the outcome, and
//! redirect. Out-of-range list or todo indices render a 404 page instead of
//! the original's undefined behavior.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use metrics::counter;
use serde::Deserialize;
use std::sync::Arc;

use super::types::TodoError;
use super::{mutate, views};
use crate::session::{Flash, SessionId, SessionStore};

/// Application state for the todo routes
#[derive(Clone)]
pub struct TodoAppState {
    pub store: Arc<SessionStore>,
    /// Name of the session cookie
    pub cookie_name: String,
}

/// Form body for creating or renaming a list
#[derive(Debug, Deserialize)]
struct ListNameForm {
    list_name: String,
}

/// Form body for adding a todo
#[derive(Debug, Deserialize)]
struct TodoForm {
    todo: String,
}

/// Form body for checking/unchecking a todo; "true" checks, anything else unchecks
#[derive(Debug, Deserialize)]
struct CompletedForm {
    completed: String,
}

/// Resolve the request's session, minting one (and setting the cookie)
/// when the browser has no valid token yet.
async fn establish(state: &TodoAppState, jar: CookieJar) -> (SessionId, CookieJar) {
    let existing = jar.get(&state.cookie_name).map(|c| c.value().to_string());
    let (id, created) = state.store.open(existing.as_deref()).await;

    if created {
        let cookie = Cookie::build((state.cookie_name.clone(), id.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        (id, jar.add(cookie))
    } else {
        (id, jar)
    }
}

fn list_not_found(index: usize) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&format!(
            "List {} does not exist.",
            index
        ))),
    )
        .into_response()
}

fn todo_not_found(index: usize) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&format!(
            "Todo {} does not exist.",
            index
        ))),
    )
        .into_response()
}

/// The session vanished between `establish` and the state access. Only
/// possible when the entry expires in that window.
fn session_gone() -> Response {
    tracing::error!("Session disappeared mid-request");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// GET / - redirect to the list overview
async fn root() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists - render the list overview
async fn lists_overview(State(state): State<TodoAppState>, jar: CookieJar) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let page = state
        .store
        .update(&id, |data| {
            let flash = data.take_flash();
            views::lists_page(&data.lists, flash.as_ref())
        })
        .await;

    match page {
        Some(html) => (jar, Html(html)).into_response(),
        None => session_gone(),
    }
}

/// GET /lists/new - render the create form
async fn new_list_form(State(state): State<TodoAppState>, jar: CookieJar) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let page = state
        .store
        .update(&id, |data| {
            let flash = data.take_flash();
            views::new_list_page(flash.as_ref())
        })
        .await;

    match page {
        Some(html) => (jar, Html(html)).into_response(),
        None => session_gone(),
    }
}

/// GET /lists/:index - render one list
async fn list_view(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let page = state
        .store
        .update(&id, |data| {
            let flash = data.take_flash();
            data.lists
                .get(index)
                .map(|list| views::list_page(index, list, flash.as_ref()))
        })
        .await;

    match page {
        Some(Some(html)) => (jar, Html(html)).into_response(),
        Some(None) => (jar, list_not_found(index)).into_response(),
        None => session_gone(),
    }
}

/// GET /lists/:index/edit - render the rename form
async fn edit_list_form(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let page = state
        .store
        .update(&id, |data| {
            let flash = data.take_flash();
            data.lists
                .get(index)
                .map(|list| views::edit_list_page(index, list, flash.as_ref()))
        })
        .await;

    match page {
        Some(Some(html)) => (jar, Html(html)).into_response(),
        Some(None) => (jar, list_not_found(index)).into_response(),
        None => session_gone(),
    }
}

/// POST /lists - create a new list
async fn create_list(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Form(form): Form<ListNameForm>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;
    let name = form.list_name.trim().to_string();

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::create_list(&mut data.lists, &name);
            match &result {
                Ok(()) => data.set_flash(Flash::success("List has been created.")),
                Err(e) => data.set_flash(Flash::error(e.to_string())),
            }
            result
        })
        .await;

    match result {
        Some(Ok(())) => {
            counter!("todolist_lists_created_total").increment(1);
            (jar, Redirect::to("/lists")).into_response()
        }
        Some(Err(_)) => (jar, Redirect::to("/lists/new")).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index - rename a list
async fn update_list(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
    Form(form): Form<ListNameForm>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;
    let name = form.list_name.trim().to_string();

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::rename_list(&mut data.lists, index, &name);
            match &result {
                Ok(()) => data.set_flash(Flash::success("List has been updated.")),
                // 404s render a dedicated page, not a flash
                Err(TodoError::ListNotFound(_)) => {}
                Err(e) => data.set_flash(Flash::error(e.to_string())),
            }
            result
        })
        .await;

    match result {
        Some(Ok(())) => (jar, Redirect::to(&format!("/lists/{index}"))).into_response(),
        Some(Err(TodoError::ListNotFound(_))) => (jar, list_not_found(index)).into_response(),
        Some(Err(_)) => (jar, Redirect::to(&format!("/lists/{index}/edit"))).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index/delete - delete a list
async fn delete_list(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::delete_list(&mut data.lists, index);
            if result.is_ok() {
                data.set_flash(Flash::success("List has been successfully deleted."));
            }
            result
        })
        .await;

    match result {
        Some(Ok(_)) => {
            counter!("todolist_lists_deleted_total").increment(1);
            (jar, Redirect::to("/lists")).into_response()
        }
        Some(Err(_)) => (jar, list_not_found(index)).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index/todos - add a todo to a list
async fn add_todo(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
    Form(form): Form<TodoForm>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;
    let name = form.todo.trim().to_string();

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::add_todo(&mut data.lists, index, &name);
            match &result {
                Ok(()) => data.set_flash(Flash::success("Todo has been created.")),
                Err(TodoError::ListNotFound(_)) => {}
                Err(e) => data.set_flash(Flash::error(e.to_string())),
            }
            result
        })
        .await;

    match result {
        Some(Ok(())) => {
            counter!("todolist_todos_created_total").increment(1);
            (jar, Redirect::to(&format!("/lists/{index}"))).into_response()
        }
        Some(Err(TodoError::ListNotFound(_))) => (jar, list_not_found(index)).into_response(),
        Some(Err(_)) => (jar, Redirect::to(&format!("/lists/{index}"))).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index/todos/:todo_index - check or uncheck a todo
async fn set_todo_completed(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path((index, todo_index)): Path<(usize, usize)>,
    Form(form): Form<CompletedForm>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;
    let completed = form.completed == "true";

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::set_todo_completed(&mut data.lists, index, todo_index, completed);
            if result.is_ok() {
                data.set_flash(Flash::success("Todo updated."));
            }
            result
        })
        .await;

    match result {
        Some(Ok(())) => (jar, Redirect::to(&format!("/lists/{index}"))).into_response(),
        Some(Err(TodoError::ListNotFound(_))) => (jar, list_not_found(index)).into_response(),
        Some(Err(_)) => (jar, todo_not_found(todo_index)).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index/todos/:todo_index/delete - delete a todo
async fn delete_todo(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path((index, todo_index)): Path<(usize, usize)>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::delete_todo(&mut data.lists, index, todo_index);
            if result.is_ok() {
                data.set_flash(Flash::success("Todo has been successfully deleted."));
            }
            result
        })
        .await;

    match result {
        Some(Ok(_)) => (jar, Redirect::to(&format!("/lists/{index}"))).into_response(),
        Some(Err(TodoError::ListNotFound(_))) => (jar, list_not_found(index)).into_response(),
        Some(Err(_)) => (jar, todo_not_found(todo_index)).into_response(),
        None => session_gone(),
    }
}

/// POST /lists/:index/check_all - mark every todo in a list completed
async fn check_all(
    State(state): State<TodoAppState>,
    jar: CookieJar,
    Path(index): Path<usize>,
) -> Response {
    let (id, jar) = establish(&state, jar).await;

    let result = state
        .store
        .update(&id, |data| {
            let result = mutate::complete_all(&mut data.lists, index);
            if result.is_ok() {
                data.set_flash(Flash::success("All todos completed."));
            }
            result
        })
        .await;

    match result {
        Some(Ok(())) => (jar, Redirect::to(&format!("/lists/{index}"))).into_response(),
        Some(Err(_)) => (jar, list_not_found(index)).into_response(),
        None => session_gone(),
    }
}

/// Build the todo UI routes
pub fn todo_routes(state: TodoAppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/lists", get(lists_overview).post(create_list))
        .route("/lists/new", get(new_list_form))
        .route("/lists/:index", get(list_view).post(update_list))
        .route("/lists/:index/edit", get(edit_list_form))
        .route("/lists/:index/delete", post(delete_list))
        .route("/lists/:index/todos", post(add_todo))
        .route("/lists/:index/todos/:todo_index", post(set_todo_completed))
        .route("/lists/:index/todos/:todo_index/delete", post(delete_todo))
        .route("/lists/:index/check_all", post(check_all))
        .with_state(state)
}
