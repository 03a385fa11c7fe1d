//! Todo Commands
//!
//! `GET /todos/get-all-todos` and `POST /todos/create-todos`.

use serde::Serialize;
use todo_query::Item;

use super::check_status;
use crate::config::AppConfig;
use crate::error::{ApiError, TodoError};

const LIST_PATH: &str = "/todos/get-all-todos";
const CREATE_PATH: &str = "/todos/create-todos";

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize, PartialEq)]
pub struct CreateTodoArgs<'a> {
    pub todo: &'a str,
    pub completed: bool,
}

impl<'a> CreateTodoArgs<'a> {
    pub fn new(todo: &'a str) -> Self {
        Self { todo, completed: false }
    }
}

// ========================
// Commands
// ========================

async fn fetch_items(config: &AppConfig) -> Result<Vec<Item>, ApiError> {
    let response = reqwest::Client::new().get(config.endpoint(LIST_PATH)).send().await?;
    let body = check_status(response)?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn post_item(config: &AppConfig, args: &CreateTodoArgs<'_>) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(config.endpoint(CREATE_PATH))
        .json(args)
        .send()
        .await?;
    check_status(response)?;
    Ok(())
}

/// Full todo list
pub async fn list_todos(config: &AppConfig) -> Result<Vec<Item>, TodoError> {
    let items = fetch_items(config).await.map_err(TodoError::Fetch)?;
    log::debug!("[COMMANDS] fetched {} todos", items.len());
    Ok(items)
}

/// Submit a new, not yet completed todo. The response body is ignored.
pub async fn create_todo(config: &AppConfig, args: &CreateTodoArgs<'_>) -> Result<(), TodoError> {
    post_item(config, args).await.map_err(TodoError::Create)?;
    log::debug!("[COMMANDS] created todo {:?}", args.todo);
    Ok(())
}
