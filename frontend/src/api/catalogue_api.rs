//! Client API calls for catalogue and session endpoints.

use common::{auth::AuthStatus, dataset::{Dataset, DatasetKey}};
use dioxus::prelude::*;


#[server]
pub async fn load_catalogues() -> Result<Vec<(DatasetKey, Dataset)>, ServerFnError> {
    let x = backend::api::catalogue::load_catalogues().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn session_auth_status() -> Result<AuthStatus, ServerFnError> {
    let x = backend::api::auth::session_auth_status().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
