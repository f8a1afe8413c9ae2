//! Identity Provider Bindings
//!
//! The wallet SDK lives in JavaScript and is exposed to the app as
//! `window.__LABLR__.identity`. This module binds that object and defines the
//! explicit session state the rest of the app reads.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__LABLR__", "identity"], js_name = init, catch)]
    async fn bridge_init() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__LABLR__", "identity"], js_name = login, catch)]
    async fn bridge_login() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__LABLR__", "identity"], js_name = logout, catch)]
    async fn bridge_logout() -> Result<JsValue, JsValue>;
}

/// Anything that can name the current submitter
pub trait IdentitySource {
    fn current_user_id(&self) -> Option<String>;
}

/// Provider readiness plus the connected account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Provider finished initializing
    pub ready: bool,
    pub connected: bool,
    /// Wallet address used as the user id
    pub id: Option<String>,
}

impl Session {
    pub fn connected_as(id: impl Into<String>) -> Self {
        Self {
            ready: true,
            connected: true,
            id: Some(id.into()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        if !self.connected {
            return None;
        }
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Session after the provider reported `address` (None = no account)
    pub fn with_account(address: Option<String>) -> Self {
        let id = address.filter(|a| !a.is_empty());
        Self {
            ready: true,
            connected: id.is_some(),
            id,
        }
    }
}

impl IdentitySource for Session {
    fn current_user_id(&self) -> Option<String> {
        self.user_id().map(str::to_owned)
    }
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider failed: {0}")]
    Provider(String),
    #[error("identity provider returned an unexpected value: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct BridgeAccount {
    #[serde(default)]
    address: Option<String>,
}

fn js_error_text(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn account_from(value: JsValue) -> Result<Option<String>, IdentityError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let account: BridgeAccount =
        serde_wasm_bindgen::from_value(value).map_err(|e| IdentityError::Malformed(e.to_string()))?;
    Ok(account.address)
}

/// Initialize the provider and restore a previous connection if any
pub async fn init() -> Result<Option<String>, IdentityError> {
    let value = bridge_init().await.map_err(|e| IdentityError::Provider(js_error_text(e)))?;
    account_from(value)
}

pub async fn login() -> Result<Option<String>, IdentityError> {
    let value = bridge_login().await.map_err(|e| IdentityError::Provider(js_error_text(e)))?;
    account_from(value)
}

pub async fn logout() -> Result<(), IdentityError> {
    bridge_logout().await.map_err(|e| IdentityError::Provider(js_error_text(e)))?;
    Ok(())
}
