//! Application Context
//!
//! Shared services and session state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::FeedConfig;
use crate::identity::{self, IdentitySource, Session};

/// Services shared by every page
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub feed: FeedConfig,
}

impl AppContext {
    pub fn new(api: ApiClient, feed: FeedConfig) -> Self {
        Self { api, feed }
    }
}

/// Wallet session, read by the views and by the feed controller
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session - read
    pub session: ReadSignal<Session>,
    /// Current session - write
    set_session: WriteSignal<Session>,
}

impl SessionContext {
    pub fn new(session: (ReadSignal<Session>, WriteSignal<Session>)) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
        }
    }

    /// Initialize the provider; restores an existing connection
    pub fn init(&self) {
        let set_session = self.set_session;
        log::info!("[SESSION] initializing identity provider");
        spawn_local(async move {
            match identity::init().await {
                Ok(address) => {
                    log::info!("[SESSION] ready, account: {:?}", address);
                    set_session.set(Session::with_account(address));
                }
                Err(e) => {
                    // Still offer the connect button
                    log::error!("[SESSION] initialization failed: {}", e);
                    set_session.set(Session::with_account(None));
                }
            }
        });
    }

    pub fn connect(&self) {
        if !self.session.get_untracked().ready {
            log::warn!("[SESSION] provider is not ready yet");
            return;
        }
        let set_session = self.set_session;
        spawn_local(async move {
            match identity::login().await {
                Ok(address) => {
                    log::info!("[SESSION] login successful: {:?}", address);
                    set_session.set(Session::with_account(address));
                }
                Err(e) => log::error!("[SESSION] login failed: {}", e),
            }
        });
    }

    pub fn disconnect(&self) {
        let set_session = self.set_session;
        spawn_local(async move {
            match identity::logout().await {
                Ok(()) => {
                    log::info!("[SESSION] logged out");
                    set_session.set(Session::with_account(None));
                }
                Err(e) => log::error!("[SESSION] logout failed: {}", e),
            }
        });
    }
}

impl IdentitySource for SessionContext {
    fn current_user_id(&self) -> Option<String> {
        self.session
            .try_with_untracked(|s| s.current_user_id())
            .flatten()
    }
}
