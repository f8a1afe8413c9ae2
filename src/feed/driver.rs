//! Feed Effect Driver
//!
//! Runs the effects returned by the controller: HTTP calls on the local
//! executor, transition timers via gloo-timers and notices via the store.
//! Completions re-enter the controller through `dispatch`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::FeedConfig;
use crate::context::SessionContext;
use crate::store::{store_push_notice, AppStore};

use super::controller::{FeedController, FeedEffect};

pub type SessionFeed = FeedController<SessionContext>;

#[derive(Clone, Copy)]
pub struct FeedDriver {
    controller: RwSignal<SessionFeed>,
    api: StoredValue<ApiClient>,
    store: AppStore,
}

impl FeedDriver {
    pub fn new(config: FeedConfig, session: SessionContext, api: ApiClient, store: AppStore) -> Self {
        Self {
            controller: RwSignal::new(FeedController::new(config, session)),
            api: StoredValue::new(api),
            store,
        }
    }

    pub fn controller(&self) -> RwSignal<SessionFeed> {
        self.controller
    }

    /// Apply an operation and run whatever it asks for
    pub fn dispatch<F>(self, op: F)
    where
        F: FnOnce(&mut SessionFeed) -> Vec<FeedEffect>,
    {
        // A disposed controller means the feed view is gone
        let Some(effects) = self.controller.try_update(op) else {
            log::debug!("[FEED] view unmounted, dropping completion");
            return;
        };
        self.run(effects);
    }

    fn run(self, effects: Vec<FeedEffect>) {
        for effect in effects {
            match effect {
                FeedEffect::Fetch { generation, count } => {
                    let Some(api) = self.api.try_get_value() else { continue };
                    spawn_local(async move {
                        let result = api.get_feed(count).await;
                        self.dispatch(move |c| c.on_page_loaded(generation, result));
                    });
                }
                FeedEffect::Submit { generation, submission } => {
                    let Some(api) = self.api.try_get_value() else { continue };
                    spawn_local(async move {
                        let result = api
                            .submit_label(&submission)
                            .await
                            .map(|ack| log::debug!("[FEED] label acknowledged: {}", ack));
                        self.dispatch(move |c| c.on_label_submitted(generation, result));
                    });
                }
                FeedEffect::ScheduleTransition { ticket, delay } => {
                    spawn_local(async move {
                        TimeoutFuture::new(delay.as_millis() as u32).await;
                        self.dispatch(move |c| c.on_transition_elapsed(ticket));
                    });
                }
                FeedEffect::Notify(notice) => store_push_notice(&self.store, notice),
            }
        }
    }
}
