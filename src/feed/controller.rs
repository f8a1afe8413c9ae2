//! Feed Controller
//!
//! Owns the feed buffer, the cursor and the prefetch policy. Every operation is
//! synchronous and returns the effects the caller must perform (HTTP requests,
//! timers, notices). Completions are fed back through the `on_*` methods.
//!
//! Requests carry the buffer generation they were issued for; `teardown`
//! bumps the generation so completions that arrive late are dropped.

use std::time::Duration;

use crate::api::ApiError;
use crate::config::FeedConfig;
use crate::identity::IdentitySource;
use crate::models::{FeedItem, LabelSubmission};
use crate::notice::Notice;

use super::buffer::FeedBuffer;
use super::transition::{DeferredTransition, Direction, PendingTransition};

/// Work requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEffect {
    /// Request `count` items and report back via `on_page_loaded`
    Fetch { generation: u64, count: usize },
    /// Post the submission and report back via `on_label_submitted`
    Submit { generation: u64, submission: LabelSubmission },
    /// Call `on_transition_elapsed(ticket)` after `delay`
    ScheduleTransition { ticket: u64, delay: Duration },
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Empty,
    Loading,
    Populated,
    /// The backend stopped returning new items
    Exhausted,
    /// Nothing buffered and the last fetch failed
    Failed,
}

/// Submission in flight
#[derive(Debug, Clone, PartialEq)]
struct InFlight {
    index: usize,
    item_id: String,
}

pub struct FeedController<I> {
    config: FeedConfig,
    identity: I,
    buffer: FeedBuffer,
    transition: DeferredTransition,
    generation: u64,
    loading: bool,
    submitting: Option<InFlight>,
    exhausted: bool,
    /// The last fetch failed and no fetch has been issued since
    failed: bool,
}

impl<I: IdentitySource> FeedController<I> {
    pub fn new(config: FeedConfig, identity: I) -> Self {
        Self {
            config,
            identity,
            buffer: FeedBuffer::new(),
            transition: DeferredTransition::new(),
            generation: 0,
            loading: false,
            submitting: None,
            exhausted: false,
            failed: false,
        }
    }

    pub fn buffer(&self) -> &FeedBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Option<usize> {
        self.buffer.cursor()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Buffer index of the card whose label is in flight
    pub fn submitting_index(&self) -> Option<usize> {
        self.submitting.as_ref().map(|s| s.index)
    }

    pub fn pending_transition(&self) -> Option<&PendingTransition> {
        self.transition.pending()
    }

    pub fn phase(&self) -> FeedPhase {
        if self.loading {
            FeedPhase::Loading
        } else if self.exhausted {
            FeedPhase::Exhausted
        } else if self.failed && self.buffer.is_empty() {
            FeedPhase::Failed
        } else if self.buffer.is_empty() {
            FeedPhase::Empty
        } else {
            FeedPhase::Populated
        }
    }

    /// Kick off the first fetch of a fresh buffer
    pub fn start(&mut self) -> Vec<FeedEffect> {
        self.maybe_refill()
    }

    /// Request the next page unless one is already in flight
    pub fn load_more(&mut self) -> Vec<FeedEffect> {
        if self.loading {
            log::debug!("[FEED] load already in flight, skipping");
            return Vec::new();
        }
        self.loading = true;
        self.failed = false;
        log::info!("[FEED] fetching {} items (generation {})", self.config.page_size, self.generation);
        vec![FeedEffect::Fetch {
            generation: self.generation,
            count: self.config.page_size,
        }]
    }

    /// Prefetch when the unseen tail is at or below the low watermark.
    ///
    /// Level-triggered: callers invoke it after every cursor change and every
    /// successful page; the in-flight flag keeps it to one request.
    pub fn maybe_refill(&mut self) -> Vec<FeedEffect> {
        if self.loading || self.exhausted {
            return Vec::new();
        }
        if self.buffer.remaining() <= self.config.low_watermark {
            log::debug!("[FEED] buffer low ({} remaining), fetching more", self.buffer.remaining());
            return self.load_more();
        }
        Vec::new()
    }

    /// Leave the exhausted or failed state and ask the backend again
    pub fn retry(&mut self) -> Vec<FeedEffect> {
        self.exhausted = false;
        self.load_more()
    }

    /// Position navigation starts from: the pending target, else the cursor.
    /// This is also the card the user is looking at.
    fn effective_position(&self) -> Option<usize> {
        self.transition
            .pending()
            .map(|p| p.target)
            .or_else(|| self.buffer.cursor())
    }

    pub fn advance(&mut self) -> Vec<FeedEffect> {
        let (Some(from), Some(last)) = (self.effective_position(), self.buffer.last_index()) else {
            return Vec::new();
        };
        if from >= last {
            return Vec::new();
        }
        self.schedule(from + 1, Direction::Forward)
    }

    pub fn retreat(&mut self) -> Vec<FeedEffect> {
        match self.effective_position() {
            Some(from) if from > 0 => self.schedule(from - 1, Direction::Backward),
            _ => Vec::new(),
        }
    }

    fn schedule(&mut self, target: usize, direction: Direction) -> Vec<FeedEffect> {
        let ticket = self.transition.schedule(target, direction);
        vec![FeedEffect::ScheduleTransition {
            ticket,
            delay: self.config.transition_delay,
        }]
    }

    /// Label the card at `index`. Only the card in view accepts labels.
    pub fn submit_label(&mut self, index: usize, label: &str) -> Vec<FeedEffect> {
        let Some(user_id) = self.identity.current_user_id() else {
            log::warn!("[FEED] label '{}' rejected: not connected", label);
            return vec![FeedEffect::Notify(Notice::unauthenticated())];
        };
        let Some(item) = self.buffer.get(index) else {
            return vec![FeedEffect::Notify(Notice::nothing_to_label())];
        };
        if self.effective_position() != Some(index) {
            log::debug!("[FEED] card {} is not in view, ignoring '{}'", index, label);
            return Vec::new();
        }
        if let Some(pending) = &self.submitting {
            log::debug!("[FEED] submission for {} still in flight, ignoring '{}'", pending.item_id, label);
            return Vec::new();
        }

        let submission = LabelSubmission {
            item_id: item.id.clone(),
            chosen_label: label.to_string(),
            submitter_id: user_id,
        };
        log::info!("[FEED] submitting label '{}' for {}", label, submission.item_id);
        self.submitting = Some(InFlight {
            index,
            item_id: submission.item_id.clone(),
        });
        vec![FeedEffect::Submit {
            generation: self.generation,
            submission,
        }]
    }

    pub fn on_page_loaded(&mut self, generation: u64, result: Result<Vec<FeedItem>, ApiError>) -> Vec<FeedEffect> {
        if generation != self.generation {
            log::debug!("[FEED] dropping page from generation {}", generation);
            return Vec::new();
        }
        self.loading = false;

        match result {
            Ok(page) => {
                let received = page.len();
                let added = self.buffer.append(page, self.config.dedup_by_id);
                log::info!("[FEED] received {} items, kept {}, buffer now {}", received, added, self.buffer.len());
                if added == 0 {
                    log::info!("[FEED] no new items, feed exhausted");
                    self.exhausted = true;
                }
                self.maybe_refill()
            }
            Err(err) => {
                log::error!("[FEED] error fetching posts: {}", err);
                self.failed = true;
                vec![FeedEffect::Notify(Notice::fetch_failed())]
            }
        }
    }

    pub fn on_label_submitted(&mut self, generation: u64, result: Result<(), ApiError>) -> Vec<FeedEffect> {
        if generation != self.generation {
            return Vec::new();
        }
        let Some(labeled) = self.submitting.take() else {
            return Vec::new();
        };

        match result {
            Ok(()) => {
                log::info!("[FEED] label submitted for {}", labeled.item_id);
                // The user may have swiped away meanwhile; only move off the labeled card
                if self.effective_position() != Some(labeled.index) {
                    return Vec::new();
                }
                self.advance()
            }
            Err(err) => {
                log::error!("[FEED] error submitting label for {}: {}", labeled.item_id, err);
                vec![FeedEffect::Notify(Notice::submit_failed())]
            }
        }
    }

    pub fn on_transition_elapsed(&mut self, ticket: u64) -> Vec<FeedEffect> {
        let Some(transition) = self.transition.fire(ticket) else {
            return Vec::new();
        };
        self.buffer.set_cursor(transition.target);
        self.maybe_refill()
    }

    /// Discard the buffer; anything still in flight becomes stale
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.buffer = FeedBuffer::new();
        self.transition.cancel();
        self.loading = false;
        self.submitting = None;
        self.exhausted = false;
        self.failed = false;
    }

    /// Start over with an empty buffer
    pub fn restart(&mut self) -> Vec<FeedEffect> {
        self.teardown();
        self.start()
    }

    /// Vertical offset of card `index` in screens, including the slide of a
    /// pending transition
    pub fn view_offset(&self, index: usize) -> i64 {
        let cursor = self.buffer.cursor().unwrap_or(0) as i64;
        let slide = self.transition.pending().map(|p| p.direction.slide()).unwrap_or(0);
        index as i64 - cursor + slide
    }

    /// Cards within `radius` of the cursor, with their buffer index
    pub fn window(&self, radius: usize) -> Vec<(usize, FeedItem)> {
        let Some(cursor) = self.buffer.cursor() else {
            return Vec::new();
        };
        let start = cursor.saturating_sub(radius);
        let end = (cursor + radius).min(self.buffer.len() - 1);
        (start..=end)
            .filter_map(|i| self.buffer.get(i).map(|item| (i, item.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Session;

    fn item(id: &str) -> FeedItem {
        FeedItem {
            id: id.to_string(),
            content: "AAAA".into(),
            label_choices: vec!["cat".into(), "dog".into()],
        }
    }

    fn page(ids: &[&str]) -> Vec<FeedItem> {
        ids.iter().map(|id| item(id)).collect()
    }

    fn numbered(n: usize) -> Vec<FeedItem> {
        (0..n).map(|i| item(&format!("i{}", i))).collect()
    }

    fn controller(session: Session) -> FeedController<Session> {
        FeedController::new(FeedConfig::default(), session)
    }

    /// Controller holding `n` items with nothing in flight
    fn populated(n: usize, session: Session) -> FeedController<Session> {
        let mut c = controller(session);
        c.buffer.append(numbered(n), false);
        c
    }

    fn fetches(effects: &[FeedEffect]) -> usize {
        effects.iter().filter(|e| matches!(e, FeedEffect::Fetch { .. })).count()
    }

    fn notices(effects: &[FeedEffect]) -> Vec<&Notice> {
        effects
            .iter()
            .filter_map(|e| match e {
                FeedEffect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn ticket(effects: &[FeedEffect]) -> u64 {
        effects
            .iter()
            .find_map(|e| match e {
                FeedEffect::ScheduleTransition { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("expected a scheduled transition")
    }

    /// Run a navigation to completion and return the effects of the elapsed timer
    fn settle(c: &mut FeedController<Session>, effects: Vec<FeedEffect>) -> Vec<FeedEffect> {
        let t = ticket(&effects);
        c.on_transition_elapsed(t)
    }

    #[test]
    fn test_start_fetches_first_page() {
        let mut c = controller(Session::default());
        assert_eq!(c.phase(), FeedPhase::Empty);
        let effects = c.start();
        assert_eq!(effects, vec![FeedEffect::Fetch { generation: 0, count: 5 }]);
        assert_eq!(c.phase(), FeedPhase::Loading);
    }

    #[test]
    fn test_refill_single_flight() {
        let mut c = controller(Session::default());
        assert_eq!(fetches(&c.start()), 1);
        for _ in 0..5 {
            assert_eq!(fetches(&c.maybe_refill()), 0);
            assert_eq!(fetches(&c.load_more()), 0);
        }
        assert!(c.is_loading());
    }

    #[test]
    fn test_page_appends_in_order_and_keeps_cursor() {
        let mut c = controller(Session::default());
        c.buffer.append(page(&["x", "y"]), false);
        c.buffer.set_cursor(1);
        let _ = c.load_more();

        c.on_page_loaded(0, Ok(page(&["A", "B", "C"])));

        let ids: Vec<_> = c.buffer().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "A", "B", "C"]);
        assert_eq!(c.cursor(), Some(1));
    }

    #[test]
    fn test_successful_page_rechecks_watermark() {
        let mut c = controller(Session::default());
        let _ = c.start();
        // 5 items left with watermark 5: still low, fetch again
        let effects = c.on_page_loaded(0, Ok(numbered(5)));
        assert_eq!(fetches(&effects), 1);

        let effects = c.on_page_loaded(0, Ok(page(&["a", "b", "c", "d", "e", "f"])));
        assert_eq!(fetches(&effects), 0);
        assert_eq!(c.phase(), FeedPhase::Populated);
    }

    #[test]
    fn test_advance_at_watermark_triggers_one_fetch() {
        let mut c = populated(5, Session::default());
        let effects = c.advance();
        assert_eq!(fetches(&effects), 0);
        assert_eq!(c.cursor(), Some(0));

        let effects = settle(&mut c, effects);
        assert_eq!(c.cursor(), Some(1));
        assert_eq!(fetches(&effects), 1);

        // Another cursor change while the fetch is in flight does not fetch again
        let effects = c.advance();
        assert_eq!(fetches(&settle(&mut c, effects)), 0);
        assert_eq!(c.cursor(), Some(2));
    }

    #[test]
    fn test_fetch_failure_notifies_and_leaves_buffer() {
        let mut c = populated(2, Session::default());
        let _ = c.load_more();
        let effects = c.on_page_loaded(0, Err(ApiError::Status(502)));

        assert_eq!(notices(&effects), vec![&Notice::fetch_failed()]);
        assert_eq!(fetches(&effects), 0);
        assert_eq!(c.buffer().len(), 2);
        assert!(!c.is_loading());
        assert_eq!(c.phase(), FeedPhase::Populated);
    }

    #[test]
    fn test_empty_page_exhausts_feed() {
        let mut c = controller(Session::default());
        let _ = c.start();
        let effects = c.on_page_loaded(0, Ok(Vec::new()));
        assert!(effects.is_empty());
        assert_eq!(c.phase(), FeedPhase::Exhausted);
        assert_eq!(fetches(&c.maybe_refill()), 0);

        let effects = c.retry();
        assert_eq!(fetches(&effects), 1);
        assert_eq!(c.phase(), FeedPhase::Loading);
    }

    #[test]
    fn test_duplicate_only_page_exhausts_with_dedup() {
        let config = FeedConfig {
            dedup_by_id: true,
            ..FeedConfig::default()
        };
        let mut c = FeedController::new(config, Session::default());
        let _ = c.start();
        let _ = c.on_page_loaded(0, Ok(page(&["a", "b"])));
        let _ = c.on_page_loaded(0, Ok(page(&["b", "a"])));
        assert_eq!(c.buffer().len(), 2);
        assert_eq!(c.phase(), FeedPhase::Exhausted);
    }

    #[test]
    fn test_duplicates_kept_by_default() {
        let mut c = controller(Session::default());
        let _ = c.start();
        let _ = c.on_page_loaded(0, Ok(page(&["a", "b"])));
        let _ = c.on_page_loaded(0, Ok(page(&["b", "a"])));
        assert_eq!(c.buffer().len(), 4);
        assert_eq!(c.phase(), FeedPhase::Loading);
    }

    #[test]
    fn test_cursor_stays_in_window() {
        let mut c = populated(3, Session::default());
        c.config.low_watermark = 0;

        assert!(c.retreat().is_empty());
        for _ in 0..6 {
            let effects = c.advance();
            if !effects.is_empty() {
                settle(&mut c, effects);
            }
        }
        assert_eq!(c.cursor(), Some(2));
        assert!(c.advance().is_empty());

        for _ in 0..6 {
            let effects = c.retreat();
            if !effects.is_empty() {
                settle(&mut c, effects);
            }
        }
        assert_eq!(c.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_buffer_is_noop() {
        let mut c = controller(Session::default());
        assert!(c.advance().is_empty());
        assert!(c.retreat().is_empty());
        assert_eq!(c.cursor(), None);
    }

    #[test]
    fn test_rapid_swipes_chain_from_pending_target() {
        let mut c = populated(10, Session::default());
        let first = ticket(&c.advance());
        let second = ticket(&c.advance());

        // The superseded timer firing does nothing
        assert!(c.on_transition_elapsed(first).is_empty());
        assert_eq!(c.cursor(), Some(0));

        c.on_transition_elapsed(second);
        assert_eq!(c.cursor(), Some(2));
    }

    #[test]
    fn test_chained_swipes_stop_at_window_end() {
        let mut c = populated(2, Session::default());
        let t = ticket(&c.advance());
        assert!(c.advance().is_empty());
        c.on_transition_elapsed(t);
        assert_eq!(c.cursor(), Some(1));
    }

    #[test]
    fn test_view_offset_follows_pending_direction() {
        let mut c = populated(10, Session::default());
        c.buffer.set_cursor(3);
        assert_eq!(c.view_offset(3), 0);
        assert_eq!(c.view_offset(4), 1);

        let _ = c.advance();
        assert_eq!(c.view_offset(3), -1);
        assert_eq!(c.view_offset(4), 0);

        c.transition.cancel();
        let _ = c.retreat();
        assert_eq!(c.view_offset(2), 0);
    }

    #[test]
    fn test_window_around_cursor() {
        let mut c = populated(5, Session::default());
        let indices: Vec<_> = c.window(1).into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1]);

        c.buffer.set_cursor(4);
        let indices: Vec<_> = c.window(1).into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![3, 4]);
        assert!(controller(Session::default()).window(1).is_empty());
    }

    #[test]
    fn test_submit_without_identity_is_local() {
        let mut c = populated(3, Session::default());
        let effects = c.submit_label(0, "cat");
        assert_eq!(effects, vec![FeedEffect::Notify(Notice::unauthenticated())]);
        assert!(!c.submitting_index().is_some());
    }

    #[test]
    fn test_submit_disconnected_session_is_local() {
        let session = Session {
            ready: true,
            connected: false,
            id: Some("0xabc".into()),
        };
        let mut c = populated(3, session);
        let effects = c.submit_label(0, "cat");
        assert_eq!(notices(&effects).len(), 1);
        assert!(!effects.iter().any(|e| matches!(e, FeedEffect::Submit { .. })));
    }

    #[test]
    fn test_submit_builds_submission_for_current_item() {
        let mut c = populated(3, Session::connected_as("0xabc"));
        c.buffer.set_cursor(1);
        let effects = c.submit_label(1, "dog");
        assert_eq!(
            effects,
            vec![FeedEffect::Submit {
                generation: 0,
                submission: LabelSubmission {
                    item_id: "i1".into(),
                    chosen_label: "dog".into(),
                    submitter_id: "0xabc".into(),
                },
            }]
        );
        assert!(c.submitting_index().is_some());
        // Double tap while in flight
        assert!(c.submit_label(1, "dog").is_empty());
    }

    #[test]
    fn test_submit_on_empty_buffer_notifies() {
        let mut c = controller(Session::connected_as("0xabc"));
        let effects = c.submit_label(0, "cat");
        assert_eq!(effects, vec![FeedEffect::Notify(Notice::nothing_to_label())]);
    }

    #[test]
    fn test_submit_success_advances_after_delay() {
        let mut c = populated(10, Session::connected_as("0xabc"));
        let _ = c.submit_label(0, "cat");
        let effects = c.on_label_submitted(0, Ok(()));

        assert!(matches!(
            effects.as_slice(),
            [FeedEffect::ScheduleTransition { delay, .. }] if *delay == Duration::from_millis(300)
        ));
        assert_eq!(c.cursor(), Some(0));

        settle(&mut c, effects);
        assert_eq!(c.cursor(), Some(1));
        assert!(!c.submitting_index().is_some());
    }

    #[test]
    fn test_submit_success_on_last_item_stays() {
        let mut c = populated(1, Session::connected_as("0xabc"));
        let _ = c.submit_label(0, "cat");
        let effects = c.on_label_submitted(0, Ok(()));
        assert!(effects.is_empty());
        assert_eq!(c.cursor(), Some(0));
    }

    #[test]
    fn test_submit_failure_keeps_cursor() {
        let mut c = populated(10, Session::connected_as("0xabc"));
        let _ = c.submit_label(0, "cat");
        let effects = c.on_label_submitted(0, Err(ApiError::Status(500)));
        assert_eq!(effects, vec![FeedEffect::Notify(Notice::submit_failed())]);
        assert_eq!(c.cursor(), Some(0));
        assert!(c.pending_transition().is_none());
        // User may retry
        assert_eq!(c.submit_label(0, "cat").len(), 1);
    }

    #[test]
    fn test_failed_first_page_can_be_retried() {
        let mut c = controller(Session::default());
        let _ = c.start();
        let effects = c.on_page_loaded(0, Err(ApiError::Status(503)));

        assert_eq!(notices(&effects), vec![&Notice::fetch_failed()]);
        assert_eq!(c.phase(), FeedPhase::Failed);
        assert!(c.advance().is_empty());
        assert!(c.retreat().is_empty());

        let effects = c.retry();
        assert_eq!(effects, vec![FeedEffect::Fetch { generation: 0, count: 5 }]);
        assert_eq!(c.phase(), FeedPhase::Loading);

        c.on_page_loaded(0, Ok(numbered(6)));
        assert_eq!(c.phase(), FeedPhase::Populated);
    }

    #[test]
    fn test_label_during_slide_goes_to_incoming_card() {
        let mut c = populated(10, Session::connected_as("0xabc"));
        let slide = c.advance();

        // The outgoing card no longer accepts labels
        assert!(c.submit_label(0, "cat").is_empty());

        let effects = c.submit_label(1, "dog");
        assert!(matches!(
            effects.as_slice(),
            [FeedEffect::Submit { submission, .. }] if submission.item_id == "i1"
        ));
        assert_eq!(c.submitting_index(), Some(1));

        // Slide finishes, then the label lands: move exactly one past i1
        settle(&mut c, slide);
        assert_eq!(c.cursor(), Some(1));
        let effects = c.on_label_submitted(0, Ok(()));
        settle(&mut c, effects);
        assert_eq!(c.cursor(), Some(2));
    }

    #[test]
    fn test_swipe_while_submitting_does_not_skip() {
        let mut c = populated(10, Session::connected_as("0xabc"));
        let _ = c.submit_label(0, "cat");
        let swipe = c.advance();

        // The user already moved on; success must not move again
        assert!(c.on_label_submitted(0, Ok(())).is_empty());
        settle(&mut c, swipe);
        assert_eq!(c.cursor(), Some(1));
        assert!(c.submitting_index().is_none());
    }

    #[test]
    fn test_submit_success_after_settled_swipe_stays() {
        let mut c = populated(10, Session::connected_as("0xabc"));
        let _ = c.submit_label(0, "cat");
        let swipe = c.advance();
        settle(&mut c, swipe);

        assert!(c.on_label_submitted(0, Ok(())).is_empty());
        assert_eq!(c.cursor(), Some(1));
    }

    #[test]
    fn test_teardown_discards_late_completions() {
        let mut c = controller(Session::connected_as("0xabc"));
        let _ = c.start();
        c.teardown();

        assert!(c.on_page_loaded(0, Ok(numbered(3))).is_empty());
        assert!(c.buffer().is_empty());
        assert!(!c.is_loading());
        assert!(c.on_label_submitted(0, Ok(())).is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending_transition() {
        let mut c = populated(10, Session::default());
        let t = ticket(&c.advance());
        c.teardown();
        assert!(c.on_transition_elapsed(t).is_empty());
        assert_eq!(c.cursor(), None);
    }

    #[test]
    fn test_restart_fetches_with_new_generation() {
        let mut c = controller(Session::default());
        let _ = c.start();
        let effects = c.restart();
        assert_eq!(effects, vec![FeedEffect::Fetch { generation: 1, count: 5 }]);

        // The old request completing does not clear the new in-flight flag
        assert!(c.on_page_loaded(0, Err(ApiError::Status(500))).is_empty());
        assert!(c.is_loading());
    }
}
