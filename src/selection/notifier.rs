// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `resultSelected` subscriptions.
//!
//! Subscribers are plain callbacks, called synchronously in registration
//! order. No framework event system, no threads: the WASM bindings wrap a JS
//! function in a closure, native callers push into a `Vec` or a channel.

use super::PointerActivation;
use crate::types::SearchResult;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SearchResult)>;

/// Registry of `resultSelected` subscribers.
#[derive(Default)]
pub struct SelectionNotifier {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl SelectionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It runs after every earlier subscriber.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SearchResult) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver `result` to every subscriber. Returns how many were called.
    pub fn notify(&mut self, result: &SearchResult) -> usize {
        for (_, callback) in &mut self.subscribers {
            callback(result);
        }
        self.subscribers.len()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for SelectionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Activation handler shared by every result link in a view.
#[derive(Debug, Default)]
pub struct ResultLink {
    notifier: SelectionNotifier,
}

impl ResultLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifier(&mut self) -> &mut SelectionNotifier {
        &mut self.notifier
    }

    /// Register a `resultSelected` subscriber.
    pub fn on_result_selected<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SearchResult) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Handle a pointer activation on the link for `result`.
    ///
    /// Returns true when `resultSelected` was emitted. When false the caller
    /// must let the browser perform its default action.
    pub fn activate(&mut self, event: PointerActivation, result: &SearchResult) -> bool {
        if !event.should_select() {
            tracing::trace!(
                path = %result.path,
                button = event.button,
                ctrl = event.ctrl_key,
                meta = event.meta_key,
                "leaving activation to the browser"
            );
            return false;
        }
        let delivered = self.notifier.notify(result);
        tracing::debug!(path = %result.path, delivered, "result selected");
        true
    }
}
