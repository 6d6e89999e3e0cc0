//! Host viewport abstraction
//!
//! The host owns the real viewport: it answers whether a media query
//! matches right now and tells subscribers when the viewport is resized.
//! In a browser this is `matchMedia` plus the `resize` event; tests and
//! server-side rendering use [`HeadlessHost`](crate::HeadlessHost).

use std::sync::Arc;

use slotmap::new_key_type;

new_key_type! {
    /// Handle for a registered resize listener
    pub struct ListenerId;
}

/// Resize listener; called once per resize notification
pub type ResizeCallback = Arc<dyn Fn() + Send + Sync>;

/// Viewport query evaluation and resize notification
pub trait MediaHost: Send + Sync {
    /// Whether `query` (a media condition without `@media`) matches now
    fn matches(&self, query: &str) -> bool;

    /// Register `callback` to run after every resize
    fn subscribe_resize(&self, callback: ResizeCallback) -> ListenerId;

    /// Remove a listener. Returns `false` if `id` was not registered.
    fn unsubscribe_resize(&self, id: ListenerId) -> bool;
}
