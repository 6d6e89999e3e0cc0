//! Viewport match observer
//!
//! [`ViewportMatch`] answers "does the viewport match this breakpoint
//! expression right now" and keeps the answer current:
//!
//! 1. The expression is applied to the theme to get a [`MediaRule`], whose
//!    condition (without `@media`) becomes the query.
//! 2. The query is evaluated once, synchronously, for the initial state.
//! 3. One resize listener is registered; each resize re-evaluates the query
//!    and updates the [`MatchSignal`] if the answer changed.
//! 4. Dropping the observer (or calling [`ViewportMatch::teardown`])
//!    removes the listener. Nothing transitions afterwards.
//!
//! ```rust
//! use std::sync::Arc;
//! use mediant_theme::Theme;
//! use mediant_viewport::{HeadlessHost, MediaHost, ViewportMatch};
//!
//! let host = Arc::new(HeadlessHost::new(500.0));
//! let is_tablet_up = ViewportMatch::new(
//!     host.clone() as Arc<dyn MediaHost>,
//!     &Theme::default(),
//!     |theme| theme.media().above("tablet"),
//! );
//! assert!(!is_tablet_up.matches());
//!
//! host.resize(800.0);
//! assert!(is_tablet_up.matches());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use mediant_core::MediaRule;
use mediant_theme::{Theme, ThemeState};
use tracing::debug;

use crate::host::{ListenerId, MediaHost};
use crate::signal::{MatchSignal, MatchState};

/// Maps a theme to the media rule to observe
pub type BreakpointExpr = Box<dyn Fn(&Theme) -> MediaRule + Send + Sync>;

struct Subscription {
    id: ListenerId,
    /// Cleared on release so a late notification cannot update the signal
    active: Arc<AtomicBool>,
}

/// Live "viewport matches expression" state bound to a host
pub struct ViewportMatch {
    host: Arc<dyn MediaHost>,
    expr: BreakpointExpr,
    query: String,
    signal: MatchSignal,
    subscription: Option<Subscription>,
}

impl ViewportMatch {
    pub fn new<F>(host: Arc<dyn MediaHost>, theme: &Theme, expr: F) -> Self
    where
        F: Fn(&Theme) -> MediaRule + Send + Sync + 'static,
    {
        let query = derive_query(&expr(theme));
        let signal = MatchSignal::new(host.matches(&query));
        debug!(
            "ViewportMatch::new - `{}` initially {:?}",
            query,
            signal.state()
        );

        let mut observer = Self {
            host,
            expr: Box::new(expr),
            query,
            signal,
            subscription: None,
        };
        observer.subscribe();
        observer
    }

    pub fn matches(&self) -> bool {
        self.signal.get()
    }

    pub fn state(&self) -> MatchState {
        self.signal.state()
    }

    /// Handle to the underlying signal, for subscribing to changes
    pub fn signal(&self) -> MatchSignal {
        self.signal.clone()
    }

    /// Query currently being observed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Re-derive the query for a new theme. If it changed, the listener is
    /// replaced and the state re-evaluated against the current viewport.
    pub fn set_theme(&mut self, theme: &Theme) {
        let query = derive_query(&(self.expr)(theme));
        if query == self.query {
            return;
        }
        debug!(
            "ViewportMatch::set_theme - query `{}` -> `{}`",
            self.query, query
        );

        let was_active = self.is_active();
        self.release();
        self.query = query;
        self.signal.set(self.host.matches(&self.query));
        if was_active {
            self.subscribe();
        }
    }

    /// Stop observing. Equivalent to dropping the observer.
    pub fn teardown(mut self) {
        self.release();
    }

    fn subscribe(&mut self) {
        let active = Arc::new(AtomicBool::new(true));
        let callback = {
            let host: Weak<dyn MediaHost> = Arc::downgrade(&self.host);
            let query = self.query.clone();
            let signal = self.signal.clone();
            let active = Arc::clone(&active);
            move || {
                if !active.load(Ordering::SeqCst) {
                    return;
                }
                let Some(host) = host.upgrade() else {
                    return;
                };
                let matches = host.matches(&query);
                if signal.set(matches) {
                    debug!("ViewportMatch - `{}` now {:?}", query, signal.state());
                }
            }
        };

        let id = self.host.subscribe_resize(Arc::new(callback));
        self.subscription = Some(Subscription { id, active });
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.active.store(false, Ordering::SeqCst);
            self.host.unsubscribe_resize(subscription.id);
            debug!("ViewportMatch - released listener for `{}`", self.query);
        }
    }
}

impl Drop for ViewportMatch {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ViewportMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportMatch")
            .field("query", &self.query)
            .field("signal", &self.signal)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Media condition without the leading `@media`
fn derive_query(rule: &MediaRule) -> String {
    let text = rule.to_string();
    text.strip_prefix("@media")
        .unwrap_or(&text)
        .trim()
        .to_string()
}

/// Observe `expr` against the theme installed in [`ThemeState`], falling
/// back to the default theme when none is installed
pub fn use_breakpoint<F>(host: Arc<dyn MediaHost>, expr: F) -> ViewportMatch
where
    F: Fn(&Theme) -> MediaRule + Send + Sync + 'static,
{
    let theme = ThemeState::try_get()
        .map(ThemeState::theme)
        .unwrap_or_default();
    ViewportMatch::new(host, &theme, expr)
}
