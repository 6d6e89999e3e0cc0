//! In-process viewport host
//!
//! [`HeadlessHost`] keeps a viewport width and evaluates the media
//! conditions Mediant generates: `screen`/`all` media types joined with
//! `(min-width: X)` and `(max-width: Y)` features by `and`. Lengths in
//! `em`/`rem` are taken relative to a 16px root font. As in browsers, a
//! query that fails to parse matches nothing.

use std::sync::{Mutex, RwLock};

use mediant_core::{Size, Unit, DEFAULT_BASE_FONT_SIZE};
use slotmap::SlotMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::host::{ListenerId, MediaHost, ResizeCallback};

/// A media query the headless evaluator does not understand
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty media query")]
    Empty,

    #[error("unsupported media type or feature `{0}`")]
    Unsupported(String),

    #[error("`{0}` has no value")]
    MissingValue(String),

    #[error("invalid length `{0}`")]
    InvalidLength(String),
}

#[derive(Default)]
struct Listeners {
    callbacks: SlotMap<ListenerId, ResizeCallback>,
    /// Registration order, for delivery
    order: Vec<ListenerId>,
}

/// Viewport host backed by a plain width value
pub struct HeadlessHost {
    width: RwLock<f64>,
    listeners: Mutex<Listeners>,
}

impl HeadlessHost {
    pub fn new(width: f64) -> Self {
        Self {
            width: RwLock::new(width),
            listeners: Mutex::new(Listeners::default()),
        }
    }

    pub fn width(&self) -> f64 {
        *self.width.read().unwrap()
    }

    /// Set the viewport width and notify every resize listener in
    /// registration order. Returns the number of listeners notified.
    pub fn resize(&self, width: f64) -> usize {
        *self.width.write().unwrap() = width;

        let callbacks: Vec<ResizeCallback> = {
            let listeners = self.listeners.lock().unwrap();
            listeners
                .order
                .iter()
                .filter_map(|id| listeners.callbacks.get(*id).cloned())
                .collect()
        };
        debug!(
            "HeadlessHost::resize - {}px, notifying {} listeners",
            width,
            callbacks.len()
        );
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }

    /// Number of live resize listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().callbacks.len()
    }

    /// Evaluate `query` against the current width
    pub fn evaluate(&self, query: &str) -> Result<bool, QueryError> {
        evaluate_query(query, self.width())
    }
}

impl MediaHost for HeadlessHost {
    fn matches(&self, query: &str) -> bool {
        match self.evaluate(query) {
            Ok(matches) => matches,
            Err(err) => {
                warn!("HeadlessHost: `{}` matches nothing: {}", query, err);
                false
            }
        }
    }

    fn subscribe_resize(&self, callback: ResizeCallback) -> ListenerId {
        let mut listeners = self.listeners.lock().unwrap();
        let id = listeners.callbacks.insert(callback);
        listeners.order.push(id);
        id
    }

    fn unsubscribe_resize(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().unwrap();
        if listeners.callbacks.remove(id).is_none() {
            return false;
        }
        listeners.order.retain(|other| *other != id);
        true
    }
}

/// Evaluate a media condition list against a viewport `width` in px
pub fn evaluate_query(query: &str, width: f64) -> Result<bool, QueryError> {
    let query = query.trim();
    let query = query.strip_prefix("@media").unwrap_or(query).trim();
    if query.is_empty() {
        return Err(QueryError::Empty);
    }

    let mut matches = true;
    for term in query.split(" and ").map(str::trim) {
        matches &= evaluate_term(term, width)?;
    }
    Ok(matches)
}

fn evaluate_term(term: &str, width: f64) -> Result<bool, QueryError> {
    if term == "screen" || term == "all" {
        return Ok(true);
    }

    let Some(inner) = term.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return Err(QueryError::Unsupported(term.to_string()));
    };
    let Some((feature, value)) = inner.split_once(':') else {
        return Err(QueryError::Unsupported(term.to_string()));
    };

    let feature = feature.trim();
    let value = value.trim();
    if value.is_empty() {
        return Err(QueryError::MissingValue(feature.to_string()));
    }
    let bound = length_to_px(value)?;

    match feature {
        "min-width" => Ok(width >= bound),
        "max-width" => Ok(width <= bound),
        _ => Err(QueryError::Unsupported(feature.to_string())),
    }
}

fn length_to_px(value: &str) -> Result<f64, QueryError> {
    let size = Size::parse(value).map_err(|_| QueryError::InvalidLength(value.to_string()))?;
    match size.unit {
        Unit::Px => Ok(size.value),
        Unit::Em | Unit::Rem => Ok(size.value * DEFAULT_BASE_FONT_SIZE),
        // CSS only allows a bare number for zero
        Unit::Unitless if size.value == 0.0 => Ok(0.0),
        Unit::Unitless | Unit::Percent => Err(QueryError::InvalidLength(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_evaluate_bounds() {
        let query = "screen and (min-width: 576px) and (max-width: 767.98px)";
        assert_eq!(evaluate_query(query, 575.0), Ok(false));
        assert_eq!(evaluate_query(query, 576.0), Ok(true));
        assert_eq!(evaluate_query(query, 767.98), Ok(true));
        assert_eq!(evaluate_query(query, 768.0), Ok(false));
    }

    #[test]
    fn test_evaluate_em_and_prefix() {
        assert_eq!(
            evaluate_query("@media screen and (min-width: 48em)", 768.0),
            Ok(true)
        );
        assert_eq!(evaluate_query("(max-width: 30rem)", 481.0), Ok(false));
    }

    #[test]
    fn test_invalid_queries() {
        assert_eq!(evaluate_query("", 100.0), Err(QueryError::Empty));
        assert_eq!(
            evaluate_query("screen and (max-width: )", 100.0),
            Err(QueryError::MissingValue("max-width".to_string()))
        );
        assert_eq!(
            evaluate_query("screen and (min-width: 500)", 600.0),
            Err(QueryError::InvalidLength("500".to_string()))
        );
        assert!(matches!(
            evaluate_query("print", 600.0),
            Err(QueryError::Unsupported(_))
        ));
    }

    #[test]
    fn test_invalid_query_never_matches() {
        let host = HeadlessHost::new(800.0);
        assert!(!host.matches("screen and (min-width: )"));
    }

    #[test]
    fn test_listeners_notified_in_order() {
        let host = HeadlessHost::new(320.0);
        let log = Arc::new(Mutex::new(Vec::new()));

        let ids: Vec<ListenerId> = (0..3)
            .map(|n| {
                let log = Arc::clone(&log);
                host.subscribe_resize(Arc::new(move || log.lock().unwrap().push(n)))
            })
            .collect();

        assert!(host.unsubscribe_resize(ids[1]));
        assert!(!host.unsubscribe_resize(ids[1]));
        let fourth = Arc::clone(&log);
        host.subscribe_resize(Arc::new(move || fourth.lock().unwrap().push(3)));

        assert_eq!(host.resize(1024.0), 3);
        assert_eq!(*log.lock().unwrap(), vec![0, 2, 3]);
        assert_eq!(host.width(), 1024.0);
    }

    #[test]
    fn test_resize_without_listeners() {
        let host = HeadlessHost::new(100.0);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = host.subscribe_resize(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        host.resize(200.0);
        host.unsubscribe_resize(id);
        assert_eq!(host.resize(300.0), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(host.listener_count(), 0);
    }
}
