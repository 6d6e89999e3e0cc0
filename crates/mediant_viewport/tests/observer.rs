use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mediant_theme::Theme;
use mediant_viewport::{
    HeadlessHost, ListenerId, MatchState, MediaHost, ResizeCallback, ViewportMatch,
};
use pretty_assertions::assert_eq;

/// Headless host that also counts subscribe/unsubscribe calls
struct CountingHost {
    inner: HeadlessHost,
    subscribed: AtomicUsize,
    unsubscribed: AtomicUsize,
}

impl CountingHost {
    fn new(width: f64) -> Arc<Self> {
        Arc::new(Self {
            inner: HeadlessHost::new(width),
            subscribed: AtomicUsize::new(0),
            unsubscribed: AtomicUsize::new(0),
        })
    }

    fn resize(&self, width: f64) -> usize {
        self.inner.resize(width)
    }
}

impl MediaHost for CountingHost {
    fn matches(&self, query: &str) -> bool {
        self.inner.matches(query)
    }

    fn subscribe_resize(&self, callback: ResizeCallback) -> ListenerId {
        self.subscribed.fetch_add(1, Ordering::SeqCst);
        self.inner.subscribe_resize(callback)
    }

    fn unsubscribe_resize(&self, id: ListenerId) -> bool {
        self.unsubscribed.fetch_add(1, Ordering::SeqCst);
        self.inner.unsubscribe_resize(id)
    }
}

fn as_host(host: &Arc<CountingHost>) -> Arc<dyn MediaHost> {
    Arc::clone(host) as Arc<dyn MediaHost>
}

#[test]
fn transitions_once_when_resize_makes_query_match() {
    let host = CountingHost::new(600.0);
    let observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
        theme.media().above("desktop")
    });

    assert_eq!(observer.state(), MatchState::NotMatching);
    assert_eq!(observer.query(), "screen and (min-width: 992px)");

    host.resize(1024.0);
    assert!(observer.matches());
    assert_eq!(observer.signal().transitions(), 1);

    // Still matching: further resizes do not add transitions
    host.resize(1100.0);
    host.resize(1300.0);
    assert_eq!(observer.signal().transitions(), 1);

    host.resize(800.0);
    assert_eq!(observer.state(), MatchState::NotMatching);
    assert_eq!(observer.signal().transitions(), 2);
}

#[test]
fn change_callbacks_fire_on_transitions() {
    let host = CountingHost::new(400.0);
    let observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
        theme.media().only("mobile")
    });

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    observer
        .signal()
        .on_change(move |matches| sink.lock().unwrap().push(matches));

    for width in [500.0, 600.0, 700.0, 767.98, 768.0, 300.0, 576.0] {
        host.resize(width);
    }
    assert_eq!(*seen.lock().unwrap(), vec![true, false, true]);
}

#[test]
fn teardown_releases_listener_exactly_once() {
    let host = CountingHost::new(600.0);
    let observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
        theme.media().below("mobile")
    });
    let signal = observer.signal();
    assert_eq!(host.inner.listener_count(), 1);

    observer.teardown();
    assert_eq!(host.subscribed.load(Ordering::SeqCst), 1);
    assert_eq!(host.unsubscribed.load(Ordering::SeqCst), 1);
    assert_eq!(host.inner.listener_count(), 0);

    // Would stop matching if the listener were still registered
    assert_eq!(host.resize(900.0), 0);
    assert!(signal.get());
    assert_eq!(signal.transitions(), 0);
}

#[test]
fn repeated_mount_cycles_do_not_leak_listeners() {
    let host = CountingHost::new(900.0);
    for _ in 0..5 {
        let observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
            theme.media().between("tablet", "desktop")
        });
        assert!(observer.matches());
    }
    assert_eq!(host.subscribed.load(Ordering::SeqCst), 5);
    assert_eq!(host.unsubscribed.load(Ordering::SeqCst), 5);
    assert_eq!(host.inner.listener_count(), 0);
}

#[test]
fn theme_change_rebinds_query() {
    let host = CountingHost::new(700.0);
    let mut observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
        theme.media().above("tablet")
    });
    assert!(!observer.matches());

    let compact = Theme::from_pairs("compact", [("tablet", "640px"), ("desktop", "960px")]).unwrap();
    observer.set_theme(&compact);
    assert_eq!(observer.query(), "screen and (min-width: 640px)");
    assert!(observer.matches());
    assert_eq!(host.subscribed.load(Ordering::SeqCst), 2);
    assert_eq!(host.unsubscribed.load(Ordering::SeqCst), 1);
    assert_eq!(host.inner.listener_count(), 1);

    // Same query again: nothing is rebound
    observer.set_theme(&compact);
    assert_eq!(host.subscribed.load(Ordering::SeqCst), 2);

    host.resize(600.0);
    assert!(!observer.matches());
}

#[test]
fn unresolvable_expression_never_matches() {
    let host = CountingHost::new(5000.0);
    let observer = ViewportMatch::new(as_host(&host), &Theme::default(), |theme| {
        theme.media().below("lgDesktop")
    });
    assert_eq!(observer.query(), "screen and (max-width: )");
    host.resize(100.0);
    assert!(!observer.matches());
    assert_eq!(observer.signal().transitions(), 0);
}
