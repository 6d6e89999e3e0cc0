//! Mediant Viewport
//!
//! Tracks whether the current viewport matches a breakpoint expression.
//!
//! - [`MediaHost`]: the host environment (query evaluation + resize events)
//! - [`HeadlessHost`]: an in-process host for tests and server rendering
//! - [`MatchSignal`]: a shared boolean that notifies on change
//! - [`ViewportMatch`]: binds an expression to a host for its lifetime
//!
//! Everything runs on the caller's thread: resize callbacks are invoked by
//! the host in delivery order and update the signal synchronously.

pub mod headless;
pub mod host;
pub mod observer;
pub mod signal;

pub use headless::{evaluate_query, HeadlessHost, QueryError};
pub use host::{ListenerId, MediaHost, ResizeCallback};
pub use observer::{use_breakpoint, BreakpointExpr, ViewportMatch};
pub use signal::{ChangeCallback, MatchSignal, MatchState};
