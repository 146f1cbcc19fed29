//! tallyd core: the time-windowed sample store, its access gate, and the
//! error surface shared with the HTTP server.
//!
//! Nothing in here knows about HTTP or async runtimes. The server crate owns
//! an [`AccessGate`] and calls into it from request handlers; tests drive the
//! [`Store`] directly with a [`ManualClock`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod gate;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
/// Shared result type.
pub use error::{MetricsError, Result};
pub use gate::AccessGate;
pub use store::{Sample, Store, Summary};
