//! Polling synchronizer
//!
//! Fixed-interval reconciliation for the three viewer surfaces: the
//! customer order tracker and the cafe/admin consoles. Each tick fetches a
//! complete snapshot and replaces local state wholesale; there is no
//! merging and no write-back to "correct" server state from a stale copy.

mod console;
mod fetcher;
mod tracker;
mod view;

pub use console::CafeConsole;
pub use fetcher::{OrderFetch, OrderListFetch};
pub use tracker::OrderTracker;
pub use view::ViewState;
