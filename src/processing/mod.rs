//! Router lookup and address grouping.
//!
//! - [`locate`] - Finding the router that serves an address
//! - [`group`] - Collecting pair addresses under their routers

mod group;
mod locate;

// Re-export public functions
pub use group::{all_ips, group_ips_by_router, NO_ROUTER};
pub use locate::find_router;
