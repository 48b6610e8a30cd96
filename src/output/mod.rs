//! Output formatting for the subnet reports.
//!
//! - [`report`] - The router, pair and grouping reports
//! - [`terminal`] - Column and list formatting helpers

mod report;
mod terminal;

pub use report::{print_ip_routers, print_routers, print_same_subnets, render_reports, PAIR_PREFIX};
pub use terminal::{format_field, format_list};
