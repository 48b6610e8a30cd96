//! Grouping the addresses of all pairs by the router that serves them.

use super::find_router;
use crate::error::Result;
use crate::models::{AddressPair, RouterTable};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Key used for addresses that no router serves.
pub const NO_ROUTER: &str = "None";

/// Every distinct address appearing in `pairs`, sorted by text.
pub fn all_ips(pairs: &[AddressPair]) -> Vec<&str> {
    pairs
        .iter()
        .flat_map(|(src, dest)| [src.as_str(), dest.as_str()])
        .sorted()
        .dedup()
        .collect()
}

/// Map each router key to the addresses it serves.
///
/// Keys and member lists are both sorted by text. Unserved addresses are
/// collected under [`NO_ROUTER`], which sorts like any other key.
pub fn group_ips_by_router<'a>(
    routers: &'a RouterTable,
    pairs: &'a [AddressPair],
) -> Result<BTreeMap<&'a str, Vec<&'a str>>> {
    let mut router_host_map: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for ip in all_ips(pairs) {
        let router = find_router(routers, ip)?.unwrap_or(NO_ROUTER);
        router_host_map.entry(router).or_default().push(ip);
    }
    Ok(router_host_map)
}
