//! Mapping an address to the router whose subnet holds it.

use crate::error::Result;
use crate::models::{address_to_value, RouterTable, Subnet};
use colored::Colorize;

/// Find the router whose subnet contains `ip`.
///
/// Routers are tried in table order and the first match wins, so when
/// subnets overlap the earlier entry in the input is returned.
///
/// # Returns
/// * `Ok(Some(addr))` - Address of the matching router
/// * `Ok(None)` - No router subnet contains `ip`
/// * `Err` - A router or `ip` is not valid address/prefix text
pub fn find_router<'a>(routers: &'a RouterTable, ip: &str) -> Result<Option<&'a str>> {
    let value = address_to_value(ip)?;
    for router in routers {
        let subnet = Subnet::new(&router.address, &router.info.netmask)?;
        if subnet.contains(value) {
            log::debug!("{} -> router {}", ip.on_blue(), subnet);
            return Ok(Some(router.address.as_str()));
        }
    }
    log::debug!("{} -> no router", ip.on_red());
    Ok(None)
}
