//! The three text reports printed for an input document.

use super::terminal::{format_field, format_list};
use crate::error::Result;
use crate::models::{same_subnet, value_to_address, AddressPair, NetData, RouterTable, Subnet};
use crate::processing::group_ips_by_router;
use itertools::Itertools;
use std::fmt::Write;

/// Prefix used to compare address pairs, independent of any router.
pub const PAIR_PREFIX: &str = "/24";

/// Column width for addresses.
const ADDR_WIDTH: usize = 15;

/// Router list with each router's netmask and network address.
pub fn print_routers<W: Write>(out: &mut W, routers: &RouterTable) -> Result<()> {
    writeln!(out, "Routers:")?;

    for router in routers.iter().sorted_by(|a, b| a.address.cmp(&b.address)) {
        let subnet = Subnet::new(&router.address, &router.info.netmask)?;
        writeln!(
            out,
            " {router_ip}: netmask {netmask}: network {network}",
            router_ip = format_field(&router.address, ADDR_WIDTH),
            netmask = value_to_address(subnet.netmask()),
            network = value_to_address(subnet.network()),
        )?;
    }
    Ok(())
}

/// Every address pair, marked as sharing a [`PAIR_PREFIX`] network or not.
pub fn print_same_subnets<W: Write>(out: &mut W, src_dest_pairs: &[AddressPair]) -> Result<()> {
    writeln!(out, "IP Pairs:")?;

    for (src_ip, dest_ip) in src_dest_pairs.iter().sorted() {
        let verdict = if same_subnet(src_ip, dest_ip, PAIR_PREFIX)? {
            "same subnet"
        } else {
            "different subnets"
        };
        writeln!(
            out,
            " {} {}: {verdict}",
            format_field(src_ip, ADDR_WIDTH),
            format_field(dest_ip, ADDR_WIDTH),
        )?;
    }
    Ok(())
}

/// Pair addresses grouped under the router serving them.
pub fn print_ip_routers<W: Write>(
    out: &mut W,
    routers: &RouterTable,
    src_dest_pairs: &[AddressPair],
) -> Result<()> {
    writeln!(out, "Routers and corresponding IPs:")?;

    let router_host_map = group_ips_by_router(routers, src_dest_pairs)?;
    for (router_ip, ips) in &router_host_map {
        writeln!(
            out,
            " {}: {}",
            format_field(router_ip, ADDR_WIDTH),
            format_list(ips)
        )?;
    }
    Ok(())
}

/// Render all three reports, separated by blank lines.
///
/// Nothing is returned unless every report rendered, so a bad address or
/// prefix anywhere in the input yields an error and no text.
pub fn render_reports(data: &NetData) -> Result<String> {
    log::info!("#Start render_reports()");
    let mut out = String::new();

    print_routers(&mut out, &data.routers)?;
    writeln!(out)?;
    print_same_subnets(&mut out, &data.src_dest)?;
    writeln!(out)?;
    print_ip_routers(&mut out, &data.routers, &data.src_dest)?;

    Ok(out)
}
