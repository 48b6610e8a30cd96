//! IPv4 address and CIDR prefix arithmetic.
//!
//! Addresses travel through the crate as dotted-decimal text and are packed
//! into a big-endian `u32` only when a calculation needs them.

use crate::error::{NetError, Result};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack a dotted-decimal address into a `u32`, first octet most significant.
///
/// # Examples
/// ```
/// use netfuncs::models::address_to_value;
/// assert_eq!(address_to_value("1.2.3.4").unwrap(), 16909060);
/// ```
pub fn address_to_value(addr: &str) -> Result<u32> {
    let octets: Vec<&str> = addr.split('.').collect();
    if octets.len() != 4 {
        return Err(NetError::format(format!(
            "Invalid address {addr}: expected 4 octets, got {}",
            octets.len()
        )));
    }
    octets.iter().try_fold(0u32, |value, octet| {
        let octet: u8 = octet
            .trim()
            .parse()
            .map_err(|_| NetError::format(format!("Invalid octet '{octet}' in address {addr}")))?;
        Ok((value << 8) | u32::from(octet))
    })
}

/// Render a `u32` as dotted-decimal text.
pub fn value_to_address(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Parse prefix text such as `"/24"` into its length.
///
/// Slashes on either side are stripped before parsing.
pub fn prefix_len(prefix: &str) -> Result<u8> {
    let digits = prefix.trim_matches('/').trim();
    let len: u8 = digits
        .parse()
        .map_err(|_| NetError::format(format!("Invalid prefix '{prefix}'")))?;
    if len > MAX_LENGTH {
        return Err(NetError::format(format!(
            "Invalid prefix '{prefix}': network length is too long"
        )));
    }
    Ok(len)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netfuncs::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(NetError::format(format!("Network length /{len} is too long")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Subnet mask for prefix text such as `"/24"`.
pub fn mask_from_prefix(prefix: &str) -> Result<u32> {
    get_cidr_mask(prefix_len(prefix)?)
}

/// Network address of `value` under `mask`.
pub fn network_of(value: u32, mask: u32) -> u32 {
    value & mask
}

/// Whether two addresses fall in the same network for the given prefix.
pub fn same_subnet(addr1: &str, addr2: &str, prefix: &str) -> Result<bool> {
    let value1 = address_to_value(addr1)?;
    let value2 = address_to_value(addr2)?;
    let mask = mask_from_prefix(prefix)?;
    Ok(network_of(value1, mask) == network_of(value2, mask))
}

/// An address together with the prefix length of the network it sits in.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    addr: u32,
    len: u8,
    mask: u32,
}

impl Subnet {
    /// Build a subnet from address text and prefix text, e.g. `("10.0.0.1", "/24")`.
    pub fn new(addr: &str, prefix: &str) -> Result<Subnet> {
        let len = prefix_len(prefix)?;
        Ok(Subnet {
            addr: address_to_value(addr)?,
            len,
            mask: get_cidr_mask(len)?,
        })
    }

    pub fn netmask(&self) -> u32 {
        self.mask
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> u32 {
        network_of(self.addr, self.mask)
    }

    /// Whether `value` lies inside this subnet.
    pub fn contains(&self, value: u32) -> bool {
        network_of(value, self.mask) == self.network()
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", value_to_address(self.addr), self.len)
    }
}
