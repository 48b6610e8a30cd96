//! Domain models for netfuncs.
//!
//! This module contains the core data structures and arithmetic:
//! - [`Subnet`] and the address/prefix helpers in `ipv4`
//! - [`RouterTable`], [`RouterEntry`] and [`NetData`] - the input document

mod ipv4;
mod router;

// Re-export public types
pub use ipv4::{
    address_to_value, get_cidr_mask, mask_from_prefix, network_of, prefix_len, same_subnet,
    value_to_address, Subnet, MAX_LENGTH,
};
pub use router::{AddressPair, NetData, RouterEntry, RouterInfo, RouterTable};
