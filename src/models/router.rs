//! Router table and input document model.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Descriptor attached to each router in the input.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouterInfo {
    /// Prefix the router serves, e.g. `"/24"`.
    pub netmask: String,
}

/// A router address and the descriptor configured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterEntry {
    pub address: String,
    pub info: RouterInfo,
}

/// Routers in the order they appear in the input document.
///
/// Lookups scan this order, so the first of several overlapping subnets wins.
/// Each address appears once: a repeated address keeps its first position
/// and takes the last descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterTable {
    pub entries: Vec<RouterEntry>,
}

impl RouterTable {
    pub fn new() -> RouterTable {
        RouterTable {
            entries: Vec::new(),
        }
    }

    /// Add a router, keeping insertion order.
    pub fn add_router(&mut self, address: &str, netmask: &str) {
        self.insert(
            address.to_string(),
            RouterInfo {
                netmask: netmask.to_string(),
            },
        );
    }

    /// Insert `info` for `address`, replacing the descriptor in place if the
    /// address is already present.
    pub fn insert(&mut self, address: String, info: RouterInfo) {
        match self.entries.iter_mut().find(|r| r.address == address) {
            Some(existing) => {
                log::debug!("Router {address} repeated, keeping last descriptor");
                existing.info = info;
            }
            None => self.entries.push(RouterEntry { address, info }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouterTable {
    type Item = &'a RouterEntry;
    type IntoIter = std::slice::Iter<'a, RouterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct RouterTableVisitor;

impl<'de> Visitor<'de> for RouterTableVisitor {
    type Value = RouterTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of router address to router descriptor")
    }

    fn visit_map<A>(self, mut map: A) -> Result<RouterTable, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = RouterTable::new();
        while let Some((address, info)) = map.next_entry::<String, RouterInfo>()? {
            table.insert(address, info);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for RouterTable {
    fn deserialize<D>(deserializer: D) -> Result<RouterTable, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RouterTableVisitor)
    }
}

/// A `(source, destination)` pair from the `src-dest` list.
pub type AddressPair = (String, String);

/// The complete input document.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NetData {
    pub routers: RouterTable,
    #[serde(rename = "src-dest")]
    pub src_dest: Vec<AddressPair>,
}

impl fmt::Display for RouterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.info.netmask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_table_keeps_document_order() {
        let json = r#"{
            "10.34.98.1": {"netmask": "/24"},
            "10.34.46.1": {"netmask": "/24", "interface": "eth1"},
            "10.34.166.1": {"netmask": "/16"}
        }"#;
        let table: RouterTable = serde_json::from_str(json).unwrap();
        let addrs: Vec<&str> = table.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addrs, vec!["10.34.98.1", "10.34.46.1", "10.34.166.1"]);
        assert_eq!(table.entries[2].info.netmask, "/16");
        assert_eq!(table.entries[2].to_string(), "10.34.166.1/16");
    }

    #[test]
    fn test_router_table_missing_netmask() {
        let json = r#"{"10.34.98.1": {"mask": "/24"}}"#;
        assert!(serde_json::from_str::<RouterTable>(json).is_err());
    }

    #[test]
    fn test_net_data() {
        let json = r#"{
            "routers": {"10.34.166.1": {"netmask": "/24"}},
            "src-dest": [["10.34.166.1", "10.34.166.254"]]
        }"#;
        let data: NetData = serde_json::from_str(json).unwrap();
        assert_eq!(data.routers.len(), 1);
        assert_eq!(
            data.src_dest,
            vec![("10.34.166.1".to_string(), "10.34.166.254".to_string())]
        );
    }

    #[test]
    fn test_net_data_bad_pair() {
        let json = r#"{
            "routers": {},
            "src-dest": [["10.34.166.1"]]
        }"#;
        assert!(serde_json::from_str::<NetData>(json).is_err());
    }

    #[test]
    fn test_router_table_repeated_key() {
        let json = r#"{
            "10.0.0.1": {"netmask": "/24"},
            "10.34.46.1": {"netmask": "/24"},
            "10.0.0.1": {"netmask": "/8"}
        }"#;
        let table: RouterTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0].address, "10.0.0.1");
        assert_eq!(table.entries[0].info.netmask, "/8");
        assert_eq!(table.entries[1].address, "10.34.46.1");
    }

    #[test]
    fn test_add_router() {
        let mut table = RouterTable::new();
        assert!(table.is_empty());
        table.add_router("10.0.0.1", "/8");
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries[0].info.netmask, "/8");
        table.add_router("10.0.0.1", "/16");
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries[0].info.netmask, "/16");
    }
}
