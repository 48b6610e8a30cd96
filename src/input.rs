//! Loading of the router/address-pair JSON document.

use crate::error::{NetError, Result};
use crate::models::NetData;
use std::path::Path;

/// Read and parse the input file.
///
/// # Arguments
/// * `path` - JSON file with `routers` and `src-dest` fields
///
/// # Returns
/// * `Ok(NetData)` - The parsed document, routers in document order
/// * `Err` - If the file cannot be read or a field is missing or mistyped
pub fn read_routers<P: AsRef<Path>>(path: P) -> Result<NetData> {
    let path = path.as_ref();
    log::info!("Reading input file: {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| NetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_routers(&json).map_err(|source| NetError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded {} routers and {} address pairs",
        data.routers.len(),
        data.src_dest.len()
    );
    Ok(data)
}

/// Parse the input document from a string, reporting the path of any bad field.
pub fn parse_routers(
    json: &str,
) -> std::result::Result<NetData, serde_path_to_error::Error<serde_json::Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer)
}
