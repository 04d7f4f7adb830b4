//! Port extraction from entry point addresses

use proxyconf_config::EntryPoints;
use serde::Serialize;

use crate::error::{Error, Result};

/// Port exposed by one entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortMapping {
    /// Entry point name
    pub name: String,
    /// Port part of the entry point address
    pub port: String,
}

/// Split a `host:port`, `[host]:port` or `:port` address.
///
/// The port is not checked to be numeric; named ports are accepted.
pub fn split_host_port(address: &str) -> Result<(&str, &str)> {
    let invalid = |reason: &str| Error::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let colon = address
        .rfind(':')
        .ok_or_else(|| invalid("missing port in address"))?;
    let (host, port) = (&address[..colon], &address[colon + 1..]);

    if let Some(bracketed) = host.strip_prefix('[') {
        let host = bracketed
            .strip_suffix(']')
            .ok_or_else(|| invalid("missing ']' in address"))?;
        if host.contains(['[', ']']) {
            return Err(invalid("unexpected bracket in address"));
        }
        return Ok((host, port));
    }

    if host.contains(':') {
        return Err(invalid("too many colons in address"));
    }
    if host.contains(['[', ']']) || port.contains(['[', ']']) {
        return Err(invalid("unexpected bracket in address"));
    }

    Ok((host, port))
}

/// Ports of every entry point, sorted by entry point name.
///
/// A single malformed address fails the whole extraction.
pub fn extract_ports(entry_points: &EntryPoints) -> Result<Vec<PortMapping>> {
    let mut ports = entry_points
        .iter()
        .map(|(name, entry_point)| -> Result<PortMapping> {
            let (_, port) =
                split_host_port(&entry_point.address).map_err(|e| Error::PortExtraction {
                    entry_point: name.clone(),
                    source: Box::new(e),
                })?;
            Ok(PortMapping {
                name: name.clone(),
                port: port.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ports.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(ports)
}
