//! CIDR prefix parsing and the preset private ranges.

use std::net::IpAddr;

use thiserror::Error;

/// RFC 1918 private ranges offered by the selection prompt
pub const PRIVATE_RANGES: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// Label of the selection option that switches to free-text entry
pub const CUSTOM_PREFIX_OPTION: &str = "Custom Prefix";

/// Text that is not `address/length`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid CIDR notation - use format like 192.168.1.0/24")]
pub struct InvalidCidr;

/// Options of the selection prompt, presets first
pub fn prefix_options() -> Vec<String> {
    PRIVATE_RANGES
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(CUSTOM_PREFIX_OPTION.to_string()))
        .collect()
}

/// Parse `address/length`.
///
/// The address does not have to be the network address (`192.168.1.7/24` is
/// accepted). The length must be plain decimal without leading zeros and may
/// not exceed 32 for IPv4 or 128 for IPv6.
pub fn parse_prefix(text: &str) -> Result<(IpAddr, u8), InvalidCidr> {
    let (addr, bits) = text.split_once('/').ok_or(InvalidCidr)?;
    let addr: IpAddr = addr.parse().map_err(|_| InvalidCidr)?;

    if bits.is_empty()
        || !bits.bytes().all(|b| b.is_ascii_digit())
        || (bits.len() > 1 && bits.starts_with('0'))
    {
        return Err(InvalidCidr);
    }
    let bits: u8 = bits.parse().map_err(|_| InvalidCidr)?;

    let max = if addr.is_ipv4() { 32 } else { 128 };
    if bits > max {
        return Err(InvalidCidr);
    }

    Ok((addr, bits))
}

/// Validator used by the custom-prefix prompt
pub fn validate_prefix(text: &str) -> Result<(), InvalidCidr> {
    parse_prefix(text).map(|_| ())
}
