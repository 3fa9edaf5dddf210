//! CIDR address and prefix utilities for IPv4 and IPv6.
//!
//! Both families are handled through a common `u128` integer representation,
//! so containment, capacity and host enumeration share one code path.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for IPv4 (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for IPv6 (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Maximum prefix length for the family of `addr`.
pub fn max_length(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

/// Numeric value of an address, IPv4 zero-extended into 128 bits.
pub fn addr_to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Inverse of [`addr_to_bits`] for the requested family.
pub fn bits_to_addr(bits: u128, v6: bool) -> IpAddr {
    if v6 {
        IpAddr::V6(Ipv6Addr::from(bits))
    } else {
        IpAddr::V4(Ipv4Addr::from(bits as u32))
    }
}

/// Convert a prefix length to a network mask over `max_len` bits.
///
/// # Examples
/// ```
/// use site_network_doc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24, 32).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, max_len: u8) -> Result<u128, Box<dyn Error>> {
    if len > max_len {
        return Err("Network length is too long".into());
    }
    let host_bits = (max_len - len) as u32;
    let all_bits: u128 = if max_len == MAX_LENGTH_V6 {
        u128::MAX
    } else {
        (1u128 << max_len) - 1
    };
    let mask = all_bits.checked_shr(host_bits).unwrap_or(0);
    Ok(mask.checked_shl(host_bits).unwrap_or(0) & all_bits)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: IpAddr, len: u8) -> Result<IpAddr, Box<dyn Error>> {
    let mask = get_cidr_mask(len, max_length(addr))?;
    let bits = addr_to_bits(addr) & mask;
    Ok(bits_to_addr(bits, addr.is_ipv6()))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
pub fn broadcast_addr(addr: IpAddr, len: u8) -> Result<IpAddr, Box<dyn Error>> {
    let max_len = max_length(addr);
    let mask = get_cidr_mask(len, max_len)?;
    let family_bits = get_cidr_mask(max_len, max_len)?;
    let bits = (addr_to_bits(addr) & mask) | (!mask & family_bits);
    Ok(bits_to_addr(bits, addr.is_ipv6()))
}

/// Number of addresses covered by a prefix, saturating at `u128::MAX` for an
/// IPv6 `/0`.
pub fn address_count(len: u8, max_len: u8) -> Result<u128, Box<dyn Error>> {
    if len > max_len {
        return Err("Network length is too long".into());
    }
    let host_bits = (max_len - len) as u32;
    Ok(1u128.checked_shl(host_bits).unwrap_or(u128::MAX))
}

/// Whether network and broadcast addresses are excluded from the usable hosts.
///
/// Point-to-point (/31, /127) and host (/32, /128) prefixes use every address.
fn excludes_network_and_broadcast(len: u8, max_len: u8) -> bool {
    len + 2 <= max_len
}

/// Usable host count for a prefix length.
///
/// Subtracts network and broadcast for /30 and larger (IPv6 /126 and larger);
/// /31, /32, /127 and /128 report the full address count.
pub fn num_hosts(len: u8, max_len: u8) -> Result<u128, Box<dyn Error>> {
    let count = address_count(len, max_len)?;
    if !excludes_network_and_broadcast(len, max_len) {
        return Ok(count);
    }
    if len == 0 && max_len == MAX_LENGTH_V6 {
        // 2^128 does not fit, count is already saturated at 2^128 - 1
        return Ok(count - 1);
    }
    Ok(count.saturating_sub(2))
}

/// Size policy deciding which prefixes may be fully enumerated.
///
/// Expressed as an IPv4 prefix length; IPv6 prefixes qualify when they have
/// at most the same number of host bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationPolicy {
    pub min_v4_len: u8,
}

impl EnumerationPolicy {
    pub fn new(min_v4_len: u8) -> EnumerationPolicy {
        EnumerationPolicy {
            min_v4_len: min_v4_len.clamp(crate::config::MIN_ENUMERATE_MIN_LEN, MAX_LENGTH_V4),
        }
    }

    /// Maximum host bits a prefix may have to be enumerated.
    pub fn max_host_bits(&self) -> u8 {
        MAX_LENGTH_V4 - self.min_v4_len
    }

    pub fn allows(&self, cidr: &Cidr) -> bool {
        cidr.host_bits() <= self.max_host_bits()
    }
}

impl Default for EnumerationPolicy {
    fn default() -> Self {
        EnumerationPolicy::new(crate::config::DEFAULT_ENUMERATE_MIN_LEN)
    }
}

/// Percentage of used over usable addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Utilization {
    /// Rounded to one decimal.
    Percent(f64),
    NotApplicable,
}

/// `used / capacity * 100` rounded to one decimal, `NotApplicable` for an
/// empty capacity.
pub fn utilization(used: u128, capacity: u128) -> Utilization {
    if capacity == 0 {
        return Utilization::NotApplicable;
    }
    let pct = used as f64 / capacity as f64 * 100.0;
    Utilization::Percent((pct * 10.0).round() / 10.0)
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Utilization::Percent(pct) => write!(f, "{pct:.1}%"),
            Utilization::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Address with a prefix length, used both for networks and host addresses.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as written, not necessarily the network address.
    pub addr: IpAddr,
    /// Prefix length (0-32 or 0-128).
    pub len: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a string like "10.0.0.0/24" or "2001:db8::/64".
    pub fn new(addr_cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask {addr_cidr}"))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let len: u8 = len
            .parse()
            .map_err(|_| format!("Invalid prefix length {len}"))?;
        if len > max_length(addr) {
            return Err("Network length is too long".into());
        }
        Ok(Cidr { addr, len })
    }

    pub fn max_length(&self) -> u8 {
        max_length(self.addr)
    }

    pub fn is_ipv6(&self) -> bool {
        self.addr.is_ipv6()
    }

    pub fn host_bits(&self) -> u8 {
        self.max_length() - self.len
    }

    /// Numeric value of the address itself, ignoring the length.
    pub fn bits(&self) -> u128 {
        addr_to_bits(self.addr)
    }

    /// Lowest (network) address value.
    pub fn lo_bits(&self) -> u128 {
        addr_to_bits(self.lo())
    }

    /// Highest (broadcast) address value.
    pub fn hi_bits(&self) -> u128 {
        addr_to_bits(self.hi())
    }

    /// Get the lowest (network) address in the prefix.
    pub fn lo(&self) -> IpAddr {
        // len is validated on construction
        cut_addr(self.addr, self.len).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the prefix.
    pub fn hi(&self) -> IpAddr {
        broadcast_addr(self.addr, self.len).unwrap_or(self.addr)
    }

    /// The prefix normalized to its network address.
    pub fn network(&self) -> Cidr {
        Cidr {
            addr: self.lo(),
            len: self.len,
        }
    }

    /// True iff `addr` lies within [network, broadcast] of this prefix.
    pub fn contains(&self, addr: IpAddr) -> bool {
        if addr.is_ipv6() != self.is_ipv6() {
            return false;
        }
        let bits = addr_to_bits(addr);
        self.lo_bits() <= bits && bits <= self.hi_bits()
    }

    /// Usable host count, see [`num_hosts`].
    pub fn capacity(&self) -> u128 {
        num_hosts(self.len, self.max_length()).unwrap_or(0)
    }

    /// Usable hosts in ascending order, `None` when the prefix is larger than
    /// the enumeration policy allows.
    pub fn enumerate_hosts(&self, policy: &EnumerationPolicy) -> Option<HostIter> {
        if !policy.allows(self) {
            return None;
        }
        let (first, last) = if excludes_network_and_broadcast(self.len, self.max_length()) {
            (self.lo_bits() + 1, self.hi_bits() - 1)
        } else {
            (self.lo_bits(), self.hi_bits())
        };
        Some(HostIter {
            next: first,
            last,
            v6: self.is_ipv6(),
            done: first > last,
        })
    }
}

/// Lazy ascending iterator over host addresses; clone it to restart.
#[derive(Debug, Clone)]
pub struct HostIter {
    next: u128,
    last: u128,
    v6: bool,
    done: bool,
}

impl Iterator for HostIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current >= self.last {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(bits_to_addr(current, self.v6))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = usize::try_from(self.last - self.next + 1).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Cidr, Self::Err> {
        Cidr::new(s)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}
