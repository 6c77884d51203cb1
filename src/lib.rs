//! Number resources for RPKI.
//!
//! The _Resource Public Key Infrastructure_ (RPKI) is an application of
//! PKI to Internet routing security. Its certificates carry the number
//! resources, i.e., AS numbers and IP addresses, that the holder of the
//! certificate is entitled to use. These are defined in [RFC 3779].
//!
//! This crate contains the types for these resources and their textual
//! representation. Resources are kept in sets of ordered, non-overlapping
//! blocks:
//!
//! * [`AsBlocks`] is a set of AS number ranges,
//! * [`Ipv4Blocks`] and [`Ipv6Blocks`] are sets of IP address ranges, and
//! * [`ResourceSet`] combines one set of each kind.
//!
//! All sets are created from a comma separated list of blocks, e.g.,
//! `"65000-65003, 65005"` or `"10.0.0.0/8, 192.168.0.0-192.168.0.5"`, and
//! are displayed in their canonical form where IP address ranges that
//! happen to be exactly one prefix are shown as that prefix.
//!
//! [RFC 3779]: https://tools.ietf.org/html/rfc3779

pub use self::addr::{Address, AddressFamily};
pub use self::asn::{Asn, ParseAsnError};
pub use self::asres::{AsBlocks, AsRange};
pub use self::chain::{Block, Chain, FromStrError, OverlapError, RangeError};
pub use self::ipres::{
    IpBlocks, IpRange, Ipv4Blocks, Ipv4Range, Ipv6Blocks, Ipv6Range
};
pub use self::set::{ResourceSet, ResourceSetError};

pub mod addr;
pub mod asn;
pub mod asres;
pub mod chain;
pub mod ipres;
pub mod set;
