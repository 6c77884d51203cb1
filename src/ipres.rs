//! IP address resources.
//!
//! The types herein model the IP address blocks defined in [RFC 3779] for
//! use with certificates. Resources are kept separately for each address
//! family: an [`IpRange`] and an [`IpBlocks`] set are generic over the
//! address type which is either [`Ipv4Addr`] or [`Ipv6Addr`].
//!
//! RFC 3779 allows a block to be expressed either as a prefix or as a range
//! between two addresses. Both cases cover a consecutive range of addresses,
//! so we model both of them as ranges between a minimum and a maximum
//! address. When formatting, a range that happens to cover exactly one
//! prefix is shown as that prefix.
//!
//! [RFC 3779]: https://tools.ietf.org/html/rfc3779

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use crate::addr::{Address, AddressFamily};
use crate::chain::{Block, Chain, RangeError};


//------------ IpBlocks ------------------------------------------------------

/// A possibly empty, ordered sequence of address ranges for one family.
pub type IpBlocks<A> = Chain<IpRange<A>>;

/// IPv4 address resources.
pub type Ipv4Blocks = IpBlocks<Ipv4Addr>;

/// IPv6 address resources.
pub type Ipv6Blocks = IpBlocks<Ipv6Addr>;


//------------ IpRange -------------------------------------------------------

/// An IP address range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IpRange<A> {
    /// The smallest IP address that is part of this range.
    min: A,

    /// The largest IP address that is part of this range.
    ///
    /// Note that this means that, unlike normal Rust ranges, our range is
    /// inclusive at the upper end. This is necessary to represent a range
    /// that goes all the way to the last address (which, for instance,
    /// `::/0` does).
    max: A,
}

/// An IPv4 address range.
pub type Ipv4Range = IpRange<Ipv4Addr>;

/// An IPv6 address range.
pub type Ipv6Range = IpRange<Ipv6Addr>;

impl<A: Address> IpRange<A> {
    /// Creates a new address range from smallest and largest address.
    ///
    /// Returns an error if `min` is larger than `max`.
    pub fn new(min: A, max: A) -> Result<Self, RangeError> {
        if min > max {
            Err(RangeError::Misordered)
        }
        else {
            Ok(IpRange { min, max })
        }
    }

    /// Creates a new address range from a prefix.
    ///
    /// Returns an error if `len` is larger than the width of the address
    /// or if any of the host bits of `addr` are set. The address is never
    /// silently truncated.
    pub fn from_prefix(addr: A, len: u8) -> Result<Self, RangeError> {
        if len > A::WIDTH {
            return Err(RangeError::Malformed)
        }
        let mask = A::host_mask(len);
        let bits = addr.to_u128();
        if bits & mask != 0 {
            return Err(RangeError::NonCanonicalPrefix)
        }
        Ok(IpRange { min: addr, max: A::from_u128(bits | mask) })
    }

    /// Creates a range covering the entire address space of the family.
    pub fn all() -> Self {
        IpRange {
            min: A::from_u128(0),
            max: A::from_u128(A::host_mask(0)),
        }
    }

    /// Returns the smallest IP address that is part of this range.
    pub fn min(self) -> A {
        self.min
    }

    /// Returns the largest IP address that is still part of this range.
    pub fn max(self) -> A {
        self.max
    }

    /// Returns the address family of the range.
    pub fn family(self) -> AddressFamily {
        A::FAMILY
    }

    /// Returns the prefix length if the range is exactly one prefix.
    ///
    /// This is the case if the minimum and maximum only differ in a
    /// continuous run of bits at the end, these bits are all unset in the
    /// minimum and all set in the maximum.
    pub fn prefix_len(self) -> Option<u8> {
        let min = self.min.to_u128();
        let mut diff = min ^ self.max.to_u128();
        let mut len = A::WIDTH;
        while diff & 1 == 1 {
            len -= 1;
            diff >>= 1;
        }
        if diff == 0 && min & A::host_mask(len) == 0 {
            Some(len)
        }
        else {
            None
        }
    }

    /// Returns the range as a prefix if it is exactly one prefix.
    pub fn to_prefix(self) -> Option<(A, u8)> {
        self.prefix_len().map(|len| (self.min, len))
    }
}


//--- Block

impl<A: Address> Block for IpRange<A> {
    type Item = A;

    fn new(min: Self::Item, max: Self::Item) -> Result<Self, RangeError> {
        Self::new(min, max)
    }

    fn min(&self) -> Self::Item {
        Self::min(*self)
    }

    fn max(&self) -> Self::Item {
        Self::max(*self)
    }
}


//--- FromStr and Display

impl<A: Address> FromStr for IpRange<A> {
    type Err = RangeError;

    /// Parses either a range `min-max` or a prefix `addr/len`.
    ///
    /// Both addresses of a range and the address of a prefix must be of
    /// the address family of `A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(sep) = s.find('-') {
            Self::new(parse_addr(&s[..sep])?, parse_addr(&s[sep + 1..])?)
        }
        else if let Some(sep) = s.find('/') {
            Self::from_prefix(
                parse_addr(&s[..sep])?, parse_prefix_len(&s[sep + 1..])?
            )
        }
        else {
            Err(RangeError::Malformed)
        }
    }
}

impl<A: Address> fmt::Display for IpRange<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.prefix_len() {
            Some(len) => write!(f, "{}/{}", self.min, len),
            None => write!(f, "{}-{}", self.min, self.max),
        }
    }
}


//------------ Helpers -------------------------------------------------------

fn parse_addr<A: Address>(s: &str) -> Result<A, RangeError> {
    A::from_str(s).map_err(|_| RangeError::Malformed)
}

fn parse_prefix_len(s: &str) -> Result<u8, RangeError> {
    if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
        return Err(RangeError::Malformed)
    }
    u8::from_str(s).map_err(|_| RangeError::Malformed)
}


//============ Tests =========================================================
