//! IP address values.
//!
//! Resource sets for IP addresses are kept per address family. The
//! [`Address`] trait provides what is needed from an address type: its
//! family, its width in bits, and a way to convert to and from the raw
//! integer value so that prefix masks can be applied. It is implemented for
//! the standard library’s [`Ipv4Addr`] and [`Ipv6Addr`] which also provide
//! parsing and formatting of the usual textual notation.

use std::fmt;
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;


//------------ Address -------------------------------------------------------

/// A fixed-width IP address.
///
/// The raw value of an address is kept in a `u128` regardless of the
/// family. Unlike the usual network representation, the bits are kept in
/// the lowest [`WIDTH`][Self::WIDTH] bits of the integer, i.e., an IPv4
/// address occupies the bottom 32 bits with all upper bits cleared.
pub trait Address:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr
{
    /// The address family of the address type.
    const FAMILY: AddressFamily;

    /// The number of bits in an address.
    const WIDTH: u8;

    /// Returns the raw value of the address.
    fn to_u128(self) -> u128;

    /// Creates an address from a raw value.
    ///
    /// Bits beyond [`WIDTH`][Self::WIDTH] are ignored.
    fn from_u128(bits: u128) -> Self;

    /// Returns the host mask for a prefix of the given length.
    ///
    /// This is a value with the lowest `WIDTH - prefix_len` bits set. A
    /// prefix length larger than the address width is treated as a host
    /// prefix, i.e., results in an empty mask.
    fn host_mask(prefix_len: u8) -> u128 {
        let host_len = Self::WIDTH.saturating_sub(prefix_len);
        if host_len == 0 {
            0
        }
        else {
            u128::MAX >> (128 - u32::from(host_len))
        }
    }
}

impl Address for Ipv4Addr {
    const FAMILY: AddressFamily = AddressFamily::Ipv4;
    const WIDTH: u8 = 32;

    fn to_u128(self) -> u128 {
        u128::from(u32::from(self))
    }

    fn from_u128(bits: u128) -> Self {
        Ipv4Addr::from(bits as u32)
    }
}

impl Address for Ipv6Addr {
    const FAMILY: AddressFamily = AddressFamily::Ipv6;
    const WIDTH: u8 = 128;

    fn to_u128(self) -> u128 {
        u128::from(self)
    }

    fn from_u128(bits: u128) -> Self {
        Ipv6Addr::from(bits)
    }
}


//------------ AddressFamily -------------------------------------------------

/// The address family of an IP resources value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddressFamily {
    /// IPv4.
    ///
    /// This is identified by the AFI value 1.
    Ipv4,

    /// IPv6.
    ///
    /// This is identified by the AFI value 2.
    Ipv6
}

impl AddressFamily {
    /// Returns the address family identifier of the family.
    pub fn afi(self) -> u16 {
        match self {
            AddressFamily::Ipv4 => 1,
            AddressFamily::Ipv6 => 2,
        }
    }

    /// Returns the number of bits in an address of this family.
    pub fn bits(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => Ipv4Addr::WIDTH,
            AddressFamily::Ipv6 => Ipv6Addr::WIDTH,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        })
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bits_conversions() {
        let v4 = Ipv4Addr::new(192, 168, 10, 20);
        assert_eq!(v4.to_u128(), 0xc0a8_0a14);
        assert_eq!(Ipv4Addr::from_u128(0xc0a8_0a14), v4);
        assert_eq!(
            Ipv4Addr::from_u128(0xffff_0000_0000_c0a8_0a14),
            v4
        );

        let v6 = Ipv6Addr::new(
            0x2001, 0xdb8, 0, 0, 0, 0, 0x10, 0x20
        );
        assert_eq!(
            v6.to_u128(),
            0x2001_0db8_0000_0000_0000_0000_0010_0020
        );
        assert_eq!(
            Ipv6Addr::from_u128(0x2001_0db8_0000_0000_0000_0000_0010_0020),
            v6
        );
    }

    #[test]
    fn host_mask() {
        assert_eq!(Ipv4Addr::host_mask(0), 0xffff_ffff);
        assert_eq!(Ipv4Addr::host_mask(8), 0x00ff_ffff);
        assert_eq!(Ipv4Addr::host_mask(24), 0xff);
        assert_eq!(Ipv4Addr::host_mask(31), 1);
        assert_eq!(Ipv4Addr::host_mask(32), 0);
        assert_eq!(Ipv4Addr::host_mask(33), 0);

        assert_eq!(Ipv6Addr::host_mask(0), u128::MAX);
        assert_eq!(Ipv6Addr::host_mask(32), u128::MAX >> 32);
        assert_eq!(Ipv6Addr::host_mask(127), 1);
        assert_eq!(Ipv6Addr::host_mask(128), 0);
    }

    #[test]
    fn family() {
        assert_eq!(Ipv4Addr::FAMILY, AddressFamily::Ipv4);
        assert_eq!(Ipv6Addr::FAMILY, AddressFamily::Ipv6);
        assert_eq!(AddressFamily::Ipv4.bits(), 32);
        assert_eq!(AddressFamily::Ipv6.bits(), 128);
        assert_eq!(AddressFamily::Ipv4.afi(), 1);
        assert_eq!(AddressFamily::Ipv6.afi(), 2);
        assert_eq!(AddressFamily::Ipv6.to_string(), "IPv6");
    }
}
