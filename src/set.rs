//! The complete resources of a certificate.

use std::{error, fmt};
use std::str::FromStr;
use crate::asres::{AsBlocks, AsRange};
use crate::chain::{Chain, FromStrError};
use crate::ipres::{IpRange, Ipv4Blocks, Ipv6Blocks};


//------------ ResourceSet ---------------------------------------------------

/// The AS, IPv4, and IPv6 resources held by some party.
///
/// Each part is kept as its own chain. Any of them may be empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ResourceSet {
    asn: AsBlocks,

    #[cfg_attr(feature = "serde", serde(alias = "v4"))]
    ipv4: Ipv4Blocks,

    #[cfg_attr(feature = "serde", serde(alias = "v6"))]
    ipv6: Ipv6Blocks,
}

impl ResourceSet {
    pub fn new(asn: AsBlocks, ipv4: Ipv4Blocks, ipv6: Ipv6Blocks) -> Self {
        ResourceSet { asn, ipv4, ipv6 }
    }

    /// Creates a resource set from the textual representations of its parts.
    pub fn from_strs(
        asn: &str, ipv4: &str, ipv6: &str
    ) -> Result<Self, ResourceSetError> {
        Ok(ResourceSet {
            asn: AsBlocks::from_str(asn).map_err(ResourceSetError::Asn)?,
            ipv4: Ipv4Blocks::from_str(ipv4).map_err(ResourceSetError::Ipv4)?,
            ipv6: Ipv6Blocks::from_str(ipv6).map_err(ResourceSetError::Ipv6)?,
        })
    }

    pub fn empty() -> ResourceSet {
        Self::default()
    }

    /// Creates a resource set containing all possible resources.
    pub fn all() -> ResourceSet {
        ResourceSet {
            asn: Chain::single(AsRange::all()),
            ipv4: Chain::single(IpRange::all()),
            ipv6: Chain::single(IpRange::all()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.asn.is_empty() && self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    pub fn asn(&self) -> &AsBlocks {
        &self.asn
    }

    pub fn ipv4(&self) -> &Ipv4Blocks {
        &self.ipv4
    }

    pub fn ipv6(&self) -> &Ipv6Blocks {
        &self.ipv6
    }

    /// Returns the AS resources unless there are none.
    pub fn asn_opt(&self) -> Option<&AsBlocks> {
        Some(&self.asn).filter(|blocks| !blocks.is_empty())
    }

    /// Returns the IPv4 resources unless there are none.
    pub fn ipv4_opt(&self) -> Option<&Ipv4Blocks> {
        Some(&self.ipv4).filter(|blocks| !blocks.is_empty())
    }

    /// Returns the IPv6 resources unless there are none.
    pub fn ipv6_opt(&self) -> Option<&Ipv6Blocks> {
        Some(&self.ipv6).filter(|blocks| !blocks.is_empty())
    }
}


//--- Display

impl fmt::Display for ResourceSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "asn: '{}', ipv4: '{}', ipv6: '{}'",
            self.asn, self.ipv4, self.ipv6
        )
    }
}


//------------ ResourceSetError ----------------------------------------------

/// Parsing one of the parts of a resource set has failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceSetError {
    Asn(FromStrError),
    Ipv4(FromStrError),
    Ipv6(FromStrError),
}

impl ResourceSetError {
    /// Returns the error of the part that failed.
    pub fn inner(&self) -> &FromStrError {
        match self {
            ResourceSetError::Asn(err) => err,
            ResourceSetError::Ipv4(err) => err,
            ResourceSetError::Ipv6(err) => err,
        }
    }
}

impl fmt::Display for ResourceSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResourceSetError::Asn(err) => {
                write!(f, "invalid AS resources: {}", err)
            }
            ResourceSetError::Ipv4(err) => {
                write!(f, "invalid IPv4 resources: {}", err)
            }
            ResourceSetError::Ipv6(err) => {
                write!(f, "invalid IPv6 resources: {}", err)
            }
        }
    }
}

impl error::Error for ResourceSetError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.inner())
    }
}


//============ Tests =========================================================
