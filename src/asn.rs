//! Autonomous System Numbers.

use std::{error, fmt};
use std::str::FromStr;


//------------ Asn -----------------------------------------------------------

/// An Autonomous System number.
///
/// AS numbers are limited to 32 bits, which covers the complete AS number
/// space defined in [RFC 6793]. Larger values are rejected when parsing.
///
/// The textual representation is the plain decimal number. Unlike the usual
/// `AS` prefixed notation, this is what is used inside resource sets.
///
/// [RFC 6793]: https://tools.ietf.org/html/rfc6793
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Asn(u32);

impl Asn {
    pub const MIN: Asn = Asn(u32::MIN);
    pub const MAX: Asn = Asn(u32::MAX);

    pub fn from_u32(value: u32) -> Self {
        Asn(value)
    }

    /// Returns the raw AS number.
    pub fn into_u32(self) -> u32 {
        self.0
    }
}


//--- From

impl From<u32> for Asn {
    fn from(value: u32) -> Self {
        Asn(value)
    }
}

impl From<Asn> for u32 {
    fn from(asn: Asn) -> Self {
        asn.0
    }
}


//--- FromStr

impl FromStr for Asn {
    type Err = ParseAsnError;

    /// Parses an AS number from its decimal representation.
    ///
    /// Only ASCII digits are accepted. In particular, there may not be a
    /// sign or an `AS` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(ParseAsnError)
        }
        s.parse().map(Asn).map_err(|_| ParseAsnError)
    }
}


//--- Display

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//============ Error Types ===================================================

//------------ ParseAsnError ------------------------------------------------

/// A string did not contain a valid AS number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseAsnError;

impl fmt::Display for ParseAsnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid AS number")
    }
}

impl error::Error for ParseAsnError {}


//============ Tests =========================================================

#[cfg(all(test, feature = "serde"))]
mod test_serde {
    use super::*;
    use serde_test::{Token, assert_tokens};

    #[test]
    fn newtype_u32() {
        assert_tokens(
            &Asn::from_u32(64511),
            &[Token::NewtypeStruct { name: "Asn" }, Token::U32(64511)]
        );
    }
}
