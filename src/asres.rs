//! Autonomous System identifier resources.
//!
//! The types herein model the AS identifiers defined in [RFC 3779] for use
//! with certificates. A set of AS numbers is represented by [`AsBlocks`], an
//! ordered chain of [`AsRange`]s.
//!
//! The textual representation of a range is either a single AS number, such
//! as `65000`, or two AS numbers separated by a hyphen, such as
//! `65000-65535`. Ranges never use the `AS` prefix. A set is a comma
//! separated list of ranges.
//!
//! [RFC 3779]: https://tools.ietf.org/html/rfc3779

use std::fmt;
use std::str::FromStr;
use crate::asn::Asn;
use crate::chain::{Block, Chain, RangeError};


//------------ AsBlocks ------------------------------------------------------

/// A possibly empty, ordered sequence of non-overlapping AS number ranges.
pub type AsBlocks = Chain<AsRange>;


//------------ AsRange -------------------------------------------------------

/// A range of AS numbers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AsRange {
    /// The smallest AS number that is part of the range.
    min: Asn,

    /// The largest AS number that is part of the range.
    ///
    /// Note that this means that, unlike normal Rust ranges, our range is
    /// inclusive at the upper end. This is necessary to represent a range
    /// that goes all the way to the last number.
    max: Asn,
}

impl AsRange {
    /// Creates a new AS number range from the smallest and largest number.
    ///
    /// Returns an error if `min` is larger than `max`.
    pub fn new(min: Asn, max: Asn) -> Result<Self, RangeError> {
        if min > max {
            Err(RangeError::Misordered)
        }
        else {
            Ok(AsRange { min, max })
        }
    }

    /// Creates a range covering a single AS number.
    pub fn single(asn: Asn) -> Self {
        AsRange { min: asn, max: asn }
    }

    /// Creates a range covering all AS numbers.
    pub fn all() -> Self {
        AsRange { min: Asn::MIN, max: Asn::MAX }
    }

    /// Returns the smallest AS number that is part of this range.
    pub fn min(self) -> Asn {
        self.min
    }

    /// Returns the largest AS number that is still part of this range.
    pub fn max(self) -> Asn {
        self.max
    }

    /// Returns whether the range covers exactly one AS number.
    pub fn is_single(self) -> bool {
        self.min == self.max
    }
}


//--- From

impl From<Asn> for AsRange {
    fn from(asn: Asn) -> Self {
        Self::single(asn)
    }
}


//--- Block

impl Block for AsRange {
    type Item = Asn;

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

impl FromStr for AsRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.find('-') {
            Some(sep) => {
                Self::new(parse_asn(&s[..sep])?, parse_asn(&s[sep + 1..])?)
            }
            None => parse_asn(s).map(Self::single)
        }
    }
}

impl fmt::Display for AsRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        }
        else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}


//------------ Helpers -------------------------------------------------------

fn parse_asn(s: &str) -> Result<Asn, RangeError> {
    Asn::from_str(s).map_err(|_| RangeError::Malformed)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::chain::FromStrError;

    fn asn(value: u32) -> Asn {
        Asn::from_u32(value)
    }

    #[test]
    fn new() {
        assert_eq!(
            AsRange::new(asn(5), asn(10)).map(|r| (r.min(), r.max())),
            Ok((asn(5), asn(10)))
        );
        assert!(AsRange::new(asn(5), asn(5)).unwrap().is_single());
        assert_eq!(
            AsRange::new(asn(10), asn(5)),
            Err(RangeError::Misordered)
        );
        assert_eq!(
            <AsRange as Block>::new(asn(10), asn(5)),
            Err(RangeError::Misordered)
        );
    }

    #[test]
    fn from_str() {
        assert_eq!(AsRange::from_str("5"), Ok(AsRange::single(asn(5))));
        assert_eq!(
            AsRange::from_str("5-10"),
            AsRange::new(asn(5), asn(10))
        );
        assert_eq!(
            AsRange::from_str("0-4294967295"),
            Ok(AsRange::all())
        );

        assert_eq!(AsRange::from_str("10-5"), Err(RangeError::Misordered));

        for s in &[
            "", "-", "5-", "-5", "1-2-3", "AS5", "AS1-AS3", "+5", "5 - 10",
            "4294967296", "0-4294967296", "10.0.0.0/8", "0x10",
        ] {
            assert_eq!(
                AsRange::from_str(s), Err(RangeError::Malformed), "{}", s
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(AsRange::single(asn(5)).to_string(), "5");
        assert_eq!(
            AsRange::new(asn(5), asn(10)).unwrap().to_string(),
            "5-10"
        );
    }

    #[test]
    fn canonical_round_trip() {
        for s in &["0", "5", "5-10", "65000-65535", "4294967295"] {
            assert_eq!(AsRange::from_str(s).unwrap().to_string(), *s);
        }
    }

    #[test]
    fn bounds() {
        let r = |min, max| AsRange::new(asn(min), asn(max)).unwrap();
        assert_eq!(r(1, 3).bounds(), (asn(1), asn(3)));
        assert!(r(1, 3).bounds() < r(5, 5).bounds());
        assert!(r(1, 3).bounds() < r(1, 4).bounds());
        assert!(r(1, 4).bounds() > r(1, 3).bounds());
    }

    #[test]
    fn blocks_from_str() {
        let blocks = AsBlocks::from_str("5,1-3").unwrap();
        assert_eq!(
            blocks.as_slice(),
            &[AsRange::new(asn(1), asn(3)).unwrap(), AsRange::single(asn(5))]
        );
        assert_eq!(blocks.to_string(), "1-3,5");

        let blocks = AsBlocks::from_str("1-3,4-6").unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.to_string(), "1-3,4-6");

        assert!(AsBlocks::from_str("1-5,3-10").unwrap_err().is_overlap());
        assert!(AsBlocks::from_str("5,5").unwrap_err().is_overlap());
        assert_eq!(
            AsBlocks::from_str("10-5"),
            Err(FromStrError::Range {
                input: "10-5".into(),
                token: "10-5".into(),
                err: RangeError::Misordered,
            })
        );
        assert_eq!(
            AsBlocks::from_str("1,AS2").unwrap_err().range_error(),
            Some(RangeError::Malformed)
        );
    }

    #[test]
    fn blocks_round_trip() {
        for s in &["", "1", "1-3,5", "1-3,4-6", "0,2,4-10,65000-65535"] {
            assert_eq!(AsBlocks::from_str(s).unwrap().to_string(), *s);
        }
    }
}
