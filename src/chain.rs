//! Ordered sets of resource blocks.
//!
//! These types are used for dealing with both IP resources and AS resources.
//! A range of such resources, defined by a minimum and a maximum value,
//! shall be a _block._ The various kinds of blocks implement the trait
//! [`Block`].
//!
//! A sequence of ordered, non-overlapping blocks shall be called a _chain._
//! It is available as the type [`Chain`]. A chain is created once, either
//! from a sequence of blocks or by parsing its textual representation, and
//! cannot be changed afterwards.

use std::{error, fmt, slice};
use std::str::FromStr;
use std::sync::Arc;
use log::debug;


//------------ Block ---------------------------------------------------------

/// A consecutive range of resources.
///
/// A block covers all the items between and including its minimum and
/// maximum. The minimum is never larger than the maximum.
///
/// Blocks are parsed from and formatted into their textual representation
/// via `FromStr` and `Display`. Formatting should produce the canonical
/// representation which, when parsed again, results in the same block.
pub trait Block:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = RangeError>
{
    type Item: Copy + Eq + Ord + fmt::Debug + fmt::Display;

    /// Creates a new block from the minimum and maximum.
    ///
    /// Returns an error if `min` is larger than `max`.
    fn new(min: Self::Item, max: Self::Item) -> Result<Self, RangeError>;

    /// Returns the smallest item that is part of the block.
    fn min(&self) -> Self::Item;

    /// Returns the largest item that is part of the block.
    fn max(&self) -> Self::Item;

    /// Returns a pair of the smallest and largest item in the block.
    ///
    /// Blocks are ordered by comparing these pairs.
    fn bounds(&self) -> (Self::Item, Self::Item) {
        (self.min(), self.max())
    }
}


//------------ Chain ---------------------------------------------------------

/// An ordered, non-overlapping sequence of blocks.
///
/// The blocks are ordered by their minimum and then their maximum. Each
/// block ends strictly before the next one starts. Blocks that are merely
/// adjacent, i.e., where one starts right after the previous one ends, are
/// allowed and are kept as separate blocks.
///
/// The blocks are kept behind an arc, so cloning a chain is cheap.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Chain<T>(Arc<[T]>);

impl<T> Chain<T> {
    /// Creates an empty chain.
    pub fn empty() -> Self {
        Chain(Vec::new().into())
    }

    /// Returns the blocks of the chain as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_ref()
    }

    /// Returns an iterator over the blocks in order.
    pub fn iter(&self) -> slice::Iter<T> {
        self.0.iter()
    }

    /// Returns the number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Block> Chain<T> {
    /// Creates a chain containing a single block.
    pub fn single(block: T) -> Self {
        Chain(vec![block].into())
    }

    /// Creates a chain from a sequence of blocks.
    ///
    /// The blocks can be given in any order. They will be sorted. If any
    /// two blocks overlap after sorting, the first such pair is returned as
    /// an error.
    pub fn from_blocks<I: IntoIterator<Item = T>>(
        iter: I
    ) -> Result<Self, OverlapError<T>> {
        let mut blocks: Vec<T> = iter.into_iter().collect();
        blocks.sort_by(|left, right| left.bounds().cmp(&right.bounds()));
        for pair in blocks.windows(2) {
            if pair[0].max() >= pair[1].min() {
                return Err(OverlapError::new(pair[0], pair[1]))
            }
        }
        Ok(Chain(blocks.into()))
    }

    /// Parses a chain from its textual representation.
    fn parse(s: &str) -> Result<Self, FromStrError> {
        if s.trim().is_empty() {
            return Ok(Self::empty())
        }
        let blocks = s.split(',').map(|token| {
            let token = token.trim();
            T::from_str(token).map_err(|err| {
                FromStrError::Range {
                    input: s.into(),
                    token: token.into(),
                    err
                }
            })
        }).collect::<Result<Vec<_>, _>>()?;
        Self::from_blocks(blocks).map_err(|err| {
            FromStrError::Overlap {
                input: s.into(),
                left: err.left().to_string(),
                right: err.right().to_string(),
            }
        })
    }
}


//--- Default

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::empty()
    }
}


//--- IntoIterator

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}


//--- FromStr and Display

impl<T: Block> FromStr for Chain<T> {
    type Err = FromStrError;

    /// Parses a comma-separated list of blocks.
    ///
    /// Whitespace around each block is ignored. An empty string results in
    /// an empty chain. Any invalid block as well as any pair of overlapping
    /// blocks results in an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|err| {
            debug!("Rejecting resource set: {}", err);
            err
        })
    }
}

impl<T: Block> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(el) = iter.next() {
            write!(f, "{}", el)?;
        }
        for el in iter {
            write!(f, ",{}", el)?;
        }
        Ok(())
    }
}


//--- Deserialize and Serialize

#[cfg(feature = "serde")]
impl<'de, T: Block> serde::Deserialize<'de> for Chain<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D
    ) -> Result<Self, D::Error> {
        use std::marker::PhantomData;

        struct Visitor<T>(PhantomData<T>);

        impl<'de, T: Block> serde::de::Visitor<'de> for Visitor<T> {
            type Value = Chain<T>;

            fn expecting(
                &self, formatter: &mut fmt::Formatter
            ) -> fmt::Result {
                write!(formatter, "a string with a resource set")
            }

            fn visit_str<E: serde::de::Error>(
                self, v: &str
            ) -> Result<Self::Value, E> {
                Chain::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor(PhantomData))
    }
}

#[cfg(feature = "serde")]
impl<T: Block> serde::Serialize for Chain<T> {
    fn serialize<S: serde::Serializer>(
        &self, serializer: S
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


//============ Error Types ===================================================

//------------ RangeError ----------------------------------------------------

/// Creating or parsing a single block has failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RangeError {
    /// The textual representation is not a valid block.
    Malformed,

    /// The minimum is larger than the maximum.
    Misordered,

    /// A prefix has non-zero bits in its host portion.
    NonCanonicalPrefix,
}

impl RangeError {
    /// Returns a static error message.
    pub fn static_description(self) -> &'static str {
        match self {
            RangeError::Malformed => "malformed resource",
            RangeError::Misordered => "minimum larger than maximum",
            RangeError::NonCanonicalPrefix => "non-zero host portion",
        }
    }
}

impl From<RangeError> for &'static str {
    fn from(err: RangeError) -> Self {
        err.static_description()
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.static_description())
    }
}

impl error::Error for RangeError { }


//------------ OverlapError --------------------------------------------------

/// Two blocks of a chain overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OverlapError<T> {
    left: T,
    right: T,
}

impl<T: Block> OverlapError<T> {
    fn new(left: T, right: T) -> Self {
        OverlapError { left, right }
    }

    /// Returns the block that sorts first.
    pub fn left(&self) -> T {
        self.left
    }

    /// Returns the block that sorts second.
    pub fn right(&self) -> T {
        self.right
    }
}

impl<T: Block> fmt::Display for OverlapError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "overlapping resources {} and {}", self.left, self.right)
    }
}

impl<T: Block> error::Error for OverlapError<T> { }


//------------ FromStrError --------------------------------------------------

/// Parsing the textual representation of a chain has failed.
///
/// Both variants carry the complete input that was being parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// One of the comma separated tokens is not a valid block.
    Range {
        input: String,
        token: String,
        err: RangeError,
    },

    /// Two blocks overlap.
    ///
    /// The blocks are given in their canonical representation.
    Overlap {
        input: String,
        left: String,
        right: String,
    },
}

impl FromStrError {
    /// Returns the input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            FromStrError::Range { input, .. } => input,
            FromStrError::Overlap { input, .. } => input,
        }
    }

    /// Returns the error for an invalid block, if that was the problem.
    pub fn range_error(&self) -> Option<RangeError> {
        match self {
            FromStrError::Range { err, .. } => Some(*err),
            FromStrError::Overlap { .. } => None,
        }
    }

    /// Returns whether the error was caused by overlapping blocks.
    pub fn is_overlap(&self) -> bool {
        matches!(self, FromStrError::Overlap { .. })
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FromStrError::Range { input, token, err } => {
                write!(f, "{} '{}' in '{}'", err, token, input)
            }
            FromStrError::Overlap { input, left, right } => {
                write!(
                    f, "overlapping resources {} and {} in '{}'",
                    left, right, input
                )
            }
        }
    }
}

impl error::Error for FromStrError { }


//============ Tests =========================================================
