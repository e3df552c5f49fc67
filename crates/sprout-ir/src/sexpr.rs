//! S-expression values.
//!
//! These are the inert data that a `Literal` node carries. Lists are built
//! exclusively from [`SExpValue::Pair`] cells terminated by
//! [`SExpValue::Empty`].

use serde::{Deserialize, Serialize};

/// A quoted S-expression value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SExpValue {
    /// A symbol such as `a` or `lambda`.
    Symbol(String),
    /// A numeric atom.
    Number(f64),
    /// A boolean atom.
    Bool(bool),
    /// A string atom.
    Str(String),
    /// A cons cell.
    Pair(Box<SExpValue>, Box<SExpValue>),
    /// The empty list.
    Empty,
}

impl SExpValue {
    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        SExpValue::Symbol(name.into())
    }

    /// Creates a cons cell.
    pub fn pair(head: SExpValue, tail: SExpValue) -> Self {
        SExpValue::Pair(Box::new(head), Box::new(tail))
    }

    /// Right-folds `items` into a proper list.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SExpValue>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(SExpValue::Empty, |tail, head| SExpValue::pair(head, tail))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, SExpValue::Symbol(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, SExpValue::Pair(..))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SExpValue::Empty)
    }

    /// Returns true for the atomic variants (everything except pairs and the empty list).
    pub fn is_atom(&self) -> bool {
        !matches!(self, SExpValue::Pair(..) | SExpValue::Empty)
    }

    /// Returns the symbol name if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            SExpValue::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the car of a pair.
    pub fn head(&self) -> Option<&SExpValue> {
        match self {
            SExpValue::Pair(head, _) => Some(head),
            _ => None,
        }
    }

    /// Returns the cdr of a pair.
    pub fn tail(&self) -> Option<&SExpValue> {
        match self {
            SExpValue::Pair(_, tail) => Some(tail),
            _ => None,
        }
    }

    /// Returns true if following the tails ends in `Empty`.
    pub fn is_proper_list(&self) -> bool {
        let mut cursor = self;
        loop {
            match cursor {
                SExpValue::Empty => return true,
                SExpValue::Pair(_, tail) => cursor = tail,
                _ => return false,
            }
        }
    }

    /// Iterates over the heads of the pair chain.
    ///
    /// Iteration stops at the first non-pair tail, so an improper list yields
    /// its leading elements only.
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { cursor: self }
    }
}

/// Iterator over the elements of a pair chain.
pub struct ListIter<'a> {
    cursor: &'a SExpValue,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a SExpValue;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            SExpValue::Pair(head, tail) => {
                self.cursor = tail;
                Some(head)
            }
            _ => None,
        }
    }
}

impl From<f64> for SExpValue {
    fn from(value: f64) -> Self {
        SExpValue::Number(value)
    }
}

impl From<i32> for SExpValue {
    fn from(value: i32) -> Self {
        SExpValue::Number(value.into())
    }
}

impl From<bool> for SExpValue {
    fn from(value: bool) -> Self {
        SExpValue::Bool(value)
    }
}

impl From<&str> for SExpValue {
    fn from(value: &str) -> Self {
        SExpValue::Str(value.to_string())
    }
}

impl From<String> for SExpValue {
    fn from(value: String) -> Self {
        SExpValue::Str(value)
    }
}
