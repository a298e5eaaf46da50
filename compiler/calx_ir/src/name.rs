//! Identifier names.
//!
//! Names are shared, immutable strings. Cloning a `Name` bumps a reference
//! count, so binding the same identifier in many scopes never copies text.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// An identifier bound in a symbol table or referenced by an expression.
///
/// Ordered by its text so that symbol listings sort lexicographically.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    /// The reserved name holding the result of the last bare expression.
    pub const LAST_RESULT: &'static str = "#";

    /// Create a name from any string-like value.
    pub fn new(text: impl AsRef<str>) -> Self {
        Name(Rc::from(text.as_ref()))
    }

    /// The identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the reserved last-result name `#`.
    #[inline]
    pub fn is_last_result(&self) -> bool {
        &*self.0 == Self::LAST_RESULT
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name(Rc::from(text))
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
