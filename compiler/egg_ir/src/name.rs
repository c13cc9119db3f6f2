//! Identifier names.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// An identifier as written in source: a variable, parameter, or operator
/// name such as `total`, `+` or `==`.
///
/// Backed by `Rc<str>` so clones share one allocation. Hashes and compares
/// as its string contents, which lets scopes look up a `&str` directly.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(Rc<str>);

impl Name {
    /// Create a name from its text.
    pub fn new(text: &str) -> Self {
        Name(Rc::from(text))
    }

    /// The name's text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
