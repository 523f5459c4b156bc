//! Access address type.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// One address token from a workload.
///
/// An address is an opaque, non-empty textual token without whitespace.
/// Workload files are split on whitespace, so every token produced by the
/// tokenizer is a valid address; constructing one by hand goes through
/// [`Address::new`], which enforces the same rule.
///
/// # Example
/// ```
/// use cachesim::Address;
///
/// let addr = Address::new("0x1f").unwrap();
/// assert_eq!(addr.as_str(), "0x1f");
/// assert!(Address::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    /// Create a new address from a token.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the token is empty or contains whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::invalid_argument("address must not be empty"));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(Error::invalid_argument(format!(
                "address {:?} must not contain whitespace",
                token
            )));
        }
        Ok(Address(token))
    }

    /// The token as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::new(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
