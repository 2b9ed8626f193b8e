//! Registered user entity.
//!
//! A [`User`] pairs a repository-assigned [`UserId`] with its
//! [`UserDetails`]. Apart from the identifier the fields are opaque: this
//! layer enforces no cross-field constraints.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDate;

/// Repository-assigned user identifier.
///
/// # Examples
/// ```
/// use user_registration::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal code kept verbatim as text.
///
/// Clients may submit it as a number; the digits are preserved as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PinCode(String);

impl PinCode {
    /// Wrap a postal code.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the postal code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<u64> for PinCode {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for PinCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about a user except its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetails {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// Postal address.
    pub address: String,
    /// Postal code.
    pub pin_code: PinCode,
    /// Date of birth.
    pub dob: Option<NaiveDate>,
    /// Date the user joined.
    pub doj: Option<NaiveDate>,
}

/// A persisted user record.
///
/// # Examples
/// ```
/// use user_registration::domain::{PinCode, User, UserDetails, UserId};
///
/// let details = UserDetails {
///     first_name: "Saba".into(),
///     surname: "Shaikh".into(),
///     address: "Mumbai".into(),
///     pin_code: PinCode::new("400018"),
///     ..UserDetails::default()
/// };
/// let user = User::new(UserId::new(1), details);
/// assert_eq!(user.details().pin_code.as_str(), "400018");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    details: UserDetails,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Identifier assigned by the repository.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Non-identifier fields.
    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Split the user into identifier and details.
    pub fn into_parts(self) -> (UserId, UserDetails) {
        (self.id, self.details)
    }
}
