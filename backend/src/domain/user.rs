//! User data model: identifiers, roles and the validated creation payload.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised while turning untyped input into user values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Identifier is not a non-negative integer.
    #[error("user id must be a non-negative integer, got {raw:?}")]
    InvalidId { raw: String },
    /// User type is neither a known number nor a known name.
    #[error("unknown user type {raw:?}")]
    UnknownUserType { raw: String },
    /// A required field was absent from the payload.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    /// A required text field was present but blank.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    /// Email does not look like `local@domain`.
    #[error("email {value:?} is not a valid address")]
    InvalidEmail { value: String },
}

/// Sequential numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw numeric identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse an identifier supplied as an untyped string (path or header).
    ///
    /// `"null"`, `"undefined"` and any non-numeric text are rejected.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserValidationError::InvalidId {
                raw: raw.to_owned(),
            });
        }
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId {
                raw: raw.to_owned(),
            })
    }

    /// Underlying integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role of a user in the exam system. Serialised as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum UserType {
    /// Takes exams and writes peer reviews.
    Student,
    /// Owns exams.
    Teacher,
}

impl UserType {
    /// Wire representation.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Student => 0,
            Self::Teacher => 1,
        }
    }
}

impl From<UserType> for u8 {
    fn from(value: UserType) -> Self {
        value.as_u8()
    }
}

impl TryFrom<u8> for UserType {
    type Error = UserValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Student),
            1 => Ok(Self::Teacher),
            other => Err(UserValidationError::UnknownUserType {
                raw: other.to_string(),
            }),
        }
    }
}

impl FromStr for UserType {
    type Err = UserValidationError;

    /// Accepts the numeric form (`"1"`) or the name in any case (`"TEACHER"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UserValidationError::UnknownUserType { raw: s.to_owned() };
        if let Ok(number) = s.parse::<u8>() {
            return Self::try_from(number).map_err(|_| unknown());
        }
        if s.eq_ignore_ascii_case("student") {
            Ok(Self::Student)
        } else if s.eq_ignore_ascii_case("teacher") {
            Ok(Self::Teacher)
        } else {
            Err(unknown())
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("STUDENT"),
            Self::Teacher => f.write_str("TEACHER"),
        }
    }
}

/// Registered user.
///
/// Serialises to exactly `id, firstname, lastname, email, user_type,
/// identification_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    firstname: String,
    lastname: String,
    email: String,
    user_type: UserType,
    identification_number: u64,
}

impl User {
    /// Attach an identifier to a validated payload.
    #[must_use]
    pub fn new(id: UserId, user: NewUser) -> Self {
        let NewUser {
            firstname,
            lastname,
            email,
            user_type,
            identification_number,
        } = user;
        Self {
            id,
            firstname,
            lastname,
            email,
            user_type,
            identification_number,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    #[must_use]
    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    /// Family name.
    #[must_use]
    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Role stored for this user.
    #[must_use]
    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    /// Matriculation or staff number.
    #[must_use]
    pub fn identification_number(&self) -> u64 {
        self.identification_number
    }
}

/// Untyped creation payload as received from clients.
///
/// Every field is optional so that missing fields surface as
/// [`UserValidationError::MissingField`] instead of a parser error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserDraft {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<UserType>,
    pub identification_number: Option<u64>,
}

/// Validated user payload without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    firstname: String,
    lastname: String,
    email: String,
    user_type: UserType,
    identification_number: u64,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, UserValidationError> {
    let value = value.ok_or(UserValidationError::MissingField { field })?;
    if value.trim().is_empty() {
        return Err(UserValidationError::BlankField { field });
    }
    Ok(value)
}

impl NewUser {
    /// Build a payload from typed parts, validating text fields.
    pub fn try_new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        user_type: UserType,
        identification_number: u64,
    ) -> Result<Self, UserValidationError> {
        Self::try_from(UserDraft {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            email: Some(email.into()),
            user_type: Some(user_type),
            identification_number: Some(identification_number),
        })
    }

    /// Role requested for the new user.
    #[must_use]
    pub fn user_type(&self) -> UserType {
        self.user_type
    }
}

impl TryFrom<UserDraft> for NewUser {
    type Error = UserValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        let firstname = required_text(draft.firstname, "firstname")?;
        let lastname = required_text(draft.lastname, "lastname")?;
        let email = required_text(draft.email, "email")?;
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail { value: email });
        }
        let user_type = draft
            .user_type
            .ok_or(UserValidationError::MissingField { field: "user_type" })?;
        let identification_number = draft
            .identification_number
            .ok_or(UserValidationError::MissingField {
                field: "identification_number",
            })?;
        Ok(Self {
            firstname,
            lastname,
            email,
            user_type,
            identification_number,
        })
    }
}
