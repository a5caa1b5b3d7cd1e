//! Error types surfaced by parsing, validation and building.

use crate::parser::Stage;
use crate::Url;
use thiserror::Error;

/// An error occurred when parsing a URL string.
///
/// Every variant except [`Invalid`] describes malformed input text; the
/// offending fragment is carried in the message. [`Invalid`] wraps the
/// [`ValidationError`] of input that parsed cleanly but failed the final
/// validation gate, keeping the two kinds distinguishable from a single
/// [`Url::parse`] call.
///
/// [`Invalid`]: ParseError::Invalid
/// [`Url::parse`]: crate::Url::parse
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was blank.
    #[error("cannot parse blank url")]
    Blank,
    /// A `:` was found with nothing before it.
    #[error("missing protocol before ':' in {0:?}")]
    MissingProtocol(String),
    /// The protocol is not `http` or `https`.
    #[error("{0:?} protocol is not supported")]
    UnsupportedProtocol(String),
    /// An `@` was found with nothing before it.
    #[error("missing user info before '@' in {0:?}")]
    MissingUserInfo(String),
    /// The user info contains more than one `:`.
    #[error("malformed user info ({0})")]
    MalformedUserInfo(String),
    /// The user info has a `:` with no user before it.
    #[error("missing user in user info ({0})")]
    MissingUser(String),
    /// No host remained where one is required.
    #[error("missing host in {0:?}")]
    MissingHost(String),
    /// The host contains more than one `:`.
    #[error("malformed host ({0})")]
    MalformedHost(String),
    /// The host has a `:` with no hostname before it.
    #[error("missing hostname in host ({0})")]
    MissingHostname(String),
    /// The port text does not convert to an integer.
    #[error("malformed port number ({0})")]
    MalformedPort(String),
    /// The stage machine did not reach its terminal stage. Guards
    /// against a stage being skipped incorrectly; not reachable from
    /// any input the current stages accept.
    #[error("parsed {input:?} and stopped at the {stage:?} stage")]
    Incomplete {
        /// The full input text.
        input: String,
        /// The stage the machine was stuck at.
        stage: Stage,
    },
    /// The input parsed cleanly but the resulting URL failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A structurally well-formed but semantically invalid URL.
///
/// Carries every violation found, never just the first, plus the
/// offending [`Url`], so callers can report all problems at once.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} in {:?}", fmt_violations(.violations), .url)]
pub struct ValidationError {
    url: Url,
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(url: Url, violations: Vec<Violation>) -> ValidationError {
        ValidationError { url, violations }
    }

    /// Returns the URL that failed validation.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns all violations found, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn fmt_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single rule broken by an otherwise well-formed URL.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    /// The hostname is blank.
    #[error("blank hostname")]
    BlankHostname,
    /// The hostname exceeds 255 characters.
    #[error("hostname is too long ({0} > 255)")]
    HostnameTooLong(usize),
    /// The hostname contains no `.`.
    #[error("hostname ({0}) without dot")]
    HostnameWithoutDot(String),
    /// A dot-separated label of the hostname is blank.
    #[error("blank label in hostname ({0})")]
    BlankLabel(String),
    /// A label starts with `-`.
    #[error("label ({0}) starts with -")]
    LabelStartsWithDash(String),
    /// A label ends with `-`.
    #[error("label ({0}) ends with -")]
    LabelEndsWithDash(String),
    /// A label contains a character outside letters, digits and `-`.
    #[error("illegal label ({label}) character ({character})")]
    IllegalLabelCharacter {
        /// The offending label.
        label: String,
        /// The offending character.
        character: char,
    },
    /// The port is outside `1..=65535`.
    #[error("invalid port: {0}")]
    InvalidPort(i32),
    /// The user of the user info is blank.
    #[error("blank user in user info")]
    BlankUser,
}

/// An operation required a precondition on the builder's working value
/// that does not hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A password was set while no user is set. A password without a
    /// user is structurally meaningless, so this fails eagerly instead
    /// of waiting for [`build`].
    ///
    /// [`build`]: crate::UrlBuilder::build
    #[error("cannot set password without user: {0:?}")]
    PasswordWithoutUser(Url),
}
