//! The fluent mutation API over an existing [`Url`].
//!
//! [`Url`]: crate::Url

use crate::component::{Path, Query, QueryParameter, UserInfo};
use crate::error::{BuildError, ValidationError};
use crate::parser;
use crate::validate::validate;
use crate::{HttpProtocol, Url};

/// A fluent builder over a working copy of a [`Url`].
///
/// Every method takes the builder by value and returns it, so edits
/// chain. The working value is unvalidated until [`build`], which
/// re-runs the validator; intermediate states may be inconsistent. The
/// one eager check is [`with_password`], which fails immediately when no
/// user is set.
///
/// # Examples
///
/// ```
/// use http_url::Url;
///
/// let url = Url::parse("https://example.com/a/")
///     .unwrap()
///     .build_upon()
///     .without_trailing_slash()
///     .append_segment("b")
///     .append_query_parameter("k", Some("v"))
///     .build()
///     .unwrap();
///
/// assert_eq!(url.to_uri_string(), "https://example.com/a/b?k=v");
/// ```
///
/// [`build`]: UrlBuilder::build
/// [`with_password`]: UrlBuilder::with_password
#[derive(Clone, Debug)]
#[must_use]
pub struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    /// Creates a builder whose working value starts as `url`.
    pub fn new(url: Url) -> UrlBuilder {
        UrlBuilder { url }
    }

    /// Sets the protocol.
    pub fn with_protocol(mut self, protocol: HttpProtocol) -> Self {
        self.url.protocol = protocol;
        self
    }

    /// Sets the user, keeping an already-set password.
    pub fn with_user(mut self, user: &str) -> Self {
        match self.url.user_info.as_mut() {
            Some(user_info) => user_info.user = user.to_owned(),
            None => self.url.user_info = Some(UserInfo::new(user)),
        }
        self
    }

    /// Sets the password.
    ///
    /// # Errors
    ///
    /// Fails immediately with [`BuildError::PasswordWithoutUser`] if no
    /// user is currently set, independent of [`build`].
    ///
    /// [`build`]: UrlBuilder::build
    pub fn with_password(self, password: &str) -> Result<Self, BuildError> {
        self.set_password(Some(password.to_owned()))
    }

    /// Clears the password, keeping the user.
    ///
    /// # Errors
    ///
    /// Fails like [`with_password`] if no user is currently set.
    ///
    /// [`with_password`]: UrlBuilder::with_password
    pub fn remove_password(self) -> Result<Self, BuildError> {
        self.set_password(None)
    }

    fn set_password(mut self, password: Option<String>) -> Result<Self, BuildError> {
        match self.url.user_info.as_mut() {
            Some(user_info) => {
                user_info.password = password;
                Ok(self)
            }
            None => Err(BuildError::PasswordWithoutUser(self.url)),
        }
    }

    /// Removes the whole user info.
    pub fn remove_user_info(mut self) -> Self {
        self.url.user_info = None;
        self
    }

    /// Sets the hostname.
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.url.host.hostname = hostname.to_owned();
        self
    }

    /// Ensures the hostname starts with `www.`. No-op if it already does.
    pub fn include_www(mut self) -> Self {
        if !self.url.host.hostname.starts_with("www.") {
            self.url.host.hostname.insert_str(0, "www.");
        }
        self
    }

    /// Ensures the hostname does not start with `www.`. No-op if it
    /// already does not.
    pub fn exclude_www(mut self) -> Self {
        if self.url.host.hostname.starts_with("www.") {
            self.url.host.hostname.replace_range(.."www.".len(), "");
        }
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: i32) -> Self {
        self.url.host.port = Some(port);
        self
    }

    /// Removes the port.
    pub fn remove_port(mut self) -> Self {
        self.url.host.port = None;
        self
    }

    /// Sets the path from a `/`-joined string, ignoring one leading `/`.
    ///
    /// The text is split and percent-decoded by the same routine the
    /// parser uses.
    pub fn with_path(mut self, path: &str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.url.path = Some(parser::as_path(path));
        self
    }

    /// Drops a trailing slash from the path.
    ///
    /// A path with no segments is removed entirely; a blank final
    /// segment is dropped. Anything else is left alone.
    pub fn without_trailing_slash(mut self) -> Self {
        let empty = matches!(&self.url.path, Some(path) if path.segments.is_empty());
        if empty {
            self.url.path = None;
        } else if let Some(path) = self.url.path.as_mut() {
            if path.segments.last().map_or(false, |s| s.trim().is_empty()) {
                path.segments.pop();
            }
        }
        self
    }

    /// Appends one segment to the path, ignoring one leading `/` on the
    /// segment. An absent path becomes a fresh one first.
    pub fn append_segment(self, segment: &str) -> Self {
        let existing = self
            .url
            .path
            .as_ref()
            .map(Path::to_component_string)
            .unwrap_or_default();
        let segment = segment.strip_prefix('/').unwrap_or(segment);
        self.with_path(&format!("{existing}/{segment}"))
    }

    /// Removes the path.
    pub fn remove_path(mut self) -> Self {
        self.url.path = None;
        self
    }

    /// Sets the query from a `&`-joined string, split and decoded by the
    /// same routine the parser uses.
    pub fn with_query(mut self, query: &str) -> Self {
        self.url.query = Some(parser::as_query(query));
        self
    }

    /// Appends one query parameter, preserving order. An absent query
    /// becomes a fresh one first.
    pub fn append_query_parameter(mut self, name: &str, value: Option<&str>) -> Self {
        let query = self.url.query.get_or_insert_with(|| Query {
            parameters: Vec::new(),
        });
        query.parameters.push(QueryParameter {
            name: name.to_owned(),
            value: value.map(str::to_owned),
        });
        self
    }

    /// Removes every query parameter whose name matches exactly.
    pub fn remove_query_parameter(mut self, name: &str) -> Self {
        if let Some(query) = self.url.query.as_mut() {
            query.parameters.retain(|parameter| parameter.name != name);
        }
        self
    }

    /// Removes the query.
    pub fn remove_query(mut self) -> Self {
        self.url.query = None;
        self
    }

    /// Sets the fragment.
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.url.fragment = Some(fragment.to_owned());
        self
    }

    /// Removes the fragment.
    pub fn remove_fragment(mut self) -> Self {
        self.url.fragment = None;
        self
    }

    /// Validates the working value and returns it.
    ///
    /// # Errors
    ///
    /// Returns the aggregate [`ValidationError`] if the working value
    /// breaks any rule.
    pub fn build(self) -> Result<Url, ValidationError> {
        validate(&self.url)?;
        Ok(self.url)
    }

    /// Hands out the working value without validating. Canonical
    /// comparison normalizes through the builder and must stay total
    /// even for values that would no longer validate.
    pub(crate) fn into_unvalidated(self) -> Url {
        self.url
    }
}

impl From<Url> for UrlBuilder {
    fn from(url: Url) -> UrlBuilder {
        UrlBuilder::new(url)
    }
}
