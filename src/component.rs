//! Components of a URL.

/// The protocol of a [`Url`], restricted to HTTP and HTTPS.
///
/// Each protocol carries a well-known default port, consulted by
/// [`Url::equivalent`] when an explicit port is absent.
///
/// [`Url`]: crate::Url
/// [`Url::equivalent`]: crate::Url::equivalent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpProtocol {
    /// The `http` protocol, default port 80.
    Http,
    /// The `https` protocol, default port 443.
    Https,
}

impl HttpProtocol {
    /// Returns the well-known default port of the protocol.
    #[must_use]
    pub fn default_port(self) -> i32 {
        match self {
            HttpProtocol::Http => 80,
            HttpProtocol::Https => 443,
        }
    }

    /// Returns the lowercase scheme name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpProtocol::Http => "http",
            HttpProtocol::Https => "https",
        }
    }
}

/// The `user[:password]` component preceding `@` in a URL authority.
///
/// Both fields hold percent-decoded text. Presence of a password is
/// distinct from absence: `user:` and `user` render differently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserInfo {
    /// The user. Must not be blank for the `Url` to validate.
    pub user: String,
    /// The password, if any.
    pub password: Option<String>,
}

impl UserInfo {
    /// Creates a `UserInfo` without a password.
    pub fn new(user: impl Into<String>) -> UserInfo {
        UserInfo {
            user: user.into(),
            password: None,
        }
    }

    /// Returns the decoded `user:password` component string,
    /// or `user:` when no password is set.
    #[must_use]
    pub fn to_component_string(&self) -> String {
        match &self.password {
            Some(password) => format!("{}:{}", self.user, password),
            None => format!("{}:", self.user),
        }
    }
}

/// The hostname and optional port of a URL authority.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Host {
    /// The hostname. Never percent-escaped by this library.
    pub hostname: String,
    /// The port. Range is checked at validation, not construction,
    /// so any parsed integer fits here.
    pub port: Option<i32>,
}

impl Host {
    /// Creates a `Host` without a port.
    pub fn new(hostname: impl Into<String>) -> Host {
        Host {
            hostname: hostname.into(),
            port: None,
        }
    }
}

/// An ordered sequence of decoded path segments.
///
/// An empty sequence is distinct from an absent path: `Some(Path { segments: vec![] })`
/// renders as a lone trailing `/` while `None` renders nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    /// The decoded segments, in order. Segments may repeat or be blank;
    /// a blank final segment is the artifact of a trailing slash.
    pub segments: Vec<String>,
}

impl Path {
    /// Returns the decoded segments joined with `/`, without a leading slash.
    #[must_use]
    pub fn to_component_string(&self) -> String {
        self.segments.join("/")
    }
}

/// An ordered sequence of query parameters.
///
/// Order is preserved and significant; this library never sorts or
/// deduplicates parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    /// The parameters, in order.
    pub parameters: Vec<QueryParameter>,
}

impl Query {
    /// Returns the decoded parameters joined with `&`.
    #[must_use]
    pub fn to_component_string(&self) -> String {
        self.parameters
            .iter()
            .map(QueryParameter::to_component_string)
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A single `name[=value]` query parameter, decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryParameter {
    /// The decoded parameter name.
    pub name: String,
    /// The decoded parameter value; `None` for a bare `name` parameter.
    pub value: Option<String>,
}

impl QueryParameter {
    /// Creates a parameter without a value.
    pub fn new(name: impl Into<String>) -> QueryParameter {
        QueryParameter {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a parameter with a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> QueryParameter {
        QueryParameter {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Returns `name=value`, or just the name when no value is set.
    #[must_use]
    pub fn to_component_string(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={}", self.name, value),
            None => self.name.clone(),
        }
    }
}
