//! The stage-ordered, single-pass URL parser.

use crate::component::{Host, HttpProtocol, Path, Query, QueryParameter, UserInfo};
use crate::encoding::decode;
use crate::error::ParseError;
use crate::validate::validate;
use crate::Url;

/// A stage of the parser's state machine.
///
/// Stages are strictly ordered; each one consumes a prefix of the
/// remaining input and hands over to a later stage. Parsing must end at
/// [`Done`], otherwise [`ParseError::Incomplete`] is returned.
///
/// [`Done`]: Stage::Done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Scanning for the `protocol:` prefix.
    Protocol,
    /// Scanning for the `user[:password]@` component.
    UserInfo,
    /// Scanning for the `host[:port]` component.
    Host,
    /// Scanning for path segments.
    Path,
    /// Scanning for query parameters.
    Query,
    /// Scanning for the fragment.
    Fragment,
    /// All input consumed.
    Done,
}

/// Parses `input` into a validated [`Url`], falling back to
/// `default_protocol` for unprotocolled input.
pub(crate) fn parse(input: &str, default_protocol: HttpProtocol) -> Result<Url, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Blank);
    }

    let mut parser = Parser {
        input,
        rest: input,
        stage: Stage::Protocol,
    };

    let url = Url {
        protocol: parser.protocol()?.unwrap_or(default_protocol),
        user_info: parser.user_info()?,
        host: parser.host()?,
        path: parser.path(),
        query: parser.query(),
        fragment: parser.fragment(),
    };

    if parser.stage != Stage::Done {
        return Err(ParseError::Incomplete {
            input: input.to_owned(),
            stage: parser.stage,
        });
    }

    validate(&url)?;
    Ok(url)
}

/// The scanner: the full input for diagnostics, the unconsumed suffix,
/// and the stage about to run.
struct Parser<'a> {
    input: &'a str,
    rest: &'a str,
    stage: Stage,
}

impl<'a> Parser<'a> {
    fn protocol(&mut self) -> Result<Option<HttpProtocol>, ParseError> {
        let protocol = self.take_delimited(':');
        if matches!(protocol, Some(p) if p.trim().is_empty()) {
            return Err(ParseError::MissingProtocol(self.input.to_owned()));
        }
        // Consumed even when no protocol was found, so that
        // scheme-relative input like "//example.com" parses.
        if let Some(rest) = self.rest.strip_prefix("//") {
            self.rest = rest;
        }
        self.stage = Stage::UserInfo;
        protocol.map(as_protocol).transpose()
    }

    fn user_info(&mut self) -> Result<Option<UserInfo>, ParseError> {
        let user_info = self.take_delimited('@');
        if matches!(user_info, Some(u) if u.trim().is_empty()) {
            return Err(ParseError::MissingUserInfo(self.input.to_owned()));
        }
        self.stage = Stage::Host;
        user_info.map(as_user_info).transpose()
    }

    fn host(&mut self) -> Result<Host, ParseError> {
        let host = if let Some(host) = self.take_delimited('/') {
            self.stage = Stage::Path;
            host
        } else if let Some(host) = self.take_delimited('?') {
            self.stage = Stage::Query;
            host
        } else if let Some(host) = self.take_delimited('#') {
            self.stage = Stage::Fragment;
            host
        } else {
            let rest = self.take_rest();
            if rest.trim().is_empty() {
                return Err(ParseError::MissingHost(self.input.to_owned()));
            }
            rest
        };
        as_host(host)
    }

    fn path(&mut self) -> Option<Path> {
        if self.stage != Stage::Path {
            return None;
        }
        let path = if let Some(path) = self.take_delimited('?') {
            self.stage = Stage::Query;
            path
        } else if let Some(path) = self.take_delimited('#') {
            self.stage = Stage::Fragment;
            path
        } else {
            self.take_rest()
        };
        Some(as_path(path))
    }

    fn query(&mut self) -> Option<Query> {
        if self.stage != Stage::Query {
            return None;
        }
        // The '?' is still unconsumed when the path was blank.
        if let Some(rest) = self.rest.strip_prefix('?') {
            self.rest = rest;
        }
        let query = if let Some(query) = self.take_delimited('#') {
            self.stage = Stage::Fragment;
            query
        } else {
            self.take_rest()
        };
        Some(as_query(query))
    }

    fn fragment(&mut self) -> Option<String> {
        if self.stage != Stage::Fragment {
            return None;
        }
        // The '#' is still unconsumed when the query was blank.
        if let Some(rest) = self.rest.strip_prefix('#') {
            self.rest = rest;
        }
        Some(decode(self.take_rest()))
    }

    /// Returns the text before the first occurrence of `delimiter` in
    /// the unconsumed suffix, or `None` if the delimiter is absent.
    ///
    /// The suffix advances past the delimiter only when the candidate is
    /// non-blank. A blank-but-found candidate is returned with the
    /// suffix unmoved: the protocol and user-info stages turn it into a
    /// hard error, while the host and path stages use it as the
    /// empty-component shortcut and leave the stray delimiter for the
    /// next stage to consume.
    fn take_delimited(&mut self, delimiter: char) -> Option<&'a str> {
        let end = self.rest.find(delimiter)?;
        let value = &self.rest[..end];
        if !value.trim().is_empty() {
            self.rest = &self.rest[end + delimiter.len_utf8()..];
        }
        Some(value)
    }

    fn take_rest(&mut self) -> &'a str {
        let rest = self.rest;
        self.rest = "";
        self.stage = Stage::Done;
        rest
    }
}

fn as_protocol(protocol: &str) -> Result<HttpProtocol, ParseError> {
    if protocol.eq_ignore_ascii_case("http") {
        return Ok(HttpProtocol::Http);
    }
    if protocol.eq_ignore_ascii_case("https") {
        return Ok(HttpProtocol::Https);
    }
    Err(ParseError::UnsupportedProtocol(protocol.to_owned()))
}

fn as_user_info(user_info: &str) -> Result<UserInfo, ParseError> {
    let parts: Vec<&str> = user_info.split(':').collect();
    if parts.len() > 2 {
        return Err(ParseError::MalformedUserInfo(user_info.to_owned()));
    }
    if parts[0].trim().is_empty() {
        return Err(ParseError::MissingUser(user_info.to_owned()));
    }
    Ok(UserInfo {
        user: decode(parts[0]),
        password: parts.get(1).map(|password| decode(password)),
    })
}

fn as_host(host: &str) -> Result<Host, ParseError> {
    let parts: Vec<&str> = host.split(':').collect();
    if parts.len() > 2 {
        return Err(ParseError::MalformedHost(host.to_owned()));
    }
    if parts[0].trim().is_empty() {
        return Err(ParseError::MissingHostname(host.to_owned()));
    }
    Ok(Host {
        hostname: parts[0].to_owned(),
        port: parts.get(1).map(|port| as_port(port)).transpose()?,
    })
}

fn as_port(port: &str) -> Result<i32, ParseError> {
    port.parse()
        .map_err(|_| ParseError::MalformedPort(port.to_owned()))
}

/// Splits `path` on `/` and decodes each segment. Blank text is an
/// empty segment list. Shared with [`UrlBuilder::with_path`] so that
/// building and parsing cannot drift.
///
/// [`UrlBuilder::with_path`]: crate::UrlBuilder::with_path
pub(crate) fn as_path(path: &str) -> Path {
    if path.trim().is_empty() {
        return Path {
            segments: Vec::new(),
        };
    }
    Path {
        segments: path.split('/').map(decode).collect(),
    }
}

/// Splits `query` on `&`, then each parameter once on `=`, decoding
/// names and values. Blank text is an empty parameter list. Shared with
/// [`UrlBuilder::with_query`].
///
/// [`UrlBuilder::with_query`]: crate::UrlBuilder::with_query
pub(crate) fn as_query(query: &str) -> Query {
    if query.trim().is_empty() {
        return Query {
            parameters: Vec::new(),
        };
    }
    Query {
        parameters: query.split('&').map(as_query_parameter).collect(),
    }
}

fn as_query_parameter(parameter: &str) -> QueryParameter {
    match parameter.split_once('=') {
        Some((name, value)) => QueryParameter {
            name: decode(name),
            // Anything after a second '=' is dropped.
            value: Some(decode(value.split('=').next().unwrap_or_default())),
        },
        None => QueryParameter {
            name: decode(parameter),
            value: None,
        },
    }
}
