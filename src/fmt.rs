//! Display implementations and URI-string rendering.

use crate::encoding::{decode, encode, table};
use crate::{HttpProtocol, Url};
use core::fmt;

impl fmt::Display for HttpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the conventional URI string of the URL.
///
/// Each stored component is already decoded; it is run through the
/// decoder once more and re-encoded against its component table, so
/// reserved characters come out percent-escaped while the hostname is
/// emitted verbatim.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.protocol)?;
        if let Some(user_info) = &self.user_info {
            let user_info = user_info.to_component_string();
            write!(f, "{}@", encode(&decode(&user_info), &table::USERINFO))?;
        }
        f.write_str(&self.host.hostname)?;
        if let Some(port) = self.host.port {
            write!(f, ":{port}")?;
        }
        if let Some(path) = &self.path {
            let mut path = path.to_component_string();
            if !path.starts_with('/') {
                path.insert(0, '/');
            }
            f.write_str(&encode(&decode(&path), &table::PATH))?;
        }
        if let Some(query) = &self.query {
            let query = query.to_component_string();
            write!(f, "?{}", encode(&decode(&query), &table::QUERY))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", encode(&decode(fragment), &table::FRAGMENT))?;
        }
        Ok(())
    }
}
