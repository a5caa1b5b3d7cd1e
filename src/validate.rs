//! Structural and semantic validation of constructed URLs.
//!
//! Validation runs exactly at the finalization point of each
//! construction path: the end of [`Url::parse`] and of
//! [`UrlBuilder::build`]. It accumulates every violation found rather
//! than stopping at the first.
//!
//! [`Url::parse`]: crate::Url::parse
//! [`UrlBuilder::build`]: crate::UrlBuilder::build

use crate::error::{ValidationError, Violation};
use crate::Url;

pub(crate) fn validate(url: &Url) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_hostname(&mut violations, &url.host.hostname);
    if let Some(port) = url.host.port {
        if !(1..=65535).contains(&port) {
            violations.push(Violation::InvalidPort(port));
        }
    }
    if let Some(user_info) = &url.user_info {
        if user_info.user.trim().is_empty() {
            violations.push(Violation::BlankUser);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(url.clone(), violations))
    }
}

fn check_hostname(violations: &mut Vec<Violation>, hostname: &str) {
    if hostname.trim().is_empty() {
        violations.push(Violation::BlankHostname);
        return;
    }

    let length = hostname.chars().count();
    if length > 255 {
        violations.push(Violation::HostnameTooLong(length));
    }
    if !hostname.contains('.') {
        violations.push(Violation::HostnameWithoutDot(hostname.to_owned()));
    }
    for label in hostname.split('.') {
        // A blank label only skips the remaining checks for that label;
        // the other labels still get checked.
        if label.trim().is_empty() {
            violations.push(Violation::BlankLabel(hostname.to_owned()));
            continue;
        }
        if label.starts_with('-') {
            violations.push(Violation::LabelStartsWithDash(hostname.to_owned()));
        }
        if label.ends_with('-') {
            violations.push(Violation::LabelEndsWithDash(hostname.to_owned()));
        }
        for character in label.chars() {
            if !character.is_alphanumeric() && character != '-' {
                violations.push(Violation::IllegalLabelCharacter {
                    label: label.to_owned(),
                    character,
                });
            }
        }
    }
}
