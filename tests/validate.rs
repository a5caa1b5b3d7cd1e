use http_url::{ParseError, Url, Violation};

fn violations_of(input: &str) -> Vec<Violation> {
    match Url::parse(input).unwrap_err() {
        ParseError::Invalid(err) => err.violations().to_vec(),
        err => panic!("{input}: expected a validation error, got {err}"),
    }
}

#[test]
fn rejects_each_broken_rule_with_one_violation() {
    for input in [
        "http://example",
        "http://www.example..com",
        "http://www.sub.-example.com",
        "http://www.exam!ple.com",
        "http://www.exam ple.com",
        "http://www.sub.example-.com",
        "http://www.example.com:-1",
        "http://www.example.com:0",
        "http://www.example.com:65536",
    ] {
        assert_eq!(violations_of(input).len(), 1, "{input}");
    }
}

#[test]
fn reports_violation_kinds() {
    assert_eq!(
        violations_of("http://example"),
        [Violation::HostnameWithoutDot("example".to_owned())]
    );
    assert_eq!(
        violations_of("http://www.example..com"),
        [Violation::BlankLabel("www.example..com".to_owned())]
    );
    assert_eq!(
        violations_of("http://www.sub.-example.com"),
        [Violation::LabelStartsWithDash("www.sub.-example.com".to_owned())]
    );
    assert_eq!(
        violations_of("http://www.sub.example-.com"),
        [Violation::LabelEndsWithDash("www.sub.example-.com".to_owned())]
    );
    assert_eq!(
        violations_of("http://www.exam!ple.com"),
        [Violation::IllegalLabelCharacter {
            label: "exam!ple".to_owned(),
            character: '!',
        }]
    );
    assert_eq!(violations_of("http://www.example.com:0"), [Violation::InvalidPort(0)]);
    assert_eq!(
        violations_of("http://www.example.com:65536"),
        [Violation::InvalidPort(65536)]
    );
}

#[test]
fn rejects_too_long_hostname() {
    let hostname = format!("www.{}.com", "a".repeat(248));
    let violations = violations_of(&format!("http://{hostname}"));
    assert_eq!(violations, [Violation::HostnameTooLong(256)]);
}

#[test]
fn accepts_hostname_at_length_limit() {
    // 63-character labels, 255 total.
    let label = "a".repeat(63);
    let hostname = format!("{label}.{label}.{label}.{}", "a".repeat(63));
    assert_eq!(hostname.len(), 255);
    assert!(Url::parse(&format!("http://{hostname}")).is_ok());
}

#[test]
fn collects_every_violation() {
    let err = match Url::parse("http://www.exam!ple.com:-1").unwrap_err() {
        ParseError::Invalid(err) => err,
        err => panic!("expected a validation error, got {err}"),
    };
    assert_eq!(err.violations().len(), 2);
    assert_eq!(err.url().host.hostname, "www.exam!ple.com");
    assert_eq!(err.url().host.port, Some(-1));
}

#[test]
fn checks_other_labels_after_a_blank_one() {
    // The blank label only skips its own character checks.
    let violations = violations_of("http://www..exam!ple.com");
    assert_eq!(
        violations,
        [
            Violation::BlankLabel("www..exam!ple.com".to_owned()),
            Violation::IllegalLabelCharacter {
                label: "exam!ple".to_owned(),
                character: '!',
            },
        ]
    );
}

#[test]
fn rejects_blank_user_from_builder() {
    let err = Url::parse("https://example.com")
        .unwrap()
        .build_upon()
        .with_user(" ")
        .build()
        .unwrap_err();
    assert_eq!(err.violations(), [Violation::BlankUser]);
}

#[test]
fn rejects_blank_hostname_from_builder() {
    let err = Url::parse("https://example.com")
        .unwrap()
        .build_upon()
        .with_hostname("")
        .build()
        .unwrap_err();
    assert_eq!(err.violations(), [Violation::BlankHostname]);
}

#[test]
fn accepts_unicode_hostnames() {
    // Letters and digits are checked as Unicode, not ASCII.
    assert!(Url::parse("https://caf\u{e9}.com").is_ok());
}
