use http_url::encoding::decode;
use http_url::Url;
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_is_identity_without_percent(s in "[^%]*") {
        prop_assert_eq!(decode(&s), s);
    }

    #[test]
    fn decode_restores_encoded_ascii(byte in 0u8..128) {
        let escaped = format!("%{byte:02X}");
        let decoded = decode(&escaped);
        prop_assert_eq!(decoded, (byte as char).to_string());
    }

    /// Rendering is stable through a parse round trip for any URL
    /// assembled through the builder.
    #[test]
    fn render_parse_render_round_trip(
        hostname in "[a-z]{1,12}\\.[a-z]{2,6}",
        www in any::<bool>(),
        port in prop::option::of(1..=65535i32),
        segments in prop::collection::vec("[a-zA-Z0-9 ]{1,8}", 0..4),
        parameters in prop::collection::vec(("[a-z]{1,6}", prop::option::of("[a-z0-9 ]{0,6}")), 0..3),
        fragment in prop::option::of("[a-z ]{0,8}"),
    ) {
        let mut builder = Url::parse(&hostname).unwrap().build_upon();
        if www {
            builder = builder.include_www();
        }
        if let Some(port) = port {
            builder = builder.with_port(port);
        }
        for segment in &segments {
            builder = builder.append_segment(segment);
        }
        for (name, value) in &parameters {
            builder = builder.append_query_parameter(name, value.as_deref());
        }
        if let Some(fragment) = &fragment {
            builder = builder.with_fragment(fragment);
        }
        let url = builder.build().unwrap();

        let rendered = url.to_uri_string();
        let reparsed = Url::parse(&rendered).unwrap();
        prop_assert_eq!(&reparsed.to_uri_string(), &rendered);
        prop_assert!(url.equivalent(&reparsed), "{} not equivalent to its reparse", rendered);
    }

    /// Canonical equality treats a trailing slash and the default port
    /// as insignificant for any parsed URL.
    #[test]
    fn trailing_slash_and_default_port_are_canonical(
        hostname in "[a-z]{1,12}\\.[a-z]{2,6}",
        segments in prop::collection::vec("[a-z0-9]{1,8}", 1..4),
    ) {
        let path = segments.join("/");
        let plain = Url::parse(&format!("https://{hostname}/{path}")).unwrap();
        let decorated = Url::parse(&format!("https://{hostname}:443/{path}/")).unwrap();
        prop_assert!(plain.equivalent(&decorated));
    }
}
