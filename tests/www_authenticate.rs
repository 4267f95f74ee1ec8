use http_token_auth::{www_authenticate, Challenge, Coverage, Error};
use pretty_assertions::assert_eq;

#[test]
fn multiline_header() {
    let challenge = www_authenticate::parse(
        "
          Token realm=\"http://example.com\",
                coverage=\"base base+body-sha-256\",
                timestamp=\"137131200\"
        ",
    )
    .unwrap();
    assert_eq!(challenge.realm(), "http://example.com");
    assert_eq!(
        challenge.supported_coverages(),
        &[Coverage::Base, Coverage::BaseBodySha256]
    );
    assert_eq!(challenge.timestamp(), Some(137131200));
}

#[test]
fn round_trip() {
    let challenges = vec![
        Challenge::new("http://example.com", vec![Coverage::None], None).unwrap(),
        Challenge::new("r", vec![], Some(137131200)).unwrap(),
        Challenge::new(
            "r",
            vec![Coverage::BaseBodySha256, Coverage::Base],
            Some(137131200),
        )
        .unwrap(),
    ];
    for challenge in challenges {
        let header = www_authenticate::serialize(&challenge);
        let parsed = www_authenticate::parse(&header).unwrap();
        assert_eq!(parsed, challenge);
        assert_eq!(www_authenticate::serialize(&parsed), header);
    }
}

#[test]
fn default_coverage_serialized_explicitly() {
    let challenge =
        www_authenticate::parse("Token realm=\"r\", timestamp=\"137131200\"").unwrap();
    assert_eq!(
        www_authenticate::serialize(&challenge),
        "Token realm=\"r\", coverage=\"base\", timestamp=\"137131200\""
    );
}

#[test]
fn none_only_omits_timestamp() {
    let challenge = www_authenticate::parse(
        "Token realm=\"r\", coverage=\"none\", timestamp=\"137131200\"",
    )
    .unwrap();
    assert_eq!(challenge.timestamp(), None);
    assert_eq!(
        www_authenticate::serialize(&challenge),
        "Token realm=\"r\", coverage=\"none\""
    );
}

#[test]
fn realm_checked_before_coverage() {
    let err = www_authenticate::parse("Token coverage=\"invalid\"").unwrap_err();
    assert_eq!(err.kind(), &Error::MissingAttribute("realm"));
}

#[test]
fn duplicate_coverages_collapse() {
    let challenge = www_authenticate::parse(
        "Token realm=\"r\", coverage=\"base base  base+body-sha-256 base\", timestamp=\"1\"",
    )
    .unwrap();
    assert_eq!(
        challenge.supported_coverages(),
        &[Coverage::Base, Coverage::BaseBodySha256]
    );
}
