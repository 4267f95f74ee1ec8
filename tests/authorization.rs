use http_token_auth::{authorization, Coverage, Credentials, Error};
use pretty_assertions::assert_eq;

const FULL_HEADER: &str = "
            Token token=\"h480djs93hd8\",
                  coverage=\"base\",
                  nonce=\"dj83hs9s\",
                  auth=\"djosJKDKJSD8743243/jdk33klY=\",
                  timestamp=\"137131200\"
";

#[test]
fn multiline_header_matches_single_line() {
    let multiline = authorization::parse(FULL_HEADER).unwrap();
    let single = authorization::parse(
        "Token token=\"h480djs93hd8\", coverage=\"base\", nonce=\"dj83hs9s\", \
         auth=\"djosJKDKJSD8743243/jdk33klY=\", timestamp=\"137131200\"",
    )
    .unwrap();
    assert_eq!(multiline, single);
}

#[test]
fn token_only_round_trip() {
    for token in &["abc", "h480djs93hd8", "with spaces", "ünïcode/+="] {
        let creds = Credentials::new(*token).unwrap();
        let header = authorization::serialize(&creds);
        let parsed = authorization::parse(&header).unwrap();
        assert_eq!(parsed.token(), *token);
        assert_eq!(parsed.coverage(), Coverage::None);

        let reserialized = authorization::serialize(&parsed);
        assert_eq!(reserialized, header);
        for attr in &["coverage", "nonce", "auth", "timestamp"] {
            assert!(!reserialized.contains(attr), "{} in {}", attr, reserialized);
        }
    }
}

#[test]
fn covered_round_trip() {
    for coverage in &[Coverage::Base, Coverage::BaseBodySha256] {
        let creds = Credentials::builder("h480djs93hd8")
            .coverage(*coverage)
            .nonce("dj83hs9s")
            .auth("djosJKDKJSD8743243/jdk33klY=")
            .timestamp(137131200)
            .build()
            .unwrap();
        let once = authorization::parse(&authorization::serialize(&creds)).unwrap();
        let twice = authorization::parse(&authorization::serialize(&once)).unwrap();
        assert_eq!(once, creds);
        assert_eq!(twice, once);
    }
}

#[test]
fn parse_existing_header_round_trip() {
    let creds = authorization::parse(FULL_HEADER).unwrap();
    assert_eq!(
        authorization::serialize(&creds),
        "Token token=\"h480djs93hd8\", coverage=\"base\", nonce=\"dj83hs9s\", \
         auth=\"djosJKDKJSD8743243/jdk33klY=\", timestamp=\"137131200\""
    );
}

#[test]
fn reordered_and_duplicated_attributes() {
    let creds = authorization::parse(
        "Token timestamp=\"1\", auth=\"a\", nonce=\"n\", coverage=\"base\", token=\"first\", \
         token=\"second\"",
    )
    .unwrap();
    assert_eq!(creds.token(), "second");
    assert_eq!(
        authorization::serialize(&creds),
        "Token token=\"second\", coverage=\"base\", nonce=\"n\", auth=\"a\", timestamp=\"1\""
    );
}

#[test]
fn missing_fields_reported_in_order() {
    let cases = vec![
        ("Token coverage=\"base\", nonce=\"x\"", "token"),
        ("Token token=\"t\", coverage=\"base\"", "nonce"),
        ("Token token=\"t\", coverage=\"base\", nonce=\"n\"", "auth"),
        (
            "Token token=\"t\", coverage=\"base+body-sha-256\", nonce=\"n\", auth=\"a\"",
            "timestamp",
        ),
    ];
    for (header, missing) in cases {
        let err = authorization::parse(header).unwrap_err();
        assert_eq!(err.kind(), &Error::MissingAttribute(missing));
        assert!(err
            .to_string()
            .ends_with(&format!("\"{}\" is missing", missing)));
    }
}

#[test]
fn unknown_attributes_ignored() {
    let creds = authorization::parse("Token token=\"t\", realm=\"r\", ext=\"x\"").unwrap();
    assert_eq!(creds, Credentials::new("t").unwrap());
}

#[test]
fn credentials_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
    assert_send_sync::<http_token_auth::AuthorizationHeaderError>();
}
