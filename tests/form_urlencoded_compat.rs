#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Cross-checks against the `url` crate's `form_urlencoded` implementation
use query_params::{QueryParams, SpaceEncoding};
use url::form_urlencoded;

const INPUTS: &[&str] = &[
    "",
    "a=1&b=2",
    "key=value+with+spaces",
    "k%26=v%3D&x=%2B%20",
    "&&a=&=b&c",
    "name=Fran%C3%A7ois&emoji=%F0%9F%A6%80",
    "q=*-._~!'()",
    "broken=%zz%4",
];

fn reference_pairs(input: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(input.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn reference_serialize(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[test]
fn test_parse_matches_form_urlencoded() {
    for input in INPUTS {
        let ours: Vec<(String, String)> = QueryParams::parse(input)
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(ours, reference_pairs(input), "input: {input:?}");
    }
}

#[test]
fn test_serialize_matches_form_urlencoded() {
    for input in INPUTS {
        let pairs = reference_pairs(input);
        let mut query = QueryParams::new();
        query.add_param_list(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        assert_eq!(
            query.serialized_query(),
            reference_serialize(&pairs),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_percent_space_differs_only_in_spaces() {
    let mut query = QueryParams::new().with_space_encoding(SpaceEncoding::Percent);
    let ours = query.add_param("a b", "c d+e");
    let reference = reference_serialize(&[("a b".to_string(), "c d+e".to_string())]);
    assert_eq!(ours, reference.replace('+', "%20"));
}
