/// Split an href into (`before_query`, `query_without_question_mark`, `fragment_with_hash`).
/// The fragment starts at the first '#'; the query is whatever follows the first '?' before it.
/// Optimization: Uses SIMD-accelerated memchr for the delimiter search
pub fn split_href(href: &str) -> (&str, Option<&str>, &str) {
    let (rest, fragment) = memchr::memchr(b'#', href.as_bytes())
        .map_or((href, ""), |pos| (&href[..pos], &href[pos..]));

    match memchr::memchr(b'?', rest.as_bytes()) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..]), fragment),
        None => (rest, None, fragment),
    }
}
