/// Reads the `max-age` directive of a `cache-control` value, in milliseconds.
///
/// A missing header, a missing directive, or an unparsable value all yield 0.
pub fn parse_max_age(cache_control: Option<&str>) -> u64 {
    cache_control
        .into_iter()
        .flat_map(|value| value.split(','))
        .filter_map(|directive| {
            let (name, value) = directive.trim().split_once('=')?;
            if !name.trim().eq_ignore_ascii_case("max-age") {
                return None;
            }
            value.trim().trim_matches('"').parse::<u64>().ok()
        })
        .next()
        .map(|seconds| seconds.saturating_mul(1000))
        .unwrap_or(0)
}
