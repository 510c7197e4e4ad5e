use crate::constants::SCHEME_PREFIXES;

/// Strip a leading `http://`, `https://`, `http:` or `https:` so the value
/// matches the bare-domain form the status service expects.
pub fn normalize_domain(url_str: &str) -> String {
    for prefix in SCHEME_PREFIXES {
        if let Some(rest) = url_str.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    url_str.to_string()
}
