use url::Url;

const REDACTED: &str = "<redacted>";

/// Returns a copy of `url` whose `apikey` query value is masked, suitable for logging.
pub fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" { REDACTED.to_string() } else { value.into_owned() };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted
}
