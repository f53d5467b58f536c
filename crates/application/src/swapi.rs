//! Raw wire shapes of the swapi.tech API.
//!
//! Detail endpoints wrap a single resource in `{"result": {...}}`;
//! unfiltered list endpoints use `{"results": [{uid, name}]}` while
//! filtered searches return full envelopes under `{"result": [...]}`.
//! Cross-references between resources are absolute URLs.

use holocron_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// `{uid, properties}` wrapper carried by every detail-style resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEnvelope<P> {
    pub uid: String,
    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub struct DetailResponse<P> {
    pub result: Option<ResourceEnvelope<P>>,
}

/// Both raw list shapes; whichever field the upstream populated wins.
#[derive(Debug, Deserialize)]
pub struct ListResponse<P> {
    pub results: Option<Vec<ListEntry>>,
    pub result: Option<Vec<ResourceEnvelope<P>>>,
}

/// Entry of the unfiltered list shape. People carry `name`, films `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    pub uid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterProperties {
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub films: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilmProperties {
    pub title: String,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub characters: Vec<String>,
}

/// Decode a cached/fetched JSON body into a typed wire shape.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, DomainError> {
    serde_json::from_value(body)
        .map_err(|e| DomainError::Internal(format!("undecodable upstream response: {e}")))
}

/// The upstream `uid` is opaque on the wire but numeric in practice.
pub fn parse_uid(uid: &str) -> Result<u32, DomainError> {
    uid.parse()
        .map_err(|_| DomainError::Internal(format!("upstream returned non-numeric uid: {uid}")))
}

/// Percent-encode a query value (RFC 3986 unreserved set kept verbatim).
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_query_value("Luke Skywalker"), "Luke%20Skywalker");
        assert_eq!(encode_query_value("R2-D2"), "R2-D2");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn parses_numeric_uid() {
        assert_eq!(parse_uid("14").unwrap(), 14);
        assert!(parse_uid("l4").is_err());
    }

    #[test]
    fn decodes_detail_with_missing_result() {
        let detail: DetailResponse<FilmProperties> = decode(serde_json::json!({})).unwrap();
        assert!(detail.result.is_none());

        let detail: DetailResponse<CharacterProperties> =
            decode(serde_json::json!({"result": null})).unwrap();
        assert!(detail.result.is_none());
    }

    #[test]
    fn decodes_list_with_missing_fields() {
        let list: ListResponse<CharacterProperties> =
            decode(serde_json::json!({"message": "ok"})).unwrap();
        assert!(list.results.is_none());
        assert!(list.result.is_none());
    }
}
