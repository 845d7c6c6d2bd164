//! `application/x-www-form-urlencoded` query string decoding.

use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Pairs read from one query string; the rest are ignored.
pub const MAX_QUERY_PAIRS: usize = 1000;

/// Parse a query string (without the leading `?`) into a JSON map.
///
/// Pairs are separated by `&` and split on the first `=`. A key without `=`
/// maps to an empty string. A key that appears more than once maps to an
/// array holding every value in order. Only the first [`MAX_QUERY_PAIRS`]
/// pairs are read.
pub fn parse_query(query: &str) -> Map<String, Value> {
    let mut params = Map::new();

    for pair in query.split('&').filter(|s| !s.is_empty()).take(MAX_QUERY_PAIRS) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = Value::String(decode_component(value));

        match params.entry(decode_component(key)) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(values) => values.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    params
}

/// Decode `+` as space and percent escapes; malformed escapes stay as they are.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
