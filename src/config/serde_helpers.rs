//! Serde helpers for configuration deserialization

use crate::domain::model::PortKey;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// Deserializes a JSON object into its entries, in file order.
///
/// Unlike a map type, duplicate keys are kept so callers can report them.
pub fn deserialize_ordered_entries<'de, D, T>(
    deserializer: D,
) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

/// Deserializes an object keyed by port-number strings ("8080") into
/// `(port, value)` entries, in file order. Keys must be integer literals;
/// their range is checked later.
pub fn deserialize_port_entries<'de, D, T>(deserializer: D) -> Result<Vec<(PortKey, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserialize_ordered_entries::<D, T>(deserializer)?
        .into_iter()
        .map(|(k, v)| {
            PortKey::parse(&k)
                .map(|port| (port, v))
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid port key: {}", k)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(deserialize_with = "deserialize_ordered_entries")]
        items: Vec<(String, u32)>,
    }

    #[derive(Debug, Deserialize)]
    struct Ports {
        #[serde(deserialize_with = "deserialize_port_entries")]
        ports: Vec<(PortKey, Value)>,
    }

    #[test]
    fn test_ordered_entries_keep_file_order() {
        let parsed: Named = serde_json::from_str(r#"{"items": {"zeta": 1, "alpha": 2, "mid": 3}}"#).unwrap();
        let keys: Vec<&str> = parsed.items.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_ordered_entries_keep_duplicates() {
        let parsed: Named = serde_json::from_str(r#"{"items": {"api": 1, "api": 2}}"#).unwrap();
        assert_eq!(
            parsed.items,
            vec![("api".to_string(), 1), ("api".to_string(), 2)]
        );
    }

    #[test]
    fn test_ordered_entries_reject_non_object() {
        assert!(serde_json::from_str::<Named>(r#"{"items": ["api"]}"#).is_err());
    }

    #[test]
    fn test_port_entries_parse_keys() {
        let parsed: Ports =
            serde_json::from_str(r#"{"ports": {"8080": {"service": "api"}, "0": null, "70000": "x"}}"#)
                .unwrap();
        let ports: Vec<Option<i64>> = parsed.ports.iter().map(|(p, _)| p.number()).collect();
        assert_eq!(ports, vec![Some(8080), Some(0), Some(70000)]);
    }

    #[test]
    fn test_port_entries_accept_keys_wider_than_i64() {
        let parsed: Ports =
            serde_json::from_str(r#"{"ports": {"99999999999999999999": {}}}"#).unwrap();
        let (key, _) = &parsed.ports[0];
        assert_eq!(key.number(), None);
        assert_eq!(key.to_string(), "99999999999999999999");
    }

    #[test]
    fn test_port_entries_reject_non_numeric_key() {
        let err = serde_json::from_str::<Ports>(r#"{"ports": {"http": {}}}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid port key: http"));
    }
}
