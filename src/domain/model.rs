use crate::config::serde_helpers::{deserialize_ordered_entries, deserialize_port_entries};
use serde::Deserialize;
use std::fmt;

/// `services.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDocument {
    #[serde(deserialize_with = "deserialize_ordered_entries")]
    pub services: Vec<(String, ServiceDefinition)>,
}

/// Only `dependencies` is read; other service metadata is ignored.
/// A missing list means no dependencies, an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDefinition {
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// `profiles.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDocument {
    #[serde(deserialize_with = "deserialize_ordered_entries")]
    pub profiles: Vec<(String, ProfileDefinition)>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDefinition {
    pub services: Vec<String>,
}

/// `ports.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDocument {
    pub port_range: PortRange,
    #[serde(deserialize_with = "deserialize_port_entries")]
    pub ports: Vec<(PortKey, serde_json::Value)>,
    pub check_ports: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PortRange {
    pub start: i64,
    pub end: i64,
}

/// A key of the `ports` object: any integer literal, however large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortKey {
    raw: String,
    number: Option<i64>,
    normalized: String,
}

impl PortKey {
    /// Returns `None` unless `raw` is an optionally signed run of digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let number = trimmed.parse::<i64>().ok();
        let normalized = match number {
            Some(n) => n.to_string(),
            // Too wide for i64, so it has a non-zero leading digit after trimming.
            None => format!("{}{}", sign, digits.trim_start_matches('0')),
        };

        Some(Self {
            raw: raw.to_string(),
            number,
            normalized,
        })
    }

    /// The key exactly as written in the file.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `None` when the value does not fit in an `i64`.
    pub fn number(&self) -> Option<i64> {
        self.number
    }

    pub fn is_within(&self, min: i64, max: i64) -> bool {
        self.number.is_some_and(|n| (min..=max).contains(&n))
    }
}

impl fmt::Display for PortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl ServiceDocument {
    /// Service names in file order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ProfileDocument {
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl PortDocument {
    /// Number of distinct port keys; a repeated key counts once.
    pub fn distinct_port_count(&self) -> usize {
        self.ports
            .iter()
            .map(|(key, _)| key.raw())
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}
