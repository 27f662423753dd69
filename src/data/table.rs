use std::{fmt, fs::File, io::{BufReader, Read}, marker::PhantomData, path::Path};

use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, de::{MapAccess, Visitor}};

use crate::types::JudgeRecord;

/// City shown when the caller does not name one.
pub const DEFAULT_CITY: &str = "San Francisco";

/// All judges sitting in one city, in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub name: String,
    pub judges: Vec<JudgeRecord>,
}

/// Result of looking up a city or judge by a user-supplied name.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    NotFound { requested: String },
}

impl<'a, T> Lookup<'a, T> {
    pub fn found(&self) -> Option<&'a T> {
        match self {
            Lookup::Found(value) => Some(*value),
            Lookup::NotFound { .. } => None,
        }
    }
}

/// Immutable city → judge → record table.
#[derive(Clone, Debug, Default)]
pub struct JudgeTable {
    cities: Vec<City>,
    by_name: AHashMap<String, usize>,
}

impl JudgeTable {
    /// Build a table from cities in display order. A later city with the same name
    /// replaces the earlier one.
    pub fn from_cities(cities: impl IntoIterator<Item = City>) -> Self {
        let mut table = Self::default();
        for city in cities {
            match table.by_name.get(&city.name) {
                Some(&i) => table.cities[i] = city,
                None => {
                    table.by_name.insert(city.name.clone(), table.cities.len());
                    table.cities.push(city);
                }
            }
        }
        table
    }

    /// Parse the `{ city: { judge: record } }` JSON layout.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: OrderedMap<OrderedMap<JudgeRecord>> = serde_json::from_str(json)
            .context("[data::table] Malformed judge table JSON")?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: OrderedMap<OrderedMap<JudgeRecord>> = serde_json::from_reader(reader)
            .context("[data::table] Malformed judge table JSON")?;
        Ok(Self::from_raw(raw))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[data::table] Failed to open {}", path.display()))?;
        let table = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("[data::table] Failed to read {}", path.display()))?;
        tracing::info!(path = %path.display(), cities = table.num_cities(), judges = table.num_judges(), "loaded judge table");
        Ok(table)
    }

    fn from_raw(raw: OrderedMap<OrderedMap<JudgeRecord>>) -> Self {
        Self::from_cities(raw.0.into_iter().map(|(city_name, judges)| {
            let judges = judges.0.into_iter()
                .map(|(judge_name, mut record)| {
                    // keys are authoritative when the row leaves a name out
                    if record.city_name.is_empty() { record.city_name = city_name.clone() }
                    if record.judge_name.is_empty() { record.judge_name = judge_name }
                    record
                })
                .collect();
            City { name: city_name, judges }
        }))
    }

    pub fn num_cities(&self) -> usize { self.cities.len() }

    pub fn num_judges(&self) -> usize { self.cities.iter().map(|c| c.judges.len()).sum() }

    /// City names in table order.
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|c| c.name.as_str())
    }

    pub fn cities(&self) -> &[City] { &self.cities }

    /// Look up a city by name. The name may be URL-encoded; an exact match wins over a
    /// case-insensitive one.
    pub fn find_city(&self, name: &str) -> Lookup<'_, City> {
        let decoded = decode_name(name);
        let key = decoded.trim();
        let hit = self.by_name.get(key).map(|&i| &self.cities[i]).or_else(|| {
            let wanted = key.to_lowercase();
            self.cities.iter().find(|c| c.name.to_lowercase() == wanted)
        });
        match hit {
            Some(city) => Lookup::Found(city),
            None => {
                tracing::debug!(requested = key, "city not found");
                Lookup::NotFound { requested: key.to_string() }
            }
        }
    }

    /// Like [`find_city`](Self::find_city), but a missing or blank name selects [`DEFAULT_CITY`].
    pub fn resolve_city(&self, name: Option<&str>) -> Lookup<'_, City> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => self.find_city(name),
            None => {
                tracing::debug!(city = DEFAULT_CITY, "no city requested, using default");
                self.find_city(DEFAULT_CITY)
            }
        }
    }

    /// Find a judge by name across all cities, ignoring case. First match in table order wins.
    pub fn find_judge(&self, name: &str) -> Lookup<'_, JudgeRecord> {
        let decoded = decode_name(name);
        let wanted = decoded.trim().to_lowercase();
        let hit = self.cities.iter()
            .flat_map(|c| c.judges.iter())
            .find(|j| j.judge_name.to_lowercase() == wanted);
        match hit {
            Some(judge) => Lookup::Found(judge),
            None => {
                tracing::debug!(requested = %decoded, "judge not found");
                Lookup::NotFound { requested: decoded.trim().to_string() }
            }
        }
    }
}

/// Route parameters arrive percent-encoded; undecodable input is used as-is.
fn decode_name(name: &str) -> String {
    urlencoding::decode(name).map_or_else(|_| name.to_string(), |s| s.into_owned())
}

/// JSON object kept in document order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "San Francisco": {
            "Zed Alpha": {"city": "San Francisco", "judge_name": "Zed Alpha", "denied_percentage": "60%", "granted_asylum_percentage": "30%", "granted_other_relief_percentage": "10%", "total_decisions": 200},
            "Ana Beta": {"denied_percentage": 20, "granted_asylum_percentage": 75, "granted_other_relief_percentage": 5, "total_decisions": 40}
        },
        "New York": {
            "José Núñez": {"city": "New York", "judge_name": "José Núñez", "denied_percentage": "50%", "granted_asylum_percentage": "45%", "granted_other_relief_percentage": "5%", "total_decisions": "321"}
        }
    }"#;

    #[test]
    fn keeps_document_order_and_fills_names() {
        let table = JudgeTable::from_json_str(TABLE).unwrap();
        assert_eq!(table.city_names().collect::<Vec<_>>(), ["San Francisco", "New York"]);
        assert_eq!(table.num_judges(), 3);

        let sf = table.find_city("San Francisco").found().unwrap();
        assert_eq!(sf.judges[0].judge_name, "Zed Alpha");
        assert_eq!(sf.judges[1].judge_name, "Ana Beta");
        assert_eq!(sf.judges[1].city_name, "San Francisco");
    }

    #[test]
    fn city_lookup() {
        let table = JudgeTable::from_json_str(TABLE).unwrap();
        assert!(table.find_city("New%20York").found().is_some());
        assert!(table.find_city("new york").found().is_some());
        assert_eq!(table.resolve_city(None).found().unwrap().name, DEFAULT_CITY);
        assert_eq!(table.resolve_city(Some("  ")).found().unwrap().name, DEFAULT_CITY);
        assert_eq!(
            table.find_city("Atlantis"),
            Lookup::NotFound { requested: "Atlantis".into() }
        );
    }

    #[test]
    fn judge_lookup_spans_cities() {
        let table = JudgeTable::from_json_str(TABLE).unwrap();
        let judge = table.find_judge("jos%C3%A9%20n%C3%BA%C3%B1ez").found().unwrap();
        assert_eq!(judge.city_name, "New York");
        assert_eq!(judge.total_decisions, 321);
        assert!(table.find_judge("ANA BETA").found().is_some());
        assert_eq!(table.find_judge("Nobody"), Lookup::NotFound { requested: "Nobody".into() });
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = JudgeTable::from_json_str("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("[data::table]"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.json");
        std::fs::write(&path, TABLE).unwrap();
        let table = JudgeTable::load(&path).unwrap();
        assert_eq!(table.num_cities(), 2);
        assert!(JudgeTable::load(&dir.path().join("missing.json")).is_err());
    }
}
