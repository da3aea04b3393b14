use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A flat record with arbitrary values, e.g. a student row from the Paris office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<(String, serde_json::Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Reads an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

// 只有 kata 會讀取的欄位才有型別；其餘欄位保留原始 JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Residence {
    #[serde(default)]
    pub country: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub lives: Option<Residence>,
    #[serde(default)]
    pub age: Option<serde_json::Value>,
}

impl Person {
    /// 居住城市；缺少 `lives` 或 `city` 時為 None
    pub fn city(&self) -> Option<&str> {
        self.lives.as_ref()?.city.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owner: Option<String>,
}

/// N×N grid; `None` marks an empty cell.
pub type Matrix<T> = Vec<Vec<Option<T>>>;
