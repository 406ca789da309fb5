use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Lenient query string access: unparsable values read as absent instead
/// of rejecting the whole request.
#[derive(Debug, Default)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse::<T>().ok())
    }

    /// 1-based page number, limited to what TMDB serves.
    pub fn page(&self) -> u32 {
        self.parse::<u32>("page").unwrap_or(1).clamp(1, 500)
    }
}
