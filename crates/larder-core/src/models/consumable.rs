use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LarderError;

/// What kind of thing can be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumableType {
    Food,
    Recipe,
}

impl ConsumableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for ConsumableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsumableType {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "recipe" => Ok(Self::Recipe),
            other => Err(LarderError::InvalidConsumableType(other.to_string())),
        }
    }
}

/// One catalog record: a food or a recipe the user can log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumable {
    pub id: String,

    #[serde(rename = "type")]
    pub ctype: ConsumableType,

    pub name: String,

    #[serde(default)]
    pub starred: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_consumed_at: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_count: Option<i64>,

    /// Overrides the default `/foods/{id}` or `/recipes/{id}` destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Consumable {
    pub fn new(id: impl Into<String>, ctype: ConsumableType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ctype,
            name: name.into(),
            starred: false,
            created_at: None,
            last_consumed_at: None,
            consumed_count: None,
            url: None,
        }
    }

    pub fn food(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, ConsumableType::Food, name)
    }

    pub fn recipe(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, ConsumableType::Recipe, name)
    }

    /// Destination of the "open" link for this consumable.
    pub fn url(&self) -> String {
        if let Some(ref url) = self.url {
            return url.clone();
        }
        match self.ctype {
            ConsumableType::Food => format!("/foods/{}", self.id),
            ConsumableType::Recipe => format!("/recipes/{}", self.id),
        }
    }

    /// Relevance score used to order the catalog. Higher sorts first.
    pub fn sorting_points(&self, now: DateTime<Utc>) -> i64 {
        let mut points: i64 = 0;
        if self.starred {
            points = points.saturating_add(100);
        }
        if let Some(last) = self.last_consumed_at {
            let days_ago = now.date_naive().signed_duration_since(last).num_days();
            points = points.saturating_add(100i64.saturating_sub(days_ago));
        }
        if let Some(count) = self.consumed_count {
            points = points.saturating_add(count.saturating_mul(10));
        }
        // Just created, keep it on top.
        if let Some(created) = self.created_at {
            if now.signed_duration_since(created).num_minutes() < 5 {
                points = points.saturating_add(1000);
            }
        }
        points
    }

    /// Compare by relevance at `now`, then by name.
    pub fn relevance_cmp(&self, other: &Self, now: DateTime<Utc>) -> Ordering {
        other
            .sorting_points(now)
            .cmp(&self.sorting_points(now))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Sort consumables so the most relevant ones come first.
pub fn sort_by_relevance(items: &mut [Consumable], now: DateTime<Utc>) {
    items.sort_by(|a, b| a.relevance_cmp(b, now));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_urls() {
        assert_eq!(Consumable::food("f1", "Milk").url(), "/foods/f1");
        assert_eq!(Consumable::recipe("r1", "Pancakes").url(), "/recipes/r1");

        let mut custom = Consumable::food("f2", "Eggs");
        custom.url = Some("/pantry/eggs".to_string());
        assert_eq!(custom.url(), "/pantry/eggs");
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("food".parse::<ConsumableType>().unwrap(), ConsumableType::Food);
        assert_eq!(" Recipe ".parse::<ConsumableType>().unwrap(), ConsumableType::Recipe);
        assert!(matches!(
            "drink".parse::<ConsumableType>(),
            Err(LarderError::InvalidConsumableType(t)) if t == "drink"
        ));
    }

    #[test]
    fn test_sorting_points() {
        let mut item = Consumable::food("1", "Milk");
        assert_eq!(item.sorting_points(now()), 0);

        item.starred = true;
        assert_eq!(item.sorting_points(now()), 100);

        item.last_consumed_at = Some(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(item.sorting_points(now()), 100 + 97);

        item.consumed_count = Some(4);
        assert_eq!(item.sorting_points(now()), 100 + 97 + 40);

        item.created_at = Some(now() - Duration::minutes(2));
        assert_eq!(item.sorting_points(now()), 100 + 97 + 40 + 1000);

        item.created_at = Some(now() - Duration::minutes(10));
        assert_eq!(item.sorting_points(now()), 100 + 97 + 40);
    }

    #[test]
    fn test_sorting_points_saturate() {
        let mut huge = Consumable::food("1", "Milk");
        huge.starred = true;
        huge.consumed_count = Some(i64::MAX);
        assert_eq!(huge.sorting_points(now()), i64::MAX);

        huge.consumed_count = Some(i64::MIN);
        huge.last_consumed_at = Some(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(huge.sorting_points(now()), i64::MIN + 100 + 97);
    }

    #[test]
    fn test_sort_by_relevance_ties_broken_by_name() {
        let mut starred = Consumable::food("3", "Zucchini");
        starred.starred = true;
        let mut items = vec![
            Consumable::food("1", "Bread"),
            starred,
            Consumable::recipe("2", "Apple Pie"),
        ];

        sort_by_relevance(&mut items, now());
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zucchini", "Apple Pie", "Bread"]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":"7","type":"recipe","name":"Soup"}"#;
        let item: Consumable = serde_json::from_str(json).unwrap();
        assert_eq!(item.ctype, ConsumableType::Recipe);
        assert!(!item.starred);
        assert!(item.consumed_count.is_none());
    }
}
