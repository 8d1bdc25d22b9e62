//! Notion pages and their property values.
//!
//! Every row of a Notion database is a page whose `properties` object maps
//! column names to typed values. The accessors here read the handful of
//! property types the job needs, and the builders produce the JSON the API
//! expects when writing them.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A page (database row) as returned by the API.
///
/// Only the id and the properties are kept; everything else in the API
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// The page id.
    pub id: String,
    /// Property values keyed by column name.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Page {
    /// Creates a page with no properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: Map::new(),
        }
    }

    /// Sets a property value, returning the page for chaining.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Returns the raw value of a property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Returns the text content of the first segment of a title property.
    pub fn title_text(&self, name: &str) -> Option<&str> {
        self.property(name)?
            .get("title")?
            .get(0)?
            .get("text")?
            .get("content")?
            .as_str()
    }

    /// Returns the cell of a number property.
    ///
    /// The outer `None` means the property or its `number` key is absent;
    /// `Some(None)` is a cell left empty.
    pub fn number_cell(&self, name: &str) -> Option<Option<Decimal>> {
        match self.property(name)?.get("number")? {
            Value::Number(n) => Some(
                Decimal::from_str(&n.to_string())
                    .ok()
                    .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
            ),
            Value::Null => Some(None),
            _ => None,
        }
    }

    /// Returns the value of a number property.
    ///
    /// `None` when the property is absent or the number is empty.
    pub fn number(&self, name: &str) -> Option<Decimal> {
        self.number_cell(name).flatten()
    }

    /// Returns the ids referenced by a relation property, in order.
    pub fn relation_ids(&self, name: &str) -> Option<Vec<String>> {
        let relation = self.property(name)?.get("relation")?.as_array()?;
        Some(
            relation
                .iter()
                .filter_map(|r| r.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
        )
    }

    /// Returns the raw `start` value of a date property.
    pub fn date_start(&self, name: &str) -> Option<&str> {
        self.property(name)?.get("date")?.get("start")?.as_str()
    }

    /// Returns the calendar date of a date property.
    ///
    /// Date-time values are truncated to their date.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.date_start(name).and_then(parse_calendar_date)
    }

    /// Returns the selected option of a status property.
    pub fn status_name(&self, name: &str) -> Option<&str> {
        self.property(name)?.get("status")?.get("name")?.as_str()
    }
}

/// Parses the leading `YYYY-MM-DD` of a Notion date or date-time string.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// Builds a title property value holding a single text segment.
pub fn title_value(content: &str) -> Value {
    json!({ "title": [{ "text": { "content": content } }] })
}

/// Builds a relation property value.
pub fn relation_value<I, S>(ids: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<Value> = ids
        .into_iter()
        .map(|id| json!({ "id": id.as_ref() }))
        .collect();
    json!({ "relation": ids })
}

/// Builds a date property value.
pub fn date_value(date: NaiveDate) -> Value {
    json!({ "date": { "start": date.to_string() } })
}

/// Builds a number property value, or an empty cell for `None`.
pub fn optional_number_value(amount: Option<Decimal>) -> Value {
    amount.map_or_else(|| json!({ "number": null }), number_value)
}

/// Builds a number property value.
///
/// Whole amounts are written as JSON integers so they round-trip exactly.
pub fn number_value(amount: Decimal) -> Value {
    let number = if amount.fract().is_zero() {
        amount.to_i64().map(Value::from)
    } else {
        None
    };
    let number = number.unwrap_or_else(|| amount.to_f64().map(Value::from).unwrap_or(Value::Null));
    json!({ "number": number })
}

/// Builds a status property value.
pub fn status_value(name: &str) -> Value {
    json!({ "status": { "name": name } })
}
