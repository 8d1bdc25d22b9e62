//! Database query filters.
//!
//! [`QueryFilter`] mirrors the JSON filter objects of the database query
//! endpoint. Filters can also be evaluated against a [`Page`] locally, which
//! is what the in-memory workspace uses to answer queries.

use serde::{Deserialize, Serialize};

use super::page::{Page, parse_calendar_date};

/// A single property condition.
///
/// Serialized externally tagged by property type, e.g.
/// `{"status": {"equals": "Accepted"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// A status property equals the named option.
    Status {
        /// The option name.
        equals: String,
    },
    /// A date property falls on the given date.
    Date {
        /// The date as `YYYY-MM-DD`.
        equals: String,
    },
    /// A relation property references the given page.
    Relation {
        /// The referenced page id.
        contains: String,
    },
}

/// A condition on one named property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// The property name.
    pub property: String,
    /// The condition applied to it.
    #[serde(flatten)]
    pub condition: Condition,
}

/// A database query filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryFilter {
    /// Every nested filter must match.
    And {
        /// The nested filters.
        and: Vec<QueryFilter>,
    },
    /// At least one nested filter must match.
    Or {
        /// The nested filters.
        or: Vec<QueryFilter>,
    },
    /// A condition on one property.
    Property(PropertyFilter),
}

impl QueryFilter {
    /// Matches pages whose status property equals `option`.
    pub fn status_equals(property: impl Into<String>, option: impl Into<String>) -> Self {
        Self::Property(PropertyFilter {
            property: property.into(),
            condition: Condition::Status {
                equals: option.into(),
            },
        })
    }

    /// Matches pages whose date property falls on `date`.
    pub fn date_equals(property: impl Into<String>, date: impl Into<String>) -> Self {
        Self::Property(PropertyFilter {
            property: property.into(),
            condition: Condition::Date {
                equals: date.into(),
            },
        })
    }

    /// Matches pages whose relation property references `page_id`.
    pub fn relation_contains(property: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self::Property(PropertyFilter {
            property: property.into(),
            condition: Condition::Relation {
                contains: page_id.into(),
            },
        })
    }

    /// Evaluates the filter against a page.
    ///
    /// An empty `or` matches nothing and an empty `and` matches everything.
    pub fn matches(&self, page: &Page) -> bool {
        match self {
            Self::And { and } => and.iter().all(|f| f.matches(page)),
            Self::Or { or } => or.iter().any(|f| f.matches(page)),
            Self::Property(PropertyFilter {
                property,
                condition,
            }) => match condition {
                Condition::Status { equals } => page.status_name(property) == Some(equals.as_str()),
                Condition::Date { equals } => match (page.date(property), parse_calendar_date(equals)) {
                    (Some(actual), Some(expected)) => actual == expected,
                    _ => false,
                },
                Condition::Relation { contains } => page
                    .relation_ids(property)
                    .is_some_and(|ids| ids.iter().any(|id| id == contains)),
            },
        }
    }
}
