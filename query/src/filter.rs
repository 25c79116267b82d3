use serde::{Deserialize, Serialize};

use crate::{field::Searchable, QueryError};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

/// Free-text search over an ordered list of fields.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFilter<F> {
    pub query: String,
    pub fields: Vec<F>,
}

impl<F> TextFilter<F> {
    pub fn new(query: impl Into<String>, fields: Vec<F>) -> Self {
        Self {
            query: query.into(),
            fields,
        }
    }

    /// Builds a filter from wire field names, e.g. `["title", "description"]`.
    pub fn from_names<S: AsRef<str>>(query: impl Into<String>, names: &[S]) -> Result<Self, QueryError>
    where
        F: std::str::FromStr<Err = QueryError>,
    {
        let fields = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<F>, _>>()?;
        Ok(Self::new(query, fields))
    }
}

/// Exact match on one field.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector<F> {
    pub field: F,
    pub value: String,
    pub case: CaseSensitivity,
}

impl<F> Selector<F> {
    pub fn new(field: F, value: impl Into<String>, case: CaseSensitivity) -> Self {
        Self {
            field,
            value: value.into(),
            case,
        }
    }
}

/// Keeps records where any of `fields` contains `query`, ignoring case.
/// Relative order is preserved. An empty query keeps everything.
pub fn filter_text<T: Searchable>(records: Vec<T>, query: &str, fields: &[T::Field]) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            fields.iter().any(|&field| {
                record
                    .field_values(field)
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Keeps records where `field` equals `value`. For multi-valued fields such
/// as tags, any one value matching is enough.
pub fn filter_eq<T: Searchable>(
    records: Vec<T>,
    field: T::Field,
    value: &str,
    case: CaseSensitivity,
) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| {
            record.field_values(field).iter().any(|candidate| match case {
                CaseSensitivity::Sensitive => *candidate == value,
                CaseSensitivity::Insensitive => candidate.to_lowercase() == value.to_lowercase(),
            })
        })
        .collect()
}
