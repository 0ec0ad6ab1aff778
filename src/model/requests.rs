/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Logical requests and collection paging parameters

use crate::constants::{MAX_PAGE_LIMIT, query};
use crate::error::AppError;
use reqwest::Method;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Sort direction of a single sort field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending, encoded with a leading `-`
    Desc,
}

/// Boolean filter expression over resource fields.
///
/// Serialized the way the API expects it in the `filter` query parameter:
/// `{"and":[...]}`, `{"or":[...]}` or a terminal `{"field": value}` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// All children must match
    And(Vec<FilterExpression>),
    /// Any child must match
    Or(Vec<FilterExpression>),
    /// Field equals value
    Equals {
        /// Field name
        field: String,
        /// Expected value
        value: Value,
    },
}

impl FilterExpression {
    /// Creates a terminal equality filter
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpression::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a conjunction
    pub fn and(children: Vec<FilterExpression>) -> Self {
        FilterExpression::And(children)
    }

    /// Creates a disjunction
    pub fn or(children: Vec<FilterExpression>) -> Self {
        FilterExpression::Or(children)
    }

    fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(map) = value else {
            return Err("filter node must be an object".to_string());
        };
        if map.len() != 1 {
            return Err(format!("filter node must have one member, got {}", map.len()));
        }
        let (key, value) = map.into_iter().next().ok_or("empty filter node")?;
        match (key.as_str(), value) {
            ("and", Value::Array(children)) => Ok(FilterExpression::And(
                children
                    .into_iter()
                    .map(Self::from_value)
                    .collect::<Result<_, _>>()?,
            )),
            ("or", Value::Array(children)) => Ok(FilterExpression::Or(
                children
                    .into_iter()
                    .map(Self::from_value)
                    .collect::<Result<_, _>>()?,
            )),
            (_, value) => Ok(FilterExpression::Equals { field: key, value }),
        }
    }
}

impl Serialize for FilterExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            FilterExpression::And(children) => map.serialize_entry("and", children)?,
            FilterExpression::Or(children) => map.serialize_entry("or", children)?,
            FilterExpression::Equals { field, value } => map.serialize_entry(field, value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilterExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FilterExpression::from_value(value).map_err(de::Error::custom)
    }
}

/// Sort, filter, search and page parameters for a collection endpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagingRequest {
    /// Sort fields in order of significance
    pub sorting: Vec<(String, SortDirection)>,
    /// Filter expression
    pub filtering: Option<FilterExpression>,
    /// Free text search
    pub searching: Option<String>,
    /// One-based page number
    pub page_number: Option<u32>,
    /// Page size, 1 to 100
    pub page_limit: Option<u32>,
}

impl PagingRequest {
    /// Creates an empty paging request
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sort field
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sorting.push((field.into(), direction));
        self
    }

    /// Sets the filter expression
    pub fn with_filter(mut self, filter: FilterExpression) -> Self {
        self.filtering = Some(filter);
        self
    }

    /// Sets the free text search
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.searching = Some(search.into());
        self
    }

    /// Sets the page number
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Sets the page size
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    /// Checks page number and page limit bounds
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page_number == Some(0) {
            return Err(AppError::InvalidInput(
                "page number must be at least 1".to_string(),
            ));
        }
        match self.page_limit {
            Some(limit) if !(1..=MAX_PAGE_LIMIT).contains(&limit) => {
                Err(AppError::InvalidInput(format!(
                    "page limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Renders the query parameters for this paging request.
    ///
    /// Only parameters that were explicitly set are emitted; sort field names
    /// get their first letter lower-cased and descending fields a `-` prefix.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, AppError> {
        self.validate()?;
        let mut pairs = Vec::new();

        if !self.sorting.is_empty() {
            let sort = self
                .sorting
                .iter()
                .map(|(field, direction)| {
                    let prefix = match direction {
                        SortDirection::Desc => "-",
                        SortDirection::Asc => "",
                    };
                    format!("{prefix}{}", lower_first(field))
                })
                .collect::<Vec<_>>()
                .join(",");
            pairs.push((query::SORTING, sort));
        }

        if let Some(filter) = &self.filtering {
            pairs.push((query::FILTERING, serde_json::to_string(filter)?));
        }

        if let Some(search) = self.searching.as_deref().filter(|s| !s.is_empty()) {
            pairs.push((query::SEARCHING, search.to_string()));
        }

        if let Some(page_number) = self.page_number {
            pairs.push((query::PAGE_NUMBER, page_number.to_string()));
        }

        if let Some(page_limit) = self.page_limit {
            pairs.push((query::PAGE_LIMIT, page_limit.to_string()));
        }

        Ok(pairs)
    }

    /// Re-derives a paging request from the query of a collection URL,
    /// e.g. the `next` link of a collection response
    pub fn from_url(url: &Url) -> Result<Self, AppError> {
        let mut paging = PagingRequest::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                query::SORTING => {
                    paging.sorting = value
                        .split(',')
                        .filter(|field| !field.is_empty())
                        .map(|field| match field.strip_prefix('-') {
                            Some(field) => (field.to_string(), SortDirection::Desc),
                            None => (field.to_string(), SortDirection::Asc),
                        })
                        .collect();
                }
                query::FILTERING => paging.filtering = Some(serde_json::from_str(&value)?),
                query::SEARCHING => paging.searching = Some(value.into_owned()),
                query::PAGE_NUMBER => paging.page_number = Some(parse_page_param(&key, &value)?),
                query::PAGE_LIMIT => paging.page_limit = Some(parse_page_param(&key, &value)?),
                _ => {}
            }
        }
        Ok(paging)
    }
}

fn parse_page_param(key: &str, value: &str) -> Result<u32, AppError> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("invalid {key}: {value}")))
}

fn lower_first(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A logical request against the Pingen API, before scoping and encoding
#[derive(Debug, Clone)]
pub struct ApiRequest<B = ()> {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base, without organisation prefix
    pub path: String,
    /// Collection parameters
    pub paging: Option<PagingRequest>,
    /// Idempotency key for write operations
    pub idempotency_key: Option<String>,
    /// Payload, wrapped in `{"data": ...}` when sent
    pub body: Option<B>,
}

impl ApiRequest<()> {
    /// Creates a request without body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            paging: None,
            idempotency_key: None,
            body: None,
        }
    }

    /// Creates a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PATCH request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches a payload
    pub fn with_body<B: Serialize>(self, body: B) -> ApiRequest<B> {
        ApiRequest {
            method: self.method,
            path: self.path,
            paging: self.paging,
            idempotency_key: self.idempotency_key,
            body: Some(body),
        }
    }
}

impl<B> ApiRequest<B> {
    /// Sets collection parameters
    pub fn with_paging(mut self, paging: PagingRequest) -> Self {
        self.paging = Some(paging);
        self
    }

    /// Sets collection parameters when present
    pub fn with_optional_paging(mut self, paging: Option<PagingRequest>) -> Self {
        self.paging = paging;
        self
    }

    /// Sets the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Sets the idempotency key when present
    pub fn with_optional_idempotency_key(mut self, key: Option<String>) -> Self {
        self.idempotency_key = key;
        self
    }
}
