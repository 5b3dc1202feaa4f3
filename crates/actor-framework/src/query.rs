//! # Typed Queries
//!
//! Listing a store goes through a [`Query`] built over the record's own field enum
//! ([`ActorEntity::Field`]). The set of predicates is closed: equality, inequality, the four
//! range comparisons and a SQL-style `like`. A filter on a column a record does not have is a
//! compile error; a filter with the wrong *value* type is a [`QueryError`] at evaluation.
//!
//! ```rust
//! use actor_framework::query::{Direction, Predicate, Query};
//!
//! #[derive(Clone, Copy, Debug)]
//! enum StockField { Name, Quantity }
//!
//! let query = Query::new()
//!     .filter(Predicate::like(StockField::Name, "%flour%"))
//!     .filter(Predicate::gt(StockField::Quantity, 2_i64))
//!     .order_by(StockField::Quantity, Direction::Desc)
//!     .limit(10);
//! assert_eq!(query.filters().len(), 2);
//! ```

use crate::entity::ActorEntity;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A single column value as seen by the query evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Date(_) => "date",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Orders two values of the same kind. `None` when the kinds differ.
    fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => Some(Ordering::Equal),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => Some(a.cmp(b)),
            (FieldValue::Float(a), FieldValue::Float(b)) => {
                Some(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Errors raised while evaluating a query against a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("type mismatch on {field}: column is {expected}, filter value is {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("like filter on non-text column {field} ({kind})")]
    LikeOnNonText { field: String, kind: &'static str },
}

/// The closed set of filter predicates.
#[derive(Debug, Clone)]
pub enum Predicate<F> {
    Eq(F, FieldValue),
    Ne(F, FieldValue),
    Gt(F, FieldValue),
    Gte(F, FieldValue),
    Lt(F, FieldValue),
    Lte(F, FieldValue),
    /// SQL `LIKE`, case-insensitive: `%` matches any run, `_` one character.
    Like(F, String),
}

impl<F: Copy + Debug> Predicate<F> {
    pub fn eq(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Eq(field, value.into())
    }

    pub fn ne(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Ne(field, value.into())
    }

    pub fn gt(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Gt(field, value.into())
    }

    pub fn gte(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Gte(field, value.into())
    }

    pub fn lt(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Lt(field, value.into())
    }

    pub fn lte(field: F, value: impl Into<FieldValue>) -> Self {
        Predicate::Lte(field, value.into())
    }

    pub fn like(field: F, pattern: impl Into<String>) -> Self {
        Predicate::Like(field, pattern.into())
    }

    pub fn field(&self) -> F {
        match self {
            Predicate::Eq(f, _)
            | Predicate::Ne(f, _)
            | Predicate::Gt(f, _)
            | Predicate::Gte(f, _)
            | Predicate::Lt(f, _)
            | Predicate::Lte(f, _)
            | Predicate::Like(f, _) => *f,
        }
    }

    /// Evaluates the predicate against the column value of one record.
    ///
    /// Null columns never satisfy a range or `like` filter; `Eq(Null)` matches only null.
    pub fn evaluate(&self, actual: &FieldValue) -> Result<bool, QueryError> {
        match self {
            Predicate::Eq(field, expected) => self.equals(*field, actual, expected),
            Predicate::Ne(field, expected) => Ok(!self.equals(*field, actual, expected)?),
            Predicate::Gt(field, expected) => {
                self.ordered(*field, actual, expected, |o| o == Ordering::Greater)
            }
            Predicate::Gte(field, expected) => {
                self.ordered(*field, actual, expected, |o| o != Ordering::Less)
            }
            Predicate::Lt(field, expected) => {
                self.ordered(*field, actual, expected, |o| o == Ordering::Less)
            }
            Predicate::Lte(field, expected) => {
                self.ordered(*field, actual, expected, |o| o != Ordering::Greater)
            }
            Predicate::Like(field, pattern) => match actual {
                FieldValue::Text(text) => Ok(like(text, pattern)),
                FieldValue::Null => Ok(false),
                other => Err(QueryError::LikeOnNonText {
                    field: format!("{:?}", field),
                    kind: other.kind(),
                }),
            },
        }
    }

    fn equals(&self, field: F, actual: &FieldValue, expected: &FieldValue) -> Result<bool, QueryError> {
        if actual.is_null() || expected.is_null() {
            return Ok(actual.is_null() && expected.is_null());
        }
        actual
            .compare(expected)
            .map(|o| o == Ordering::Equal)
            .ok_or_else(|| mismatch(field, actual, expected))
    }

    fn ordered(
        &self,
        field: F,
        actual: &FieldValue,
        expected: &FieldValue,
        accept: impl Fn(Ordering) -> bool,
    ) -> Result<bool, QueryError> {
        if actual.is_null() || expected.is_null() {
            return Ok(false);
        }
        actual
            .compare(expected)
            .map(accept)
            .ok_or_else(|| mismatch(field, actual, expected))
    }
}

fn mismatch<F: Debug>(field: F, actual: &FieldValue, expected: &FieldValue) -> QueryError {
    QueryError::TypeMismatch {
        field: format!("{:?}", field),
        expected: actual.kind(),
        found: expected.kind(),
    }
}

fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

    // matched[i][j]: first i pattern chars match first j text chars
    let mut matched = vec![vec![false; text.len() + 1]; pattern.len() + 1];
    matched[0][0] = true;
    for i in 1..=pattern.len() {
        if pattern[i - 1] == '%' {
            matched[i][0] = matched[i - 1][0];
        }
        for j in 1..=text.len() {
            matched[i][j] = match pattern[i - 1] {
                '%' => matched[i - 1][j] || matched[i][j - 1],
                '_' => matched[i - 1][j - 1],
                c => matched[i - 1][j - 1] && c == text[j - 1],
            };
        }
    }
    matched[pattern.len()][text.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A filter + sort + pagination request over records whose columns are `F`.
#[derive(Debug, Clone)]
pub struct Query<F> {
    filters: Vec<Predicate<F>>,
    order: Option<(F, Direction)>,
    limit: Option<usize>,
    offset: usize,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            order: None,
            limit: None,
            offset: 0,
        }
    }
}

impl<F: Copy + Debug> Query<F> {
    /// An unfiltered query returning every record in ID order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter. All filters must hold for a record to match.
    pub fn filter(mut self, predicate: Predicate<F>) -> Self {
        self.filters.push(predicate);
        self
    }

    pub fn order_by(mut self, field: F, direction: Direction) -> Self {
        self.order = Some((field, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn filters(&self) -> &[Predicate<F>] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<(F, Direction)> {
        self.order
    }

    pub fn matches<T>(&self, entity: &T) -> Result<bool, QueryError>
    where
        T: ActorEntity<Field = F>,
    {
        for predicate in &self.filters {
            if !predicate.evaluate(&entity.field(predicate.field()))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Filters, sorts and paginates `items`.
    ///
    /// Without an explicit ordering, records keep the order they were given in (the store
    /// passes them in ID order). Sorting is stable, so ties keep ID order too.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Result<Page<T>, QueryError>
    where
        T: ActorEntity<Field = F>,
    {
        let mut matched = Vec::new();
        for item in items {
            if self.matches(&item)? {
                matched.push(item);
            }
        }

        if let Some((field, direction)) = self.order {
            let mut keyed: Vec<(FieldValue, T)> =
                matched.into_iter().map(|t| (t.field(field), t)).collect();

            let mut column_kind: Option<&'static str> = None;
            for (value, _) in &keyed {
                if value.is_null() {
                    continue;
                }
                match column_kind {
                    None => column_kind = Some(value.kind()),
                    Some(kind) if kind != value.kind() => {
                        return Err(QueryError::TypeMismatch {
                            field: format!("{:?}", field),
                            expected: kind,
                            found: value.kind(),
                        })
                    }
                    Some(_) => {}
                }
            }

            keyed.sort_by(|(a, _), (b, _)| {
                let ordering = match (a.is_null(), b.is_null()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => a.compare(b).unwrap_or(Ordering::Equal),
                };
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
            matched = keyed.into_iter().map(|(_, t)| t).collect();
        }

        let total = matched.len();
        let items = matched
            .into_iter()
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        Ok(Page {
            items,
            total,
            offset: self.offset,
            limit: self.limit,
        })
    }
}

/// One page of query results. `total` counts every match before pagination.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Dish {
        id: u32,
        name: String,
        price: Decimal,
        vegetarian: bool,
        retired_on: Option<NaiveDate>,
    }

    #[derive(Clone, Copy, Debug)]
    enum DishField {
        Name,
        Price,
        Vegetarian,
        RetiredOn,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = ();
        type Update = ();
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Field = DishField;
        type Error = DishError;

        fn from_create_params(_id: u32, _params: ()) -> Result<Self, Self::Error> {
            Err(DishError)
        }

        fn field(&self, field: DishField) -> FieldValue {
            match field {
                DishField::Name => self.name.clone().into(),
                DishField::Price => self.price.into(),
                DishField::Vegetarian => self.vegetarian.into(),
                DishField::RetiredOn => self.retired_on.into(),
            }
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn dish(id: u32, name: &str, cents: i64, vegetarian: bool) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            vegetarian,
            retired_on: None,
        }
    }

    fn menu() -> Vec<Dish> {
        vec![
            dish(1, "Tomato Soup", 650, true),
            dish(2, "Ribeye Steak", 2800, false),
            dish(3, "Mushroom Risotto", 1450, true),
            dish(4, "Fish and Chips", 1500, false),
        ]
    }

    fn ids(page: &Page<Dish>) -> Vec<u32> {
        page.items.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_like_patterns() {
        assert!(like("Mushroom Risotto", "%risotto"));
        assert!(like("Mushroom Risotto", "mush%"));
        assert!(like("Fish and Chips", "%AND%"));
        assert!(like("Soup", "s_up"));
        assert!(!like("Soup", "s_p"));
        assert!(like("", "%"));
        assert!(!like("Steak", "%fish%"));
    }

    #[test]
    fn test_filter_eq_and_range() {
        let query = Query::new()
            .filter(Predicate::eq(DishField::Vegetarian, true))
            .filter(Predicate::lt(DishField::Price, Decimal::new(1000, 2)));
        let page = query.apply(menu()).unwrap();
        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_order_limit_offset() {
        let query = Query::new()
            .order_by(DishField::Price, Direction::Desc)
            .offset(1)
            .limit(2);
        let page = query.apply(menu()).unwrap();
        assert_eq!(ids(&page), vec![4, 3]);
        assert_eq!(page.total, 4);
        assert!(page.has_more());
    }

    #[test]
    fn test_offset_past_the_end() {
        let page = Query::new().offset(usize::MAX).apply(menu()).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 4);
        assert!(!page.has_more());
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let query = Query::new().filter(Predicate::gt(DishField::Price, "cheap"));
        let err = query.apply(menu()).unwrap_err();
        assert!(matches!(
            err,
            QueryError::TypeMismatch { expected: "decimal", found: "text", .. }
        ));

        let query = Query::new().filter(Predicate::like(DishField::Price, "1%"));
        assert!(matches!(
            query.apply(menu()).unwrap_err(),
            QueryError::LikeOnNonText { .. }
        ));
    }

    #[test]
    fn test_null_semantics() {
        let mut dishes = menu();
        dishes[1].retired_on = NaiveDate::from_ymd_opt(2024, 1, 31);

        let retired = Query::new()
            .filter(Predicate::ne(DishField::RetiredOn, FieldValue::Null))
            .apply(dishes.clone())
            .unwrap();
        assert_eq!(ids(&retired), vec![2]);

        let current = Query::new()
            .filter(Predicate::eq(DishField::RetiredOn, FieldValue::Null))
            .apply(dishes.clone())
            .unwrap();
        assert_eq!(ids(&current), vec![1, 3, 4]);

        // Range filters never match a null column.
        let after = Query::new()
            .filter(Predicate::gte(
                DishField::RetiredOn,
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            ))
            .apply(dishes)
            .unwrap();
        assert_eq!(ids(&after), vec![2]);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let page = Query::new()
            .filter(Predicate::like(DishField::Name, "%STEAK%"))
            .apply(menu())
            .unwrap();
        assert_eq!(ids(&page), vec![2]);
    }
}
