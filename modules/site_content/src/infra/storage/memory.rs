//! In-memory row source
//!
//! Evaluates a [`Query`] against JSON rows held in process with the same
//! semantics the REST backend applies: conjunctive filters, case-insensitive
//! substring alternatives, multi-key ordering with PostgreSQL null placement,
//! then the limit. Used for tests and offline runs.

use super::repositories::RowSource;
use crate::contract::ContentError;
use crate::domain::query::{Collection, Columns, Direction, Filter, FilterValue, Order, Query};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Rows kept per collection
#[derive(Default)]
pub struct InMemorySource {
    tables: RwLock<HashMap<Collection, Vec<Value>>>,
    unavailable: AtomicBool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows of `collection`
    pub fn set_rows(&self, collection: Collection, rows: Vec<Value>) {
        self.tables.write().insert(collection, rows);
    }

    /// Append one row to `collection`
    pub fn insert(&self, collection: Collection, row: Value) {
        self.tables.write().entry(collection).or_default().push(row);
    }

    /// Simulate a transport failure on every subsequent fetch
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Evaluate `query` against the stored rows
    pub fn evaluate(&self, query: &Query) -> Vec<Value> {
        let tables = self.tables.read();
        let Some(rows) = tables.get(&query.collection()) else {
            return Vec::new();
        };

        let mut matched: Vec<&Value> = rows
            .iter()
            .filter(|row| query.filters().iter().all(|f| matches(f, row)))
            .collect();

        if !query.ordering().is_empty() {
            matched.sort_by(|a, b| compare_rows(query.ordering(), a, b));
        }

        let limit = query.row_limit().unwrap_or(usize::MAX);
        matched
            .into_iter()
            .take(limit)
            .map(|row| project(query.columns(), row))
            .collect()
    }
}

#[async_trait]
impl RowSource for InMemorySource {
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>, ContentError> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(ContentError::Transport {
                message: format!("in-memory source unavailable for {}", query.collection()),
            });
        }
        Ok(self.evaluate(query))
    }
}

fn matches(filter: &Filter, row: &Value) -> bool {
    match filter {
        Filter::Eq { column, value } => {
            compare_value(row.get(*column), value) == Some(Ordering::Equal)
        }
        Filter::Gte { column, value } => matches!(
            compare_value(row.get(*column), value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Filter::Lte { column, value } => matches!(
            compare_value(row.get(*column), value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Filter::AnyContains { columns, term } => {
            let needle = term.to_lowercase();
            columns.iter().any(|column| {
                row.get(*column)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        }
    }
}

/// Compare a row cell with a filter operand. `None` when the cell is null,
/// missing or of an incomparable type, in which case no comparison holds.
fn compare_value(cell: Option<&Value>, operand: &FilterValue) -> Option<Ordering> {
    let cell = cell?;
    match operand {
        FilterValue::Text(s) => cell.as_str().map(|c| c.cmp(s.as_str())),
        FilterValue::Integer(i) => cell.as_f64().and_then(|c| c.partial_cmp(&(*i as f64))),
        FilterValue::Number(n) => cell.as_f64().and_then(|c| c.partial_cmp(n)),
        FilterValue::Bool(b) => cell.as_bool().map(|c| c.cmp(b)),
    }
}

/// Nulls sort last ascending and first descending
fn compare_rows(order: &[Order], a: &Value, b: &Value) -> Ordering {
    for key in order {
        let ordering = match (non_null(a.get(key.column)), non_null(b.get(key.column))) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => compare_cells(x, y),
        };
        let ordering = match key.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn compare_cells(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn project(columns: &Columns, row: &Value) -> Value {
    match columns {
        Columns::All => row.clone(),
        Columns::Only(cols) => {
            let mut out = Map::new();
            for column in cols {
                out.insert(
                    column.to_string(),
                    row.get(*column).cloned().unwrap_or(Value::Null),
                );
            }
            Value::Object(out)
        }
    }
}
