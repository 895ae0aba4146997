//! In-Memory Gateway
//!
//! Same semantics as the PostgREST backend: storage-assigned ids and
//! creation timestamps, equality filters, single-column ordering with
//! PostgreSQL null placement, limits. Adds failure injection and a call
//! journal for tests.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};

use super::query::{keyed_pairs, Direction, Filter, Select};
use super::traits::Gateway;
use crate::error::{GatewayError, GatewayResult};

type Row = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

/// One journaled gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: Operation,
    pub table: String,
}

struct MemoryState {
    tables: HashMap<String, Vec<Row>>,
    next_id: i64,
    clock: DateTime<Utc>,
    failures: HashMap<Operation, VecDeque<GatewayError>>,
    journal: Vec<Call>,
}

pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGateway {
    pub fn new() -> Self {
        // Fixed epoch keeps `created_at` ordering deterministic
        let clock = Utc
            .with_ymd_and_hms(2025, 3, 8, 9, 0, 0)
            .single()
            .unwrap_or_default();

        Self {
            state: Mutex::new(MemoryState {
                tables: HashMap::new(),
                next_id: 1,
                clock,
                failures: HashMap::new(),
                journal: Vec::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load rows out-of-band, without journaling. Missing ids and timestamps are assigned.
    pub fn seed<I>(&self, table: &str, rows: I) -> GatewayResult<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut state = self.state();
        let rows = object_rows(table, rows)?;
        for row in rows {
            state.store(table, row);
        }
        Ok(())
    }

    /// Current rows of a collection in storage order
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.state()
            .tables
            .get(table)
            .map(|rows| rows.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }

    /// Make the next call of `operation` fail with `error`
    pub fn fail_next(&self, operation: Operation, error: GatewayError) {
        self.state()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().journal.clone()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.state()
            .journal
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Journal the call and pop an injected failure, if any
    fn begin(&self, operation: Operation, table: &str) -> Result<MutexGuard<'_, MemoryState>, GatewayError> {
        let mut state = self.state();
        state.journal.push(Call {
            operation,
            table: table.to_string(),
        });
        if let Some(error) = state
            .failures
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
        {
            return Err(error);
        }
        Ok(state)
    }
}

impl MemoryState {
    fn store(&mut self, table: &str, mut row: Row) {
        let existing_id = row.get("id").and_then(Value::as_i64);
        match existing_id {
            Some(id) => self.next_id = self.next_id.max(id + 1),
            None if !row.contains_key("id") => {
                row.insert("id".to_string(), Value::from(self.next_id));
                self.next_id += 1;
            }
            None => {}
        }
        if !row.contains_key("created_at") {
            let stamp = self.clock.to_rfc3339_opts(SecondsFormat::Micros, true);
            row.insert("created_at".to_string(), Value::String(stamp));
            self.clock += Duration::seconds(1);
        }

        self.tables.entry(table.to_string()).or_default().push(row);
    }
}

/// All or nothing: one malformed row rejects the whole batch
fn object_rows<I>(table: &str, rows: I) -> GatewayResult<Vec<Row>>
where
    I: IntoIterator<Item = Value>,
{
    rows.into_iter()
        .map(|row| match row {
            Value::Object(row) => Ok(row),
            _ => Err(GatewayError::InvalidRequest(format!(
                "rows for `{}` must be JSON objects",
                table
            ))),
        })
        .collect()
}

/// Text form of a cell, as PostgREST compares it against `eq.` filters
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| {
        row.get(&filter.column)
            .map(|value| cell_text(value) == filter.value)
            .unwrap_or(false)
    })
}

/// Ascending comparison with nulls sorting last
fn compare_cells(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let left = left.filter(|value| !value.is_null());
    let right = right.filter(|value| !value.is_null());

    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(a), Some(b)) => cell_text(a).cmp(&cell_text(b)),
    }
}

#[async_trait(?Send)]
impl Gateway for MemoryGateway {
    async fn select(&self, query: &Select) -> GatewayResult<Vec<Value>> {
        let state = self.begin(Operation::Select, &query.table)?;

        let mut rows: Vec<Row> = state
            .tables
            .get(&query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches(row, &query.filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            // Descending is the exact reverse, which also puts nulls first
            rows.sort_by(|a, b| {
                let ordering = compare_cells(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows.into_iter().map(Value::Object).collect())
    }

    async fn insert(&self, table: &str, rows: Value) -> GatewayResult<()> {
        let mut state = self.begin(Operation::Insert, table)?;
        let rows = match rows {
            Value::Array(rows) => rows,
            single => vec![single],
        };
        let rows = object_rows(table, rows)?;
        for row in rows {
            state.store(table, row);
        }
        Ok(())
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> GatewayResult<()> {
        let mut state = self.begin(Operation::Update, table)?;
        keyed_pairs(filters)?;
        let Value::Object(patch) = patch else {
            return Err(GatewayError::InvalidRequest("patch must be a JSON object".to_string()));
        };

        if let Some(rows) = state.tables.get_mut(table) {
            for row in rows.iter_mut().filter(|row| matches(row, filters)) {
                for (column, value) in &patch {
                    row.insert(column.clone(), value.clone());
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> GatewayResult<()> {
        let mut state = self.begin(Operation::Delete, table)?;
        keyed_pairs(filters)?;

        if let Some(rows) = state.tables.get_mut(table) {
            rows.retain(|row| !matches(row, filters));
        }
        Ok(())
    }
}
