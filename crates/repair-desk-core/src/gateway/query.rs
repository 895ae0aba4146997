//! Query model rendered as PostgREST parameters.

use crate::error::{GatewayError, GatewayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Single-column ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), direction: Direction::Ascending }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), direction: Direction::Descending }
    }

    /// `column.asc` / `column.desc`
    pub fn to_param(&self) -> String {
        let suffix = match self.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        format!("{}.{}", self.column, suffix)
    }
}

/// Exact-match filter on one column
///
/// Values are kept in their text form, which is how PostgREST compares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self { column: column.into(), value: value.to_string() }
    }

    pub fn to_pair(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

/// Render filters as query pairs, refusing an empty set.
///
/// Keyed mutations without a filter would hit the whole collection.
pub fn keyed_pairs(filters: &[Filter]) -> GatewayResult<Vec<(String, String)>> {
    if filters.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "update and delete require at least one filter".to_string(),
        ));
    }
    Ok(filters.iter().map(Filter::to_pair).collect())
}

/// `select=*` over one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        pairs.extend(self.filters.iter().map(Filter::to_pair));
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.to_param()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
