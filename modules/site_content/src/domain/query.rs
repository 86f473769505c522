//! Backend-neutral read requests
//!
//! A [`Query`] records, in application order, the restrictions, ordering and
//! limit of one read against a collection. Sources either render it to
//! PostgREST parameters ([`Query::to_params`]) or evaluate it in memory.

use std::fmt;

/// Logical collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    CompanySettings,
    Properties,
    BlogPosts,
    Branding,
}

impl Collection {
    pub fn table(&self) -> &'static str {
        match self {
            Self::CompanySettings => "company_settings",
            Self::Properties => "properties",
            Self::BlogPosts => "blog_posts",
            Self::Branding => "branding",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// Scalar compared against a column
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One restriction on the result set
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq {
        column: &'static str,
        value: FilterValue,
    },
    /// `column >= value`
    Gte {
        column: &'static str,
        value: FilterValue,
    },
    /// `column <= value`
    Lte {
        column: &'static str,
        value: FilterValue,
    },
    /// Any of `columns` contains `term`, case-insensitive
    AnyContains {
        columns: Vec<&'static str>,
        term: String,
    },
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// One ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
}

/// Projected columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    All,
    Only(Vec<&'static str>),
}

/// A read request against one collection
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    collection: Collection,
    columns: Columns,
    filters: Vec<Filter>,
    order: Vec<Order>,
    limit: Option<usize>,
    single: bool,
}

impl Query {
    /// Select all columns of `collection` with no restriction
    pub fn on(collection: Collection) -> Self {
        Self {
            collection,
            columns: Columns::All,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            single: false,
        }
    }

    pub fn select(mut self, columns: &[&'static str]) -> Self {
        self.columns = Columns::Only(columns.to_vec());
        self
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter::Eq {
            column,
            value: value.into(),
        });
        self
    }

    pub fn gte(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter::Gte {
            column,
            value: value.into(),
        });
        self
    }

    pub fn lte(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter::Lte {
            column,
            value: value.into(),
        });
        self
    }

    pub fn any_contains(mut self, columns: &[&'static str], term: impl Into<String>) -> Self {
        self.filters.push(Filter::AnyContains {
            columns: columns.to_vec(),
            term: term.into(),
        });
        self
    }

    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order.push(Order {
            column,
            direction: Direction::Asc,
        });
        self
    }

    pub fn order_desc(mut self, column: &'static str) -> Self {
        self.order.push(Order {
            column,
            direction: Direction::Desc,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Require exactly one matching row
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> &[Order] {
        &self.order
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Render as PostgREST query parameters, in application order
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 3);

        let select = match &self.columns {
            Columns::All => "*".to_string(),
            Columns::Only(cols) => cols.join(","),
        };
        params.push(("select".to_string(), select));

        for filter in &self.filters {
            params.push(match filter {
                Filter::Eq { column, value } => (column.to_string(), format!("eq.{}", value)),
                Filter::Gte { column, value } => (column.to_string(), format!("gte.{}", value)),
                Filter::Lte { column, value } => (column.to_string(), format!("lte.{}", value)),
                Filter::AnyContains { columns, term } => {
                    let pattern = quote_reserved(&format!("%{}%", term));
                    let alternatives = columns
                        .iter()
                        .map(|c| format!("{}.ilike.{}", c, pattern))
                        .collect::<Vec<_>>()
                        .join(",");
                    ("or".to_string(), format!("({})", alternatives))
                }
            });
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|o| match o.direction {
                    Direction::Asc => format!("{}.asc", o.column),
                    Direction::Desc => format!("{}.desc", o.column),
                })
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}

/// Double-quote values that contain characters reserved by the PostgREST
/// logical-operator grammar.
fn quote_reserved(value: &str) -> String {
    const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\'];
    if !value.contains(RESERVED) {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
