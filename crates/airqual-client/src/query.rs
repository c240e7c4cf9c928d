use crate::error::{Error, Result};

/// One filter clause of the `where` expression.
#[derive(Debug, Clone)]
struct Clause {
    field: &'static str,
    op: &'static str,
    value: String,
}

/// Assembles the `where` filter expression from optional constraints.
///
/// Empty values contribute nothing; present values combine with `and` in the
/// order they were appended. Values are inserted as quoted literals without
/// escaping, so quote characters inside a station id or pollutant code pass
/// through to the service unchanged.
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    clauses: Vec<Clause>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `field = 'value'` when `value` is non-empty.
    pub fn eq(self, field: &'static str, value: &str) -> Self {
        self.clause(field, "=", value)
    }

    /// Appends `field >= 'value'` when `value` is non-empty.
    pub fn at_least(self, field: &'static str, value: &str) -> Self {
        self.clause(field, ">=", value)
    }

    /// Appends `field <= 'value'` when `value` is non-empty.
    pub fn at_most(self, field: &'static str, value: &str) -> Self {
        self.clause(field, "<=", value)
    }

    fn clause(mut self, field: &'static str, op: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.clauses.push(Clause {
                field,
                op,
                value: value.to_string(),
            });
        }
        self
    }

    /// True when no constraint contributed a clause.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The un-encoded filter expression; empty means "no filter".
    pub fn expression(&self) -> String {
        let mut expression = String::new();
        for clause in &self.clauses {
            if !expression.is_empty() {
                expression.push_str(" and ");
            }
            expression.push_str(&format!("{}{}'{}'", clause.field, clause.op, clause.value));
        }
        expression
    }

    /// Freezes the expression into a request descriptor for one layer.
    pub fn build(self, resource: String, out_fields: &str, order_by: &str) -> RequestDescriptor {
        RequestDescriptor {
            resource,
            filter: self.expression(),
            out_fields: out_fields.to_string(),
            order_by: order_by.to_string(),
            return_geometry: false,
        }
    }
}

/// A fully formed feature-service query. Immutable once built; one
/// descriptor per logical query.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub resource: String,
    pub filter: String,
    pub out_fields: String,
    pub order_by: String,
    pub return_geometry: bool,
}

impl RequestDescriptor {
    /// Serializes the descriptor into a GET URL, percent-encoding the filter
    /// into the `where` parameter.
    pub fn url(&self) -> Result<String> {
        let geometry = if self.return_geometry { "true" } else { "false" };
        let params = [
            ("f", "json"),
            ("spatialRel", "esriSpatialRelIntersects"),
            ("outFields", self.out_fields.as_str()),
            ("orderByFields", self.order_by.as_str()),
            ("returnGeometry", geometry),
            ("where", self.filter.as_str()),
        ];
        let url = reqwest::Url::parse_with_params(&self.resource, params)
            .map_err(|err| Error::Url(err.to_string()))?;
        Ok(url.into())
    }
}
