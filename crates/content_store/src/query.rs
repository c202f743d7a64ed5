//! Typed read queries over the service's REST surface.

/// Builder for a single-table read.
///
/// The produced path follows the service's PostgREST conventions:
/// `rest/v1/{table}?select={columns}&order={column}.asc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    order_ascending: Option<String>,
}

impl TableQuery {
    /// Starts a query that selects every column of `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            order_ascending: None,
        }
    }

    /// Restricts the selected columns.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    /// Orders the result by `column` ascending.
    pub fn order_ascending(mut self, column: impl Into<String>) -> Self {
        self.order_ascending = Some(column.into());
        self
    }

    /// Table this query reads.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Renders the request path relative to the service base URL.
    pub fn to_path(&self) -> String {
        let mut path = format!("rest/v1/{}?select={}", self.table, self.select);
        if let Some(column) = &self.order_ascending {
            path.push_str("&order=");
            path.push_str(column);
            path.push_str(".asc");
        }
        path
    }
}

/// Query reading all rows of `table` ordered by `id` ascending.
///
/// This is the only read shape the portfolio issues.
pub fn read_all_by_id(table: &str) -> TableQuery {
    TableQuery::table(table).order_ascending("id")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_query_selects_everything() {
        assert_eq!(
            TableQuery::table("projects").to_path(),
            "rest/v1/projects?select=*"
        );
    }

    #[test]
    fn read_all_by_id_orders_ascending() {
        assert_eq!(
            read_all_by_id("case_studies").to_path(),
            "rest/v1/case_studies?select=*&order=id.asc"
        );
    }

    #[test]
    fn select_and_order_compose() {
        let query = TableQuery::table("certificates")
            .select("id,Img")
            .order_ascending("id");
        assert_eq!(query.to_path(), "rest/v1/certificates?select=id,Img&order=id.asc");
        assert_eq!(query.table_name(), "certificates");
    }
}
