//!
//! # Task listing query construction
//!
//! Builds the filter + sort query for `GET /tasks` from its query parameters.
//! Construction is a pure function over the parameters, returning the SQL text
//! and the positional bind values, so the logic is testable without a
//! database.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the task listing endpoint.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Filter by priority. The sentinel value `All` (or omission) disables the filter.
    pub priority: Option<String>,
    /// Filter by status. Same sentinel semantics as `priority`.
    pub status: Option<String>,
    /// Sort key: `priority`, `dueDate`, or anything else for the default sort.
    pub sort_by: Option<String>,
    /// Sort direction: `desc` for descending, anything else ascending.
    pub order: Option<String>,
}

/// Column list for task selection, shared with the single-task queries.
pub const TASK_COLUMNS: &str = "id, title, description, due_date, priority, status, created_at";

/// Rank expression for priority sorting: High before Medium before Low, with
/// any unrecognized (or absent) priority ranked last.
const PRIORITY_RANK: &str =
    "CASE priority WHEN 'High' THEN 1 WHEN 'Medium' THEN 2 WHEN 'Low' THEN 3 ELSE 4 END";

/// Filter values that disable the corresponding filter entirely.
const FILTER_SENTINEL: &str = "All";

/// A filter applies only when the parameter carries a real value: an empty
/// string or the `All` sentinel both mean "no filter".
fn filter_value(value: &Option<String>) -> Option<&String> {
    value
        .as_ref()
        .filter(|v| !v.is_empty() && v.as_str() != FILTER_SENTINEL)
}

/// Builds the task listing query from its parameters.
///
/// Returns the SQL text and the bind values for its positional parameters, in
/// order. Filters for priority and status apply only when the parameter is
/// present and not the `All` sentinel. Sort selection:
///
/// - `sortBy=priority` sorts by the High/Medium/Low rank, ascending unless
///   `order=desc`;
/// - `sortBy=dueDate` sorts by due date, same direction rule;
/// - anything else sorts by creation time descending (most recent first).
pub fn build_list_query(params: &TaskQuery) -> (String, Vec<String>) {
    let mut sql = format!("SELECT {} FROM tasks", TASK_COLUMNS);
    let mut binds: Vec<String> = Vec::new();

    let mut conditions: Vec<String> = Vec::new();
    if let Some(priority) = filter_value(&params.priority) {
        binds.push(priority.clone());
        conditions.push(format!("priority = ${}", binds.len()));
    }
    if let Some(status) = filter_value(&params.status) {
        binds.push(status.clone());
        conditions.push(format!("status = ${}", binds.len()));
    }
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    let direction = match params.order.as_deref() {
        Some("desc") => "DESC",
        _ => "ASC",
    };

    match params.sort_by.as_deref() {
        Some("priority") => {
            sql.push_str(&format!(" ORDER BY {} {}", PRIORITY_RANK, direction));
        }
        Some("dueDate") => {
            sql.push_str(&format!(" ORDER BY due_date {}", direction));
        }
        _ => {
            // Default sort: most recently created first.
            sql.push_str(" ORDER BY created_at DESC");
        }
    }

    (sql, binds)
}
