//! Derived-view pipeline with ordered stage execution.
//!
//! Each stage implements the `QueryStage` trait and is executed in order
//! over an owned working copy of the record list. The stage order is a
//! contract, not an implementation detail: search and filter both narrow
//! the row set over different fields, so reordering them changes what the
//! sort stage sees.
//!
//! # Standard Stage Order
//!
//! 1. **SearchStage** - Keep rows whose name contains the search text
//! 2. **FilterStage** - Keep rows whose website contains the filter token
//! 3. **SortStage** - Order by case-folded name
//!
//! # Example
//!
//! ```ignore
//! use roster_query::{build_default_plan, run_query};
//!
//! let rows = run_query(store.records(), &state);
//! ```

use roster_model::{QueryState, SortOrder, UserRecord};

/// A single stage in the query pipeline.
///
/// Stages consume and return an owned row vector; the original record
/// list is copied once by the plan, so no stage can mutate the store's
/// view of the data.
pub trait QueryStage {
    /// Execute this stage over the working row set.
    fn execute(&self, rows: Vec<UserRecord>, state: &QueryState) -> Vec<UserRecord>;

    /// Human-readable name for this stage (for debugging).
    fn stage_name(&self) -> &str;

    /// Whether this stage should be skipped for the given state.
    ///
    /// Default implementation always runs the stage.
    fn should_skip(&self, _state: &QueryState) -> bool {
        false
    }
}

/// An ordered plan of query stages.
pub struct QueryPlan {
    stages: Vec<Box<dyn QueryStage>>,
}

impl Default for QueryPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the plan.
    pub fn add_stage(mut self, stage: Box<dyn QueryStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Execute all stages in order over a copy of `records`.
    pub fn execute(&self, records: &[UserRecord], state: &QueryState) -> Vec<UserRecord> {
        let mut rows = records.to_vec();
        for stage in &self.stages {
            if stage.should_skip(state) {
                continue;
            }
            rows = stage.execute(rows, state);
        }
        rows
    }

    /// List stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.stage_name()).collect()
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Stage 1: keep rows whose case-folded name contains the search text.
pub struct SearchStage;

impl QueryStage for SearchStage {
    fn execute(&self, rows: Vec<UserRecord>, state: &QueryState) -> Vec<UserRecord> {
        let needle = fold(&state.search_text);
        rows.into_iter()
            .filter(|record| fold(&record.name).contains(&needle))
            .collect()
    }

    fn stage_name(&self) -> &str {
        "search"
    }

    fn should_skip(&self, state: &QueryState) -> bool {
        state.search_text.is_empty()
    }
}

/// Stage 2: keep rows whose case-folded website contains the filter token.
pub struct FilterStage;

impl QueryStage for FilterStage {
    fn execute(&self, rows: Vec<UserRecord>, state: &QueryState) -> Vec<UserRecord> {
        let Some(token) = state.filter.token() else {
            return rows;
        };
        rows.into_iter()
            .filter(|record| fold(&record.website).contains(token))
            .collect()
    }

    fn stage_name(&self) -> &str {
        "filter"
    }

    fn should_skip(&self, state: &QueryState) -> bool {
        state.filter.token().is_none()
    }
}

/// Stage 3: order by case-folded name.
///
/// The sort is stable, so rows with equal case-folded names keep their
/// record-store order.
pub struct SortStage;

impl QueryStage for SortStage {
    fn execute(&self, mut rows: Vec<UserRecord>, state: &QueryState) -> Vec<UserRecord> {
        match state.sort {
            SortOrder::None => {}
            SortOrder::Ascending => rows.sort_by(|a, b| fold(&a.name).cmp(&fold(&b.name))),
            SortOrder::Descending => rows.sort_by(|a, b| fold(&b.name).cmp(&fold(&a.name))),
        }
        rows
    }

    fn stage_name(&self) -> &str {
        "sort"
    }

    fn should_skip(&self, state: &QueryState) -> bool {
        state.sort == SortOrder::None
    }
}

/// Build the default query plan.
///
/// This returns a plan with the standard stages in contract order:
/// search, then filter, then sort.
pub fn build_default_plan() -> QueryPlan {
    QueryPlan::new()
        .add_stage(Box::new(SearchStage))
        .add_stage(Box::new(FilterStage))
        .add_stage(Box::new(SortStage))
}

/// Run the default plan over `records`.
///
/// Pure: the input list is never mutated and the result is a fresh
/// vector of row copies.
pub fn run_query(records: &[UserRecord], state: &QueryState) -> Vec<UserRecord> {
    build_default_plan().execute(records, state)
}
