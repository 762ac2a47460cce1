//! Domain-level constants.

// =============================================================================
// Users
// =============================================================================

/// Id of the user seeded by the initial migrations.
///
/// Tasks created without an explicit author or assignee point here.
pub const DEFAULT_USER_ID: i32 = 1;

/// Name of the seeded user
pub const DEFAULT_USER_NAME: &str = "default";

// =============================================================================
// Tasks
// =============================================================================

/// `closed` value of a task that is still open
pub const TASK_OPEN: i64 = 0;

/// Zero in a filter argument means "any value"
pub const UNCONSTRAINED: i32 = 0;
