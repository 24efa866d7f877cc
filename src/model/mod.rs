/// Chart related types.
pub mod chart;

/// Note related types.
pub mod note;

/// Input validation.
pub mod validation;
