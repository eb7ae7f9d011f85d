//! Action executors: retrying user-facing operations.
//!
//! Each action shares the same skeleton: resolve the locator, perform the
//! primitive, and on failure retry after a jittered backoff until the
//! policy's attempt budget runs out, at which point exactly one diagnostic
//! is captured and `ActionFailed` is raised with the last driver error.

mod click;
mod fill;
mod navigate;
mod select;

pub(crate) use click::execute_click;
pub(crate) use fill::execute_fill;
pub(crate) use navigate::execute_navigate;
pub(crate) use select::execute_select;
