//! Orchestration use cases

pub mod dispatch;
pub mod process_query;

#[cfg(test)]
pub(crate) mod testing;
