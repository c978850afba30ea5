//! Settle-all join: run independent tasks concurrently and keep every outcome.
//!
//! Unlike a fail-fast join, one task failing never cancels or hides another.
//! Outcomes are returned in task order regardless of completion order.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The settled result of one independent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T, E = SearchError> {
    /// The task completed with data.
    Success(T),
    /// The task failed; the reason is kept for display.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure reason, if any.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Convert back into a [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Run every task concurrently and wait for all of them to settle.
///
/// The returned vector has one [`Outcome`] per task, in the order the
/// tasks were given.
///
/// # Examples
///
/// ```
/// # async fn example() {
/// use studyscope_search::orchestrator::settle::{run_independent, Outcome};
///
/// async fn task(ok: bool) -> Result<u32, String> {
///     if ok { Ok(1) } else { Err("boom".into()) }
/// }
///
/// let outcomes = run_independent([task(true), task(false)]).await;
/// assert_eq!(outcomes, vec![Outcome::Success(1), Outcome::Failure("boom".into())]);
/// # }
/// ```
pub async fn run_independent<I, F, T, E>(tasks: I) -> Vec<Outcome<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(Outcome::from)
        .collect()
}
