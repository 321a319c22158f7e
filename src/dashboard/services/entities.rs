//! Operations specific to tasks and stock requests.

use super::board::{DashboardResult, DashboardService};
use crate::{
    access::Principal,
    records::{
        domain::{Comment, NewTask, RecordId, StockRequest, StockRequestData, Task},
        ports::RecordSource,
    },
};
use mockable::Clock;

impl<S, C> DashboardService<Task, S, C>
where
    S: RecordSource<Task>,
    C: Clock + Send + Sync,
{
    /// Creates a task stamped with the service clock.
    ///
    /// # Errors
    ///
    /// Returns [`super::DashboardError::Domain`] for a blank title, and the
    /// errors of [`DashboardService::create`].
    pub async fn create_task(&self, principal: &Principal, input: NewTask) -> DashboardResult<Task> {
        let task = Task::create(input, self.clock.as_ref())?;
        self.create(principal, task).await
    }

    /// Appends a comment by the principal, dated today.
    ///
    /// # Errors
    ///
    /// Returns [`super::DashboardError::Domain`] for blank text,
    /// [`super::DashboardError::NotFound`] for a missing task, and
    /// [`super::DashboardError::Forbidden`] when the task is out of scope.
    pub async fn add_comment(
        &self,
        principal: &Principal,
        task_id: &RecordId,
        text: &str,
    ) -> DashboardResult<Task> {
        let comment = Comment::new(principal.name(), text, self.clock.as_ref())?;
        let mut task = self.find_in_scope(principal, task_id).await?;
        task.add_comment(comment);
        let stored = self.store(&task).await?;
        tracing::info!(
            record = %task_id,
            comments = stored.comments().len(),
            by = principal.name(),
            "commented on task"
        );
        Ok(stored)
    }
}

impl<S, C> DashboardService<StockRequest, S, C>
where
    S: RecordSource<StockRequest>,
    C: Clock + Send + Sync,
{
    /// Raises a pending stock request dated today.
    ///
    /// # Errors
    ///
    /// Returns [`super::DashboardError::Domain`] for a blank item or zero
    /// quantity, and the errors of [`DashboardService::create`].
    pub async fn raise_request(
        &self,
        principal: &Principal,
        data: StockRequestData,
    ) -> DashboardResult<StockRequest> {
        let request = StockRequest::raise(data, self.clock.as_ref())?;
        self.create(principal, request).await
    }
}
