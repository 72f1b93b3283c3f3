//! Abortable submission attempts.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;

use crate::{submit, Msg, WaitlistApi};

/// Handle to stop an in-flight submission.
#[derive(Debug, Clone)]
pub struct SubmissionHandle {
    inner: AbortHandle,
}

impl SubmissionHandle {
    /// Abort the attempt. Its future resolves to [`Msg::SubmitAborted`]
    /// the next time it is polled; the request itself may still reach
    /// the service.
    pub fn abort(&self) {
        self.inner.abort();
    }
}

/// Start a submission attempt that can be aborted through the returned
/// handle.
pub fn submission_task<'a, A>(
    api: &'a A,
    email: String,
) -> (impl Future<Output = Msg> + 'a, SubmissionHandle)
where
    A: WaitlistApi + ?Sized,
{
    let (inner, registration) = AbortHandle::new_pair();
    let attempt = async move { submit(api, &email).await };
    let future = Abortable::new(attempt, registration).map(|r| r.unwrap_or(Msg::SubmitAborted));
    (future, SubmissionHandle { inner })
}
