use std::collections::HashMap;
use std::time::Duration;

use feedback_core::{Msg, SubmissionId};
use feedback_logging::{feedback_debug, feedback_trace};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::component::Command;

/// Runs confirmation delays as timer tasks bound to the mount's lifetime.
///
/// Every timer gets a child of `parent`, so cancelling the parent on unmount
/// stops all of them. A timer that fires sends its message back into the
/// component's command queue; it never touches state directly.
pub(crate) struct ConfirmationScheduler {
    delay: Duration,
    parent: CancellationToken,
    pending: HashMap<SubmissionId, CancellationToken>,
    commands: mpsc::UnboundedSender<Command>,
}

impl ConfirmationScheduler {
    pub(crate) fn new(
        delay: Duration,
        parent: CancellationToken,
        commands: mpsc::UnboundedSender<Command>,
    ) -> Self {
        Self {
            delay,
            parent,
            pending: HashMap::new(),
            commands,
        }
    }

    pub(crate) fn schedule(&mut self, submission: SubmissionId) {
        let token = self.parent.child_token();
        if let Some(previous) = self.pending.insert(submission, token.clone()) {
            previous.cancel();
        }
        let delay = self.delay;
        let commands = self.commands.clone();
        feedback_debug!(
            "confirmation scheduled submission={} delay_ms={}",
            submission,
            delay.as_millis()
        );

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    feedback_trace!("confirmation timer cancelled submission={}", submission);
                }
                _ = tokio::time::sleep(delay) => {
                    // The receiver is gone once the component unmounted.
                    let _ = commands.send(Command::Dispatch(Msg::ConfirmationElapsed { submission }));
                }
            }
        });
    }

    pub(crate) fn cancel(&mut self, submission: SubmissionId) {
        if let Some(token) = self.pending.remove(&submission) {
            token.cancel();
        }
    }

    /// Forgets a timer that already fired.
    pub(crate) fn complete(&mut self, submission: SubmissionId) {
        self.pending.remove(&submission);
    }

    pub(crate) fn cancel_all(&mut self) {
        for (_, token) in self.pending.drain() {
            token.cancel();
        }
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
