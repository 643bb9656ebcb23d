use crate::SubmissionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::ConfirmationElapsed` for `submission` after the configured delay.
    ScheduleConfirmation { submission: SubmissionId },
    /// Drop a previously scheduled confirmation without delivering it.
    CancelConfirmation { submission: SubmissionId },
}
