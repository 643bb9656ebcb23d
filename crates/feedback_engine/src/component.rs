use feedback_core::{update, Effect, Field, FormState, Msg};
use feedback_logging::{feedback_debug, feedback_info, feedback_trace};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::constants::{BUTTON_SUBMIT, INPUT_MESSAGE, INPUT_NAME};
use crate::scheduler::ConfirmationScheduler;
use crate::{render, Document, FormConfig, Screen, UiEvent, UserEvent, UserEventError};

pub(crate) enum Command {
    Ui(UiEvent),
    Dispatch(Msg),
    /// Acknowledged once every command queued before it has been handled.
    Flush(oneshot::Sender<()>),
}

/// Cloneable sending side of a mounted form's command queue.
#[derive(Clone)]
pub(crate) struct CommandSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandSender {
    pub(crate) fn send(&self, command: Command) -> Result<(), UserEventError> {
        self.tx
            .send(command)
            .map_err(|_| UserEventError::Unmounted)
    }

    pub(crate) async fn flush(&self) -> Result<(), UserEventError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(Command::Flush(ack_tx))?;
        ack_rx.await.map_err(|_| UserEventError::Unmounted)
    }
}

/// A feedback form mounted on the current tokio runtime.
///
/// The form's state lives inside a single event-loop task; everything else
/// talks to it through the command queue and observes it through rendered
/// documents. Dropping the handle unmounts the form.
pub struct MountedForm {
    commands: CommandSender,
    document: watch::Receiver<Document>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Mounts a fresh form. Must be called from within a tokio runtime.
pub fn mount(config: FormConfig) -> MountedForm {
    let state = FormState::new();
    let (doc_tx, doc_rx) = watch::channel(render(&state.view()));
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();
    let scheduler = ConfirmationScheduler::new(
        config.confirmation_delay(),
        shutdown.child_token(),
        cmd_tx.clone(),
    );

    let event_loop = EventLoop {
        state,
        scheduler,
        doc_tx,
    };
    let task = tokio::spawn(event_loop.run(cmd_rx, shutdown.clone()));
    feedback_info!(
        "feedback form mounted confirmation_delay_ms={}",
        config.confirmation_delay_ms
    );

    MountedForm {
        commands: CommandSender { tx: cmd_tx },
        document: doc_rx,
        shutdown,
        task: Some(task),
    }
}

impl MountedForm {
    pub fn screen(&self) -> Screen {
        Screen::new(self.document.clone())
    }

    pub fn user(&self) -> UserEvent {
        UserEvent::new(self.commands.clone(), self.document.clone())
    }

    /// Queues a raw UI event without waiting for it to be handled.
    pub fn dispatch(&self, event: UiEvent) -> Result<(), UserEventError> {
        self.commands.send(Command::Ui(event))
    }

    /// Resolves once every event queued so far has been handled.
    pub async fn flush(&self) -> Result<(), UserEventError> {
        self.commands.flush().await
    }

    pub fn is_mounted(&self) -> bool {
        !self.shutdown.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Tears the form down and waits for its event loop to stop.
    /// Pending confirmations are cancelled and never delivered.
    pub async fn unmount(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for MountedForm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct EventLoop {
    state: FormState,
    scheduler: ConfirmationScheduler,
    doc_tx: watch::Sender<Document>,
}

impl EventLoop {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        shutdown: CancellationToken,
    ) {
        loop {
            let command = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                command = commands.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };
            match command {
                Command::Ui(event) => {
                    if let Some(msg) = map_event(event) {
                        self.dispatch(msg);
                    }
                }
                Command::Dispatch(msg) => self.dispatch(msg),
                Command::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }

        let dropped = self.scheduler.pending_count();
        self.scheduler.cancel_all();
        feedback_info!("feedback form unmounted pending_confirmations={}", dropped);
    }

    fn dispatch(&mut self, msg: Msg) {
        if let Msg::ConfirmationElapsed { submission } = &msg {
            self.scheduler.complete(*submission);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.doc_tx.send_replace(render(&state.view()));
        }
        self.state = state;

        for effect in effects {
            match effect {
                Effect::ScheduleConfirmation { submission } => {
                    self.scheduler.schedule(submission);
                }
                Effect::CancelConfirmation { submission } => {
                    feedback_debug!("confirmation cancelled submission={}", submission);
                    self.scheduler.cancel(submission);
                }
            }
        }
    }
}

fn map_event(event: UiEvent) -> Option<Msg> {
    match event {
        UiEvent::InputTextChanged { control_id, text } if control_id == INPUT_NAME => {
            Some(Msg::FieldEdited {
                field: Field::Name,
                value: text,
            })
        }
        UiEvent::InputTextChanged { control_id, text } if control_id == INPUT_MESSAGE => {
            Some(Msg::FieldEdited {
                field: Field::Message,
                value: text,
            })
        }
        UiEvent::ButtonClicked { control_id } if control_id == BUTTON_SUBMIT => {
            Some(Msg::SubmitClicked)
        }
        other => {
            feedback_trace!("ignoring event {:?}", other);
            None
        }
    }
}
