use crate::intent::classify;
use crate::modal::{CloseTrigger, Modal};
use crate::profile::ProfileRecord;
use crate::responder::respond;
use crate::widgets::{InputControl, SendControl, TranscriptView, Widgets};
use std::future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep, Sleep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    AwaitingResponse,
}

/// What happened to a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank after trimming; nothing changed.
    Empty,
    /// A reply is still pending; the attempt was rejected.
    Busy,
    Sent,
}

/// Signals raised by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Open,
    /// The user typed into the input control.
    Typed(String),
    SendClicked,
    EnterPressed,
    Close(CloseTrigger),
    Shutdown,
}

/// Snapshot the controller publishes after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatStatus {
    pub state: InputState,
    pub turns: usize,
    pub stopped: bool,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("chat controller has stopped")]
pub struct ControllerStopped;

struct PendingReply {
    message: String,
    timer: Pin<Box<Sleep>>,
}

/// Resolves when the pending reply is due, or never if nothing is pending.
async fn reply_due(pending: &mut Option<PendingReply>) {
    match pending {
        Some(reply) => reply.timer.as_mut().await,
        None => future::pending().await,
    }
}

/// Drives one chat panel: takes user messages, waits out the thinking delay, and
/// appends the assistant's answer. At most one reply is pending at a time.
pub struct ChatController<'p> {
    profile: &'p ProfileRecord,
    input: Box<dyn InputControl>,
    send: Box<dyn SendControl>,
    view: Box<dyn TranscriptView>,
    modal: Modal,
    state: InputState,
    pending: Option<PendingReply>,
    transcript: Vec<Turn>,
    thinking_delay: Duration,
    status: watch::Sender<ChatStatus>,
    stopped: bool,
}

impl<'p> ChatController<'p> {
    pub fn new(profile: &'p ProfileRecord, widgets: Widgets, thinking_delay: Duration) -> Self {
        let (status, _) = watch::channel(ChatStatus {
            state: InputState::Idle,
            turns: 0,
            stopped: false,
        });
        Self {
            profile,
            input: widgets.input,
            send: widgets.send,
            view: widgets.transcript,
            modal: Modal::new(widgets.panel, widgets.scroll),
            state: InputState::Idle,
            pending: None,
            transcript: Vec::new(),
            thinking_delay,
            status,
            stopped: false,
        }
    }

    /// Follows state changes from outside the event loop.
    pub fn subscribe(&self) -> watch::Receiver<ChatStatus> {
        self.status.subscribe()
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_visible()
    }

    pub fn open(&mut self) {
        self.modal.open();
        self.input.focus();
    }

    /// Closing hides the panel but leaves any pending reply in place.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        self.modal.close(trigger)
    }

    pub fn type_text(&mut self, text: &str) {
        if self.state == InputState::AwaitingResponse {
            log::debug!("Input disabled, dropping typed text");
            return;
        }
        self.input.set_value(text);
    }

    pub fn send(&mut self) -> SendOutcome {
        if self.state == InputState::AwaitingResponse {
            log::debug!("Send rejected, reply still pending");
            return SendOutcome::Busy;
        }
        let value = self.input.value();
        let message = value.trim();
        if message.is_empty() {
            return SendOutcome::Empty;
        }
        let message = message.to_string();

        self.append(Speaker::User, message.clone());
        self.input.set_value("");
        self.set_controls_disabled(true);
        self.state = InputState::AwaitingResponse;
        self.pending = Some(PendingReply {
            message,
            timer: Box::pin(sleep(self.thinking_delay)),
        });
        self.publish();
        SendOutcome::Sent
    }

    /// Waits for the pending reply, if any, and appends it.
    pub async fn settle(&mut self) {
        if self.pending.is_none() {
            return;
        }
        reply_due(&mut self.pending).await;
        self.deliver_reply();
    }

    /// Cancels any pending reply and hands every shared resource back.
    pub fn shutdown(&mut self) {
        if let Some(reply) = self.pending.take() {
            log::info!("Cancelled pending reply to {:?}", reply.message);
        }
        if self.state == InputState::AwaitingResponse {
            self.set_controls_disabled(false);
            self.state = InputState::Idle;
        }
        if self.modal.is_visible() {
            self.modal.hide();
        }
        self.stopped = true;
        self.publish();
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Open => self.open(),
            UiEvent::Typed(text) => self.type_text(&text),
            UiEvent::SendClicked | UiEvent::EnterPressed => {
                let outcome = self.send();
                log::debug!("Send outcome: {:?}", outcome);
            }
            UiEvent::Close(trigger) => {
                self.close(trigger);
            }
            UiEvent::Shutdown => self.shutdown(),
        }
    }

    /// Processes host events until `Shutdown` or until the sender side is dropped,
    /// delivering replies as their delay elapses.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        enum Step {
            Event(Option<UiEvent>),
            ReplyDue,
        }

        loop {
            let step = tokio::select! {
                event = events.recv() => Step::Event(event),
                () = reply_due(&mut self.pending) => Step::ReplyDue,
            };
            match step {
                Step::ReplyDue => self.deliver_reply(),
                Step::Event(Some(UiEvent::Shutdown)) | Step::Event(None) => {
                    self.shutdown();
                    break;
                }
                Step::Event(Some(event)) => self.dispatch(event),
            }
        }
        log::info!("Chat controller stopped after {} turns", self.transcript.len());
    }

    fn deliver_reply(&mut self) {
        let Some(reply) = self.pending.take() else {
            return;
        };
        let topic = classify(&reply.message);
        log::info!("Answering {} question", topic);
        self.append(Speaker::Bot, respond(topic, self.profile));
        self.set_controls_disabled(false);
        self.state = InputState::Idle;
        self.input.focus();
        self.publish();
    }

    fn publish(&self) {
        self.status.send_replace(ChatStatus {
            state: self.state,
            turns: self.transcript.len(),
            stopped: self.stopped,
        });
    }

    fn append(&mut self, speaker: Speaker, text: String) {
        let turn = Turn { speaker, text };
        self.view.append(&turn);
        self.transcript.push(turn);
    }

    fn set_controls_disabled(&mut self, disabled: bool) {
        self.input.set_disabled(disabled);
        self.send.set_disabled(disabled);
    }
}

/// Host-side handle that hands messages to a running controller one at a time,
/// the way a visitor can only type again once the input is re-enabled.
pub struct ChatFeeder {
    events: mpsc::Sender<UiEvent>,
    status: watch::Receiver<ChatStatus>,
    awaited_turns: usize,
}

impl ChatFeeder {
    pub fn new(events: mpsc::Sender<UiEvent>, status: watch::Receiver<ChatStatus>) -> Self {
        let awaited_turns = status.borrow().turns;
        Self {
            events,
            status,
            awaited_turns,
        }
    }

    pub async fn event(&self, event: UiEvent) -> Result<(), ControllerStopped> {
        self.events.send(event).await.map_err(|_| ControllerStopped)
    }

    /// Types and sends `text` without waiting for the answer.
    pub async fn submit(&mut self, text: &str) -> Result<(), ControllerStopped> {
        self.settled().await?;
        if text.trim().is_empty() {
            return Ok(());
        }
        let turns = self.status.borrow().turns;
        self.event(UiEvent::Typed(text.to_string())).await?;
        self.event(UiEvent::EnterPressed).await?;
        self.awaited_turns = turns + 2;
        Ok(())
    }

    /// Resolves once the last submitted message has its answer and the input is
    /// enabled again. Safe to drop and call again.
    pub async fn settled(&mut self) -> Result<(), ControllerStopped> {
        let awaited_turns = self.awaited_turns;
        let status = self
            .status
            .wait_for(|s| s.stopped || (s.state == InputState::Idle && s.turns >= awaited_turns))
            .await
            .map_err(|_| ControllerStopped)?;
        if status.stopped {
            return Err(ControllerStopped);
        }
        Ok(())
    }

    /// Sends `text` and waits for its answer.
    pub async fn message(&mut self, text: &str) -> Result<(), ControllerStopped> {
        self.submit(text).await?;
        self.settled().await
    }
}
