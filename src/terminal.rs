//! Terminal stand-ins for the page controls, so the assistant can be used from a shell.

use portfolio_assistant::contact::{ContactForm, Notification};
use portfolio_assistant::modal::{CloseTrigger, Modal};
use portfolio_assistant::widgets::{
    InputControl, PanelSurface, ScrollLock, SendControl, TranscriptView, Widgets,
};
use portfolio_assistant::{Speaker, Turn, UiEvent};

#[derive(Default)]
struct TerminalInput {
    value: String,
    disabled: bool,
}

impl InputControl for TerminalInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            println!("(thinking...)");
        }
    }

    fn focus(&mut self) {
        if !self.disabled {
            println!("Ask me something (/help for commands):");
        }
    }
}

struct TerminalSend;

impl SendControl for TerminalSend {
    fn set_disabled(&mut self, disabled: bool) {
        log::trace!("send control disabled={}", disabled);
    }
}

struct TerminalTranscript;

impl TranscriptView for TerminalTranscript {
    fn append(&mut self, turn: &Turn) {
        let label = match turn.speaker {
            Speaker::User => "You",
            Speaker::Bot => "Assistant",
        };
        println!("{label}: {}", turn.text);
    }
}

struct TerminalPanel;

impl PanelSurface for TerminalPanel {
    fn show(&mut self) {
        println!("--- chat opened ---");
    }

    fn hide(&mut self) {
        println!("--- chat closed ---");
    }
}

struct TerminalPhotoPanel;

impl PanelSurface for TerminalPhotoPanel {
    fn show(&mut self) {
        println!("--- profile photo ---");
    }

    fn hide(&mut self) {
        println!("--- photo closed ---");
    }
}

struct TerminalScrollLock;

impl ScrollLock for TerminalScrollLock {
    fn lock(&mut self) {
        log::debug!("scroll locked");
    }

    fn release(&mut self) {
        log::debug!("scroll released");
    }
}

pub fn widgets() -> Option<Widgets> {
    Widgets::builder()
        .input(TerminalInput::default())
        .send(TerminalSend)
        .transcript(TerminalTranscript)
        .panel(TerminalPanel)
        .scroll(TerminalScrollLock)
        .build()
}

/// The enlarged profile photo. Shares the page scroll lock with the chat panel.
pub fn photo_modal() -> Modal {
    Modal::new(Box::new(TerminalPhotoPanel), Box::new(TerminalScrollLock))
}

/// Close commands go to the photo while it is showing, otherwise to the chat.
pub fn route_close(photo: &mut Modal, trigger: CloseTrigger) -> Option<UiEvent> {
    if photo.is_visible() {
        photo.close(trigger);
        None
    } else {
        Some(UiEvent::Close(trigger))
    }
}

pub fn help() -> Notification {
    Notification::info(HELP)
}

const HELP: &str = "\
/open                      open the chat panel
/photo                     enlarge the profile photo
/close                     close it with the close button
/outside                   click outside the panel
/esc                       press Escape
/contact n | e | s | m     submit the contact form
/quit                      leave
anything else              send it as a message";

#[derive(Debug, PartialEq)]
pub enum Command {
    Message(String),
    Events(Vec<UiEvent>),
    Close(CloseTrigger),
    Photo,
    Contact(ContactForm),
    Help,
    Nothing,
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("/contact") {
        let mut fields = rest.split('|').map(|f| f.trim().to_string());
        return Command::Contact(ContactForm {
            name: fields.next().unwrap_or_default(),
            email: fields.next().unwrap_or_default(),
            subject: fields.next().unwrap_or_default(),
            message: fields.next().unwrap_or_default(),
        });
    }
    match trimmed {
        "/open" => Command::Events(vec![UiEvent::Open]),
        "/close" => Command::Close(CloseTrigger::Button),
        "/outside" => Command::Close(CloseTrigger::Backdrop),
        "/esc" => Command::Close(CloseTrigger::Escape),
        "/photo" => Command::Photo,
        "/quit" => Command::Events(vec![UiEvent::Shutdown]),
        "/help" => Command::Help,
        "" => Command::Nothing,
        _ => Command::Message(line.to_string()),
    }
}
