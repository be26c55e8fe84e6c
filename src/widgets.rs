//! The UI boundary the conversation controller attaches to.
//!
//! Each trait is one control on the host page. The controller only writes to
//! them (apart from reading the input value) and never reads the transcript back.

use crate::conversation::Turn;

/// Text entry for the user's message.
pub trait InputControl {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn set_disabled(&mut self, disabled: bool);
    fn focus(&mut self);
}

/// The send button.
pub trait SendControl {
    fn set_disabled(&mut self, disabled: bool);
}

/// Renders turns in append order. Scrolling is its own business.
pub trait TranscriptView {
    fn append(&mut self, turn: &Turn);
}

/// The chat panel itself.
pub trait PanelSurface {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Page-level scroll lock held while a modal surface is open.
pub trait ScrollLock {
    fn lock(&mut self);
    fn release(&mut self);
}

pub struct Widgets {
    pub input: Box<dyn InputControl>,
    pub send: Box<dyn SendControl>,
    pub transcript: Box<dyn TranscriptView>,
    pub panel: Box<dyn PanelSurface>,
    pub scroll: Box<dyn ScrollLock>,
}

impl Widgets {
    pub fn builder() -> WidgetsBuilder {
        WidgetsBuilder::default()
    }
}

/// Collects whatever controls the host page provides.
#[derive(Default)]
pub struct WidgetsBuilder {
    input: Option<Box<dyn InputControl>>,
    send: Option<Box<dyn SendControl>>,
    transcript: Option<Box<dyn TranscriptView>>,
    panel: Option<Box<dyn PanelSurface>>,
    scroll: Option<Box<dyn ScrollLock>>,
}

impl WidgetsBuilder {
    pub fn input(mut self, input: impl InputControl + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn send(mut self, send: impl SendControl + 'static) -> Self {
        self.send = Some(Box::new(send));
        self
    }

    pub fn transcript(mut self, transcript: impl TranscriptView + 'static) -> Self {
        self.transcript = Some(Box::new(transcript));
        self
    }

    pub fn panel(mut self, panel: impl PanelSurface + 'static) -> Self {
        self.panel = Some(Box::new(panel));
        self
    }

    pub fn scroll(mut self, scroll: impl ScrollLock + 'static) -> Self {
        self.scroll = Some(Box::new(scroll));
        self
    }

    /// Returns `None` when any control is missing; the chat is then left unwired
    /// instead of failing the page.
    pub fn build(self) -> Option<Widgets> {
        let missing: Vec<&str> = [
            ("input", self.input.is_none()),
            ("send", self.send.is_none()),
            ("transcript", self.transcript.is_none()),
            ("panel", self.panel.is_none()),
            ("scroll lock", self.scroll.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            log::warn!("Chat widgets missing ({}); chat left unwired", missing.join(", "));
            return None;
        }
        Some(Widgets {
            input: self.input?,
            send: self.send?,
            transcript: self.transcript?,
            panel: self.panel?,
            scroll: self.scroll?,
        })
    }
}
