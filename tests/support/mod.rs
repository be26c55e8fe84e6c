use portfolio_assistant::widgets::{
    InputControl, PanelSurface, ScrollLock, SendControl, TranscriptView, Widgets,
};
use portfolio_assistant::Turn;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the controller wrote to the fake page.
#[derive(Debug, Default)]
pub struct Page {
    pub input: String,
    pub input_disabled: bool,
    pub send_disabled: bool,
    pub focus_count: usize,
    pub rendered: Vec<Turn>,
    pub shown: bool,
    pub scroll_locked: bool,
}

pub type SharedPage = Rc<RefCell<Page>>;

struct Input(SharedPage);
struct SendButton(SharedPage);
struct View(SharedPage);
struct Panel(SharedPage);
struct Lock(SharedPage);

impl InputControl for Input {
    fn value(&self) -> String {
        self.0.borrow().input.clone()
    }
    fn set_value(&mut self, value: &str) {
        self.0.borrow_mut().input = value.to_string();
    }
    fn set_disabled(&mut self, disabled: bool) {
        self.0.borrow_mut().input_disabled = disabled;
    }
    fn focus(&mut self) {
        self.0.borrow_mut().focus_count += 1;
    }
}

impl SendControl for SendButton {
    fn set_disabled(&mut self, disabled: bool) {
        self.0.borrow_mut().send_disabled = disabled;
    }
}

impl TranscriptView for View {
    fn append(&mut self, turn: &Turn) {
        self.0.borrow_mut().rendered.push(turn.clone());
    }
}

impl PanelSurface for Panel {
    fn show(&mut self) {
        self.0.borrow_mut().shown = true;
    }
    fn hide(&mut self) {
        self.0.borrow_mut().shown = false;
    }
}

impl ScrollLock for Lock {
    fn lock(&mut self) {
        self.0.borrow_mut().scroll_locked = true;
    }
    fn release(&mut self) {
        self.0.borrow_mut().scroll_locked = false;
    }
}

pub fn fake_widgets() -> (Widgets, SharedPage) {
    let page = SharedPage::default();
    let widgets = Widgets::builder()
        .input(Input(page.clone()))
        .send(SendButton(page.clone()))
        .transcript(View(page.clone()))
        .panel(Panel(page.clone()))
        .scroll(Lock(page.clone()))
        .build()
        .expect("all widgets provided");
    (widgets, page)
}

/// A page that is missing its send button.
pub fn partial_builder() -> portfolio_assistant::widgets::WidgetsBuilder {
    let page = SharedPage::default();
    Widgets::builder()
        .input(Input(page.clone()))
        .transcript(View(page.clone()))
        .panel(Panel(page.clone()))
        .scroll(Lock(page))
}
