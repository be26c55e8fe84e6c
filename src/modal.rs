use crate::widgets::{PanelSurface, ScrollLock};

/// The ways a user can dismiss a modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

/// Show/hide state of a modal panel together with the page scroll lock it holds
/// while visible. Every close trigger ends in the same hidden, unlocked state.
pub struct Modal {
    panel: Box<dyn PanelSurface>,
    scroll: Box<dyn ScrollLock>,
    visible: bool,
}

impl Modal {
    pub fn new(panel: Box<dyn PanelSurface>, scroll: Box<dyn ScrollLock>) -> Self {
        Self {
            panel,
            scroll,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.panel.show();
        self.scroll.lock();
        self.visible = true;
    }

    /// Returns whether the trigger closed the modal. Escape only applies while shown.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if trigger == CloseTrigger::Escape && !self.visible {
            return false;
        }
        log::debug!("Closing modal via {:?}", trigger);
        self.hide();
        true
    }

    /// Hides the panel and gives the scroll lock back.
    pub(crate) fn hide(&mut self) {
        self.panel.hide();
        self.scroll.release();
        self.visible = false;
    }
}
