pub mod contact;
pub mod conversation;
pub mod intent;
pub mod modal;
pub mod profile;
pub mod responder;
pub mod settings;
pub mod widgets;

pub use conversation::{
    ChatController, ChatFeeder, ChatStatus, ControllerStopped, InputState, SendOutcome, Speaker,
    Turn, UiEvent,
};
pub use intent::{classify, Topic};
pub use profile::{ProfileRecord, DEFAULT_PROFILE};
pub use responder::respond;
pub use settings::Settings;
