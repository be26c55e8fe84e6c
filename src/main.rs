use anyhow::Result;
use portfolio_assistant::contact::{Notification, NotificationKind};
use portfolio_assistant::{
    ChatController, ChatFeeder, ControllerStopped, ProfileRecord, Settings, UiEvent,
    DEFAULT_PROFILE,
};
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

mod terminal;
use terminal::Command;

fn show(note: &Notification) {
    let marker = match note.kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
        NotificationKind::Info => "i",
    };
    println!("[{marker}] {}", note.message);
}

/// Feeds stdin lines to the controller. Messages wait in a backlog until the
/// previous answer has arrived, so nothing typed during the thinking delay is
/// lost and end of input still lets the last answer through. Returning drops
/// the sender, which tears the controller down.
async fn pump_stdin(mut feeder: ChatFeeder) -> Result<()> {
    enum Step {
        Line(Option<String>),
        Settled(Result<(), ControllerStopped>),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut photo = terminal::photo_modal();
    let mut backlog: VecDeque<String> = VecDeque::new();
    let mut reading = true;
    let mut awaiting_reply = false;

    loop {
        if !awaiting_reply {
            if let Some(message) = backlog.pop_front() {
                if feeder.submit(&message).await.is_err() {
                    return Ok(());
                }
                awaiting_reply = true;
                continue;
            }
            if !reading {
                return Ok(());
            }
        }

        let step = tokio::select! {
            line = lines.next_line(), if reading => Step::Line(line?),
            settled = feeder.settled(), if awaiting_reply => Step::Settled(settled),
            else => return Ok(()),
        };
        let line = match step {
            Step::Settled(Ok(())) => {
                awaiting_reply = false;
                continue;
            }
            Step::Settled(Err(_)) => return Ok(()),
            Step::Line(None) => {
                reading = false;
                continue;
            }
            Step::Line(Some(line)) => line,
        };

        let events = match terminal::parse_line(&line) {
            Command::Message(text) => {
                if awaiting_reply {
                    log::debug!("Queued {:?} until the current answer arrives", text);
                }
                backlog.push_back(text);
                continue;
            }
            Command::Events(batch) => batch,
            Command::Close(trigger) => terminal::route_close(&mut photo, trigger)
                .into_iter()
                .collect(),
            Command::Photo => {
                photo.open();
                continue;
            }
            Command::Contact(form) => {
                show(&form.submit());
                continue;
            }
            Command::Help => {
                show(&terminal::help());
                continue;
            }
            Command::Nothing => continue,
        };
        for event in events {
            let quitting = event == UiEvent::Shutdown;
            if feeder.event(event).await.is_err() || quitting {
                return Ok(());
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let profile = match &settings.profile.path {
        Some(path) => {
            log::info!("Loading profile from {:?}", path);
            ProfileRecord::load_from_file(path)?
        }
        None => DEFAULT_PROFILE.clone(),
    };
    log::info!("\n{}", profile.welcome_banner());

    let Some(widgets) = terminal::widgets() else {
        log::warn!("No chat surface available; nothing to do.");
        return Ok(());
    };

    let mut controller = ChatController::new(&profile, widgets, settings.thinking_delay());
    log::info!(
        "Starting portfolio assistant for {} (thinking delay {:?})",
        profile.name(),
        settings.thinking_delay()
    );

    let (tx, rx) = mpsc::channel(32);
    if settings.chat.open_on_start {
        tx.send(UiEvent::Open).await?;
    }
    let feeder = ChatFeeder::new(tx, controller.subscribe());
    let (_, pumped) = tokio::join!(controller.run(rx), pump_stdin(feeder));
    pumped
}
