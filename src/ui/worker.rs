use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::data::UserRepository;
use crate::ui::events::AppEvent;

/// A fetch request from the UI. `generation` travels with the result so the
/// app can tell whether the answer is still the one it is waiting for.
#[derive(Debug, Clone, Copy)]
pub struct FetchCommand {
    pub generation: u64,
}

pub type FetchCommandSender = mpsc::Sender<FetchCommand>;

/// Drives the repository on behalf of the UI.
///
/// Commands are processed one at a time, so there is a single logical
/// in-flight fetch. Failures are folded into the result here; nothing
/// propagates past this boundary. The worker ends when the command channel
/// closes or the event channel is gone (the UI scope has ended), dropping
/// any unresolved result on the floor.
pub async fn run_fetch_worker(
    repository: Arc<dyn UserRepository>,
    mut commands: mpsc::Receiver<FetchCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(generation = command.generation, "fetch started");
        let result = repository.fetch_all().await;
        match &result {
            Ok(users) => {
                tracing::info!(
                    generation = command.generation,
                    count = users.len(),
                    "fetch succeeded"
                );
            }
            Err(err) => {
                tracing::warn!(
                    generation = command.generation,
                    error = %err,
                    "fetch failed"
                );
            }
        }
        let event = AppEvent::FetchResult {
            generation: command.generation,
            result,
        };
        if events.send(event).is_err() {
            break;
        }
    }
}
