/// Filesystem watching for in-page navigation detection
///
/// The desktop analog of observing content mutations: the open page folder
/// is watched recursively, and every subtree change is surfaced so the page
/// can be re-resolved. Deciding whether the change actually moved the page
/// to a new address is up to the application.
use iced::futures::SinkExt;
use iced::{stream, Subscription};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;

/// Events emitted by the page watcher
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Something under the page folder changed
    Changed,
    /// The watcher could not be started or broke down
    WatchFailed(String),
}

/// Watch a page folder and emit an event whenever its subtree changes
pub fn page_changes(root: PathBuf) -> Subscription<PageEvent> {
    Subscription::run_with_id(
        root.clone(),
        stream::channel(100, move |mut output| async move {
            let (tx, mut rx) = tokio::sync::mpsc::channel(100);

            // The notify callback runs on its own thread; forward into tokio
            let mut watcher = match RecommendedWatcher::new(
                move |result: notify::Result<Event>| {
                    let _ = tx.blocking_send(result);
                },
                Config::default(),
            ) {
                Ok(watcher) => watcher,
                Err(error) => {
                    let _ = output.send(PageEvent::WatchFailed(error.to_string())).await;
                    return;
                }
            };

            if let Err(error) = watcher.watch(&root, RecursiveMode::Recursive) {
                let _ = output.send(PageEvent::WatchFailed(error.to_string())).await;
                return;
            }

            while let Some(result) = rx.recv().await {
                match result {
                    Ok(event) if is_content_change(&event.kind) => {
                        let _ = output.send(PageEvent::Changed).await;
                    }
                    Ok(_) => {}
                    Err(error) => {
                        let _ = output.send(PageEvent::WatchFailed(error.to_string())).await;
                    }
                }
            }
        }),
    )
}

/// Only creations, modifications and removals count as content changes
fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}
