//! Delays and one-shot scheduled navigation.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

/// Sleep on whichever timer the current platform provides.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// A navigation that runs once after a delay.
///
/// [`ScheduledNavigation::new`] returns the guard together with the future that
/// does the waiting; the caller spawns the future on its executor and keeps the
/// guard in state owned by the view. Cancelling or dropping the guard before the
/// delay elapses means the navigation never runs.
#[derive(Debug)]
pub struct ScheduledNavigation {
    handle: AbortHandle,
}

impl ScheduledNavigation {
    pub fn new<F>(delay: Duration, navigate: F) -> (Self, impl Future<Output = ()>)
    where
        F: FnOnce(),
    {
        let (handle, registration) = AbortHandle::new_pair();
        let wait = Abortable::new(
            async move {
                sleep(delay).await;
                navigate();
            },
            registration,
        );
        let task = async move {
            if wait.await.is_err() {
                tracing::debug!("scheduled navigation abandoned");
            }
        };
        (Self { handle }, task)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for ScheduledNavigation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
