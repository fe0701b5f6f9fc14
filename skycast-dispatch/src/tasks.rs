//! Keyed async tasks
//!
//! Every task is registered under a [`TaskKey`]. Spawning under a key that is
//! already running aborts the previous task first, so at most one task per
//! key is ever alive. A task's output action is sent back over the action
//! channel; an aborted task sends nothing.
//!
//! ```ignore
//! tasks.spawn("current", async move {
//!     match client.fetch_current(&locator).await {
//!         Ok(data) => Action::CurrentDidLoad { request, data },
//!         Err(error) => Action::CurrentDidError { request, error },
//!     }
//! });
//!
//! tasks.interval("tick", Duration::from_millis(120), || Action::Tick);
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::Action;

/// Name of a task slot
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Registry of running tasks, one per key
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Finished tasks send their action through `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn `future` under `key`, aborting whatever ran there before.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        tracing::trace!(task = key.name(), "task spawned");
        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Emit `action_fn()` every `period` until cancelled.
    ///
    /// The first action is sent one period after the call.
    pub fn interval<F>(&mut self, key: impl Into<TaskKey>, period: Duration, action_fn: F) -> &mut Self
    where
        F: Fn() -> A + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// No-op when nothing runs under `key`.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
            tracing::trace!(task = key.name(), "task aborted");
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task is registered under `key`.
    ///
    /// A task stays registered after it finishes until it is replaced or
    /// cancelled.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
