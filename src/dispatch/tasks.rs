//! Keyed async tasks that resolve into actions.
//!
//! Each task runs a future to completion and sends the resulting action
//! back over the shared channel. Tasks are identified by key: spawning
//! under an occupied key cancels the previous task, while distinct keys
//! run concurrently.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::dispatch::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    /// Create a new task key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the key name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'_ str> for TaskKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Registry of running async tasks keyed for cancellation.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a new task manager sending results to `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// The future's output action is sent to the action channel on
    /// completion; a cancelled task sends nothing.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op if the key is not registered.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task with the given key has been spawned and not cancelled.
    pub fn is_registered(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Done(u32),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Done"
        }
    }

    #[tokio::test]
    async fn spawned_task_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("fetch", async { TestAction::Done(1) });

        assert_eq!(rx.recv().await, Some(TestAction::Done(1)));
    }

    #[tokio::test]
    async fn distinct_keys_run_concurrently() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("fetch-1", async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            TestAction::Done(1)
        });
        tasks.spawn("fetch-2", async { TestAction::Done(2) });

        assert!(tasks.is_registered(&TaskKey::new("fetch-1")));
        assert!(tasks.is_registered(&TaskKey::new("fetch-2")));

        // Both complete; the slow one is not cancelled by the fast one.
        assert_eq!(rx.recv().await, Some(TestAction::Done(2)));
        assert_eq!(rx.recv().await, Some(TestAction::Done(1)));
    }

    #[tokio::test]
    async fn same_key_replaces_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("fetch", async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            TestAction::Done(1)
        });
        tasks.spawn("fetch", async { TestAction::Done(2) });

        assert_eq!(rx.recv().await, Some(TestAction::Done(2)));

        // The replaced task was aborted, so dropping the manager leaves
        // no live sender and the channel closes without a Done(1).
        drop(tasks);
        assert_eq!(rx.recv().await, None);
    }
}
