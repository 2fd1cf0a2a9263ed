use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::TaskResult;
use crate::core::{
    controller::generate_session,
    http::SectionSource,
    HadithError,
};

/// Runs network work off the UI thread and hands results back through a
/// channel the UI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, HadithError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn generate<S>(&self, source: S, max_attempts: usize)
    where
        S: SectionSource + Send + 'static,
    {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let mut rng = rand::rng();
            let result = runtime.block_on(generate_session(&source, &mut rng, max_attempts));

            let _ = sender.send(TaskResult::Generated(result));
        });
    }
}
