use crate::view::LobbyView;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(3);

/// Transient error message that hides itself after [`ERROR_DISPLAY_TIME`].
/// A newer message restarts the timer.
pub struct ErrorBanner<V> {
    view: Arc<V>,
    hide_task: Option<JoinHandle<()>>,
}

impl<V: LobbyView> ErrorBanner<V> {
    pub fn new(view: Arc<V>) -> Self {
        Self {
            view,
            hide_task: None,
        }
    }

    pub fn show(&mut self, message: &str) {
        if let Some(task) = self.hide_task.take() {
            task.abort();
        }

        self.view.show_error(message);

        let view = self.view.clone();
        self.hide_task = Some(tokio::spawn(async move {
            tokio::time::sleep(ERROR_DISPLAY_TIME).await;
            view.hide_error();
        }));
    }
}

impl<V> Drop for ErrorBanner<V> {
    fn drop(&mut self) {
        if let Some(task) = self.hide_task.take() {
            task.abort();
        }
    }
}
