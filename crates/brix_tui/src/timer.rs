//! Delayed delivery of opponent tickets.

use std::time::Duration;

use brix_tictactoe::OpponentTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Sends an [`OpponentTicket`] back to the event loop after a delay.
///
/// At most one ticket is in flight: arming again aborts the previous task.
/// Dropping the timer aborts it too.
#[derive(Debug)]
pub struct OpponentTimer {
    tx: mpsc::UnboundedSender<OpponentTicket>,
    task: Option<JoinHandle<()>>,
}

impl OpponentTimer {
    /// Creates an idle timer delivering into `tx`.
    pub fn new(tx: mpsc::UnboundedSender<OpponentTicket>) -> Self {
        Self { tx, task: None }
    }

    /// Delivers `ticket` after `delay`, replacing any armed ticket.
    #[instrument(skip(self))]
    pub fn arm(&mut self, ticket: OpponentTicket, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            sleep(delay).await;
            debug!(%ticket, "Opponent timer elapsed");
            let _ = tx.send(ticket);
        }));
    }

    /// Aborts the armed task, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Aborting opponent timer");
            task.abort();
        }
    }

    /// True while a ticket is waiting to be delivered.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for OpponentTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
