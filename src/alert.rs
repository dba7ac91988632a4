//! Dismissible notification banner and the feed that drives it.
//!
//! Nothing in this crate detects anomalies. A producer (an external detector,
//! or the `--alert` flag of the binary) holds an [`AlertSender`] and pushes
//! messages; the dashboard drains them once per tick.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("alert feed disconnected, message dropped: {0}")]
    Disconnected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertBanner {
    message: Option<String>,
}

impl AlertBanner {
    pub fn hidden() -> Self {
        Self { message: None }
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        if let Some(msg) = self.message.take() {
            info!(message = %msg, "alert dismissed");
        }
    }

    fn show(&mut self, message: String) {
        self.message = Some(message);
    }
}

/// Producer handle. Cheap to clone, may be moved to another thread.
#[derive(Debug, Clone)]
pub struct AlertSender {
    tx: Sender<String>,
}

impl AlertSender {
    pub fn raise_alert(&self, message: impl Into<String>) -> Result<(), AlertError> {
        let message = message.into();
        debug!(message = %message, "alert raised");
        self.tx
            .send(message)
            .map_err(|e| AlertError::Disconnected(e.0))
    }
}

#[derive(Debug)]
pub struct AlertFeed {
    rx: Receiver<String>,
    tx: Sender<String>,
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertFeed {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    pub fn sender(&self) -> AlertSender {
        AlertSender {
            tx: self.tx.clone(),
        }
    }

    /// Drain pending messages into `banner`; the newest one wins.
    /// Returns how many messages were consumed.
    pub fn drain_into(&self, banner: &mut AlertBanner) -> usize {
        let mut consumed = 0;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    consumed += 1;
                    banner.show(msg);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if consumed > 0 {
            info!(consumed, message = ?banner.message(), "alert shown");
        }
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn banner_starts_hidden() {
        let banner = AlertBanner::hidden();
        assert!(!banner.is_visible());
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn drained_message_shows_and_dismiss_hides() {
        let feed = AlertFeed::new();
        let mut banner = AlertBanner::hidden();
        feed.sender().raise_alert("Unusual spending").unwrap();

        assert_eq!(feed.drain_into(&mut banner), 1);
        assert_eq!(banner.message(), Some("Unusual spending"));

        banner.dismiss();
        assert!(!banner.is_visible());
        banner.dismiss();
        assert!(!banner.is_visible());
    }

    #[test]
    fn newest_message_wins() {
        let feed = AlertFeed::new();
        let sender = feed.sender();
        sender.raise_alert("first").unwrap();
        sender.raise_alert("second").unwrap();

        let mut banner = AlertBanner::hidden();
        assert_eq!(feed.drain_into(&mut banner), 2);
        assert_eq!(banner.message(), Some("second"));
        assert_eq!(feed.drain_into(&mut banner), 0);
    }

    #[test]
    fn producer_on_another_thread() {
        let feed = AlertFeed::new();
        let sender = feed.sender();
        thread::spawn(move || sender.raise_alert("from detector").unwrap())
            .join()
            .unwrap();

        let mut banner = AlertBanner::hidden();
        feed.drain_into(&mut banner);
        assert_eq!(banner.message(), Some("from detector"));
    }

    #[test]
    fn raising_into_dropped_feed_errors() {
        let sender = AlertFeed::new().sender();
        assert_eq!(
            sender.raise_alert("late"),
            Err(AlertError::Disconnected("late".to_string()))
        );
    }
}
