use crate::{MailError, MailMessage, Mailer, Result as MailErrorResult};

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use log::info;

pub const DEFAULT_OUTBOX_CAPACITY: usize = 64;

/// In-process outbox for local development and tests. Keeps only the most
/// recent `capacity` messages; older ones are dropped.
pub struct MemoryMailer {
    outbox: Mutex<VecDeque<MailMessage>>,
    capacity: usize,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_OUTBOX_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            outbox: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the retained messages, oldest first
    pub fn sent(&self) -> Vec<MailMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recent message addressed to `to`
    pub fn last_to(&self, to: &str) -> Option<MailMessage> {
        self.sent().into_iter().rev().find(|m| m.to == to)
    }

    pub fn clear(&self) {
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.clear();
        }
    }
}

impl Default for MemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: &MailMessage) -> MailErrorResult<()> {
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| MailError::delivery("outbox lock poisoned"))?;
        if outbox.len() == self.capacity {
            outbox.pop_front();
        }
        outbox.push_back(message.clone());

        info!(
            "Queued mail to {} (subject: {})",
            message.to, message.subject
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
