//! Running chat transcript with optimistic placeholders.
//!
//! A send appends the user entry and a placeholder reply bound to a ticket.
//! Resolution replaces exactly that placeholder, so replies that settle out
//! of order can never overwrite each other's slot.

use crate::shared::error::ChatError;

pub const GREETING: &str = "Hello! I'm your health AI assistant. I can help you understand your vital signs and provide health insights. What would you like to know?";
pub const PLACEHOLDER: &str = "...";
pub const APOLOGY: &str = "Sorry, I am having trouble connecting. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
    pub timestamp: String,
    pending: Option<Ticket>,
}

impl ChatEntry {
    fn new(role: Role, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: timestamp.into(),
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    next_ticket: u64,
}

impl ChatTranscript {
    pub fn new(greeting_time: impl Into<String>) -> Self {
        Self {
            entries: vec![ChatEntry::new(Role::Assistant, GREETING, greeting_time)],
            next_ticket: 0,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Appends the user message and a placeholder reply. Blank input is
    /// ignored and yields `None`.
    pub fn begin(&mut self, text: &str, now: &str) -> Option<Ticket> {
        if text.trim().is_empty() {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.entries.push(ChatEntry::new(Role::User, text, now));
        let mut placeholder = ChatEntry::new(Role::Assistant, PLACEHOLDER, "");
        placeholder.pending = Some(ticket);
        self.entries.push(placeholder);
        Some(ticket)
    }

    /// Replaces the placeholder for `ticket` with the reply, or with the
    /// apology when the request failed. Returns `false` for unknown or
    /// already settled tickets.
    pub fn resolve(&mut self, ticket: Ticket, reply: Result<String, ChatError>, now: &str) -> bool {
        let Some(slot) = self
            .entries
            .iter_mut()
            .find(|e| e.pending == Some(ticket))
        else {
            return false;
        };
        let text = match reply {
            Ok(text) => text,
            Err(_) => APOLOGY.to_string(),
        };
        *slot = ChatEntry::new(Role::Assistant, text, now);
        true
    }
}
