//! Transient notification state.

/// Visual style of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A message shown in the notification toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Which `show` call produced this notification.
    pub generation: u64,
}

/// Holds the visible notification.
///
/// Each `show` bumps the generation. A hide request for an older generation
/// is ignored, so only the latest message's timer can dismiss it.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    generation: u64,
}

impl Notifier {
    /// Replace whatever is shown and return the new generation.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.current = Some(Notification {
            message: message.into(),
            severity,
            generation: self.generation,
        });
        self.generation
    }

    /// Hide the notification if it is still the one from `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(n) if n.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
