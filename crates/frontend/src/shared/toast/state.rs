pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

/// What the toast banner shows, and which hide request is still current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    message: String,
    visible: bool,
    generation: u64,
    pending_timeout_ms: Option<u32>,
}

/// Identifies the `show` call a scheduled hide belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTicket {
    generation: u64,
    pub timeout_ms: u32,
}

impl ToastState {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Timeout of the hide that is still expected to fire, if any.
    pub fn pending_timeout_ms(&self) -> Option<u32> {
        self.pending_timeout_ms
    }

    /// Show `message`; any earlier ticket becomes stale.
    pub fn show(&mut self, message: impl Into<String>, timeout_ms: Option<u32>) -> ToastTicket {
        let timeout_ms = timeout_ms.unwrap_or(DEFAULT_TOAST_TIMEOUT_MS);
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        self.pending_timeout_ms = Some(timeout_ms);
        ToastTicket {
            generation: self.generation,
            timeout_ms,
        }
    }

    /// Hide the toast if `ticket` is from the latest `show`.
    ///
    /// Returns whether the toast was hidden.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        self.pending_timeout_ms = None;
        true
    }
}
