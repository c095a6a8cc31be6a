use chrono::{DateTime, Duration, Utc};

/// Single-slot cache holding one value with a time-to-live.
///
/// Expired values stay stored but are reported absent; nothing evicts them
/// except the next `set`.
#[derive(Debug, Clone)]
pub struct ExpiringValue<T> {
    value: Option<T>,
    expires_at: Option<DateTime<Utc>>,
}

impl<T> ExpiringValue<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            expires_at: None,
        }
    }

    /// Store `value` until `now + ttl`, replacing whatever was there.
    pub fn set(&mut self, value: T, ttl: Duration, now: DateTime<Utc>) {
        self.value = Some(value);
        self.expires_at = Some(now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC));
    }

    /// Value if it is still live at `now`
    pub fn get(&self, now: DateTime<Utc>) -> Option<&T> {
        match (&self.value, self.expires_at) {
            (Some(value), Some(expires_at)) if now < expires_at => Some(value),
            _ => None,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl<T> Default for ExpiringValue<T> {
    fn default() -> Self {
        Self::new()
    }
}
