use serde::{Deserialize, Serialize};

use crate::ValidationResult;

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A timestamp field stored as milliseconds since the Unix epoch.
///
/// With `use_now` set, every validation pass overwrites the value with the
/// current time, which makes the field a "last touched" stamp rather than a
/// creation stamp. Without it, the first validation of an unset date pins it
/// to the current time, so a validated document reads the same timestamp on
/// every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateItem {
    #[serde(default)]
    value: Option<i64>,
    #[serde(default)]
    use_now: bool,
}

impl DateItem {
    pub fn new(value: Option<i64>) -> Self {
        Self {
            value,
            use_now: false,
        }
    }

    /// A date refreshed to the current time on every validation.
    pub fn use_now() -> Self {
        Self {
            value: None,
            use_now: true,
        }
    }

    /// The stored timestamp, if one was ever assigned.
    pub fn stored(&self) -> Option<i64> {
        self.value
    }

    /// The stored timestamp, or the current time when unset.
    pub fn value(&self) -> i64 {
        self.value.unwrap_or_else(now_millis)
    }

    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value;
    }

    pub fn is_use_now(&self) -> bool {
        self.use_now
    }

    /// Always succeeds. Rewrites the value to now when `use_now` is set or
    /// when no value was assigned.
    pub(crate) fn validate(&mut self) -> ValidationResult {
        if self.use_now || self.value.is_none() {
            self.value = Some(now_millis());
        }
        Ok(())
    }
}
