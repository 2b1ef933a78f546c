use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-facing, non-fatal notification. Failures in the generation path are
/// converted into these at the generator boundary instead of propagating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn warning(message: &str) -> Notice {
        return Notice {
            severity: Severity::Warning,
            message: message.to_string(),
        };
    }

    pub fn error(message: &str) -> Notice {
        return Notice {
            severity: Severity::Error,
            message: message.to_string(),
        };
    }

    pub fn insufficient_balance() -> Notice {
        return Notice::warning(
            "Not enough tokens available to generate. Please buy more to continue.",
        );
    }
}
