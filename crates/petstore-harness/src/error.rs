use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Configuration values that cannot be used to build a harness.
    InvalidConfig {
        context: String,
        reason: String,
    },
    /// Configuration file could not be read.
    ConfigIo {
        context: String,
        reason: String,
    },
    /// A request spec that cannot be turned into a URL.
    InvalidRequest {
        context: String,
        reason: String,
    },
    Serialization {
        context: String,
        reason: String,
    },
    /// Network-layer failure (connect, DNS, timeout, body read).
    Transport {
        context: String,
        reason: String,
    },
    Assertion {
        context: String,
        message: String,
    },
    /// Scenario report could not be written.
    ReportIo {
        context: String,
        reason: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::InvalidConfig { context, reason } => {
                write!(f, "Invalid configuration in {context}: {reason}")
            }
            HarnessError::ConfigIo { context, reason } => {
                write!(f, "Configuration I/O error in {context}: {reason}")
            }
            HarnessError::InvalidRequest { context, reason } => {
                write!(f, "Invalid request {context}: {reason}")
            }
            HarnessError::Serialization { context, reason } => {
                write!(f, "Serialization error in {context}: {reason}")
            }
            HarnessError::Transport { context, reason } => {
                write!(f, "Transport error in {context}: {reason}")
            }
            HarnessError::Assertion { context, message } => {
                write!(f, "Assertion failed in {context}: {message}")
            }
            HarnessError::ReportIo { context, reason } => {
                write!(f, "Report I/O error in {context}: {reason}")
            }
        }
    }
}

impl std::error::Error for HarnessError {}

impl HarnessError {
    pub fn is_transport(&self) -> bool {
        matches!(self, HarnessError::Transport { .. })
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, HarnessError::Assertion { .. })
    }

    pub fn from_config_io_error(e: std::io::Error, context: &str) -> Self {
        HarnessError::ConfigIo {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_report_io_error(e: std::io::Error, context: &str) -> Self {
        HarnessError::ReportIo {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_serialization_error(e: impl fmt::Display, context: &str) -> Self {
        HarnessError::Serialization {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_transport_error(e: reqwest::Error, context: &str) -> Self {
        let reason = if e.is_timeout() {
            format!("timed out: {e}")
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            e.to_string()
        };
        HarnessError::Transport {
            context: context.to_string(),
            reason,
        }
    }
}
