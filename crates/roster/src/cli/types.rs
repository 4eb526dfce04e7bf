//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::{STATUS_ACTIVE, STATUS_INACTIVE, STATUS_PENDING};

/// Employee status for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusArg {
    /// Currently employed
    #[default]
    Active,
    /// No longer active
    Inactive,
    /// Awaiting activation
    Pending,
}

impl StatusArg {
    /// The status text stored on the record
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => STATUS_ACTIVE,
            Self::Inactive => STATUS_INACTIVE,
            Self::Pending => STATUS_PENDING,
        }
    }
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusArg> for String {
    fn from(status: StatusArg) -> Self {
        status.as_str().to_string()
    }
}
