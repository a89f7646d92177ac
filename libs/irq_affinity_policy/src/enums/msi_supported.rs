// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

/// Whether message-signaled interrupts are enabled for a device.
///
/// `Unspecified` means the `MSISupported` value is absent, which leaves the decision to the driver's INF.
/// see: https://learn.microsoft.com/en-us/windows-hardware/drivers/kernel/enabling-message-signaled-interrupts-in-the-registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MsiSupported {
    #[default]
    Unspecified,
    NotSupported,
    Supported,
    Unknown(/*stored_value: */u32),
}

impl MsiSupported {
    pub fn from_stored_value(stored_value: Option<u32>) -> Self {
        match stored_value {
            None => MsiSupported::Unspecified,
            Some(0) => MsiSupported::NotSupported,
            Some(1) => MsiSupported::Supported,
            Some(other) => MsiSupported::Unknown(other),
        }
    }

    /// The value as it sits in the registry; `None` when absent.
    pub fn stored_value(&self) -> Option<u32> {
        match self {
            MsiSupported::Unspecified => None,
            MsiSupported::NotSupported => Some(0),
            MsiSupported::Supported => Some(1),
            MsiSupported::Unknown(value) => Some(*value),
        }
    }
}

impl fmt::Display for MsiSupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsiSupported::Unspecified => write!(f, "unspecified"),
            MsiSupported::NotSupported => write!(f, "off"),
            MsiSupported::Supported => write!(f, "on"),
            MsiSupported::Unknown(value) => write!(f, "MSISupported={}", value),
        }
    }
}
