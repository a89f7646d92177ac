// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

/// Relative interrupt priority (`IRQ_PRIORITY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IrqPriority {
    #[default]
    Undefined,
    Low,
    Normal,
    High,
    Unknown(/*code: */u32),
}

impl IrqPriority {
    pub fn code(&self) -> u32 {
        match self {
            IrqPriority::Undefined => 0,
            IrqPriority::Low => 1,
            IrqPriority::Normal => 2,
            IrqPriority::High => 3,
            IrqPriority::Unknown(code) => *code,
        }
    }
}

impl From<u32> for IrqPriority {
    fn from(code: u32) -> Self {
        match code {
            0 => IrqPriority::Undefined,
            1 => IrqPriority::Low,
            2 => IrqPriority::Normal,
            3 => IrqPriority::High,
            other => IrqPriority::Unknown(other),
        }
    }
}

impl fmt::Display for IrqPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrqPriority::Undefined => write!(f, "IrqPriorityUndefined"),
            IrqPriority::Low => write!(f, "IrqPriorityLow"),
            IrqPriority::Normal => write!(f, "IrqPriorityNormal"),
            IrqPriority::High => write!(f, "IrqPriorityHigh"),
            IrqPriority::Unknown(code) => write!(f, "IrqPriority({})", code),
        }
    }
}
