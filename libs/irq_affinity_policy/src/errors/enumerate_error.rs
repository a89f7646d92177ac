// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

/// Failure of a whole enumeration pass; nothing was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerateError {
    DeviceInfoSetUnavailable(/*win32_error: */u32),
}

impl fmt::Display for EnumerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerateError::DeviceInfoSetUnavailable(win32_error) => {
                write!(f, "Could not create the device info set; win32 error: {}", win32_error)
            }
        }
    }
}

impl std::error::Error for EnumerateError {}
