// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

/// Why `SetupDiEnumDeviceInfo` (or its stand-in) did not return another device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDeviceInfoError {
    NoMoreItems,
    Win32Error(/*win32_error: */u32),
}

impl fmt::Display for EnumDeviceInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumDeviceInfoError::NoMoreItems => write!(f, "No more devices in the device info set"),
            EnumDeviceInfoError::Win32Error(win32_error) => write!(f, "Device enumeration failed; win32 error: {}", win32_error),
        }
    }
}

impl std::error::Error for EnumDeviceInfoError {}
