// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::PropertyValueError;
use std::fmt;

/// A failed read against a device's configuration key. A missing key or value is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStoreError {
    MalformedValue(/*details: */String),
    UnexpectedValueType(/*registry_data_type: REG_VALUE_TYPE*/u32),
    Win32Error(/*win32_error: */u32),
}

impl fmt::Display for ConfigStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigStoreError::MalformedValue(details) => write!(f, "Malformed registry value: {}", details),
            ConfigStoreError::UnexpectedValueType(data_type) => write!(f, "Unexpected registry data type: {}", data_type),
            ConfigStoreError::Win32Error(win32_error) => write!(f, "Registry read failed; win32 error: {}", win32_error),
        }
    }
}

impl std::error::Error for ConfigStoreError {}

impl From<PropertyValueError> for ConfigStoreError {
    fn from(error: PropertyValueError) -> Self {
        match error {
            PropertyValueError::UnsupportedRegistryDataType(data_type) => ConfigStoreError::UnexpectedValueType(data_type),
            PropertyValueError::Win32Error(win32_error) => ConfigStoreError::Win32Error(win32_error),
            other => ConfigStoreError::MalformedValue(other.to_string()),
        }
    }
}
