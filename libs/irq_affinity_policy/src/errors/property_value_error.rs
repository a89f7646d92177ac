// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

#[derive(Debug)]
pub enum PropertyValueError {
    InvalidValueSize(/*size_in_bytes: */usize),
    StringDecodingError(/*error: */std::string::FromUtf16Error),
    StringTerminationError,
    UnsupportedRegistryDataType(/*registry_data_type: REG_VALUE_TYPE*/u32),
    Win32Error(/*win32_error: */u32),
}

impl fmt::Display for PropertyValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValueError::InvalidValueSize(size_in_bytes) => write!(f, "Property value has an invalid size: {} bytes", size_in_bytes),
            PropertyValueError::StringDecodingError(error) => write!(f, "Invalid UTF-16 in property value: {}", error),
            PropertyValueError::StringTerminationError => write!(f, "Property string was not null-terminated"),
            PropertyValueError::UnsupportedRegistryDataType(data_type) => write!(f, "Unexpected registry data type: {}", data_type),
            PropertyValueError::Win32Error(win32_error) => write!(f, "Property read failed; win32 error: {}", win32_error),
        }
    }
}

impl std::error::Error for PropertyValueError {}
