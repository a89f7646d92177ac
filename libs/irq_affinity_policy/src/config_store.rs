// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{ConfigStoreError, RegistryValue};

/// An open, read-only node of the device configuration store (a registry key on Windows).
///
/// Implementations release the underlying key when dropped. A key or value that does not exist is
/// reported as `Ok(None)`, never as an error.
pub trait ConfigKey: Sized {
    fn open_subkey(&self, path: &str) -> Result<Option<Self>, ConfigStoreError>;

    fn query_value(&self, name: &str) -> Result<Option<RegistryValue>, ConfigStoreError>;

    /// Reads a REG_DWORD.
    fn get_dword(&self, name: &str) -> Result<Option<u32>, ConfigStoreError> {
        match self.query_value(name)? {
            None => Ok(None),
            Some(RegistryValue::UInt32(value)) => Ok(Some(value)),
            // NOTE: hand-edited keys sometimes hold a DWORD as 4 raw bytes
            Some(RegistryValue::Binary(bytes)) if bytes.len() == 4 => Ok(Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))),
            Some(other) => Err(ConfigStoreError::UnexpectedValueType(other.registry_data_type())),
        }
    }

    /// Reads a DWORD that may be stored in its hexadecimal form: a REG_DWORD, a little-endian REG_BINARY
    /// of at most 4 bytes, or a REG_SZ hex numeral (with or without a `0x` prefix).
    fn get_dword_hex(&self, name: &str) -> Result<Option<u32>, ConfigStoreError> {
        match self.query_value(name)? {
            None => Ok(None),
            Some(RegistryValue::UInt32(value)) => Ok(Some(value)),
            Some(RegistryValue::Binary(bytes)) => {
                if bytes.len() > 4 {
                    return Err(ConfigStoreError::MalformedValue(format!("{}: {} bytes do not fit a DWORD", name, bytes.len())));
                }
                let mut dword_bytes = [0u8; 4];
                dword_bytes[0..bytes.len()].copy_from_slice(&bytes);
                Ok(Some(u32::from_le_bytes(dword_bytes)))
            },
            Some(RegistryValue::String(text)) => parse_hex_dword(&text).map(Some).ok_or_else(|| ConfigStoreError::MalformedValue(format!("{}: {:?} is not a hex DWORD", name, text))),
            Some(other) => Err(ConfigStoreError::UnexpectedValueType(other.registry_data_type())),
        }
    }

    /// Reads a REG_BINARY.
    fn get_binary(&self, name: &str) -> Result<Option<Vec<u8>>, ConfigStoreError> {
        match self.query_value(name)? {
            None => Ok(None),
            Some(RegistryValue::Binary(bytes)) => Ok(Some(bytes)),
            Some(other) => Err(ConfigStoreError::UnexpectedValueType(other.registry_data_type())),
        }
    }
}

fn parse_hex_dword(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Collapses a best-effort read into its value, logging anything other than a plain absence.
pub(crate) fn value_or_default<T: Default>(result: Result<Option<T>, ConfigStoreError>, value_name: &str) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::trace!("registry value {} is not present", value_name);
            T::default()
        },
        Err(error) => {
            log::debug!("ignoring registry value {}: {}", value_name, error);
            T::default()
        },
    }
}
