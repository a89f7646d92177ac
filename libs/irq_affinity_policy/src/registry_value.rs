// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::PropertyValueError;

// registry data types (REG_VALUE_TYPE); see: https://learn.microsoft.com/en-us/windows/win32/sysinfo/registry-value-types
pub(crate) const REG_SZ: u32 = 1;
pub(crate) const REG_EXPAND_SZ: u32 = 2;
pub(crate) const REG_BINARY: u32 = 3;
pub(crate) const REG_DWORD: u32 = 4;
pub(crate) const REG_MULTI_SZ: u32 = 7;
pub(crate) const REG_QWORD: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryValue {
    Binary(/*bytes: */Vec<u8>),
    ListOfStrings(/*list: */Vec<String>),
    String(/*value: */String),
    UInt32(/*value: */u32),
    UInt64(/*value: */u64),
    UnsupportedRegistryDataType(/*registry_data_type: REG_VALUE_TYPE*/u32),
}

impl RegistryValue {
    /// Decodes a value read with `RegQueryValueExW`. Strings stored without a trailing null are accepted.
    pub fn from_registry_buffer(registry_data_type: u32, buffer: Vec<u8>) -> Result<RegistryValue, PropertyValueError> {
        convert_buffer_into_registry_value(registry_data_type, buffer, false)
    }

    /// Decodes a device registry property read with `SetupDiGetDeviceRegistryPropertyW`; setupapi always
    /// null-terminates its strings, so an unterminated string is treated as corrupt.
    pub fn from_device_property_buffer(registry_data_type: u32, buffer: Vec<u8>) -> Result<RegistryValue, PropertyValueError> {
        convert_buffer_into_registry_value(registry_data_type, buffer, true)
    }

    pub fn registry_data_type(&self) -> u32 {
        match self {
            RegistryValue::Binary(_) => REG_BINARY,
            RegistryValue::ListOfStrings(_) => REG_MULTI_SZ,
            RegistryValue::String(_) => REG_SZ,
            RegistryValue::UInt32(_) => REG_DWORD,
            RegistryValue::UInt64(_) => REG_QWORD,
            RegistryValue::UnsupportedRegistryDataType(data_type) => *data_type,
        }
    }
}

fn convert_buffer_into_registry_value(registry_data_type: u32, buffer: Vec<u8>, require_null_terminator: bool) -> Result<RegistryValue, PropertyValueError> {
    match registry_data_type {
        REG_SZ | REG_EXPAND_SZ => {
            let utf16_chars = buffer_to_utf16_chars(&buffer, require_null_terminator)?;
            // NOTE: anything after the first null is slack space, not part of the string
            let end_of_string = utf16_chars.iter().position(|c| *c == 0).unwrap_or(utf16_chars.len());
            match String::from_utf16(&utf16_chars[0..end_of_string]) {
                Ok(value) => Ok(RegistryValue::String(value)),
                Err(decoding_error) => Err(PropertyValueError::StringDecodingError(decoding_error)),
            }
        },
        REG_MULTI_SZ => {
            let utf16_chars = buffer_to_utf16_chars(&buffer, require_null_terminator)?;
            let mut list = Vec::<String>::new();
            for utf16_string in utf16_chars.split(|c| *c == 0) {
                // an empty string marks the end of the list
                if utf16_string.is_empty() {
                    break;
                }
                match String::from_utf16(utf16_string) {
                    Ok(value) => list.push(value),
                    Err(decoding_error) => return Err(PropertyValueError::StringDecodingError(decoding_error)),
                }
            }
            Ok(RegistryValue::ListOfStrings(list))
        },
        REG_DWORD => {
            let bytes: [u8; 4] = match buffer.as_slice().try_into() {
                Ok(value) => value,
                Err(_) => return Err(PropertyValueError::InvalidValueSize(buffer.len())),
            };
            Ok(RegistryValue::UInt32(u32::from_le_bytes(bytes)))
        },
        REG_QWORD => {
            let bytes: [u8; 8] = match buffer.as_slice().try_into() {
                Ok(value) => value,
                Err(_) => return Err(PropertyValueError::InvalidValueSize(buffer.len())),
            };
            Ok(RegistryValue::UInt64(u64::from_le_bytes(bytes)))
        },
        REG_BINARY => Ok(RegistryValue::Binary(buffer)),
        _ => Ok(RegistryValue::UnsupportedRegistryDataType(registry_data_type)),
    }
}

fn buffer_to_utf16_chars(buffer: &[u8], require_null_terminator: bool) -> Result<Vec<u16>, PropertyValueError> {
    let utf16_chars: Vec<u16> = buffer.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();
    if require_null_terminator {
        if buffer.len() % 2 != 0 || utf16_chars.last() != Some(&0) {
            return Err(PropertyValueError::StringTerminationError);
        }
    }
    Ok(utf16_chars)
}

#[cfg(test)]
pub(crate) fn encode_utf16_with_null(value: &str) -> Vec<u8> {
    value.encode_utf16().chain(std::iter::once(0)).flat_map(|c| c.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_terminated_string() {
        let buffer = encode_utf16_with_null("PCI Express Root Port");
        let value = RegistryValue::from_device_property_buffer(REG_SZ, buffer).unwrap();
        assert_eq!(value, RegistryValue::String("PCI Express Root Port".to_string()));
    }

    #[test]
    fn device_property_string_must_be_terminated() {
        let buffer: Vec<u8> = "abc".encode_utf16().flat_map(|c| c.to_le_bytes()).collect();
        let result = RegistryValue::from_device_property_buffer(REG_SZ, buffer.clone());
        assert!(matches!(result, Err(PropertyValueError::StringTerminationError)));

        // the registry itself does not guarantee a terminator
        let value = RegistryValue::from_registry_buffer(REG_SZ, buffer).unwrap();
        assert_eq!(value, RegistryValue::String("abc".to_string()));
    }

    #[test]
    fn rejects_unpaired_surrogate() {
        let buffer: Vec<u8> = [0xD800u16, 0].iter().flat_map(|c| c.to_le_bytes()).collect();
        let result = RegistryValue::from_device_property_buffer(REG_SZ, buffer);
        assert!(matches!(result, Err(PropertyValueError::StringDecodingError(_))));
    }

    #[test]
    fn decodes_string_list() {
        let mut buffer = encode_utf16_with_null("first");
        buffer.extend(encode_utf16_with_null("second"));
        buffer.extend([0, 0]);
        let value = RegistryValue::from_registry_buffer(REG_MULTI_SZ, buffer).unwrap();
        assert_eq!(value, RegistryValue::ListOfStrings(vec!["first".to_string(), "second".to_string()]));
    }

    #[test]
    fn decodes_fixed_size_integers() {
        let value = RegistryValue::from_registry_buffer(REG_DWORD, vec![0x10, 0, 0, 0]).unwrap();
        assert_eq!(value, RegistryValue::UInt32(16));

        let value = RegistryValue::from_registry_buffer(REG_QWORD, 0x1_0000_0001u64.to_le_bytes().to_vec()).unwrap();
        assert_eq!(value, RegistryValue::UInt64(0x1_0000_0001));

        let result = RegistryValue::from_registry_buffer(REG_DWORD, vec![1, 2]);
        assert!(matches!(result, Err(PropertyValueError::InvalidValueSize(2))));
    }

    #[test]
    fn keeps_binary_and_flags_unknown_types() {
        let value = RegistryValue::from_registry_buffer(REG_BINARY, vec![0x05, 0x00]).unwrap();
        assert_eq!(value, RegistryValue::Binary(vec![0x05, 0x00]));

        let value = RegistryValue::from_registry_buffer(0, vec![]).unwrap();
        assert_eq!(value, RegistryValue::UnsupportedRegistryDataType(0));
        assert_eq!(value.registry_data_type(), 0);
    }
}
