// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use super::win32_utils;
use crate::{ConfigKey, ConfigStoreError, RegistryValue};
use windows_sys::Win32::{
    Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS},
    System::Registry::{
        HKEY,
        KEY_QUERY_VALUE,
        RegCloseKey,
        RegOpenKeyExW,
        RegQueryValueExW,
    },
};

/// Open registry key, closed on drop.
pub struct RegistryKey {
    hkey: HKEY,
}

impl RegistryKey {
    /// Takes ownership of an open key.
    pub(crate) fn from_raw(hkey: HKEY) -> Self {
        RegistryKey { hkey }
    }
}

impl ConfigKey for RegistryKey {
    fn open_subkey(&self, path: &str) -> Result<Option<RegistryKey>, ConfigStoreError> {
        let path_as_utf16_chars = win32_utils::to_utf16_null_terminated(path);
        let mut subkey: HKEY = std::ptr::null_mut();
        //
        // see: https://learn.microsoft.com/en-us/windows/win32/api/winreg/nf-winreg-regopenkeyexw
        let open_key_result = unsafe { RegOpenKeyExW(self.hkey, path_as_utf16_chars.as_ptr(), 0, KEY_QUERY_VALUE, &mut subkey) };
        match open_key_result {
            ERROR_SUCCESS => Ok(Some(RegistryKey::from_raw(subkey))),
            ERROR_FILE_NOT_FOUND => Ok(None),
            win32_error => Err(ConfigStoreError::Win32Error(win32_error)),
        }
    }

    fn query_value(&self, name: &str) -> Result<Option<RegistryValue>, ConfigStoreError> {
        let name_as_utf16_chars = win32_utils::to_utf16_null_terminated(name);

        // get the type and size of the value
        // see: https://learn.microsoft.com/en-us/windows/win32/api/winreg/nf-winreg-regqueryvalueexw
        let mut registry_data_type: u32 = 0;
        let mut required_size: u32 = 0;
        let query_value_result = unsafe { RegQueryValueExW(self.hkey, name_as_utf16_chars.as_ptr(), std::ptr::null(), &mut registry_data_type, std::ptr::null_mut(), &mut required_size) };
        match query_value_result {
            ERROR_SUCCESS => {},
            ERROR_FILE_NOT_FOUND => return Ok(None),
            win32_error => return Err(ConfigStoreError::Win32Error(win32_error)),
        }

        // retrieve the value
        let mut value_buffer = vec![0u8; required_size as usize];
        let mut value_size = required_size;
        let query_value_result = unsafe { RegQueryValueExW(self.hkey, name_as_utf16_chars.as_ptr(), std::ptr::null(), &mut registry_data_type, value_buffer.as_mut_ptr(), &mut value_size) };
        match query_value_result {
            ERROR_SUCCESS => {},
            ERROR_FILE_NOT_FOUND => return Ok(None),
            win32_error => return Err(ConfigStoreError::Win32Error(win32_error)),
        }
        value_buffer.truncate(value_size as usize);

        Ok(Some(RegistryValue::from_registry_buffer(registry_data_type, value_buffer)?))
    }
}

impl Drop for RegistryKey {
    fn drop(&mut self) {
        let close_result = unsafe { RegCloseKey(self.hkey) };
        debug_assert!(close_result == ERROR_SUCCESS, "Could not close registry key; win32 error: {}", close_result);
    }
}
