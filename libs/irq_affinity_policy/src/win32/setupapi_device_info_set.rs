// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use super::win32_utils;
use crate::{
    ClassDevsFilter,
    ConfigStoreError,
    DeviceInfoSet,
    DevicePlatform,
    DeviceRegistryProperty,
    EnumDeviceInfoError,
    EnumerateError,
    PropertyValueError,
    RegistryKey,
    RegistryValue,
};
use windows::Win32::Foundation::{
    ERROR_INSUFFICIENT_BUFFER, ERROR_INVALID_DATA, ERROR_NO_MORE_ITEMS,
};
use windows_sys::{
    core::GUID,
    Win32::Devices::DeviceAndDriverInstallation::{
        DICS_FLAG_GLOBAL,
        DIREG_DEV,
        HDEVINFO,
        SP_DEVINFO_DATA,
        SetupDiDestroyDeviceInfoList,
        SetupDiEnumDeviceInfo,
        SetupDiGetClassDevsW,
        SetupDiGetDeviceRegistryPropertyW,
        SetupDiOpenDevRegKey,
    },
    Win32::Foundation::INVALID_HANDLE_VALUE,
    Win32::System::Registry::KEY_READ,
};

/// SetupAPI-backed device tree of the local machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetupApiPlatform {
}
//
impl SetupApiPlatform {
    pub fn new() -> Self {
        SetupApiPlatform {}
    }
}

impl DevicePlatform for SetupApiPlatform {
    type DeviceInfoSet = SetupApiDeviceInfoSet;

    fn get_class_devs(&self, filter: ClassDevsFilter) -> Result<SetupApiDeviceInfoSet, EnumerateError> {
        // see: https://docs.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetclassdevsw
        let handle_to_device_info_set: HDEVINFO = unsafe { SetupDiGetClassDevsW(std::ptr::null(), std::ptr::null(), std::ptr::null_mut(), filter.bits()) };
        if handle_to_device_info_set as isize == INVALID_HANDLE_VALUE as isize {
            let win32_error = win32_utils::get_last_error_as_win32_error();
            return Err(EnumerateError::DeviceInfoSetUnavailable(win32_error.0));
        }

        Ok(SetupApiDeviceInfoSet { handle_to_device_info_set })
    }
}

/// Owns an `HDEVINFO`; the list is destroyed on drop.
pub struct SetupApiDeviceInfoSet {
    handle_to_device_info_set: HDEVINFO,
}

pub struct SetupApiDeviceHandle {
    devinfo_data: SP_DEVINFO_DATA,
}

impl DeviceInfoSet for SetupApiDeviceInfoSet {
    type DeviceHandle = SetupApiDeviceHandle;
    type Key = RegistryKey;

    fn enum_device_info(&self, member_index: u32) -> Result<SetupApiDeviceHandle, EnumDeviceInfoError> {
        let mut devinfo_data: SP_DEVINFO_DATA = SP_DEVINFO_DATA { cbSize: 0, ClassGuid: GUID::from_u128(0), DevInst: 0, Reserved: 0 };
        devinfo_data.cbSize = std::mem::size_of::<SP_DEVINFO_DATA>() as u32;
        //
        // see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdienumdeviceinfo
        let enum_device_info_result = unsafe { SetupDiEnumDeviceInfo(self.handle_to_device_info_set, member_index, &mut devinfo_data) };
        if enum_device_info_result == 0 {
            let win32_error = win32_utils::get_last_error_as_win32_error();
            if win32_error == ERROR_NO_MORE_ITEMS {
                return Err(EnumDeviceInfoError::NoMoreItems);
            }
            return Err(EnumDeviceInfoError::Win32Error(win32_error.0));
        }

        Ok(SetupApiDeviceHandle { devinfo_data })
    }

    fn registry_property(&self, device: &SetupApiDeviceHandle, property: DeviceRegistryProperty) -> Result<Option<String>, PropertyValueError> {
        // get the type and size of the device registry property
        // see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdeviceregistrypropertyw
        let mut property_registry_data_type_as_u32: u32 = 0;
        let mut required_size: u32 = 0;
        let get_device_registry_property_result = unsafe { SetupDiGetDeviceRegistryPropertyW(self.handle_to_device_info_set, &device.devinfo_data, property.spdrp(), &mut property_registry_data_type_as_u32, std::ptr::null_mut(), 0, &mut required_size) };
        if get_device_registry_property_result == 0 {
            let win32_error = win32_utils::get_last_error_as_win32_error();
            match win32_error {
                ERROR_INSUFFICIENT_BUFFER => {
                    // this is the expected error condition; we'll size our buffer to match required_size
                },
                ERROR_INVALID_DATA => {
                    // the device does not have this property
                    return Ok(None);
                },
                _ => {
                    return Err(PropertyValueError::Win32Error(win32_error.0));
                },
            }
        } else if required_size == 0 {
            return Ok(None);
        }

        // retrieve the property value
        let mut property_buffer = vec![0u8; required_size as usize];
        let get_device_registry_property_result = unsafe { SetupDiGetDeviceRegistryPropertyW(self.handle_to_device_info_set, &device.devinfo_data, property.spdrp(), &mut property_registry_data_type_as_u32, property_buffer.as_mut_ptr(), required_size, std::ptr::null_mut()) };
        if get_device_registry_property_result == 0 {
            let win32_error = win32_utils::get_last_error_as_win32_error();
            return Err(PropertyValueError::Win32Error(win32_error.0));
        }

        match RegistryValue::from_device_property_buffer(property_registry_data_type_as_u32, property_buffer)? {
            RegistryValue::String(value) => Ok(Some(value)),
            other => {
                debug_assert!(false, "{:?} should be a REG_SZ property", property);
                Err(PropertyValueError::UnsupportedRegistryDataType(other.registry_data_type()))
            },
        }
    }

    fn open_device_key(&self, device: &SetupApiDeviceHandle) -> Result<Option<RegistryKey>, ConfigStoreError> {
        // see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdiopendevregkey
        let hkey = unsafe { SetupDiOpenDevRegKey(self.handle_to_device_info_set, &device.devinfo_data, DICS_FLAG_GLOBAL, 0, DIREG_DEV, KEY_READ) };
        if hkey as isize == INVALID_HANDLE_VALUE as isize {
            let win32_error = win32_utils::get_last_error_as_win32_error();
            // NOTE: devices that were never installed (or have no hardware key yet) report "file not found"; treat that as "no key"
            if win32_error.0 == windows_sys::Win32::Foundation::ERROR_FILE_NOT_FOUND {
                return Ok(None);
            }
            return Err(ConfigStoreError::Win32Error(win32_error.0));
        }

        Ok(Some(RegistryKey::from_raw(hkey)))
    }
}

impl Drop for SetupApiDeviceInfoSet {
    fn drop(&mut self) {
        let destroy_result = unsafe { SetupDiDestroyDeviceInfoList(self.handle_to_device_info_set) };
        debug_assert!(destroy_result != 0, "Could not clean up device info set; win32 error: {}", win32_utils::get_last_error_as_win32_error().0);
    }
}
