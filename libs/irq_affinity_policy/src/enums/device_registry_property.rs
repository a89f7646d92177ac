// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

/// The string-valued device registry properties read for each device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceRegistryProperty {
    DeviceDesc,
    FriendlyName,
    PhysicalDeviceObjectName,
    LocationInformation,
}

impl DeviceRegistryProperty {
    // see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdeviceregistrypropertyw
    pub fn spdrp(&self) -> u32 {
        match self {
            DeviceRegistryProperty::DeviceDesc => 0x0000_0000,
            DeviceRegistryProperty::FriendlyName => 0x0000_000C,
            DeviceRegistryProperty::LocationInformation => 0x0000_000D,
            DeviceRegistryProperty::PhysicalDeviceObjectName => 0x0000_000E,
        }
    }
}

#[cfg(target_os = "windows")]
const _: () = {
    use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{
        SPDRP_DEVICEDESC, SPDRP_FRIENDLYNAME, SPDRP_LOCATION_INFORMATION, SPDRP_PHYSICAL_DEVICE_OBJECT_NAME,
    };
    assert!(SPDRP_DEVICEDESC == 0x0000_0000);
    assert!(SPDRP_FRIENDLYNAME == 0x0000_000C);
    assert!(SPDRP_LOCATION_INFORMATION == 0x0000_000D);
    assert!(SPDRP_PHYSICAL_DEVICE_OBJECT_NAME == 0x0000_000E);
};
