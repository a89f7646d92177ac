// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use bitflags::bitflags;

bitflags! {
    /// Selection flags handed to `SetupDiGetClassDevsW` when the device info set is created.
    ///
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetclassdevsw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassDevsFilter: u32 {
        const DEFAULT = 0x0000_0001;
        const PRESENT = 0x0000_0002;
        const ALL_CLASSES = 0x0000_0004;
        const PROFILE = 0x0000_0008;
        const DEVICE_INTERFACE = 0x0000_0010;
    }
}

impl ClassDevsFilter {
    /// Every setup class, present devices only, restricted to the current hardware profile (0xE).
    pub const DEFAULT_SCAN: ClassDevsFilter = ClassDevsFilter::PRESENT
        .union(ClassDevsFilter::ALL_CLASSES)
        .union(ClassDevsFilter::PROFILE);
}

impl Default for ClassDevsFilter {
    fn default() -> Self {
        ClassDevsFilter::DEFAULT_SCAN
    }
}

// keep our flag values in lockstep with the platform headers
#[cfg(target_os = "windows")]
const _: () = {
    use windows::Win32::Devices::DeviceAndDriverInstallation::{
        DIGCF_ALLCLASSES, DIGCF_DEFAULT, DIGCF_DEVICEINTERFACE, DIGCF_PRESENT, DIGCF_PROFILE,
    };
    assert!(ClassDevsFilter::DEFAULT.bits() == DIGCF_DEFAULT.0);
    assert!(ClassDevsFilter::PRESENT.bits() == DIGCF_PRESENT.0);
    assert!(ClassDevsFilter::ALL_CLASSES.bits() == DIGCF_ALLCLASSES.0);
    assert!(ClassDevsFilter::PROFILE.bits() == DIGCF_PROFILE.0);
    assert!(ClassDevsFilter::DEVICE_INTERFACE.bits() == DIGCF_DEVICEINTERFACE.0);
};
