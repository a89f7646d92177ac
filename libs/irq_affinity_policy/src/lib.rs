// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod enums;
pub use enums::*;

mod errors;
pub use errors::*;

mod affinity_policy;
pub use affinity_policy::{AffinityPolicy, AFFINITY_POLICY_SUBKEY};

mod config_store;
pub use config_store::ConfigKey;

mod device;
pub use device::{AssignmentSetOverride, Device};

mod device_enumerator;
pub use device_enumerator::{DeviceInfoIter, DeviceInfoSet, DevicePlatform, EnumeratedDevice};

mod irq_policy_enumerator;
pub use irq_policy_enumerator::IrqPolicyEnumerator;

mod msi_properties;
pub use msi_properties::{MsiProperties, MSI_PROPERTIES_SUBKEY};

mod processor_set;
pub use processor_set::ProcessorSet;

mod registry_value;
pub use registry_value::RegistryValue;

#[cfg(target_os = "windows")]
mod win32;
#[cfg(target_os = "windows")]
pub use win32::{RegistryKey, SetupApiDeviceHandle, SetupApiDeviceInfoSet, SetupApiPlatform};

#[cfg(test)]
mod fake_platform;
