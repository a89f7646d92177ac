// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod class_devs_filter;
pub use class_devs_filter::ClassDevsFilter;

mod device_registry_property;
pub use device_registry_property::DeviceRegistryProperty;

mod irq_device_policy;
pub use irq_device_policy::IrqDevicePolicy;

mod irq_priority;
pub use irq_priority::IrqPriority;

mod msi_supported;
pub use msi_supported::MsiSupported;
