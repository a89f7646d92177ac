// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{
    AffinityPolicy,
    ClassDevsFilter,
    Device,
    DeviceInfoSet,
    DevicePlatform,
    DeviceRegistryProperty,
    EnumDeviceInfoError,
    EnumerateError,
    MsiProperties,
};

pub struct IrqPolicyEnumerator {
}
//
impl IrqPolicyEnumerator {
    pub fn enumerate_present_devices<P: DevicePlatform>(platform: &P) -> Result<Vec<Device>, EnumerateError> {
        IrqPolicyEnumerator::enumerate_present_devices_with_filter(platform, ClassDevsFilter::DEFAULT_SCAN)
    }
    //
    /// Runs one pass over the device tree. Only a failure to create the device info set is an error; every
    /// other missing or unreadable piece just leaves the matching `Device` field at its zero value.
    pub fn enumerate_present_devices_with_filter<P: DevicePlatform>(platform: &P, filter: ClassDevsFilter) -> Result<Vec<Device>, EnumerateError> {
        let mut result = Vec::<Device>::new();

        // NOTE: the device info set is destroyed when it goes out of scope at the end of this function
        let device_info_set = platform.get_class_devs(filter)?;

        let mut devices = device_info_set.devices();
        for enumerated_device in devices.by_ref() {
            // devices without a description are not shown anywhere (e.g. some software devices); skip them
            let device_desc = match read_string_property(&device_info_set, &enumerated_device.handle, DeviceRegistryProperty::DeviceDesc) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    log::debug!("skipping device #{}: no device description", enumerated_device.index);
                    continue;
                },
            };

            let mut device = Device {
                friendly_name: read_string_property(&device_info_set, &enumerated_device.handle, DeviceRegistryProperty::FriendlyName),
                dev_obj_name: read_string_property(&device_info_set, &enumerated_device.handle, DeviceRegistryProperty::PhysicalDeviceObjectName),
                location_information: read_string_property(&device_info_set, &enumerated_device.handle, DeviceRegistryProperty::LocationInformation),
                device_desc,
                ..Device::default()
            };

            // NOTE: the device key is scoped to this block so that it is closed before we move on to the next device
            {
                let device_key = match device_info_set.open_device_key(&enumerated_device.handle) {
                    Ok(value) => value,
                    Err(error) => {
                        log::debug!("could not open the device key of {:?}: {}", device.device_desc, error);
                        None
                    },
                };

                if let Some(device_key) = device_key {
                    let affinity_policy = AffinityPolicy::read(&device_key);
                    device.device_policy = affinity_policy.device_policy;
                    device.device_priority = affinity_policy.device_priority;
                    device.assignment_set_override = affinity_policy.assignment_set_override;

                    let msi_properties = MsiProperties::read(&device_key);
                    device.message_number_limit = msi_properties.message_number_limit;
                    device.msi_supported = msi_properties.msi_supported;
                }
            }

            result.push(device);
        }

        match devices.stop_reason() {
            Some(EnumDeviceInfoError::Win32Error(win32_error)) => {
                log::warn!("device enumeration stopped early after {} devices; win32 error: {}", devices.count_enumerated(), win32_error);
            },
            _ => {
                log::info!("enumerated {} devices, {} with a description", devices.count_enumerated(), result.len());
            },
        }

        Ok(result)
    }
}

fn read_string_property<S: DeviceInfoSet>(device_info_set: &S, device: &S::DeviceHandle, property: DeviceRegistryProperty) -> Option<String> {
    match device_info_set.registry_property(device, property) {
        Ok(value) => value,
        Err(error) => {
            log::debug!("could not read {:?}: {}", property, error);
            None
        },
    }
}
