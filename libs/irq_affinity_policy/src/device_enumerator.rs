// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{
    ClassDevsFilter,
    ConfigKey,
    ConfigStoreError,
    DeviceRegistryProperty,
    EnumDeviceInfoError,
    EnumerateError,
    PropertyValueError,
};
use std::iter::FusedIterator;

/// Entry point to the platform's device tree. Constructed explicitly by the caller and handed to
/// `IrqPolicyEnumerator`.
pub trait DevicePlatform {
    type DeviceInfoSet: DeviceInfoSet;

    /// Creates the device info set for `filter`; the set is released when the returned value is dropped.
    fn get_class_devs(&self, filter: ClassDevsFilter) -> Result<Self::DeviceInfoSet, EnumerateError>;
}

/// A device info set: the devices selected by one `get_class_devs` call.
pub trait DeviceInfoSet {
    /// Opaque per-device data, valid only while the set is alive.
    type DeviceHandle;
    type Key: ConfigKey;

    fn enum_device_info(&self, member_index: u32) -> Result<Self::DeviceHandle, EnumDeviceInfoError>;

    /// Reads a string device registry property; `Ok(None)` when the device does not have it.
    fn registry_property(&self, device: &Self::DeviceHandle, property: DeviceRegistryProperty) -> Result<Option<String>, PropertyValueError>;

    /// Opens the device's hardware (`DIREG_DEV`) configuration key for reading; `Ok(None)` when the device has none.
    fn open_device_key(&self, device: &Self::DeviceHandle) -> Result<Option<Self::Key>, ConfigStoreError>;

    fn devices(&self) -> DeviceInfoIter<'_, Self>
    where
        Self: Sized,
    {
        DeviceInfoIter::new(self)
    }
}

pub struct EnumeratedDevice<H> {
    /// Member index inside the current device info set; not stable across runs.
    pub index: u32,
    pub handle: H,
}

/// Walks a device info set by member index and stops at the first index the set cannot return.
///
/// Running past the end and failing mid-way both end the sequence; `stop_reason` tells them apart.
pub struct DeviceInfoIter<'a, S: DeviceInfoSet> {
    device_info_set: &'a S,
    next_index: u32,
    stop_reason: Option<EnumDeviceInfoError>,
}

impl<'a, S: DeviceInfoSet> DeviceInfoIter<'a, S> {
    pub fn new(device_info_set: &'a S) -> Self {
        Self { device_info_set, next_index: 0, stop_reason: None }
    }

    /// `None` while the iterator is still running.
    pub fn stop_reason(&self) -> Option<EnumDeviceInfoError> {
        self.stop_reason
    }

    /// Number of devices handed out so far.
    pub fn count_enumerated(&self) -> u32 {
        self.next_index
    }
}

impl<'a, S: DeviceInfoSet> Iterator for DeviceInfoIter<'a, S> {
    type Item = EnumeratedDevice<S::DeviceHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop_reason.is_some() {
            return None;
        }

        match self.device_info_set.enum_device_info(self.next_index) {
            Ok(handle) => {
                let index = self.next_index;
                match self.next_index.checked_add(1) {
                    Some(value) => self.next_index = value,
                    None => self.stop_reason = Some(EnumDeviceInfoError::NoMoreItems),
                }
                Some(EnumeratedDevice { index, handle })
            },
            Err(error) => {
                self.stop_reason = Some(error);
                None
            },
        }
    }
}

impl<'a, S: DeviceInfoSet> FusedIterator for DeviceInfoIter<'a, S> {}
