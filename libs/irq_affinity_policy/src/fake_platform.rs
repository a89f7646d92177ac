// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

//! In-memory device tree and registry for tests, with counters for every acquire/release.

use crate::{
    ClassDevsFilter,
    ConfigKey,
    ConfigStoreError,
    DeviceInfoSet,
    DevicePlatform,
    DeviceRegistryProperty,
    EnumDeviceInfoError,
    EnumerateError,
    PropertyValueError,
    RegistryValue,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
pub(crate) struct ReleaseCounters {
    create_attempts: Cell<u32>,
    last_filter: Cell<Option<ClassDevsFilter>>,
    enum_requests: Cell<u32>,
    sets_destroyed: Cell<u32>,
    keys_opened: Cell<u32>,
    keys_closed: Cell<u32>,
    open_keys_at_enum: RefCell<Vec<u32>>,
}

impl ReleaseCounters {
    pub(crate) fn new() -> Rc<ReleaseCounters> {
        Rc::new(ReleaseCounters::default())
    }

    pub(crate) fn create_attempts(&self) -> u32 {
        self.create_attempts.get()
    }

    pub(crate) fn last_filter(&self) -> Option<ClassDevsFilter> {
        self.last_filter.get()
    }

    pub(crate) fn enum_requests(&self) -> u32 {
        self.enum_requests.get()
    }

    pub(crate) fn sets_destroyed(&self) -> u32 {
        self.sets_destroyed.get()
    }

    pub(crate) fn keys_opened(&self) -> u32 {
        self.keys_opened.get()
    }

    pub(crate) fn keys_closed(&self) -> u32 {
        self.keys_closed.get()
    }

    pub(crate) fn open_keys_at_each_enum_request(&self) -> Vec<u32> {
        self.open_keys_at_enum.borrow().clone()
    }

    fn record_enum_request(&self) {
        self.enum_requests.set(self.enum_requests.get() + 1);
        self.open_keys_at_enum.borrow_mut().push(self.keys_opened.get() - self.keys_closed.get());
    }
}

pub(crate) struct FakeKey {
    values: HashMap<String, Result<RegistryValue, ConfigStoreError>>,
    subkeys: HashMap<String, FakeKey>,
    counters: Option<Rc<ReleaseCounters>>,
    // true only for keys handed out by open_subkey/open_device_key
    counted: bool,
}

impl FakeKey {
    pub(crate) fn new() -> Self {
        Self { values: HashMap::new(), subkeys: HashMap::new(), counters: None, counted: false }
    }

    pub(crate) fn with_value(mut self, name: &str, value: RegistryValue) -> Self {
        self.values.insert(name.to_string(), Ok(value));
        self
    }

    pub(crate) fn with_failing_value(mut self, name: &str, error: ConfigStoreError) -> Self {
        self.values.insert(name.to_string(), Err(error));
        self
    }

    pub(crate) fn with_subkey(mut self, path: &str, subkey: FakeKey) -> Self {
        self.subkeys.insert(path.to_string(), subkey);
        self
    }

    /// Counts the subkeys opened below this key; the key itself is not counted.
    pub(crate) fn tracked_by(mut self, counters: &Rc<ReleaseCounters>) -> Self {
        self.counters = Some(Rc::clone(counters));
        self
    }

    fn open_copy(&self, counters: Option<Rc<ReleaseCounters>>) -> FakeKey {
        if let Some(counters) = &counters {
            counters.keys_opened.set(counters.keys_opened.get() + 1);
        }
        FakeKey {
            values: self.values.clone(),
            subkeys: self.subkeys.iter().map(|(path, subkey)| (path.clone(), subkey.open_copy_uncounted())).collect(),
            counted: counters.is_some(),
            counters,
        }
    }

    fn open_copy_uncounted(&self) -> FakeKey {
        FakeKey {
            values: self.values.clone(),
            subkeys: self.subkeys.iter().map(|(path, subkey)| (path.clone(), subkey.open_copy_uncounted())).collect(),
            counters: None,
            counted: false,
        }
    }
}

impl ConfigKey for FakeKey {
    fn open_subkey(&self, path: &str) -> Result<Option<Self>, ConfigStoreError> {
        match self.subkeys.get(path) {
            Some(subkey) => Ok(Some(subkey.open_copy(self.counters.clone()))),
            None => Ok(None),
        }
    }

    fn query_value(&self, name: &str) -> Result<Option<RegistryValue>, ConfigStoreError> {
        self.values.get(name).cloned().transpose()
    }
}

impl Drop for FakeKey {
    fn drop(&mut self) {
        if let (true, Some(counters)) = (self.counted, &self.counters) {
            counters.keys_closed.set(counters.keys_closed.get() + 1);
        }
    }
}

enum FakeProperty {
    Value(String),
    Failing(/*win32_error: */u32),
}

enum FakeDeviceKey {
    Absent,
    Present(FakeKey),
    Failing(/*win32_error: */u32),
}

pub(crate) struct FakeDevice {
    properties: HashMap<DeviceRegistryProperty, FakeProperty>,
    device_key: FakeDeviceKey,
}

impl FakeDevice {
    pub(crate) fn new() -> Self {
        Self { properties: HashMap::new(), device_key: FakeDeviceKey::Absent }
    }

    pub(crate) fn described(device_desc: &str) -> Self {
        FakeDevice::new().with_property(DeviceRegistryProperty::DeviceDesc, device_desc)
    }

    pub(crate) fn with_property(mut self, property: DeviceRegistryProperty, value: &str) -> Self {
        self.properties.insert(property, FakeProperty::Value(value.to_string()));
        self
    }

    pub(crate) fn with_failing_property(mut self, property: DeviceRegistryProperty, win32_error: u32) -> Self {
        self.properties.insert(property, FakeProperty::Failing(win32_error));
        self
    }

    pub(crate) fn with_device_key(mut self, device_key: FakeKey) -> Self {
        self.device_key = FakeDeviceKey::Present(device_key);
        self
    }

    pub(crate) fn with_failing_device_key(mut self, win32_error: u32) -> Self {
        self.device_key = FakeDeviceKey::Failing(win32_error);
        self
    }
}

pub(crate) struct FakePlatform {
    devices: Rc<Vec<FakeDevice>>,
    fail_creation: Option<u32>,
    fail_enumeration_at: Option<(u32, u32)>,
    counters: Rc<ReleaseCounters>,
}

impl FakePlatform {
    pub(crate) fn new(devices: Vec<FakeDevice>) -> Self {
        Self { devices: Rc::new(devices), fail_creation: None, fail_enumeration_at: None, counters: ReleaseCounters::new() }
    }

    pub(crate) fn failing_creation(mut self, win32_error: u32) -> Self {
        self.fail_creation = Some(win32_error);
        self
    }

    pub(crate) fn failing_enumeration_at(mut self, member_index: u32, win32_error: u32) -> Self {
        self.fail_enumeration_at = Some((member_index, win32_error));
        self
    }

    pub(crate) fn counters(&self) -> &ReleaseCounters {
        &self.counters
    }
}

impl DevicePlatform for FakePlatform {
    type DeviceInfoSet = FakeDeviceInfoSet;

    fn get_class_devs(&self, filter: ClassDevsFilter) -> Result<FakeDeviceInfoSet, EnumerateError> {
        self.counters.create_attempts.set(self.counters.create_attempts.get() + 1);
        self.counters.last_filter.set(Some(filter));
        if let Some(win32_error) = self.fail_creation {
            return Err(EnumerateError::DeviceInfoSetUnavailable(win32_error));
        }
        Ok(FakeDeviceInfoSet {
            devices: Rc::clone(&self.devices),
            fail_enumeration_at: self.fail_enumeration_at,
            counters: Rc::clone(&self.counters),
        })
    }
}

pub(crate) struct FakeDeviceInfoSet {
    devices: Rc<Vec<FakeDevice>>,
    fail_enumeration_at: Option<(u32, u32)>,
    counters: Rc<ReleaseCounters>,
}

impl DeviceInfoSet for FakeDeviceInfoSet {
    type DeviceHandle = usize;
    type Key = FakeKey;

    fn enum_device_info(&self, member_index: u32) -> Result<usize, EnumDeviceInfoError> {
        self.counters.record_enum_request();
        if let Some((failing_index, win32_error)) = self.fail_enumeration_at {
            if failing_index == member_index {
                return Err(EnumDeviceInfoError::Win32Error(win32_error));
            }
        }
        let index = member_index as usize;
        if index < self.devices.len() {
            Ok(index)
        } else {
            Err(EnumDeviceInfoError::NoMoreItems)
        }
    }

    fn registry_property(&self, device: &usize, property: DeviceRegistryProperty) -> Result<Option<String>, PropertyValueError> {
        match self.devices[*device].properties.get(&property) {
            None => Ok(None),
            Some(FakeProperty::Value(value)) => Ok(Some(value.clone())),
            Some(FakeProperty::Failing(win32_error)) => Err(PropertyValueError::Win32Error(*win32_error)),
        }
    }

    fn open_device_key(&self, device: &usize) -> Result<Option<FakeKey>, ConfigStoreError> {
        match &self.devices[*device].device_key {
            FakeDeviceKey::Absent => Ok(None),
            FakeDeviceKey::Present(device_key) => Ok(Some(device_key.open_copy(Some(Rc::clone(&self.counters))))),
            FakeDeviceKey::Failing(win32_error) => Err(ConfigStoreError::Win32Error(*win32_error)),
        }
    }
}

impl Drop for FakeDeviceInfoSet {
    fn drop(&mut self) {
        self.counters.sets_destroyed.set(self.counters.sets_destroyed.get() + 1);
    }
}
