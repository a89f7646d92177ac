// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod registry_key;
pub use registry_key::RegistryKey;

mod setupapi_device_info_set;
pub use setupapi_device_info_set::{SetupApiDeviceHandle, SetupApiDeviceInfoSet, SetupApiPlatform};

mod win32_utils;
