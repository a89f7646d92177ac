// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod config_store_error;
pub use config_store_error::ConfigStoreError;

mod enum_device_info_error;
pub use enum_device_info_error::EnumDeviceInfoError;

mod enumerate_error;
pub use enumerate_error::EnumerateError;

mod property_value_error;
pub use property_value_error::PropertyValueError;
