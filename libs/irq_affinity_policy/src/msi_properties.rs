// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::config_store::value_or_default;
use crate::{ConfigKey, MsiSupported};

// see: https://learn.microsoft.com/en-us/windows-hardware/drivers/kernel/enabling-message-signaled-interrupts-in-the-registry
pub const MSI_PROPERTIES_SUBKEY: &str = r"Interrupt Management\MessageSignaledInterruptProperties";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsiProperties {
    pub message_number_limit: u32,
    pub msi_supported: MsiSupported,
}

impl MsiProperties {
    pub fn read<K: ConfigKey>(device_key: &K) -> MsiProperties {
        let msi_properties_key = match device_key.open_subkey(MSI_PROPERTIES_SUBKEY) {
            Ok(Some(key)) => key,
            Ok(None) => return MsiProperties::default(),
            Err(error) => {
                log::debug!("could not open {}: {}", MSI_PROPERTIES_SUBKEY, error);
                return MsiProperties::default();
            },
        };

        let message_number_limit = value_or_default(msi_properties_key.get_dword_hex("MessageNumberLimit"), "MessageNumberLimit");
        // absent and unreadable both leave MSISupported unspecified
        let msi_supported = match msi_properties_key.get_dword("MSISupported") {
            Ok(value) => value,
            Err(error) => {
                log::debug!("ignoring registry value MSISupported: {}", error);
                None
            },
        };

        MsiProperties {
            message_number_limit,
            msi_supported: MsiSupported::from_stored_value(msi_supported),
        }
    }
}
