// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::config_store::value_or_default;
use crate::{AssignmentSetOverride, ConfigKey, IrqDevicePolicy, IrqPriority};

/// Location of the interrupt affinity policy below a device's hardware key.
/// see: https://learn.microsoft.com/en-us/windows-hardware/drivers/kernel/interrupt-affinity-and-priority
pub const AFFINITY_POLICY_SUBKEY: &str = r"Interrupt Management\Affinity Policy";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffinityPolicy {
    pub device_policy: IrqDevicePolicy,
    pub device_priority: IrqPriority,
    pub assignment_set_override: AssignmentSetOverride,
}

impl AffinityPolicy {
    /// Reads the policy below `device_key`. Every value is optional; whatever is missing or unreadable
    /// keeps its zero value.
    pub fn read<K: ConfigKey>(device_key: &K) -> AffinityPolicy {
        let affinity_policy_key = match device_key.open_subkey(AFFINITY_POLICY_SUBKEY) {
            Ok(Some(key)) => key,
            Ok(None) => return AffinityPolicy::default(),
            Err(error) => {
                log::debug!("could not open {}: {}", AFFINITY_POLICY_SUBKEY, error);
                return AffinityPolicy::default();
            },
        };

        let device_policy = value_or_default(affinity_policy_key.get_dword("DevicePolicy"), "DevicePolicy");
        let device_priority = value_or_default(affinity_policy_key.get_dword("DevicePriority"), "DevicePriority");
        let assignment_set_override = value_or_default(affinity_policy_key.get_binary("AssignmentSetOverride"), "AssignmentSetOverride");

        AffinityPolicy {
            device_policy: IrqDevicePolicy::from(device_policy),
            device_priority: IrqPriority::from(device_priority),
            assignment_set_override: AssignmentSetOverride::from_bytes(assignment_set_override),
        }
    }
}
