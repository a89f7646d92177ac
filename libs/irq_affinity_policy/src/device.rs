// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{IrqDevicePolicy, IrqPriority, MsiSupported, ProcessorSet};

/// Snapshot of one device's identity and interrupt configuration, taken during a single enumeration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    // SPDRP_DEVICEDESC (never empty; devices without one are skipped)
    pub device_desc: String,
    // SPDRP_FRIENDLYNAME
    pub friendly_name: Option<String>,
    // SPDRP_PHYSICAL_DEVICE_OBJECT_NAME, e.g. "\Device\NTPNP_PCI0012"
    pub dev_obj_name: Option<String>,
    // SPDRP_LOCATION_INFORMATION, e.g. "PCI bus 0, device 20, function 0"
    pub location_information: Option<String>,
    //
    // Interrupt Management\Affinity Policy
    pub device_policy: IrqDevicePolicy,
    pub device_priority: IrqPriority,
    pub assignment_set_override: AssignmentSetOverride,
    //
    // Interrupt Management\MessageSignaledInterruptProperties
    pub message_number_limit: u32,
    pub msi_supported: MsiSupported,
}

impl Device {
    /// The name a user would recognize: the friendly name if there is one, otherwise the description.
    pub fn display_name(&self) -> &str {
        match &self.friendly_name {
            Some(friendly_name) if !friendly_name.is_empty() => friendly_name,
            _ => &self.device_desc,
        }
    }
}

/// The `AssignmentSetOverride` mask as stored, together with the processors it selects.
///
/// Only constructible from the raw bytes, so the decoded set always matches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSetOverride {
    raw: Vec<u8>,
    processors: ProcessorSet,
}

impl AssignmentSetOverride {
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        let processors = ProcessorSet::from_mask_bytes(&raw);
        Self { raw, processors }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn processors(&self) -> &ProcessorSet {
        &self.processors
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
