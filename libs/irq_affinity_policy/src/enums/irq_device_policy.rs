// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::fmt;

/// How the kernel distributes a device's interrupts across processors (`IRQ_DEVICE_POLICY`).
///
/// Codes the platform defines but this enum does not name are kept in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IrqDevicePolicy {
    #[default]
    MachineDefault,
    AllCloseProcessors,
    OneCloseProcessor,
    AllProcessorsInMachine,
    SpecifiedProcessors,
    SpreadMessagesAcrossAllProcessors,
    AllProcessorsInMachineWhenSteered,
    Unknown(/*code: */u32),
}

impl IrqDevicePolicy {
    pub fn code(&self) -> u32 {
        match self {
            IrqDevicePolicy::MachineDefault => 0,
            IrqDevicePolicy::AllCloseProcessors => 1,
            IrqDevicePolicy::OneCloseProcessor => 2,
            IrqDevicePolicy::AllProcessorsInMachine => 3,
            IrqDevicePolicy::SpecifiedProcessors => 4,
            IrqDevicePolicy::SpreadMessagesAcrossAllProcessors => 5,
            IrqDevicePolicy::AllProcessorsInMachineWhenSteered => 6,
            IrqDevicePolicy::Unknown(code) => *code,
        }
    }

    /// True when the assignment set override decides which processors are eligible.
    pub fn uses_assignment_set(&self) -> bool {
        matches!(self, IrqDevicePolicy::SpecifiedProcessors)
    }
}

impl From<u32> for IrqDevicePolicy {
    fn from(code: u32) -> Self {
        match code {
            0 => IrqDevicePolicy::MachineDefault,
            1 => IrqDevicePolicy::AllCloseProcessors,
            2 => IrqDevicePolicy::OneCloseProcessor,
            3 => IrqDevicePolicy::AllProcessorsInMachine,
            4 => IrqDevicePolicy::SpecifiedProcessors,
            5 => IrqDevicePolicy::SpreadMessagesAcrossAllProcessors,
            6 => IrqDevicePolicy::AllProcessorsInMachineWhenSteered,
            other => IrqDevicePolicy::Unknown(other),
        }
    }
}

impl fmt::Display for IrqDevicePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrqDevicePolicy::MachineDefault => write!(f, "IrqPolicyMachineDefault"),
            IrqDevicePolicy::AllCloseProcessors => write!(f, "IrqPolicyAllCloseProcessors"),
            IrqDevicePolicy::OneCloseProcessor => write!(f, "IrqPolicyOneCloseProcessor"),
            IrqDevicePolicy::AllProcessorsInMachine => write!(f, "IrqPolicyAllProcessorsInMachine"),
            IrqDevicePolicy::SpecifiedProcessors => write!(f, "IrqPolicySpecifiedProcessors"),
            IrqDevicePolicy::SpreadMessagesAcrossAllProcessors => write!(f, "IrqPolicySpreadMessagesAcrossAllProcessors"),
            IrqDevicePolicy::AllProcessorsInMachineWhenSteered => write!(f, "IrqPolicyAllProcessorsInMachineWhenSteered"),
            IrqDevicePolicy::Unknown(code) => write!(f, "IrqPolicy({})", code),
        }
    }
}
