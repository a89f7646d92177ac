#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use irq_affinity_policy::Device;
use std::fmt::Write;

pub fn format_devices(devices: &[Device]) -> String {
    let mut report = String::new();
    for device in devices {
        format_device(&mut report, device);
        report.push('\n');
    }
    let _ = writeln!(report, "{} devices", devices.len());
    report
}

fn format_device(report: &mut String, device: &Device) {
    let _ = writeln!(report, "{}", device.display_name());
    if device.friendly_name.is_some() {
        let _ = writeln!(report, "  description:     {}", device.device_desc);
    }
    if let Some(location_information) = &device.location_information {
        let _ = writeln!(report, "  location:        {}", location_information);
    }
    if let Some(dev_obj_name) = &device.dev_obj_name {
        let _ = writeln!(report, "  device object:   {}", dev_obj_name);
    }
    let _ = writeln!(report, "  policy:          {}", device.device_policy);
    let _ = writeln!(report, "  priority:        {}", device.device_priority);
    if !device.assignment_set_override.is_empty() {
        let _ = writeln!(
            report,
            "  processors:      {} (mask {:02X?})",
            device.assignment_set_override.processors(),
            device.assignment_set_override.raw()
        );
    }
    let _ = writeln!(report, "  msi:             {}", device.msi_supported);
    if device.message_number_limit != 0 {
        let _ = writeln!(report, "  msi limit:       {}", device.message_number_limit);
    }
}
