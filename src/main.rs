#![allow(non_snake_case)]

mod console_logger;
mod report;

fn main() {
    console_logger::init();
    std::process::exit(run());
}

#[cfg(target_os = "windows")]
fn run() -> i32 {
    use irq_affinity_policy::{IrqPolicyEnumerator, SetupApiPlatform};

    let platform = SetupApiPlatform::new();
    match IrqPolicyEnumerator::enumerate_present_devices(&platform) {
        Ok(devices) => {
            print!("{}", report::format_devices(&devices));
            0
        },
        Err(err) => {
            eprintln!("IrqPolicyView: {}", err);
            1
        },
    }
}

#[cfg(not(target_os = "windows"))]
fn run() -> i32 {
    eprintln!("IrqPolicyView: reading interrupt affinity policies requires Windows");
    1
}
