use nmobj::{NetworkManager, NmError, NmObject};

fn main() -> nmobj::Result<()> {
    let nm = NetworkManager::new()?;

    let manager = nm.manager();
    println!(
        "NetworkManager {} ({})",
        manager.version()?,
        manager.state()?
    );

    let devices = match nm.devices() {
        Ok(devices) => devices,
        Err(NmError::UnsupportedVariant { value, path, .. }) => {
            eprintln!("{path} has device type {value}, which has no wrapper");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for device in devices {
        let core = device.core();
        println!(
            "{:12} {:10} {}",
            core.interface_name()?,
            device.device_type(),
            core.state()?
        );
        println!("{}", device.snapshot()?.to_json_pretty()?);
    }

    Ok(())
}
