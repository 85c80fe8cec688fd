use nmobj::{NetworkManager, NmObject};

fn main() -> nmobj::Result<()> {
    let nm = NetworkManager::new()?;

    for ap in nm.access_points()? {
        let channel = ap
            .channel()?
            .map_or_else(|| "?".to_string(), |c| c.to_string());
        println!(
            "{:30} ch {:>3} {:>3}% {}",
            ap.ssid()?,
            channel,
            ap.strength()?,
            if ap.security()?.secured() { "secured" } else { "open" }
        );
        println!("{}", ap.snapshot()?.to_json_string()?);
    }

    Ok(())
}
