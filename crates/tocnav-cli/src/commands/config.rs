use anyhow::Result;

use tocnav_core::NavigatorConfig;

pub fn run(config: &NavigatorConfig, init: bool) -> Result<()> {
    if init {
        let path = NavigatorConfig::config_path();
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }
        config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
