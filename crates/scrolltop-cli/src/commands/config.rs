use anyhow::Result;

use scrolltop_core::AppConfig;

/// Print the effective configuration, or where it is read from
pub fn run(config: &AppConfig, path_only: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if !path.exists() {
        println!("# {} not found, showing defaults", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
