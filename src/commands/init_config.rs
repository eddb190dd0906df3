//! Implementation of the `varlines init-config` command.
//!
//! Writes the default configuration so it can be edited and passed back
//! with `--config`.

use crate::cli::InitConfigArgs;
use crate::config::Config;
use crate::error::{Result, VarlinesError};
use crate::fs::atomic_write_file;
use crate::logging::Log;

/// Execute the `varlines init-config` command.
///
/// Refuses to replace an existing file unless `--force` is given.
pub fn cmd_init_config(args: InitConfigArgs, log: &dyn Log) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(VarlinesError::UserError(format!(
            "'{}' already exists.\n\nUse --force to overwrite it.",
            args.path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(&args.path, &yaml)?;

    log.info("InitConfig", &format!("Wrote {}", args.path.display()));
    println!("Wrote default configuration to {}", args.path.display());
    Ok(())
}
