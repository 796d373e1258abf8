//! Init command implementation

use std::fs;

use crate::cli::args::InitArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::manifest::templates::generate_yaml;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let yaml = generate_yaml(args.template.into(), &args.name, args.input.as_deref());

    match &args.output {
        None => {
            print!("{yaml}");
            Ok(())
        }
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to replace)",
                    path.display()
                ));
            }
            fs::write(path, &yaml).map_err(|e| format!("{}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {} manifest '{}' to {}", args.template, args.name, path.display()),
            );
            Ok(())
        }
    }
}
