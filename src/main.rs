// This is my main entry point for the configuration CLI
// I'm importing the core components I built for managing project configuration
use chainsmith::{
    to_json_string, to_toml_string, Command, CompilerPin, ConfigError, FileFormat, FormatArg,
    NetworkProfile, Opt, ProjectConfig, ProjectFile, GLOBAL_SETTINGS, TOML_FILE,
};
use clap::Parser;
use log::{error, LevelFilter};
use std::env::current_dir;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // I initialize logging so I can see what the toolkit is doing
    // Info level shows file loads and saves without being too verbose
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // I parse the command line arguments using clap - this gives me a nice CLI interface
    let opt = Opt::parse();

    // I run the actual command and handle any errors that might occur
    // If something goes wrong, I log the error and exit with code 1
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// I resolve the configuration the same way the build tool would at startup:
// an explicit path from the environment wins, then a file in the current
// directory, and finally the built-in record
fn resolve_config() -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    if let Some(path) = GLOBAL_SETTINGS.get_config_path() {
        return Ok(ProjectFile::read(Path::new(&path))?);
    }
    Ok(ProjectFile::resolve(&current_dir()?)?)
}

// I figure out where edits should be written: the explicit path if one is
// set, the located project file otherwise, and a fresh TOML file as the
// fallback for projects that have not authored one yet
fn project_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = GLOBAL_SETTINGS.get_config_path() {
        return Ok(PathBuf::from(path));
    }
    let dir = current_dir()?;
    Ok(ProjectFile::locate(&dir).unwrap_or_else(|| dir.join(TOML_FILE)))
}

// This is where I handle all the different CLI commands
// Each command corresponds to a different configuration operation
fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // When I want to start a new project, this writes the built-in configuration to disk
        Command::Init { format, force } => {
            let file_format = match format.unwrap_or(FormatArg::Toml) {
                FormatArg::Toml => FileFormat::Toml,
                FormatArg::Json => FileFormat::Json,
            };
            let path = current_dir()?.join(file_format.file_name());

            // I refuse to clobber an existing project file unless asked to
            if path.exists() && !force {
                return Err(ConfigError::FileExists(path.display().to_string()).into());
            }

            ProjectFile::write(&path, &ProjectConfig::load())?;
            println!("Created {}", path.display());
        }
        // When I want to see the configuration exactly as the build tool would consume it
        Command::Show { format } => {
            let config = resolve_config()?;
            let text = match format.unwrap_or(FormatArg::Toml) {
                FormatArg::Toml => to_toml_string(&config)?,
                FormatArg::Json => to_json_string(&config)?,
            };
            print!("{text}");
        }
        // When I want a quick overview of the network profiles in this project
        Command::Networks => {
            let config = resolve_config()?;
            let active = GLOBAL_SETTINGS.get_active_network();
            for name in config.network_names() {
                let profile = &config.networks[&name];
                // I mark the profile the environment selected as active
                if name == active {
                    println!("{name}: {profile} (active)");
                } else {
                    println!("{name}: {profile}");
                }
            }
        }
        // When I want to see which compiler releases this project allows
        Command::Compilers => {
            let config = resolve_config()?;
            for name in config.compiler_names() {
                println!("{}: {}", name, config.compilers[&name]);
            }
        }
        // When I want the full detail of one network profile
        Command::GetNetwork { name } => {
            let config = resolve_config()?;
            let profile = config
                .network(&name)
                .ok_or_else(|| ConfigError::UnknownNetwork(name.clone()))?;
            println!("host:       {}", profile.host);
            println!("port:       {}", profile.port);
            println!("gas:        {}", profile.gas);
            println!("network_id: {}", profile.network_id);
        }
        // When I want to know whether the authored configuration has defects
        // Loading never fails, so this is the place mistakes show up
        Command::Check => {
            let config = resolve_config()?;
            let issues = config.lint();
            if issues.is_empty() {
                println!("No issues found.");
            } else {
                for issue in &issues {
                    println!("{issue}");
                }
                return Err(ConfigError::Lint {
                    issues: issues.len(),
                }
                .into());
            }
        }
        // When I want to add a network profile to the project file
        Command::AddNetwork {
            name,
            host,
            port,
            gas,
            network_id,
        } => {
            let profile = NetworkProfile::new(host, port, gas, network_id);

            // I validate the new profile up front so a defective entry never
            // lands on disk through this path
            let issues = profile.lint(&name);
            if let Some(issue) = issues.first() {
                return Err(format!("Invalid profile: {issue}").into());
            }

            let mut config = resolve_config()?;
            config.insert_network(&name, profile);
            let path = project_file_path()?;
            ProjectFile::write(&path, &config)?;
            println!("Added network {name} to {}", path.display());
        }
        // When I want to pin a compiler release range for the project
        Command::SetCompiler { name, version } => {
            let pin = CompilerPin::new(version);
            let issues = pin.lint(&name);
            if let Some(issue) = issues.first() {
                return Err(format!("Invalid pin: {issue}").into());
            }

            let mut config = resolve_config()?;
            config.pin_compiler(&name, pin.clone());
            let path = project_file_path()?;
            ProjectFile::write(&path, &config)?;
            println!("Pinned {name} to {pin} in {}", path.display());
        }
    }
    Ok(())
}
