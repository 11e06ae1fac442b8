use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ssh_config_edit::file::{load_config, read_config_text, save_config};
use ssh_config_edit::settings::{Settings, load_settings, resolve_config_path};
use ssh_config_edit::{SshConfig, SshConfigError};

#[derive(Parser)]
#[command(name = "sshcfg")]
#[command(
	author,
	version,
	about = "Edit and query OpenSSH client config files without losing formatting"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// SSH config file to operate on (default: settings `config-path`, then ~/.ssh/config)
	#[arg(long, short, global = true, value_name = "PATH")]
	file: Option<PathBuf>,

	/// Settings file to use instead of ~/.sshcfg.toml
	#[arg(long, global = true, value_name = "PATH")]
	settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse the file and verify it renders back unchanged
	Check,
	/// List the Host entries in document order
	Hosts,
	/// Print a Host block exactly as written
	Find {
		/// Host value, matched exactly
		host: String,
	},
	/// Print the effective settings for a host
	Show {
		/// Host name to resolve
		host: String,

		/// Emit JSON instead of `key value` lines
		#[arg(long)]
		json: bool,
	},
	/// Add directives; Host/Match keys open a new section
	Add {
		/// Directives as KEY=VALUE, in order
		#[arg(required = true, value_name = "KEY=VALUE")]
		directives: Vec<String>,

		/// Print the result instead of writing the file
		#[arg(long)]
		dry_run: bool,
	},
	/// Remove a Host entry and its section
	Remove {
		/// Host value, matched exactly
		host: String,

		/// Print the result instead of writing the file
		#[arg(long)]
		dry_run: bool,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let loaded = load_settings(cli.settings.as_deref()).context("Failed to load settings")?;
	init_tracing(&loaded.settings);

	let path = resolve_config_path(cli.file.as_deref(), &loaded.settings)
		.context("Failed to locate ssh config")?;
	tracing::debug!(path = %path.display(), "using ssh config");

	match cli.command {
		Commands::Check => handle_check(&path),
		Commands::Hosts => handle_hosts(&path),
		Commands::Find { host } => handle_find(&path, &host),
		Commands::Show { host, json } => handle_show(&path, &host, json),
		Commands::Add {
			directives,
			dry_run,
		} => handle_add(&path, &directives, dry_run, &loaded.settings),
		Commands::Remove { host, dry_run } => {
			handle_remove(&path, &host, dry_run, &loaded.settings)
		}
	}
}

/// `RUST_LOG` wins, then the settings file, then `warn`.
fn init_tracing(settings: &Settings) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(settings.log_level.as_deref().unwrap_or("warn"))
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn handle_check(path: &Path) -> Result<ExitCode> {
	let text = read_config_text(path)
		.with_context(|| format!("Failed to read {}", path.display()))?;
	let config = SshConfig::parse(&text);

	if config.to_string() != text {
		eprintln!("{}: does not round-trip", path.display());
		return Ok(ExitCode::FAILURE);
	}

	println!(
		"{}: ok ({} top-level entries, {} hosts)",
		path.display(),
		config.root.len(),
		config.hosts().count()
	);
	Ok(ExitCode::SUCCESS)
}

fn handle_hosts(path: &Path) -> Result<ExitCode> {
	let config = load(path)?;
	for host in config.hosts() {
		println!("{host}");
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_find(path: &Path, host: &str) -> Result<ExitCode> {
	let config = load(path)?;
	let directive = config
		.find(host)
		.ok_or_else(|| SshConfigError::HostNotFound {
			host: host.to_string(),
		})?;
	print!("{}", directive.render());
	Ok(ExitCode::SUCCESS)
}

fn handle_show(path: &Path, host: &str, json: bool) -> Result<ExitCode> {
	let config = load(path)?;
	let resolved = config
		.compute(host)
		.ok_or_else(|| SshConfigError::HostNotFound {
			host: host.to_string(),
		})?;

	if json {
		let out = serde_json::to_string_pretty(&resolved).context("Failed to encode JSON")?;
		println!("{out}");
	} else {
		print!("{resolved}");
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_add(
	path: &Path,
	directives: &[String],
	dry_run: bool,
	settings: &Settings,
) -> Result<ExitCode> {
	let pairs = directives
		.iter()
		.map(String::as_str)
		.map(parse_directive_arg)
		.collect::<Result<Vec<_>, _>>()?;

	let mut config = load(path)?;
	config.add(pairs);
	write_or_print(path, &config, dry_run, settings)
}

fn handle_remove(
	path: &Path,
	host: &str,
	dry_run: bool,
	settings: &Settings,
) -> Result<ExitCode> {
	let mut config = load(path)?;
	if !config.remove_host(host) {
		eprintln!("Host {host} not present; nothing changed");
		return Ok(ExitCode::SUCCESS);
	}
	write_or_print(path, &config, dry_run, settings)
}

fn load(path: &Path) -> Result<SshConfig> {
	load_config(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn write_or_print(
	path: &Path,
	config: &SshConfig,
	dry_run: bool,
	settings: &Settings,
) -> Result<ExitCode> {
	if dry_run {
		print!("{config}");
	} else {
		save_config(path, config, settings.backup)
			.with_context(|| format!("Failed to save {}", path.display()))?;
		println!("Updated {}", path.display());
	}
	Ok(ExitCode::SUCCESS)
}

/// Split a `KEY=VALUE` argument at the first `=`.
fn parse_directive_arg(arg: &str) -> Result<(String, String), SshConfigError> {
	match arg.split_once('=') {
		Some((key, value)) if !key.trim().is_empty() => {
			Ok((key.trim().to_string(), value.trim().to_string()))
		}
		_ => Err(SshConfigError::InvalidDirective {
			input: arg.to_string(),
		}),
	}
}
