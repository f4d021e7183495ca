// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlError};
use miette::Diagnostic;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;
use tokio::fs::read_to_string;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Diagnostic, Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}")]
	#[diagnostic(code(crowd_unlocked::config::read))]
	Read {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	#[diagnostic(transparent)]
	Syntax(#[from] KdlError),

	#[error("missing required config node `{0}`")]
	#[diagnostic(
		code(crowd_unlocked::config::missing),
		help("see config.example.kdl for the expected layout")
	)]
	MissingNode(&'static str),

	#[error("config node `{0}` must have a string argument")]
	#[diagnostic(code(crowd_unlocked::config::not_a_string))]
	NotAString(&'static str),

	#[error("`web.bind-addr` is not a valid socket address: {value}")]
	#[diagnostic(code(crowd_unlocked::config::bind_addr), help("use the form \"127.0.0.1:3000\""))]
	InvalidBindAddr {
		value: String,
		#[source]
		source: AddrParseError,
	},
}

/// Reads and parses the config file at the given path.
pub async fn parse_config(config_path: &str) -> Result<ConfigData, ConfigError> {
	let config_file_contents = read_to_string(config_path).await.map_err(|source| ConfigError::Read {
		path: config_path.to_string(),
		source,
	})?;
	let config = ConfigData::from_kdl(&config_file_contents)?;
	tracing::debug!(path = config_path, ?config, "Loaded configuration");
	Ok(config)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigData {
	pub web: WebConfig,
	pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
	/// Overrides the site root from the Leptos configuration when set
	pub site_root: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggingConfig {
	pub filter: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			filter: String::from(DEFAULT_LOG_FILTER),
		}
	}
}

impl ConfigData {
	pub fn from_kdl(source: &str) -> Result<Self, ConfigError> {
		let document: KdlDocument = source.parse()?;

		let web = document
			.get("web")
			.and_then(|node| node.children())
			.ok_or(ConfigError::MissingNode("web"))?;
		let bind_addr = string_arg(web, "bind-addr", "web.bind-addr")?.ok_or(ConfigError::MissingNode("web.bind-addr"))?;
		let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|source| ConfigError::InvalidBindAddr {
			value: bind_addr.to_string(),
			source,
		})?;
		let site_root = string_arg(web, "site-root", "web.site-root")?.map(String::from);

		let logging = match document.get("logging").and_then(|node| node.children()) {
			Some(logging) => match string_arg(logging, "filter", "logging.filter")? {
				Some(filter) => LoggingConfig {
					filter: filter.to_string(),
				},
				None => LoggingConfig::default(),
			},
			None => LoggingConfig::default(),
		};

		Ok(Self {
			web: WebConfig { bind_addr, site_root },
			logging,
		})
	}
}

/// Gets the first argument of a child node as a string, if the node is present.
fn string_arg<'a>(
	document: &'a KdlDocument,
	name: &str,
	full_name: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
	let Some(value) = document.get_arg(name) else {
		return Ok(None);
	};
	match value.as_string() {
		Some(value) => Ok(Some(value)),
		None => Err(ConfigError::NotAString(full_name)),
	}
}
