// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use crowd_unlocked::config::parse_config;
	use crowd_unlocked::web::server::run_server;
	use miette::IntoDiagnostic;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	let config = parse_config("config.kdl").await?;

	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(&config.logging.filter).into_diagnostic()?,
	};
	tracing_subscriber::fmt().with_env_filter(filter).init();

	run_server(Arc::new(config)).await
}

// Client builds only use the library's hydrate entry point.
#[cfg(not(feature = "ssr"))]
fn main() {}
