// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let mut leptos_options = web_config.leptos_options;
	if let Some(site_root) = &config.web.site_root {
		leptos_options.site_root = site_root.as_str().into();
	}
	let site_addr = config.web.bind_addr;

	let app = build_router(AppState { leptos_options });

	tracing::info!(%site_addr, "Listening on http://{}", site_addr);
	let listener = TcpListener::bind(&site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.into_diagnostic()?;

	tracing::info!("Web server stopped");
	Ok(())
}

/// Builds the full application router: Leptos routes rendered through the shell, with a static file fallback.
pub fn build_router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.with_state(app_state)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(source = ?error, "Failed to listen for shutdown signal");
		std::future::pending::<()>().await;
	}
	tracing::info!("Shutdown signal received");
}

/// Serves a static file from the site root, or renders the app for anything that isn't one.
async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let response = get_static_file(uri.clone(), &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => {
			tracing::error!(%uri, status = %error, "Failed to serve static file");
			return error.into_response();
		}
	};

	if response.status() == StatusCode::OK {
		response.into_response()
	} else {
		tracing::debug!(%uri, "No static file; rendering app");
		let leptos_options = state.leptos_options.clone();
		let handler = render_app_to_stream(move || shell(leptos_options.clone()));
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri.clone()).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::to_bytes;
	use pretty_assertions::assert_eq;

	fn test_router() -> Router {
		let mut leptos_options = LeptosOptions::builder().output_name("crowd-unlocked").build();
		leptos_options.site_root = concat!(env!("CARGO_MANIFEST_DIR"), "/target/no-such-site").into();
		build_router(AppState { leptos_options })
	}

	async fn get(path: &str) -> (StatusCode, String) {
		let request = Request::builder().uri(path).body(Body::empty()).unwrap();
		let response = test_router().oneshot(request).await.unwrap();
		let status = response.status();
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[tokio::test]
	async fn root_serves_landing_page_document() {
		let (status, html) = get("/").await;

		assert_eq!(status, StatusCode::OK);
		assert!(html.contains("lang=\"en\""));
		assert_eq!(html.matches("<body").count(), 1);
		assert!(html.contains("<title>Crowd Unlocked</title>"));
		assert!(html.contains("content=\"Artist management platform\""));
		assert!(html.contains("Artist Management Platform"));

		let bookings = html.find("Bookings").unwrap();
		let releases = html.find("Releases").unwrap();
		let social = html.find("Social").unwrap();
		assert!(bookings < releases && releases < social);
	}

	#[tokio::test]
	async fn unknown_path_is_not_found() {
		let (status, html) = get("/missing").await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert!(html.contains("id=\"not_found_page\""));
		assert!(!html.contains("class=\"feature_card\""));
	}
}
