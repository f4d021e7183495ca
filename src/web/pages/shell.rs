// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use super::metadata::SITE_METADATA;
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub const DOCUMENT_LANG: &str = "en";

/// Renders the full HTML document for a request. Used by the server for every routed page.
pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<RootShell options>
			<App />
		</RootShell>
	}
}

/// The document root. Everything passed as children is placed in the body as-is.
///
/// Without Leptos options only the static head is written; there are no hydration scripts and no
/// insertion point for `leptos_meta` tags.
#[component]
pub fn RootShell(children: Children, #[prop(optional)] options: Option<LeptosOptions>) -> impl IntoView {
	view! {
		<html lang={DOCUMENT_LANG}>
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<title>{SITE_METADATA.title}</title>
				<meta name="description" content={SITE_METADATA.description} />
				{options.map(|options| view! {
					<AutoReload options=options.clone() />
					<HydrationScripts options />
					<MetaTags />
				})}
			</head>
			<body>
				{children()}
			</body>
		</html>
	}
}
