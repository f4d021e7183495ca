// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

/// One of the product areas advertised on the landing page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureCard {
	pub heading: &'static str,
	pub body: &'static str,
}

/// Cards in the order they appear in the grid
pub const FEATURE_CARDS: [FeatureCard; 3] = [
	FeatureCard {
		heading: "Bookings",
		body: "Manage artist bookings and events",
	},
	FeatureCard {
		heading: "Releases",
		body: "Track music releases and distribution",
	},
	FeatureCard {
		heading: "Social",
		body: "Monitor social media presence",
	},
];

#[component]
pub fn HomePage() -> impl IntoView {
	view! {
		<main id="home_page" class="page">
			<div class="page_content">
				<h1 class="page_title">"Crowd Unlocked"</h1>
				<p class="page_tagline">"Artist Management Platform"</p>

				<div class="feature_grid">
					{FEATURE_CARDS.into_iter().map(|card| view! { <FeatureCardView card /> }).collect_view()}
				</div>
			</div>
		</main>
	}
}

#[component]
pub fn FeatureCardView(card: FeatureCard) -> impl IntoView {
	view! {
		<article class="feature_card">
			<h2>{card.heading}</h2>
			<p>{card.body}</p>
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use leptos::tachys::view::RenderHtml;
	use pretty_assertions::assert_eq;

	fn render_home() -> String {
		view! { <HomePage /> }.to_html()
	}

	#[test]
	fn renders_heading_and_tagline() {
		let html = render_home();

		assert!(html.contains("Crowd Unlocked"));
		assert!(html.contains("Artist Management Platform"));
		assert!(html.find("Crowd Unlocked") < html.find("Artist Management Platform"));
	}

	#[test]
	fn renders_three_cards_in_order() {
		let html = render_home();

		assert_eq!(html.matches("class=\"feature_card\"").count(), 3);

		let positions: Vec<usize> = ["Bookings", "Releases", "Social"]
			.iter()
			.map(|heading| html.find(heading).unwrap())
			.collect();
		assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn renders_card_bodies() {
		let html = render_home();

		for card in FEATURE_CARDS {
			assert_eq!(html.matches(card.heading).count(), 1, "{}", card.heading);
			assert!(html.contains(card.body));
		}
	}

	#[test]
	fn rendering_is_idempotent() {
		assert_eq!(render_home(), render_home());
	}

	#[test]
	fn card_view_renders_heading_and_body() {
		let html = view! { <FeatureCardView card={FEATURE_CARDS[1]} /> }.to_html();

		assert!(html.starts_with("<article"));
		assert!(html.contains("Releases"));
		assert!(html.contains("Track music releases and distribution"));
	}
}
