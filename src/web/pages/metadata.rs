// © 2025 the Crowd Unlocked Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Document-level metadata written into the head of every page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteMetadata {
	pub title: &'static str,
	pub description: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
	title: "Crowd Unlocked",
	description: "Artist management platform",
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metadata_is_fixed() {
		assert_eq!(SITE_METADATA.title, "Crowd Unlocked");
		assert_eq!(SITE_METADATA.description, "Artist management platform");
	}
}
