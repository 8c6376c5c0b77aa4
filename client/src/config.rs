// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::PageError;
use signup_shared::SIGNUP_ENDPOINT;
use web_sys::{HtmlFormElement, Url};

/// Attribute on the form element that overrides where the form is posted
const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";

/// IDs of the page elements the signup form works with, the submit button labels, and the endpoint path
#[derive(Clone, Debug)]
pub struct PageConfig {
	pub form_id: &'static str,
	pub button_id: &'static str,
	pub validation_message_id: &'static str,
	pub error_message_id: &'static str,
	pub success_panel_id: &'static str,
	pub form_container_id: &'static str,
	pub labels: ButtonLabels,
	pub endpoint: String,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			form_id: "form",
			button_id: "signup",
			validation_message_id: "validate",
			error_message_id: "error",
			success_panel_id: "success",
			form_container_id: "fs",
			labels: ButtonLabels::default(),
			endpoint: String::from(SIGNUP_ENDPOINT),
		}
	}
}

impl PageConfig {
	/// Applies overrides the page declares on the form element itself
	pub fn with_form_overrides(mut self, form: &HtmlFormElement) -> Self {
		if let Some(endpoint) = form.get_attribute(ENDPOINT_ATTRIBUTE) {
			self.endpoint_override(&endpoint);
		}
		self
	}

	fn endpoint_override(&mut self, endpoint: &str) {
		let endpoint = endpoint.trim();
		if !endpoint.is_empty() {
			self.endpoint = endpoint.to_owned();
		}
	}

	/// Gets the full URL to post to, resolving the configured endpoint against the page's current address.
	pub fn signup_endpoint(&self) -> Result<String, PageError> {
		let window = web_sys::window().ok_or(PageError::NoDocument)?;
		let page_address = window.location().href()?;
		let url = Url::new_with_base(&self.endpoint, &page_address)?;
		Ok(url.href())
	}
}

/// Text shown on the submit button
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonLabels {
	pub idle: &'static str,
	pub working: &'static str,
}

impl Default for ButtonLabels {
	fn default() -> Self {
		Self {
			idle: "Sign Up",
			working: "Signing up...",
		}
	}
}
