// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::config::ButtonLabels;
use super::page::{MessageArea, SignupPage};
use super::request::SignupTransport;
use log::{debug, warn};
use signup_shared::messages::signup::{SignupField, SignupForm, SignupResponse, GENERIC_FAILURE_MESSAGE};
use signup_shared::validation::validate_form;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormState {
	Idle,
	Submitting,
	/// The account was created; the form stays hidden and disabled
	Complete,
}

/// Validates, submits, and shows the outcome for one signup form
pub struct SignupController<P, T> {
	page: P,
	transport: T,
	labels: ButtonLabels,
	state: Cell<FormState>,
}

impl<P: SignupPage, T: SignupTransport> SignupController<P, T> {
	pub fn new(page: P, transport: T, labels: ButtonLabels) -> Self {
		Self {
			page,
			transport,
			labels,
			state: Cell::new(FormState::Idle),
		}
	}

	pub fn page(&self) -> &P {
		&self.page
	}

	#[cfg(test)]
	pub fn state(&self) -> FormState {
		self.state.get()
	}

	/// Handles one submission of the form: validates locally, then posts the form and shows the result.
	pub async fn submit(&self) {
		if self.state.get() != FormState::Idle {
			debug!("Ignoring signup submission while the form is {:?}", self.state.get());
			return;
		}

		self.page.hide_message(MessageArea::Validation);
		for field in SignupField::ALL {
			self.page.mark_required(field);
		}

		let form = SignupForm::from_fields(|field| self.page.field_value(field));
		if let Err(error) = validate_form(&form, |field| self.page.field_is_valid(field)) {
			debug!("Signup form failed validation: {}", error);
			self.page.show_message(MessageArea::Validation, error.message());
			return;
		}

		let body = form.to_form_body();
		self.disable_form();
		debug!("Submitting signup for {}", form.username);

		match self.transport.post_signup(body).await {
			Ok(reply) => {
				if SignupResponse::body_reports_success(&reply) {
					debug!("Signup completed");
					self.state.set(FormState::Complete);
					self.page.show_success();
				} else {
					warn!("Signup reply did not report success: {}", reply);
					self.page.show_message(MessageArea::Error, GENERIC_FAILURE_MESSAGE);
					self.enable_form();
				}
			}
			Err(error) => {
				warn!("Signup request failed: {}", error);
				let message = SignupResponse::failure_message(error.body());
				self.page.show_message(MessageArea::Error, message);
				self.enable_form();
			}
		}
	}

	fn disable_form(&self) {
		self.state.set(FormState::Submitting);
		self.page.set_controls_disabled(true);
		self.page.set_submit_button(self.labels.working, true);
	}

	/// Re-enables every form control and resets the submit button
	pub fn enable_form(&self) {
		self.page.set_controls_disabled(false);
		self.page.set_submit_button(self.labels.idle, false);
		self.state.set(FormState::Idle);
	}
}
