// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::config::PageConfig;
use super::dom::{element_by_id, hide, show};
use super::error::PageError;
use log::warn;
use signup_shared::messages::signup::SignupField;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Message areas on the signup page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageArea {
	Validation,
	Error,
}

/// The parts of the signup page the form controller reads and updates
pub trait SignupPage {
	fn mark_required(&self, field: SignupField);

	fn field_value(&self, field: SignupField) -> String;

	/// Runs the browser's constraint validation for a field
	fn field_is_valid(&self, field: SignupField) -> bool;

	fn show_message(&self, area: MessageArea, text: &str);

	fn hide_message(&self, area: MessageArea);

	/// Sets the disabled state of every control in the form
	fn set_controls_disabled(&self, disabled: bool);

	fn set_submit_button(&self, label: &str, disabled: bool);

	/// Reveals the success panel and hides the form
	fn show_success(&self);
}

struct FieldInputs {
	email: HtmlInputElement,
	username: HtmlInputElement,
	password: HtmlInputElement,
	password2: HtmlInputElement,
	displayname: HtmlInputElement,
}

impl FieldInputs {
	fn from_document(document: &Document) -> Result<Self, PageError> {
		Ok(Self {
			email: element_by_id(document, SignupField::Email.name())?,
			username: element_by_id(document, SignupField::Username.name())?,
			password: element_by_id(document, SignupField::Password.name())?,
			password2: element_by_id(document, SignupField::PasswordConfirmation.name())?,
			displayname: element_by_id(document, SignupField::DisplayName.name())?,
		})
	}

	fn get(&self, field: SignupField) -> &HtmlInputElement {
		match field {
			SignupField::Email => &self.email,
			SignupField::Username => &self.username,
			SignupField::Password => &self.password,
			SignupField::PasswordConfirmation => &self.password2,
			SignupField::DisplayName => &self.displayname,
		}
	}
}

/// The signup page as it exists in the browser document
pub struct DomSignupPage {
	form: HtmlFormElement,
	fields: FieldInputs,
	button: HtmlButtonElement,
	validation_message: HtmlElement,
	error_message: HtmlElement,
	success_panel: HtmlElement,
	form_container: HtmlElement,
}

impl DomSignupPage {
	/// Finds all of the page's elements.
	///
	/// # Errors
	///
	/// Fails when any element is missing or is the wrong kind of element.
	pub fn from_document(document: &Document, config: &PageConfig) -> Result<Self, PageError> {
		Ok(Self {
			form: element_by_id(document, config.form_id)?,
			fields: FieldInputs::from_document(document)?,
			button: element_by_id(document, config.button_id)?,
			validation_message: element_by_id(document, config.validation_message_id)?,
			error_message: element_by_id(document, config.error_message_id)?,
			success_panel: element_by_id(document, config.success_panel_id)?,
			form_container: element_by_id(document, config.form_container_id)?,
		})
	}

	pub fn form(&self) -> &HtmlFormElement {
		&self.form
	}

	pub fn button(&self) -> &HtmlButtonElement {
		&self.button
	}

	fn message_element(&self, area: MessageArea) -> &HtmlElement {
		match area {
			MessageArea::Validation => &self.validation_message,
			MessageArea::Error => &self.error_message,
		}
	}
}

impl SignupPage for DomSignupPage {
	fn mark_required(&self, field: SignupField) {
		self.fields.get(field).set_required(true);
	}

	fn field_value(&self, field: SignupField) -> String {
		self.fields.get(field).value()
	}

	fn field_is_valid(&self, field: SignupField) -> bool {
		self.fields.get(field).check_validity()
	}

	fn show_message(&self, area: MessageArea, text: &str) {
		let element = self.message_element(area);
		element.set_text_content(Some(text));
		show(element);
	}

	fn hide_message(&self, area: MessageArea) {
		hide(self.message_element(area));
	}

	fn set_controls_disabled(&self, disabled: bool) {
		let controls = self.form.elements();
		for index in 0..controls.length() {
			let Some(control) = controls.item(index) else {
				continue;
			};
			if let Err(error) = control.toggle_attribute_with_force("disabled", disabled) {
				warn!("Failed to update disabled state of a form control: {:?}", error);
			}
		}
	}

	fn set_submit_button(&self, label: &str, disabled: bool) {
		self.button.set_inner_text(label);
		self.button.set_disabled(disabled);
	}

	fn show_success(&self) {
		show(&self.success_panel);
		hide(&self.form_container);
	}
}
