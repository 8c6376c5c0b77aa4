// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::signup::{SignupField, SignupForm};
use std::fmt;

/// Reasons a signup form is rejected before anything is sent
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	InvalidFields,
	PasswordMismatch,
}

impl ValidationError {
	pub fn message(&self) -> &'static str {
		match self {
			Self::InvalidFields => "Please correct the errors on the form.",
			Self::PasswordMismatch => "The confirm password field must match the password field.",
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}

/// Checks a form before submission.
///
/// `field_is_valid` reports the browser's constraint validity for a field. It's consulted for every constrained
/// field (even after one fails) so the browser marks all of them. The password comparison only happens once those
/// fields pass.
pub fn validate_form(
	form: &SignupForm,
	mut field_is_valid: impl FnMut(SignupField) -> bool,
) -> Result<(), ValidationError> {
	let mut all_valid = true;
	for field in SignupField::CONSTRAINED {
		if !field_is_valid(field) {
			all_valid = false;
		}
	}
	if !all_valid {
		return Err(ValidationError::InvalidFields);
	}

	if !form.passwords_match() {
		return Err(ValidationError::PasswordMismatch);
	}

	Ok(())
}
