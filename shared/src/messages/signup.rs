// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::form_urlencoded;

/// Message shown when the server rejects a signup without a more specific reason
pub const GENERIC_FAILURE_MESSAGE: &str = "Woops, something went wrong. Please try again.";

/// The fields of the signup form, in document order
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignupField {
	Email,
	Username,
	Password,
	PasswordConfirmation,
	DisplayName,
}

impl SignupField {
	pub const ALL: [SignupField; 5] = [
		Self::Email,
		Self::Username,
		Self::Password,
		Self::PasswordConfirmation,
		Self::DisplayName,
	];

	/// Fields whose own constraint validity is checked before submitting. The confirmation field is only compared
	/// against the password.
	pub const CONSTRAINED: [SignupField; 4] = [Self::Email, Self::Username, Self::Password, Self::DisplayName];

	/// The name of the field as sent in the request body
	pub fn name(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Username => "username",
			Self::Password => "password",
			Self::PasswordConfirmation => "password2",
			Self::DisplayName => "displayname",
		}
	}
}

/// Values entered into the signup form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupForm {
	pub email: String,
	pub username: String,
	pub password: String,
	pub password2: String,
	pub displayname: String,
}

impl SignupForm {
	/// Builds a form from a lookup of each field's current value
	pub fn from_fields(mut value_of: impl FnMut(SignupField) -> String) -> Self {
		Self {
			email: value_of(SignupField::Email),
			username: value_of(SignupField::Username),
			password: value_of(SignupField::Password),
			password2: value_of(SignupField::PasswordConfirmation),
			displayname: value_of(SignupField::DisplayName),
		}
	}

	pub fn value(&self, field: SignupField) -> &str {
		match field {
			SignupField::Email => &self.email,
			SignupField::Username => &self.username,
			SignupField::Password => &self.password,
			SignupField::PasswordConfirmation => &self.password2,
			SignupField::DisplayName => &self.displayname,
		}
	}

	pub fn passwords_match(&self) -> bool {
		self.password == self.password2
	}

	/// Encodes every field as an `application/x-www-form-urlencoded` body
	pub fn to_form_body(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		for field in SignupField::ALL {
			serializer.append_pair(field.name(), self.value(field));
		}
		serializer.finish()
	}
}

/// Reply from the server to a signup request. Each field is read on its own: a field that is absent or of an
/// unexpected type doesn't affect the other.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct SignupResponse {
	#[serde(default, deserialize_with = "result_is_true")]
	pub result: bool,
	#[serde(default, rename = "errorCode", deserialize_with = "integral_error_code")]
	pub error_code: Option<i64>,
}

fn result_is_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	Ok(Value::deserialize(deserializer)?.as_bool() == Some(true))
}

/// Accepts whole-number codes whether the server wrote them as integers or floats
fn integral_error_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
	let value = Value::deserialize(deserializer)?;
	let code = value.as_i64().or_else(|| {
		value
			.as_f64()
			.filter(|code| code.fract() == 0.0 && *code >= i64::MIN as f64 && *code <= i64::MAX as f64)
			.map(|code| code as i64)
	});
	Ok(code)
}

impl SignupResponse {
	/// Parses a reply body, yielding `None` when it isn't a JSON object
	pub fn parse(body: &str) -> Option<Self> {
		let value: Value = serde_json::from_str(body).ok()?;
		if !value.is_object() {
			return None;
		}
		Self::deserialize(value).ok()
	}

	/// Whether a successful HTTP reply actually reports a created account
	pub fn body_reports_success(body: &str) -> bool {
		Self::parse(body).is_some_and(|response| response.result)
	}

	/// The message to show for a rejected signup whose reply body may carry an error code
	pub fn failure_message(body: Option<&str>) -> &'static str {
		body.and_then(Self::parse)
			.and_then(|response| response.error_code)
			.and_then(SignupErrorCode::from_code)
			.map_or(GENERIC_FAILURE_MESSAGE, |code| code.message())
	}
}

/// Reasons the server gives for rejecting a signup
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignupErrorCode {
	BadRequest,
	InvalidUsername,
	UsernameExists,
	InvalidPassword,
	InvalidEmail,
	InvalidDisplayName,
	Unknown,
}

impl SignupErrorCode {
	pub fn from_code(code: i64) -> Option<Self> {
		match code {
			-1 => Some(Self::BadRequest),
			-2 => Some(Self::InvalidUsername),
			-3 => Some(Self::UsernameExists),
			-4 => Some(Self::InvalidPassword),
			-5 => Some(Self::InvalidEmail),
			-6 => Some(Self::InvalidDisplayName),
			-100 => Some(Self::Unknown),
			_ => None,
		}
	}

	pub fn message(&self) -> &'static str {
		match self {
			Self::BadRequest | Self::Unknown => GENERIC_FAILURE_MESSAGE,
			Self::InvalidUsername => "The username is invalid. Please enter a different username.",
			Self::UsernameExists => "The username already exists. Please enter a different username.",
			Self::InvalidPassword => "The password is invalid. Please enter a different password.",
			Self::InvalidEmail => "The email address is invalid. Please enter a different email address.",
			Self::InvalidDisplayName => "The display name is invalid. Please enter a different display name.",
		}
	}
}
