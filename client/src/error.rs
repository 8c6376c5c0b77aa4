// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors setting up the signup page
#[derive(Debug)]
pub enum PageError {
	NoDocument,
	MissingElement(String),
	WrongElementType(String),
	Browser(String),
}

impl From<JsValue> for PageError {
	fn from(error: JsValue) -> Self {
		Self::Browser(format!("{:?}", error))
	}
}

impl fmt::Display for PageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoDocument => write!(f, "The browser document is not available"),
			Self::MissingElement(id) => write!(f, "No element with ID \"{}\" exists on the page", id),
			Self::WrongElementType(id) => write!(f, "The element with ID \"{}\" is not the expected kind of element", id),
			Self::Browser(error) => write!(f, "The browser reported an error: {}", error),
		}
	}
}
