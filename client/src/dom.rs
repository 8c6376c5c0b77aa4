use super::error::PageError;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn document() -> Result<Document, PageError> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or(PageError::NoDocument)
}

/// Looks up an element by ID, checking that it's the kind of element the caller needs
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| PageError::MissingElement(id.to_owned()))?;
	element
		.dyn_into::<T>()
		.map_err(|_| PageError::WrongElementType(id.to_owned()))
}

pub fn hide(element: &HtmlElement) {
	if let Err(error) = element.style().set_property("display", "none") {
		warn!("Failed to hide #{}: {:?}", element.id(), error);
	}
}

/// Shows an element by clearing its inline display. If a stylesheet still hides it, the element is forced to display
/// as a block.
pub fn show(element: &HtmlElement) {
	let style = element.style();
	if let Err(error) = style.remove_property("display") {
		warn!("Failed to show #{}: {:?}", element.id(), error);
		return;
	}
	if hidden_by_stylesheet(element) {
		if let Err(error) = style.set_property("display", "block") {
			warn!("Failed to show #{}: {:?}", element.id(), error);
		}
	}
}

fn hidden_by_stylesheet(element: &HtmlElement) -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	match window.get_computed_style(element) {
		Ok(Some(style)) => style
			.get_property_value("display")
			.map_or(false, |display| display == "none"),
		_ => false,
	}
}
