// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::config::PageConfig;
use super::controller::SignupController;
use super::dom::{document, element_by_id};
use super::error::PageError;
use super::page::DomSignupPage;
use super::request::HttpTransport;
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event as WebEvent, EventInit, HtmlFormElement};

type DomSignupController = SignupController<DomSignupPage, HttpTransport>;

/// Connects the signup form on the current page to a form controller. The listeners stay installed for the life of
/// the page.
///
/// # Errors
///
/// Fails when the page is missing any of the signup form's elements or the browser refuses a listener.
pub fn bind_signup_form(config: PageConfig) -> Result<(), PageError> {
	let document = document()?;
	let form: HtmlFormElement = element_by_id(&document, config.form_id)?;
	let config = config.with_form_overrides(&form);
	let endpoint = config.signup_endpoint()?;
	debug!("Signup form posts to {}", endpoint);

	let page = DomSignupPage::from_document(&document, &config)?;
	let controller = Rc::new(SignupController::new(page, HttpTransport::new(endpoint), config.labels));

	add_submit_listener(&controller)?;
	add_button_proxy(&controller)?;
	Ok(())
}

fn add_submit_listener(controller: &Rc<DomSignupController>) -> Result<(), PageError> {
	let submit_controller = Rc::clone(controller);
	let handler = Closure::<dyn FnMut(WebEvent)>::new(move |event: WebEvent| {
		event.prevent_default();
		let controller = Rc::clone(&submit_controller);
		spawn_local(async move {
			controller.submit().await;
		});
	});
	controller
		.page()
		.form()
		.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

/// Sends clicks on the signup button through the form's submit handling
fn add_button_proxy(controller: &Rc<DomSignupController>) -> Result<(), PageError> {
	let form = controller.page().form().clone();
	let handler = Closure::<dyn FnMut(WebEvent)>::new(move |event: WebEvent| {
		event.prevent_default();
		if let Err(dispatch_error) = dispatch_submit(&form) {
			error!("Failed to submit the signup form: {}", dispatch_error);
		}
	});
	controller
		.page()
		.button()
		.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

fn dispatch_submit(form: &HtmlFormElement) -> Result<(), PageError> {
	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = WebEvent::new_with_event_init_dict("submit", &init)?;
	form.dispatch_event(&event)?;
	Ok(())
}
