mod config;
mod controller;
mod dom;
mod error;
mod events;
mod page;
mod request;

use config::PageConfig;
use events::bind_signup_form;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	if let Err(error) = bind_signup_form(PageConfig::default()) {
		log::error!("Unable to set up the signup form: {}", error);
	}
}
