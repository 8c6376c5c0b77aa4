use gloo_net::http::Request;
use std::fmt;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Errors that can occur posting the signup form
#[derive(Debug)]
pub enum RequestError {
	/// The request couldn't be made or its reply couldn't be read
	Network(gloo_net::Error),
	/// The server replied with a non-success status
	Status { status: u16, body: Option<String> },
}

impl RequestError {
	/// The reply body, if the server sent one
	pub fn body(&self) -> Option<&str> {
		match self {
			Self::Network(_) => None,
			Self::Status { body, .. } => body.as_deref(),
		}
	}
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::Status { status, .. } => write!(f, "The server responded with status {}", status),
		}
	}
}

/// Sends a serialized signup form to the server
pub trait SignupTransport {
	/// Posts the form body, giving back the reply body of a successful response
	async fn post_signup(&self, body: String) -> Result<String, RequestError>;
}

pub struct HttpTransport {
	endpoint: String,
}

impl HttpTransport {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}
}

impl SignupTransport for HttpTransport {
	async fn post_signup(&self, body: String) -> Result<String, RequestError> {
		let request = Request::post(&self.endpoint)
			.header("Content-Type", FORM_CONTENT_TYPE)
			.body(body)?;
		let response = request.send().await?;

		if response.ok() {
			Ok(response.text().await?)
		} else {
			let status = response.status();
			let body = response.text().await.ok();
			Err(RequestError::Status { status, body })
		}
	}
}
