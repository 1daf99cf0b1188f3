use crate::{
	config::API_BASE_URL,
	session::{persist, UserInfo},
};
use reqwest::{header, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

pub mod favorites;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
	#[error("no session token available")]
	MissingToken,
	#[error("request failed with status {status}: {message}")]
	Status { status: u16, message: String },
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
}

impl ApiError {
	/// Builds the error for a non-success response. The backend reports failures
	/// as `{ "message": ... }`; any other body is passed through as-is.
	pub fn from_body(status: u16, body: &str) -> Self {
		#[derive(Deserialize)]
		struct ErrorBody {
			message: String,
		}
		let message = match serde_json::from_str::<ErrorBody>(body) {
			Ok(ErrorBody { message }) => message,
			Err(_) => body.trim().to_owned(),
		};
		Self::Status { status, message }
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

/// Authenticated access to the tkflix backend.
#[derive(Clone)]
pub struct Client {
	http: reqwest::Client,
	base: Url,
	token: String,
}

impl Client {
	pub fn new(token: impl Into<String>) -> anyhow::Result<Self> {
		Self::with_base(API_BASE_URL, token)
	}

	pub fn with_base(base: &str, token: impl Into<String>) -> anyhow::Result<Self> {
		Ok(Self {
			http: reqwest::Client::new(),
			base: Url::parse(base)?,
			token: token.into(),
		})
	}

	/// A client for the signed-in user, falling back to the token persisted in local storage.
	pub fn for_user(user: Option<&UserInfo>) -> anyhow::Result<Self> {
		let token = persist::resolve_token(user, &persist::LocalTokenStorage).ok_or(ApiError::MissingToken)?;
		Self::new(token)
	}

	pub fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
		Ok(self.base.join(path)?)
	}

	fn request<T>(&self, method: Method, path: &str) -> anyhow::Result<Response<T>>
	where
		T: DeserializeOwned,
	{
		let builder = self
			.http
			.request(method, self.endpoint(path)?)
			.header(header::AUTHORIZATION, format!("Bearer {}", self.token));
		Ok(Response::new(builder))
	}
}

/// A pending request whose successful body decodes to `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn new(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	async fn text(self) -> anyhow::Result<String> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		if !status.is_success() {
			return Err(ApiError::from_body(status.as_u16(), &text).into());
		}
		Ok(text)
	}

	pub async fn send(self) -> anyhow::Result<T> {
		let text = self.text().await?;
		let output = match serde_json::from_str(&text) {
			Ok(data) => data,
			Err(err) => {
				return Err(ApiError::from(InvalidJson(text, err)).into());
			}
		};
		Ok(output)
	}

	/// Sends the request, ignoring whatever body a successful response carries.
	pub async fn send_discard(self) -> anyhow::Result<()> {
		self.text().await?;
		Ok(())
	}
}
