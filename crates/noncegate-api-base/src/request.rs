//! A single-use HTTP request and its observable lifecycle.

use reqwest::{StatusCode, header};

use crate::{Configuration, Error, INVALID_TOKEN_BODY};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET.
    #[default]
    Get,
    /// HTTP POST.
    Post,
}

/// How request parameters are put on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Serialize `params` as a JSON request body with a JSON content type.
    #[default]
    Json,
    /// Send `params` as-is: a POST gets a multipart/form-data body with one
    /// text field per entry, a GET carries no body.
    Direct,
}

/// Options for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, GET if not specified.
    pub method: Method,
    /// Body encoding, JSON if not specified.
    pub encoding: Encoding,
    /// Request parameters: a JSON mapping whose interpretation depends on
    /// `encoding`.
    pub params: Option<serde_json::Value>,
}

/// Observable lifecycle states of a [`RequestClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No request has been sent yet.
    Idle,
    /// The request has been handed to the transport.
    Sent,
    /// Terminal: the server answered 200.
    Succeeded,
    /// Terminal: the server answered 401 with the invalid-token body.
    Rejected,
    /// Terminal: any other completion, including transport failures.
    Failed,
}

/// Issues exactly one HTTP request and classifies its outcome.
///
/// Each instance walks `Idle -> Sent` and ends in one of the terminal
/// states. There are no retries and no backoff; a new attempt means a new
/// `RequestClient`. Independently issued requests share nothing, so callers
/// that need ordering must await one before sending the next.
#[derive(Debug)]
pub struct RequestClient {
    configuration: Configuration,
    state: RequestState,
}

impl RequestClient {
    /// Creates an idle client for one request against `configuration`.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            state: RequestState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Sends the request and resolves its outcome.
    ///
    /// `path` is joined to the configured base path. A 200 response yields
    /// the raw body text. A 401 carrying [`INVALID_TOKEN_BODY`] is
    /// [`Error::AuthenticationFailed`]; any other completion is
    /// [`Error::Response`] with the status and raw body, so the caller has
    /// enough to render a diagnostic.
    pub async fn send(&mut self, path: &str, options: RequestOptions) -> Result<String, Error> {
        if self.state != RequestState::Idle {
            return Err(Error::Other(format!(
                "request already sent (state: {:?})",
                self.state
            )));
        }

        let url = format!("{}{}", self.configuration.base_path, path);
        log::debug!("sending {:?} {}", options.method, url);

        let mut request = match options.method {
            Method::Get => self.configuration.client.get(&url),
            Method::Post => self.configuration.client.post(&url),
        };
        if let Some(user_agent) = &self.configuration.user_agent {
            request = request.header(header::USER_AGENT, user_agent.as_str());
        }
        request = match (options.encoding, options.params) {
            (_, None) => request,
            (Encoding::Json, Some(params)) => request.json(&params),
            (Encoding::Direct, Some(params)) => match options.method {
                Method::Post => request.multipart(form_fields(params)?),
                // GET requests carry no body.
                Method::Get => request,
            },
        };

        self.state = RequestState::Sent;
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.state = RequestState::Failed;
                return Err(e.into());
            }
        };

        let status = response.status();
        let content = match response.text().await {
            Ok(content) => content,
            Err(e) => {
                self.state = RequestState::Failed;
                return Err(e.into());
            }
        };

        if status == StatusCode::OK {
            self.state = RequestState::Succeeded;
            Ok(content)
        } else if status == StatusCode::UNAUTHORIZED && content == INVALID_TOKEN_BODY {
            self.state = RequestState::Rejected;
            Err(Error::AuthenticationFailed { content })
        } else {
            self.state = RequestState::Failed;
            Err(Error::Response { status, content })
        }
    }
}

/// Builds a multipart form from a JSON mapping of field names to values.
fn form_fields(params: serde_json::Value) -> Result<reqwest::multipart::Form, Error> {
    let serde_json::Value::Object(fields) = params else {
        return Err(Error::Other(
            "direct encoding requires params to be a mapping".into(),
        ));
    };

    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        let text = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(name, text);
    }
    Ok(form)
}

/// Parses a response body as JSON, treating an empty body as `null`.
///
/// The server answers some endpoints with an empty 200; that is a valid
/// "no content" result, not a parse failure.
pub fn parse_json_body(content: &str) -> Result<serde_json::Value, Error> {
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(content)?)
}
