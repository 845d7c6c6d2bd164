//! Adapter from asynchronous domain actions to request handlers.
//!
//! A domain action receives an [`ActionInput`] and resolves to any
//! serializable value or fails. The adapter turns that into exactly one JSON
//! response: the value itself (object results get `rqTakenMs`/`rsSentMs`
//! timing fields), or a `{"error": ..., "payload": ...}` envelope.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use chrono::Utc;
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::request::{HttpRequest, get_request_body};
use crate::server::classify::{ClassifyFailure, Classified, ExceptionClassifier, ExceptionData};
use crate::server::config::HandlerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// Boxed future returned by a [`HandlerFn`].
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

/// Type-erased handler a dispatch layer can store next to others.
pub type HandlerFn = Arc<dyn for<'a> Fn(HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync>;

/// What a domain action is called with.
#[derive(Debug, Clone)]
pub struct ActionInput {
    /// Body fields merged with the query string.
    pub request_body: Map<String, Value>,
    /// Route parameters.
    pub route_params: HashMap<String, String>,
    /// The raw request.
    pub request: HttpRequest,
}

/// A domain action wrapped as a request handler.
pub struct ActionHandler<A, C = ExceptionClassifier> {
    action: A,
    classifier: C,
    config: HandlerConfig,
}

/// Wrap `action` with the default classifier and configuration.
pub fn to_handle_http<A>(action: A) -> ActionHandler<A> {
    ActionHandler::new(action, ExceptionClassifier, HandlerConfig::default())
}

impl<A, C> ActionHandler<A, C> {
    /// Wrap `action` with an explicit classifier and configuration.
    pub fn new(action: A, classifier: C, config: HandlerConfig) -> Self {
        Self {
            action,
            classifier,
            config,
        }
    }

    /// The configuration this handler was built with.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Serve one request.
    ///
    /// Exactly one body is sent on `response`. On failure the error envelope
    /// is sent first and the failure is then returned, so outer layers can
    /// log it without responding again.
    pub async fn handle<Fut, T, E>(&self, request: HttpRequest, response: &mut HttpResponse) -> Result<(), Error>
    where
        A: Fn(ActionInput) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        T: Serialize,
        C: ClassifyFailure<E>,
    {
        let request_body = get_request_body(&request, self.config.precedence);
        let rq_taken_ms = now_ms();
        let route_params = request.params.clone();
        let path = request.path().to_string();

        let input = ActionInput {
            request_body,
            route_params,
            request,
        };

        let outcome = match (self.action)(input).await {
            Ok(result) => send_result(response, &result, rq_taken_ms),
            Err(failure) => Err(self.classify_failure(&failure)),
        };

        match outcome {
            Ok(()) => {
                debug!("Action for {path} succeeded in {elapsed} ms", elapsed = now_ms() - rq_taken_ms);
                Ok(())
            }
            Err(e) => {
                self.send_failure(response, &e, &path);
                Err(e)
            }
        }
    }

    /// Erase the handler's type so it can be stored with other handlers.
    pub fn into_handler_fn<Fut, T, E>(self) -> HandlerFn
    where
        A: Fn(ActionInput) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Send + 'static,
        C: ClassifyFailure<E> + Send + Sync + 'static,
    {
        let handler = Arc::new(self);
        Arc::new(higher_ranked(move |request, response| {
            let handler = Arc::clone(&handler);
            let future: HandlerFuture<'_> = Box::pin(async move { handler.handle(request, response).await });
            future
        }))
    }

    fn classify_failure<E>(&self, failure: &E) -> Error
    where
        C: ClassifyFailure<E>,
    {
        let mut data = match self.classifier.classify(failure) {
            Classified::Text(text) => ExceptionData::new(format!("HTTP action failed - {text}")),
            Classified::Data(data) => data,
            Classified::Nothing => return Error::Empty,
        };

        if data.http_status_code.unwrap_or(0) == 0 {
            data.http_status_code = Some(self.config.action_failure_status.as_u16());
        }
        Error::Action(data)
    }

    fn send_failure(&self, response: &mut HttpResponse, failure: &Error, path: &str) {
        let status = failure
            .http_status_code()
            .map(StatusCode::from_u16)
            .unwrap_or(self.config.default_failure_status);
        let message = failure.client_message();
        warn!("Action for {path} failed with {status}: {message}");

        if response.is_sent() {
            error!("Could not send error response for {path}: {e}", e = Error::AlreadySent);
            return;
        }

        response.set_status(status);
        response.set_content_type("application/json");

        let envelope = json!({
            "error": message,
            "payload": failure.payload(),
        });
        if let Err(e) = response.send(envelope.to_string()) {
            error!("Could not send error response for {path}: {e}");
        }
    }
}

/// Pins the closure's signature to the higher-ranked one [`HandlerFn`] needs.
fn higher_ranked<F>(f: F) -> F
where
    F: for<'a> Fn(HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a>,
{
    f
}

fn send_result<T: Serialize>(response: &mut HttpResponse, result: &T, rq_taken_ms: i64) -> Result<(), Error> {
    if response.is_sent() {
        return Err(Error::AlreadySent);
    }

    response.set_content_type("application/json");
    response.set_status(StatusCode::OK);

    let body = match serde_json::to_value(result)? {
        Value::Object(fields) => {
            // Result fields win over the timing fields on a name clash
            let mut with_meta = Map::new();
            with_meta.insert("rqTakenMs".to_string(), Value::from(rq_taken_ms));
            with_meta.insert("rsSentMs".to_string(), Value::from(now_ms()));
            with_meta.extend(fields);
            Value::Object(with_meta)
        }
        other => other,
    };

    response.send(body.to_string())
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
