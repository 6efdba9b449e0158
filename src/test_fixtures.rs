//! Shared test fixtures: canned API payloads and a recording mock transport.

use std::sync::Mutex;

use serde_json::{Value, json};

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const APP_ID: &str = "bd8ba9a4-05a3-4592-838c-4f98bc92e84f";
pub const SUBSCRIPTION_ID: &str = "c17f9d4f-52cd-4819-a0b3-e7b5ad68b761";
pub const ENDPOINT_ID: &str = "4fc8e1f4-2d49-46ee-99a2-c8b942dd4c59";

pub fn apps_json() -> Value {
    json!([
        {
            "id": "f004639d-a393-45fa-96bc-0b476900c5fb",
            "name": "ABC SaaS",
            "created_at": "2022-11-11T15:00:54.460-05:00"
        }
    ])
}

pub fn subscriptions_json() -> Value {
    json!([
        {
            "id": SUBSCRIPTION_ID,
            "subscriber_name": "New Subscriber Company",
            "created_at": "2021-03-29T10:03:09.717-04:00",
            "app": {
                "id": APP_ID,
                "name": "Super Cool SaaS",
                "created_at": "2021-03-27T10:07:17.540-04:00"
            }
        }
    ])
}

pub fn endpoints_json() -> Value {
    json!([
        {
            "id": ENDPOINT_ID,
            "url": "https://wwww.companyabc.com/webhooks",
            "description": "Endpoint description",
            "version": "1.0",
            "status": "active",
            "error_rate": 50.0,
            "created_at": "2021-03-29T20:57:19.128-04:00",
            "webhook_events": [
                {
                    "id": "1a8833ae-7d02-4855-b7fa-53d4aa7ef7f7",
                    "event_type": "user.created",
                    "created_at": "2021-03-27T10:07:17.608-04:00"
                }
            ],
            "subscription": {
                "id": SUBSCRIPTION_ID,
                "subscriber_name": "New Subscriber Company",
                "created_at": "2021-03-29T10:03:09.717-04:00"
            }
        }
    ])
}

pub fn webhook_events_json() -> Value {
    json!([
        {
            "id": "9fe10e24-455a-4089-b62d-539d46fa9302",
            "event_type": "user.created",
            "created_at": "2021-03-23T08:19:38.943-04:00",
            "app": {
                "id": APP_ID,
                "name": "Super Cool SaaS",
                "created_at": "2021-03-27T10:07:17.540-04:00"
            }
        }
    ])
}

pub fn message_json() -> Value {
    json!({
        "id": "a2c12bd6-e147-4a28-aba6-e031345895ab",
        "data": { "foo": "bar" },
        "event_type": "user.created",
        "version": "1.0",
        "event_id": "12323124151",
        "override_payload": false,
        "created_at": "2021-03-23T08:19:38.943-04:00"
    })
}

pub fn webhook_attempts_json() -> Value {
    json!([
        {
            "id": "c1d07a06-329b-4765-906a-5dcbe78653d8",
            "status_code": "200",
            "retry_status": null,
            "status_message": "success",
            "payload": {
                "type": "user.updated",
                "version": "1.0",
                "created": "2022-09-09T14:56:38.635-04:00",
                "data": {
                    "id": 123_123_123,
                    "note": "this is a test",
                    "other_id": 1_231_231_123
                }
            },
            "response": null,
            "error_message": "",
            "app_id": "9739ed9e-9f18-45a8-8895-dea25ac5ec93",
            "endpoint_id": "9f88c3c0-8ea5-4bec-8fc8-ca29c5036a3c",
            "message_id": "5143dec9-a2d2-4aa6-a1b6-2e3168d4c620",
            "created_at": "2022-09-09T14:56:45.105-04:00"
        }
    ])
}

/// First element of a JSON array fixture.
pub fn first(value: &Value) -> Value {
    value[0].clone()
}

type Reply = Box<dyn Fn() -> Result<HttpResponse, HttpError> + Send + Sync>;

/// Mock transport that answers every request the same way and records
/// what it was sent.
pub struct MockClient {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new(
        reply: impl Fn() -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Responds with `status` and `body` serialized as JSON.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::raw(status, body.to_string().into_bytes())
    }

    /// Responds with `status` and the given bytes.
    pub fn raw(status: u16, body: Vec<u8>) -> Self {
        let status = http::StatusCode::from_u16(status).unwrap();
        Self::new(move || Ok(HttpResponse::new(status, http::HeaderMap::new(), body.clone())))
    }

    pub fn timing_out() -> Self {
        Self::new(|| Err(HttpError::Timeout))
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        (self.reply)()
    }
}

/// Decodes a captured request body as JSON.
pub fn body_json(req: &HttpRequest) -> Value {
    serde_json::from_slice(req.body.as_deref().expect("request has no body")).unwrap()
}
