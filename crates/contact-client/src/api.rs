//! Port to the contacts service and its reqwest-backed adapter.
//!
//! The adapter owns transport details only: URL building, timeouts, envelope
//! decoding and mapping failure envelopes to [`ClientError::Server`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::model::{ContactForm, ContactPage, ContactRecord, Envelope};
use crate::state::PageQuery;

const CONTACTS_PATH: &str = "api/v1/contacts";

/// Operations the table needs from the contacts service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Fetch one page in store order.
    async fn list(&self, query: PageQuery) -> Result<ContactPage, ClientError>;

    /// Create a contact.
    async fn create(&self, form: &ContactForm) -> Result<ContactRecord, ClientError>;

    /// Replace the fields of contact `id` with `form`.
    async fn update(&self, id: &str, form: &ContactForm) -> Result<ContactRecord, ClientError>;

    /// Delete contact `id`, returning the removed record.
    async fn delete(&self, id: &str) -> Result<ContactRecord, ClientError>;
}

/// [`ContactsApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContactsApi {
    client: Client,
    contacts_url: Url,
}

impl HttpContactsApi {
    /// Build an adapter for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidBaseUrl`] when `base_url` cannot carry a
    /// path, or [`ClientError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ClientError> {
        let contacts_url = contacts_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            contacts_url,
        })
    }

    fn contact_url(&self, id: &str) -> Result<Url, ClientError> {
        let mut url = self.contacts_url.clone();
        url.path_segments_mut()
            .map_err(|()| invalid_base("URL cannot be a base"))?
            .push(id);
        Ok(url)
    }

    async fn finish<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "contacts API answered");
        decode_response(status, body.as_ref())
    }
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    async fn list(&self, query: PageQuery) -> Result<ContactPage, ClientError> {
        let request = self
            .client
            .get(self.contacts_url.clone())
            .query(&[("page", query.page), ("limit", query.limit)]);
        Self::finish(request).await
    }

    async fn create(&self, form: &ContactForm) -> Result<ContactRecord, ClientError> {
        let request = self.client.post(self.contacts_url.clone()).json(form);
        Self::finish(request).await
    }

    async fn update(&self, id: &str, form: &ContactForm) -> Result<ContactRecord, ClientError> {
        let request = self.client.put(self.contact_url(id)?).json(form);
        Self::finish(request).await
    }

    async fn delete(&self, id: &str) -> Result<ContactRecord, ClientError> {
        let request = self.client.delete(self.contact_url(id)?);
        Self::finish(request).await
    }
}

fn invalid_base(message: impl Into<String>) -> ClientError {
    ClientError::InvalidBaseUrl {
        message: message.into(),
    }
}

/// Resolve the contacts collection URL under `base_url`, keeping any path
/// prefix the base already has.
fn contacts_url(base_url: &Url) -> Result<Url, ClientError> {
    if base_url.cannot_be_a_base() {
        return Err(invalid_base(format!("{base_url} cannot be a base")));
    }
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CONTACTS_PATH)
        .map_err(|e| invalid_base(e.to_string()))
}

/// Turn a raw response into the envelope payload or a typed failure.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<Envelope<serde_json::Value>>(body)
            .map(|envelope| envelope.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_owned()
            });
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|e| ClientError::decode(format!("invalid envelope: {e}")))?;
    envelope
        .data
        .ok_or_else(|| ClientError::decode("envelope carried no data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn record_json() -> serde_json::Value {
        json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "1234567890",
            "createdAt": "2025-01-01T00:00:00+00:00",
            "updatedAt": "2025-01-01T00:00:00+00:00"
        })
    }

    #[rstest]
    #[case("http://localhost:8000", "http://localhost:8000/api/v1/contacts")]
    #[case("http://localhost:8000/", "http://localhost:8000/api/v1/contacts")]
    #[case("https://crm.example.com/app", "https://crm.example.com/app/api/v1/contacts")]
    fn contacts_url_keeps_base_prefix(#[case] base: &str, #[case] expected: &str) {
        let base = Url::parse(base).expect("valid base");
        assert_eq!(contacts_url(&base).expect("joinable").as_str(), expected);
    }

    #[rstest]
    fn opaque_bases_are_rejected() {
        let base = Url::parse("mailto:ops@example.com").expect("valid url");
        assert!(matches!(
            contacts_url(&base),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[rstest]
    fn contact_ids_are_path_encoded() {
        let base = Url::parse("http://localhost:8000").expect("valid base");
        let api = HttpContactsApi::new(&base, Duration::from_secs(5)).expect("client builds");
        let url = api.contact_url("a b/c").expect("url builds");
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/contacts/a%20b%2Fc");
    }

    #[rstest]
    fn success_envelope_yields_data() {
        let body = json!({
            "statusCode": 201,
            "message": "Contact registered successfully",
            "data": record_json(),
            "success": true
        });
        let record: ContactRecord =
            decode_response(StatusCode::CREATED, body.to_string().as_bytes()).expect("decodes");
        assert_eq!(record.first_name, "Ada");
        assert!(record.company.is_none());
    }

    #[rstest]
    fn failure_envelope_becomes_server_error() {
        let body = json!({
            "statusCode": 409,
            "message": "Email already exists",
            "data": null,
            "success": false,
            "error": { "code": "conflict" }
        });
        let err = decode_response::<ContactRecord>(StatusCode::CONFLICT, body.to_string().as_bytes())
            .expect_err("conflict");
        assert_eq!(
            err,
            ClientError::Server {
                status: 409,
                message: "Email already exists".into()
            }
        );
    }

    #[rstest]
    fn non_envelope_failure_uses_status_reason() {
        let err = decode_response::<ContactRecord>(StatusCode::BAD_GATEWAY, b"<html>")
            .expect_err("gateway failure");
        assert_eq!(
            err,
            ClientError::Server {
                status: 502,
                message: "Bad Gateway".into()
            }
        );
    }

    #[rstest]
    #[case(b"not json".as_slice())]
    #[case(br#"{"statusCode":200,"message":"ok","data":null,"success":true}"#.as_slice())]
    fn unusable_success_bodies_are_decode_errors(#[case] body: &[u8]) {
        let err = decode_response::<ContactPage>(StatusCode::OK, body).expect_err("decode failure");
        assert!(matches!(err, ClientError::Decode { .. }));
    }
}
