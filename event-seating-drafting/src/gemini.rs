use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use event_seating_config::DraftingConfig;
use event_seating_core::Participant;
use http_body_util::{BodyExt as _, Full};
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use tracing::debug;

use crate::error::DraftingError;
use crate::{prompt, MessageDrafter, MessageIntent};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_owned())
    }
}

/// Drafts messages with Google's `generateContent` endpoint.
pub struct GeminiDrafter {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    tls: TlsConnector,
}

impl GeminiDrafter {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        let mut root_cert_store = RootCertStore::empty();
        root_cert_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = ClientConfig::builder()
            .with_root_certificates(root_cert_store)
            .with_no_client_auth();
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
            tls: TlsConnector::from(Arc::new(config)),
        }
    }

    #[must_use]
    pub fn from_config(config: &DraftingConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone().filter(|key| !key.is_empty()),
        )
    }

    fn generate_content_uri(&self) -> Result<Uri, DraftingError> {
        Ok(format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
        .parse()?)
    }

    async fn generate(&self, prompt: String) -> Result<String, DraftingError> {
        let api_key = self.api_key.as_deref().ok_or(DraftingError::MissingApiKey)?;
        let uri = self.generate_content_uri()?;
        let host = uri.host().ok_or(DraftingError::MissingHost)?.to_owned();
        let tls = uri.scheme_str() != Some("http");
        let port = uri.port_u16().unwrap_or(if tls { 443 } else { 80 });
        let authority = uri
            .authority()
            .map_or_else(|| host.clone(), ToString::to_string);

        let body = serde_json::to_vec(&GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        })?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri.path_and_query().map_or("/", |path| path.as_str()))
            .header(HOST, authority)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .body(Full::new(Bytes::from(body)))?;

        debug!(model = %self.model, "requesting message draft");
        let stream = TcpStream::connect((host.as_str(), port)).await?;
        let (status, body) = if tls {
            let server_name = ServerName::try_from(host.clone())
                .map_err(|_| DraftingError::InvalidDnsName(host))?;
            send(self.tls.connect(server_name, stream).await?, request).await?
        } else {
            send(stream, request).await?
        };

        if !status.is_success() {
            return Err(DraftingError::Status(status));
        }
        serde_json::from_slice::<GenerateContentResponse>(&body)?
            .into_text()
            .ok_or(DraftingError::EmptyResponse)
    }
}

async fn send<T>(io: T, request: Request<Full<Bytes>>) -> Result<(StatusCode, Bytes), DraftingError>
where
    T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(io)).await?;
    tokio::task::spawn(async move {
        if let Err(err) = connection.await {
            debug!("drafting connection failed: {err}");
        }
    });

    let response = sender.send_request(request).await?;
    let status = response.status();
    let body = response.collect().await?.to_bytes();
    Ok((status, body))
}

#[async_trait]
impl MessageDrafter for GeminiDrafter {
    async fn draft(
        &self,
        participant: &Participant,
        intent: MessageIntent,
    ) -> Result<String, DraftingError> {
        self.generate(prompt::build(participant, intent)).await
    }
}
