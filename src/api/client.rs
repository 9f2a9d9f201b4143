use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{parse_response, ChatRequest};

/// Why a request produced no usable response.
///
/// The transcript never distinguishes these; they only surface in logs.
#[derive(Debug)]
pub enum RequestError {
    /// The request could not be sent or the body could not be read.
    Transport(reqwest::Error),

    /// The server answered with a non-2xx status.
    Status(StatusCode),

    /// The body was not JSON.
    Decode(serde_json::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(source) => write!(f, "request failed: {source}"),
            RequestError::Status(status) => write!(f, "server returned {status}"),
            RequestError::Decode(source) => write!(f, "malformed response body: {source}"),
        }
    }
}

impl StdError for RequestError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RequestError::Transport(source) => Some(source),
            RequestError::Status(_) => None,
            RequestError::Decode(source) => Some(source),
        }
    }
}

/// Anything that can turn a query into an answer.
///
/// `Ok(None)` means the exchange succeeded but carried no answer.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn ask(&self, query: &str) -> Result<Option<String>, RequestError>;
}

/// Posts `{"query": ...}` to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn ask(&self, query: &str) -> Result<Option<String>, RequestError> {
        debug!(endpoint = %self.endpoint, query_len = query.len(), "posting query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { query })
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status));
        }

        let body = response.bytes().await.map_err(RequestError::Transport)?;
        let parsed = parse_response(&body).map_err(RequestError::Decode)?;
        debug!(%status, has_answer = parsed.answer_text().is_some(), "response decoded");

        Ok(parsed.answer_text().map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn local_backend(endpoint: String) -> HttpBackend {
        let client = Client::builder().no_proxy().build().expect("client");
        HttpBackend::with_client(client, endpoint)
    }

    /// Serves exactly one HTTP exchange and hands back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let endpoint = format!("http://{}/chat", listener.local_addr().expect("addr"));

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
            request
        });

        (endpoint, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn posts_query_as_json_and_returns_answer() {
        let (endpoint, server) = serve_once("200 OK", r#"{"answer":"CS101 covers recursion."}"#).await;
        let backend = local_backend(endpoint);

        let answer = backend.ask("what does CS101 cover?").await.expect("answer");
        assert_eq!(answer.as_deref(), Some("CS101 covers recursion."));

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /chat HTTP/1.1"), "{request}");
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"query":"what does CS101 cover?"}"#), "{request}");
    }

    #[tokio::test]
    async fn missing_answer_is_not_an_error() {
        let (endpoint, server) = serve_once("200 OK", "{}").await;
        let answer = local_backend(endpoint).ask("hello").await.expect("ok");
        assert_eq!(answer, None);
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (endpoint, server) =
            serve_once("500 Internal Server Error", r#"{"answer":"ignored"}"#).await;
        let err = local_backend(endpoint).ask("hello").await.unwrap_err();
        assert!(matches!(err, RequestError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let (endpoint, server) = serve_once("200 OK", "not json at all").await;
        let err = local_backend(endpoint).ask("hello").await.unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
        assert!(err.to_string().starts_with("malformed response body"));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let endpoint = format!("http://{}/chat", listener.local_addr().expect("addr"));
        drop(listener);

        let err = local_backend(endpoint).ask("hello").await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
        assert!(err.source().is_some());
    }
}
