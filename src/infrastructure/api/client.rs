//! Account API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, ProfileEnvelope};
use crate::domain::entities::{Credentials, SignupData, UserProfile};
use crate::domain::errors::ApiError;
use crate::domain::ports::AuthApiPort;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
const USER_AGENT: &str = concat!("portico/", env!("CARGO_PKG_VERSION"));

const VERIFY_PATH: &str = "/api/auth/verify";
const LOGIN_PATH: &str = "/api/v0/auth/login";
const REGISTER_PATH: &str = "/api/v0/auth/register";
const LOGOUT_PATH: &str = "/api/v0/auth/logout";
const PROFILE_PATH: &str = "/api/v0/auth/profile";

const PROFILE_FAILED_MESSAGE: &str = "Failed to fetch profile.";

/// Cookie-session account API client.
///
/// The session cookie lives in the client's in-memory jar and is sent with
/// every request.
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
}

impl HttpAuthClient {
    /// Creates client with custom base URL and optional request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT).cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach account API");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to server")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message);

        debug!(status = %status, message = ?message, "Account API returned error");

        ApiError::from_status(status.as_u16(), message)
    }
}

#[async_trait]
impl AuthApiPort for HttpAuthClient {
    async fn verify_session(&self) -> Result<(), ApiError> {
        debug!("Verifying session cookie");
        self.send(self.client.get(self.url(VERIFY_PATH))).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!(email = %credentials.email, "Sending login request");
        self.send(self.client.post(self.url(LOGIN_PATH)).json(credentials))
            .await?;
        Ok(())
    }

    async fn register(&self, data: &SignupData) -> Result<(), ApiError> {
        debug!(email = %data.email, "Sending registration request");
        self.send(self.client.post(self.url(REGISTER_PATH)).json(data))
            .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        debug!("Sending logout request");
        self.send(self.client.post(self.url(LOGOUT_PATH))).await?;
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        debug!("Fetching profile");

        let response = self.send(self.client.get(self.url(PROFILE_PATH))).await?;
        let envelope: ProfileEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse profile response");
            ApiError::invalid_response(format!("failed to parse response: {e}"))
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| PROFILE_FAILED_MESSAGE.to_string());
            return Err(ApiError::reported(message));
        }

        envelope
            .data
            .map(|data| data.user)
            .ok_or_else(|| ApiError::invalid_response("profile response has no user"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn http_response(status_line: &str, headers: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{headers}\r\n{body}",
            body.len()
        )
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let body_len = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serves the canned responses in order, one connection each, and returns the raw requests.
    async fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut socket).await);
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
            requests
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str) -> HttpAuthClient {
        HttpAuthClient::with_base_url(base_url, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = HttpAuthClient::with_base_url(DEFAULT_API_BASE, None).unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpAuthClient::with_base_url("http://api.test/", None).unwrap();
        assert_eq!(client.url(LOGIN_PATH), "http://api.test/api/v0/auth/login");
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let (base, server) = serve(vec![http_response("200 OK", "", "{}")]).await;

        client(&base)
            .login(&Credentials::new("jane@example.com", "hunter22"))
            .await
            .unwrap();

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("POST /api/v0/auth/login HTTP/1.1"));
        assert!(requests[0].contains(r#""email":"jane@example.com""#));
        assert!(requests[0].contains(r#""password":"hunter22""#));
    }

    #[test_case("403 Forbidden", 403 ; "forbidden")]
    #[test_case("401 Unauthorized", 401 ; "unauthorized")]
    #[tokio::test]
    async fn test_rejection_carries_server_message(status_line: &str, status: u16) {
        let body = r#"{"message":"Invalid email or password."}"#;
        let (base, _server) = serve(vec![http_response(status_line, "", body)]).await;

        let error = client(&base)
            .login(&Credentials::new("jane@example.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ApiError::Rejected {
                status,
                message: Some("Invalid email or password.".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_conflict_on_register() {
        let body = r#"{"message":"Email already registered"}"#;
        let (base, _server) = serve(vec![http_response("409 Conflict", "", body)]).await;
        let data = SignupData {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: crate::domain::entities::Password::new("hunter22"),
            phone: "1".to_string(),
            address: "2".to_string(),
            date_of_birth: "2001-04-09".to_string(),
            occupation: "Student".to_string(),
            institution: "Uni".to_string(),
            year: None,
        };

        let error = client(&base).register(&data).await.unwrap_err();

        assert!(error.is_conflict());
        assert_eq!(error.server_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let response = "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/html\r\nContent-Length: 5\r\nConnection: close\r\n\r\noops!".to_string();
        let (base, _server) = serve(vec![response]).await;

        let error = client(&base).logout().await.unwrap_err();

        assert_eq!(
            error,
            ApiError::Status {
                status: 500,
                message: None
            }
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = client(&format!("http://{addr}"))
            .verify_session()
            .await
            .unwrap_err();

        assert!(error.is_network_error());
    }

    #[tokio::test]
    async fn test_session_cookie_sent_on_later_requests() {
        let (base, server) = serve(vec![
            http_response("200 OK", "Set-Cookie: sid=abc123; Path=/; HttpOnly\r\n", "{}"),
            http_response("200 OK", "", "{}"),
        ])
        .await;
        let client = client(&base);

        client
            .login(&Credentials::new("jane@example.com", "hunter22"))
            .await
            .unwrap();
        client.verify_session().await.unwrap();

        let requests = server.await.unwrap();
        assert!(requests[1].starts_with("GET /api/auth/verify HTTP/1.1"));
        assert!(requests[1].to_ascii_lowercase().contains("cookie: sid=abc123"));
    }

    #[tokio::test]
    async fn test_profile_envelope_success() {
        let body = r#"{
            "success": true,
            "message": "ok",
            "data": { "user": {
                "id": "42", "name": "Jane Doe", "email": "jane@example.com",
                "accountRole": "student", "isActive": true, "isVerified": true,
                "createdAt": "2024-01-05T10:00:00Z", "updatedAt": "2024-01-06T10:00:00Z",
                "phone": "017", "address": "Main St", "occupation": "Student",
                "institution": "Uni", "year": 3
            } }
        }"#;
        let (base, _server) = serve(vec![http_response("200 OK", "", body)]).await;

        let profile = client(&base).fetch_profile().await.unwrap();

        assert_eq!(profile.email(), "jane@example.com");
        assert_eq!(profile.year(), Some(3));
    }

    #[tokio::test]
    async fn test_profile_envelope_reports_failure() {
        let body = r#"{"success": false, "message": "User not found"}"#;
        let (base, _server) = serve(vec![http_response("200 OK", "", body)]).await;

        let error = client(&base).fetch_profile().await.unwrap_err();

        assert_eq!(error, ApiError::reported("User not found"));
    }

    #[tokio::test]
    async fn test_profile_envelope_failure_without_message() {
        let body = r#"{"success": false}"#;
        let (base, _server) = serve(vec![http_response("200 OK", "", body)]).await;

        let error = client(&base).fetch_profile().await.unwrap_err();

        assert_eq!(error.to_string(), PROFILE_FAILED_MESSAGE);
    }
}
