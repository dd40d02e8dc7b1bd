use serde::Deserialize;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use trailhound_types::{Dog, NewDog, TrainingSession};

use crate::auth::AuthSession;
use crate::config::Config;
use crate::error::{Error, Result};

/// Client for the hosted record service.
///
/// All persistence, authentication, and row-level security live on the
/// backend; this struct only speaks its REST surface. Construct one from a
/// [`Config`], attach the stored [`AuthSession`] if there is one, and pass
/// it into whichever handler needs it.
pub struct Backend {
    base: Url,
    api_key: String,
    agent: ureq::Agent,
    session: Option<AuthSession>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    email: String,
}

impl Backend {
    pub fn new(config: &Config) -> Result<Self> {
        // A trailing slash keeps Url::join from clobbering any path prefix.
        let normalized = if config.backend_url.ends_with('/') {
            config.backend_url.clone()
        } else {
            format!("{}/", config.backend_url)
        };
        let base = Url::parse(&normalized)?;

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();

        Ok(Self {
            base,
            api_key: config.api_key.clone(),
            agent,
            session: None,
        })
    }

    pub fn with_session(mut self, session: Option<AuthSession>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// Route guard: data operations refuse to run unauthenticated, before
    /// any network I/O happens.
    pub fn require_auth(&self) -> Result<&AuthSession> {
        self.session.as_ref().ok_or(Error::NotSignedIn)
    }

    /// Exchange credentials for a token via the password grant.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let mut url = self.base.join("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .agent
            .request("POST", url.as_str())
            .set("apikey", &self.api_key)
            .send_json(serde_json::json!({
                "email": email,
                "password": password,
            }));
        let body = Self::read_body(response)?;
        let token: TokenResponse = serde_json::from_str(&body)?;

        Ok(AuthSession {
            access_token: token.access_token,
            user_id: token.user.id,
            email: token.user.email,
            obtained_at: chrono::Utc::now(),
        })
    }

    /// All dogs, newest first.
    pub fn list_dogs(&self) -> Result<Vec<Dog>> {
        self.require_auth()?;
        let mut url = self.base.join("rest/v1/dogs")?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");
        self.get_rows(url)
    }

    /// Look a dog up by its human-assigned code.
    pub fn find_dog(&self, dog_code: &str) -> Result<Dog> {
        self.require_auth()?;
        let mut url = self.base.join("rest/v1/dogs")?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("dog_code", &format!("eq.{}", dog_code));
        let mut rows: Vec<Dog> = self.get_rows(url)?;
        rows.pop()
            .ok_or_else(|| Error::NotFound(format!("dog with code '{}'", dog_code)))
    }

    /// Create a dog record. The backend enforces the admin-only policy.
    pub fn create_dog(&self, dog: &NewDog) -> Result<Dog> {
        self.require_auth()?;
        let url = self.base.join("rest/v1/dogs")?;

        let response = self
            .request("POST", &url)
            .set("Prefer", "return=representation")
            .send_json(serde_json::to_value(dog)?);
        let body = Self::read_body(response)?;
        let mut rows: Vec<Dog> = serde_json::from_str(&body)?;
        rows.pop()
            .ok_or_else(|| Error::NotFound("created dog in backend response".to_string()))
    }

    /// Training sessions, optionally restricted to one dog.
    pub fn list_sessions(&self, dog_id: Option<Uuid>) -> Result<Vec<TrainingSession>> {
        self.require_auth()?;
        let mut url = self.base.join("rest/v1/sessions")?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "started_at.asc");
        if let Some(id) = dog_id {
            url.query_pairs_mut()
                .append_pair("dog_id", &format!("eq.{}", id));
        }
        self.get_rows(url)
    }

    fn get_rows<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let response = self.request("GET", &url).call();
        let body = Self::read_body(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        let mut request = self
            .agent
            .request(method, url.as_str())
            .set("apikey", &self.api_key);
        if let Some(session) = &self.session {
            request = request.set(
                "Authorization",
                &format!("Bearer {}", session.access_token),
            );
        }
        request
    }

    fn read_body(response: std::result::Result<ureq::Response, ureq::Error>) -> Result<String> {
        match response {
            Ok(resp) => Ok(resp.into_string()?),
            Err(ureq::Error::Status(status, resp)) => {
                let message = resp
                    .into_string()
                    .unwrap_or_else(|_| "(unreadable body)".to_string());
                Err(Error::Api {
                    status,
                    message: truncate(&message, 200),
                })
            }
            Err(ureq::Error::Transport(transport)) => Err(Error::Http(transport.to_string())),
        }
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    let text = text.replace('\n', " ");
    if text.len() <= max_len {
        text
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}
