//! REST auth gateway implementation.
//!
//! Talks to the auth collaborator's `/auth` endpoints. Session identity
//! rides an httpOnly cookie held by this adapter's cookie-enabled client;
//! the rest of the system only ever sees issued bearer tokens.

use async_trait::async_trait;
use facture_application::ClientConfig;
use facture_application::ports::{AuthGateway, AuthGatewayError};
use facture_domain::IssuedToken;
use serde::Deserialize;
use url::Url;

const TOKEN_PATH: &str = "/auth/token";
const LOGOUT_PATH: &str = "/auth/logout";
const SESSION_PATH: &str = "/auth/session";

/// Token response from the auth collaborator.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Session probe response.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    authenticated: bool,
}

/// Auth gateway over the backend's `/auth` endpoints.
pub struct RestAuthGateway {
    http_client: reqwest::Client,
    base_url: Url,
}

impl RestAuthGateway {
    /// Creates a gateway with its own cookie-enabled HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Network`] if the client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, AuthGatewayError> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthGatewayError::Network(e.to_string()))?;
        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthGatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthGatewayError::Protocol(format!("{e}: {path}")))
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    async fn fetch_token(&self) -> Result<IssuedToken, AuthGatewayError> {
        let response = self
            .http_client
            .post(self.endpoint(TOKEN_PATH)?)
            .send()
            .await
            .map_err(|e| AuthGatewayError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthGatewayError::NoSession);
        }
        if !response.status().is_success() {
            return Err(AuthGatewayError::Protocol(format!(
                "token endpoint answered HTTP {}",
                response.status().as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthGatewayError::Protocol(e.to_string()))?;
        Ok(IssuedToken::new(token.token))
    }

    async fn sign_out(&self) -> Result<(), AuthGatewayError> {
        let response = self
            .http_client
            .post(self.endpoint(LOGOUT_PATH)?)
            .send()
            .await
            .map_err(|e| AuthGatewayError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthGatewayError::Protocol(format!(
                "logout endpoint answered HTTP {}",
                response.status().as_u16()
            )))
        }
    }

    async fn has_session(&self) -> bool {
        let Ok(endpoint) = self.endpoint(SESSION_PATH) else {
            return false;
        };
        match self.http_client.get(endpoint).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<SessionResponse>()
                .await
                .map_or(false, |session| session.authenticated),
            _ => false,
        }
    }
}
