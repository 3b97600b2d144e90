use crate::envelope::Wrapped;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse};
use crate::storage::clear_session;

type AuthEnvelope<T> = Wrapped<T>;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// POST `/auth/admin/login`. The backend answers with the email and a
    /// bearer token only.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client
            .post::<_, AuthEnvelope<LoginResponse>>("/auth/admin/login", credentials)
            .await
    }

    /// Local only: the backend has no logout endpoint, so the token is
    /// simply forgotten.
    pub async fn logout(&self) -> Result<(), ApiError> {
        clear_session(self.client.storage().as_ref());
        Ok(())
    }
}
