// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend REST
// ============================================================================

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{
    AuthResponse, ErrorBody, FoodEnvelope, FoodItem, LoginRequest, RegisterRequest, UserId,
    UserProfile, VerifyResponse,
};
use crate::platform::{HttpRequest, HttpTransport};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient<H> {
    base_url: String,
    transport: H,
}

impl<H: HttpTransport> ApiClient<H> {
    pub fn new(base_url: &str, transport: H) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Envía la request y decodifica el cuerpo; no-2xx → `ClientError::Http`
    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ClientError> {
        let response = self.transport.send(request).await?;
        if !response.ok() {
            let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
            let message = body
                .message
                .or(body.error)
                .unwrap_or_else(|| format!("Request failed with status {}", response.status));
            return Err(ClientError::Http {
                status: response.status,
                message,
            });
        }
        response.json()
    }

    /// Login con email + password
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        log::info!("🔐 Login para: {}", credentials.email);
        let request = HttpRequest::post(self.url("/login")).json(credentials)?;
        self.execute(request).await
    }

    /// Crear cuenta
    pub async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        log::info!("📝 Registro para: {}", registration.email);
        let request = HttpRequest::post(self.url("/register")).json(registration)?;
        self.execute(request).await
    }

    /// Validar el token actual
    pub async fn verify(&self, token: &str) -> Result<VerifyResponse, ClientError> {
        let request = HttpRequest::get(self.url("/verify")).bearer(token);
        self.execute(request).await
    }

    /// Perfil de usuario
    pub async fn get_user(&self, token: &str, id: &UserId) -> Result<UserProfile, ClientError> {
        let request = HttpRequest::get(self.url(&format!("/users/{}", id))).bearer(token);
        self.execute(request).await
    }

    /// Publicar un producto
    pub async fn create_food(
        &self,
        token: &str,
        item: &FoodItem,
    ) -> Result<FoodEnvelope<FoodItem>, ClientError> {
        log::info!("🍎 Publicando producto: {} (x{})", item.name, item.quantity);
        let request = HttpRequest::post(self.url("/food")).bearer(token).json(item)?;
        self.execute(request).await
    }

    /// Obtener un producto por id
    pub async fn get_food(&self, token: &str, id: u64) -> Result<FoodEnvelope<FoodItem>, ClientError> {
        let request = HttpRequest::get(self.url(&format!("/food/{}", id))).bearer(token);
        self.execute(request).await
    }

    /// Listar todos los productos publicados
    pub async fn list_foods(&self, token: &str) -> Result<FoodEnvelope<Vec<FoodItem>>, ClientError> {
        let request = HttpRequest::get(self.url("/foods")).bearer(token);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HttpMethod;
    use crate::testing::MockTransport;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new("https://api.test/api/v1/", transport.clone())
    }

    #[tokio::test]
    async fn login_posts_credentials_as_json() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"token":"abc"}"#);

        let response = client(&transport)
            .login(&LoginRequest {
                email: "a@b.c".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.token, "abc");

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.test/api/v1/login");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b.c", "password": "secret" }));
    }

    #[tokio::test]
    async fn non_success_carries_server_message() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"message":"Email already registered"}"#);

        let err = client(&transport)
            .register(&RegisterRequest {
                name: "Asha".to_string(),
                email: "a@b.c".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();
        match err {
            ClientError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_gets_status_message() {
        let transport = MockTransport::new();
        transport.respond(401, "Unauthorized");

        let err = client(&transport).verify("stale").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn authenticated_calls_send_bearer_token() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"id":5}"#)
            .respond(200, r#"{"id":5,"name":"Asha"}"#);

        let api = client(&transport);
        let verified = api.verify("tok").await.unwrap();
        let profile = api.get_user("tok", &verified.id).await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Asha"));

        let requests = transport.requests();
        assert_eq!(requests[1].url, "https://api.test/api/v1/users/5");
        assert!(requests
            .iter()
            .all(|r| r.header_value("Authorization") == Some("Bearer tok")));
    }

    #[tokio::test]
    async fn list_foods_reads_data_envelope() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"message":"ok","data":[{"id":1,"name":"Milk","quantity":1,"lifespan":48,"longitude":0,"latitude":0,"category":"veg","tags":""}]}"#,
        );

        let foods = client(&transport).list_foods("tok").await.unwrap();
        assert_eq!(foods.data.len(), 1);
        assert_eq!(foods.data[0].id, Some(1));
        assert_eq!(transport.requests()[0].url, "https://api.test/api/v1/foods");
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let transport = MockTransport::new();
        transport.fail("offline");

        let err = client(&transport).get_food("tok", 3).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
