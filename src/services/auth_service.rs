// ============================================================================
// AUTH SERVICE - Login / registro / verificación / logout
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::platform::{HttpTransport, Navigator};
use crate::services::ApiClient;
use crate::state::TokenStore;
use crate::utils::{HOME_ROUTE, LOGIN_ROUTE};

/// Resultado de login / signup
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Token guardado y navegación a /home hecha
    Authenticated,
    /// El servidor rechazó la petición; el mensaje ya se mostró al usuario
    Rejected(String),
}

/// Resultado de `check_user`
#[derive(Debug, Clone, PartialEq)]
pub enum UserCheck {
    Verified(UserProfile),
    /// Sin token o token inválido: slot limpiado y redirigido a /login
    LoggedOut,
}

pub struct AuthService<H> {
    api: ApiClient<H>,
    tokens: TokenStore,
    navigator: Rc<dyn Navigator>,
}

impl<H: HttpTransport> AuthService<H> {
    pub fn new(api: ApiClient<H>, tokens: TokenStore, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            api,
            tokens,
            navigator,
        }
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.tokens.set(token)
    }

    pub async fn login(&self, credentials: LoginRequest) -> Result<AuthOutcome, ClientError> {
        let result = self.api.login(&credentials).await;
        self.finish_auth(result)
    }

    pub async fn signup(&self, registration: RegisterRequest) -> Result<AuthOutcome, ClientError> {
        let result = self.api.register(&registration).await;
        self.finish_auth(result)
    }

    fn finish_auth(
        &self,
        result: Result<AuthResponse, ClientError>,
    ) -> Result<AuthOutcome, ClientError> {
        match result {
            Ok(response) => {
                self.set_token(&response.token)?;
                match response.message {
                    Some(message) => log::info!("✅ Sesión iniciada: {}", message),
                    None => log::info!("✅ Sesión iniciada"),
                }
                self.navigator.goto(HOME_ROUTE, true);
                Ok(AuthOutcome::Authenticated)
            }
            Err(ClientError::Http { status, message }) => {
                log::warn!("⚠️ Autenticación rechazada ({}): {}", status, message);
                self.navigator.alert(&message);
                Ok(AuthOutcome::Rejected(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Verifica el token guardado y carga el perfil del usuario
    pub async fn check_user(&self) -> Result<UserCheck, ClientError> {
        let token = match self.tokens.get()? {
            Some(token) => token,
            None => {
                log::info!("🔒 Sin token, redirigiendo a login");
                self.logout();
                return Ok(UserCheck::LoggedOut);
            }
        };

        let verified = match self.api.verify(&token).await {
            Ok(verified) => verified,
            Err(e @ ClientError::Http { .. }) => {
                if e.is_unauthorized() {
                    log::info!("🔒 Sesión expirada, redirigiendo a login");
                } else {
                    log::warn!("🔒 Token rechazado: {}", e);
                }
                self.logout();
                return Ok(UserCheck::LoggedOut);
            }
            // Sin red: no se cierra la sesión
            Err(e) => return Err(e),
        };

        let profile = self.api.get_user(&token, &verified.id).await?;
        log::info!("👤 Usuario verificado: {}", profile.id);
        Ok(UserCheck::Verified(profile))
    }

    /// Limpia el token y vuelve a /login; los errores de storage solo se registran
    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            log::error!("❌ Error eliminando token: {}", e);
        }
        self.navigator.goto(LOGIN_ROUTE, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{KeyValueStore, MemoryStore};
    use crate::testing::{FlakyStore, MockNavigator, MockTransport, NavEvent};
    use crate::utils::TOKEN_KEY;

    struct Fixture {
        transport: MockTransport,
        store: Rc<MemoryStore>,
        navigator: Rc<MockNavigator>,
        auth: AuthService<MockTransport>,
    }

    fn fixture() -> Fixture {
        let transport = MockTransport::new();
        let store = Rc::new(MemoryStore::new());
        let navigator = Rc::new(MockNavigator::at("https://localhost/login"));
        let auth = AuthService::new(
            ApiClient::new("https://api.test", transport.clone()),
            TokenStore::new(store.clone()),
            navigator.clone(),
        );
        Fixture {
            transport,
            store,
            navigator,
            auth,
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "a@b.c".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn login_persists_token_and_goes_home() {
        let f = fixture();
        f.transport.respond(200, r#"{"token":"abc"}"#);

        let outcome = f.auth.login(credentials()).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Authenticated);
        assert_eq!(f.store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(
            f.navigator.events(),
            vec![NavEvent::Goto {
                path: "/home".to_string(),
                replace_state: true
            }]
        );
    }

    #[tokio::test]
    async fn rejected_login_alerts_and_keeps_old_token() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "old").unwrap();
        f.transport.respond(401, r#"{"message":"Invalid credentials"}"#);

        let outcome = f.auth.login(credentials()).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Rejected("Invalid credentials".to_string()));
        assert_eq!(f.navigator.alerts(), vec!["Invalid credentials"]);
        assert!(f.navigator.gotos().is_empty());
        assert_eq!(f.store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn signup_uses_register_endpoint() {
        let f = fixture();
        f.transport.respond(201, r#"{"token":"new","message":"created"}"#);

        let outcome = f
            .auth
            .signup(RegisterRequest {
                name: "Asha".to_string(),
                email: "a@b.c".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(outcome, AuthOutcome::Authenticated);
        assert_eq!(f.transport.requests()[0].url, "https://api.test/register");
        assert_eq!(f.store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn check_user_without_token_makes_no_request() {
        let f = fixture();

        let check = f.auth.check_user().await.unwrap();
        assert_eq!(check, UserCheck::LoggedOut);
        assert_eq!(f.transport.request_count(), 0);
        assert_eq!(f.navigator.gotos(), vec!["/login"]);
    }

    #[tokio::test]
    async fn check_user_on_401_clears_token_and_redirects_once() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "stale").unwrap();
        f.transport.respond(401, r#"{"message":"Unauthorized"}"#);

        let check = f.auth.check_user().await.unwrap();
        assert_eq!(check, UserCheck::LoggedOut);
        assert!(f.store.get_item(TOKEN_KEY).unwrap().is_none());
        assert_eq!(f.navigator.gotos(), vec!["/login"]);
        assert_eq!(f.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn check_user_fetches_profile_by_verified_id() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "tok").unwrap();
        f.transport
            .respond(200, r#"{"id":12}"#)
            .respond(200, r#"{"id":12,"email":"a@b.c"}"#);

        match f.auth.check_user().await.unwrap() {
            UserCheck::Verified(profile) => assert_eq!(profile.email.as_deref(), Some("a@b.c")),
            other => panic!("unexpected check: {other:?}"),
        }
        assert_eq!(f.transport.requests()[1].url, "https://api.test/users/12");
        assert!(f.navigator.events().is_empty());
    }

    #[tokio::test]
    async fn check_user_on_server_error_also_logs_out() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "tok").unwrap();
        f.transport.respond(500, r#"{"error":"boom"}"#);

        assert_eq!(f.auth.check_user().await.unwrap(), UserCheck::LoggedOut);
        assert!(f.store.get_item(TOKEN_KEY).unwrap().is_none());
        assert_eq!(f.navigator.gotos(), vec!["/login"]);
    }

    #[tokio::test]
    async fn check_user_keeps_session_when_profile_fetch_fails() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "tok").unwrap();
        f.transport
            .respond(200, r#"{"id":12}"#)
            .respond(500, r#"{"message":"database down"}"#);

        let err = f.auth.check_user().await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }), "{err:?}");
        assert_eq!(f.transport.request_count(), 2);
        assert_eq!(f.store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert!(f.navigator.events().is_empty());
    }

    #[tokio::test]
    async fn check_user_keeps_session_when_offline() {
        let f = fixture();
        f.store.set_item(TOKEN_KEY, "tok").unwrap();
        f.transport.fail("offline");

        assert!(f.auth.check_user().await.is_err());
        assert_eq!(f.store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert!(f.navigator.events().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_token_and_redirects() {
        let f = fixture();
        f.auth.set_token("tok").unwrap();

        f.auth.logout();
        assert!(f.store.get_item(TOKEN_KEY).unwrap().is_none());
        assert_eq!(f.navigator.gotos(), vec!["/login"]);
    }

    #[test]
    fn logout_redirects_even_when_token_cannot_be_removed() {
        let store = Rc::new(FlakyStore::default());
        store.set_item(TOKEN_KEY, "tok").unwrap();
        store.fail_removes.set(true);
        let navigator = Rc::new(MockNavigator::at("https://localhost/cart"));
        let auth = AuthService::new(
            ApiClient::new("https://api.test", MockTransport::new()),
            TokenStore::new(store.clone()),
            navigator.clone(),
        );

        auth.logout();
        assert_eq!(
            navigator.events(),
            vec![NavEvent::Goto {
                path: "/login".to_string(),
                replace_state: true
            }]
        );
        assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
    }
}
