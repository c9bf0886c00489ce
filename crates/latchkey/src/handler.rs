//! Request handlers: home, login form, login submit, logout.
//!
//! A request is either *authenticated* or not, and the only thing that
//! decides it is whether the `session` cookie resolves in the
//! [`SessionStore`](latchkey_session::SessionStore). Every handler ends
//! in a rendered page or a redirect; none of them returns an error.
//!
//! ```text
//! GET  /        session? ── yes ──→ 200 home
//!                         └─ no ───→ clear cookie, 302 /login
//! GET  /login   session? ── yes ──→ 302 /
//!                         └─ no ───→ 200 login form
//! POST /login   credentials ok? ─ yes → set cookie, 302 /
//!                               └ no ──→ 302 /login
//! GET  /logout  clear cookie (if sent), delete session (if live), 302 /
//! ```

use std::sync::Arc;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use latchkey_session::{Authenticator, Username};
use serde::Deserialize;

use crate::cookie;
use crate::server::ServerState;

/// Fields posted by the login form.
///
/// Both default to empty so a missing field falls through to a plain
/// credential mismatch instead of a 422.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// `GET /`: the protected home page.
pub(crate) async fn home<A: Authenticator>(
    State(state): State<Arc<ServerState<A>>>,
    headers: HeaderMap,
) -> Response {
    match current_user(&state, &headers).await {
        Some(username) => {
            tracing::debug!(%username, "serving home page");
            Html(latchkey_pages::render_home(username.as_str())).into_response()
        }
        None => redirect_with_cookie("/login", state.cookie.clear()),
    }
}

/// `GET /login`: the login form, unless already logged in.
pub(crate) async fn login_page<A: Authenticator>(
    State(state): State<Arc<ServerState<A>>>,
    headers: HeaderMap,
) -> Response {
    if let Some(username) = current_user(&state, &headers).await {
        tracing::debug!(%username, "already logged in, skipping login form");
        return redirect("/");
    }
    Html(latchkey_pages::render_login()).into_response()
}

/// `POST /login`: check credentials and start a session.
///
/// A body that doesn't parse as a form is treated like wrong credentials.
pub(crate) async fn login_submit<A: Authenticator>(
    State(state): State<Arc<ServerState<A>>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable login form");
            LoginForm::default()
        }
    };

    match state.auth.authenticate(&form.username, &form.password).await {
        Ok(username) => {
            let token = state.sessions.lock().await.create(username.clone());
            tracing::info!(%username, "login succeeded");
            redirect_with_cookie("/", state.cookie.set(token.as_str()))
        }
        Err(e) => {
            tracing::info!(username = %form.username, error = %e, "login failed");
            redirect("/login")
        }
    }
}

/// `GET /logout`: forget the session and clear the cookie.
pub(crate) async fn logout<A: Authenticator>(
    State(state): State<Arc<ServerState<A>>>,
    headers: HeaderMap,
) -> Response {
    let token = match cookie::read(&headers, &state.cookie.name) {
        Some(token) if !token.is_empty() => token,
        _ => return redirect("/"),
    };

    if let Some(username) = state.sessions.lock().await.delete(token) {
        tracing::info!(%username, "logged out");
    }

    redirect_with_cookie("/", state.cookie.clear())
}

/// Resolves the request's session cookie to a user, if it's live.
async fn current_user<A: Authenticator>(
    state: &ServerState<A>,
    headers: &HeaderMap,
) -> Option<Username> {
    let token = cookie::read(headers, &state.cookie.name)?;
    state.sessions.lock().await.lookup(token)
}

/// A `302 Found` to `location`.
fn redirect(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// A `302 Found` to `location` that also sets (or clears) a cookie.
fn redirect_with_cookie(location: &'static str, set_cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, set_cookie),
        ],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    //! Handler-level tests that call the functions directly, without a
    //! router. The full HTTP flows live in `tests/server.rs`.

    use axum::http::HeaderValue;
    use latchkey_session::{CredentialStore, SessionError, SessionStore};
    use tokio::sync::Mutex;

    use super::*;
    use crate::CookieConfig;

    fn state() -> Arc<ServerState<CredentialStore>> {
        Arc::new(ServerState {
            sessions: Mutex::new(SessionStore::new()),
            auth: CredentialStore::demo(),
            cookie: CookieConfig::default(),
        })
    }

    fn with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("session={value}")).unwrap(),
        );
        headers
    }

    fn location(resp: &Response) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    fn set_cookie(resp: &Response) -> Option<&str> {
        resp.headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_login_submit_missing_fields_redirects_to_login() {
        let state = state();

        let resp =
            login_submit(State(Arc::clone(&state)), Ok(Form(LoginForm::default())))
                .await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");
        assert!(set_cookie(&resp).is_none());
        assert!(state.sessions.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_login_submit_valid_creates_exactly_one_session() {
        let state = state();
        let form = LoginForm {
            username: "john".into(),
            password: "1234567890".into(),
        };

        let resp = login_submit(State(Arc::clone(&state)), Ok(Form(form))).await;

        assert_eq!(location(&resp), "/");
        assert_eq!(state.sessions.lock().await.len(), 1);
        let cookie = set_cookie(&resp).expect("should set cookie");
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_logout_unknown_session_still_clears_cookie() {
        let state = state();

        let resp = logout(State(state), with_cookie("stale-token")).await;

        assert_eq!(location(&resp), "/");
        let cookie = set_cookie(&resp).expect("should clear cookie");
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_logout_without_cookie_sets_nothing() {
        let resp = logout(State(state()), HeaderMap::new()).await;

        assert_eq!(location(&resp), "/");
        assert!(set_cookie(&resp).is_none());
    }

    #[tokio::test]
    async fn test_logout_removes_only_own_session() {
        let state = state();
        let (mine, theirs) = {
            let mut sessions = state.sessions.lock().await;
            (
                sessions.create(Username::new("jane")),
                sessions.create(Username::new("john")),
            )
        };

        logout(State(Arc::clone(&state)), with_cookie(mine.as_str())).await;

        let sessions = state.sessions.lock().await;
        assert_eq!(sessions.lookup(mine.as_str()), None);
        assert_eq!(sessions.lookup(theirs.as_str()), Some(Username::new("john")));
    }

    /// Rejects everyone; the handlers must not care which authenticator
    /// they run with.
    struct DenyAll;

    impl Authenticator for DenyAll {
        async fn authenticate(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<Username, SessionError> {
            Err(SessionError::InvalidCredentials)
        }
    }

    #[tokio::test]
    async fn test_login_submit_with_custom_authenticator() {
        let state = Arc::new(ServerState {
            sessions: Mutex::new(SessionStore::new()),
            auth: DenyAll,
            cookie: CookieConfig::default(),
        });
        let form = LoginForm {
            username: "john".into(),
            password: "1234567890".into(),
        };

        let resp = login_submit(State(state), Ok(Form(form))).await;

        assert_eq!(location(&resp), "/login");
        assert!(set_cookie(&resp).is_none());
    }
}
