use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser},
        repo_types::User,
        services::{verify_password, AuthUser, JwtKeys},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => {
            (e.trim().to_lowercase(), p)
        }
        _ => return Err(ApiError::BadRequest("Email and password are required".into())),
    };

    // Unknown email and wrong password must be indistinguishable to the client.
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::Unauthorized("Invalid credentials".into()));
        }
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    // Best-effort; a failed stamp must not block the token.
    if let Err(e) = User::touch_last_login(&state.db, user.id).await {
        warn!(error = %e, user_id = %user.id, "failed to update last_login");
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email, user.role)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(user),
    }))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, identity.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;
    Ok(Json(PublicUser::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::UserRole;

    #[test]
    fn auth_response_serialization_has_token_and_user() {
        let response = AuthResponse {
            token: "abc.def.ghi".into(),
            user: PublicUser {
                id: uuid::Uuid::new_v4(),
                email: "test@example.com".into(),
                role: UserRole::User,
                name: "Test".into(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("abc.def.ghi"));
        assert!(json.contains("test@example.com"));
        assert!(!json.contains("password"));
    }
}
