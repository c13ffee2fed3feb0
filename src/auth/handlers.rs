use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{
        AuthResponse, GoogleAuthRequest, LoginRequest, PublicUser, SignupRequest, SignupResponse,
        UserListItem,
    },
    jwt::{AuthUser, JwtKeys},
    password::{hash_password, random_unusable_password, verify_password},
    repo::User,
};
use crate::error::ApiError;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/auth/google", post(google_auth))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/me", get(get_me))
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (email, password) = match (required(payload.email), required(payload.password)) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(ApiError::Validation(
                "Email and password are required".into(),
            ))
        }
    };

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "signup with existing email");
        return Err(ApiError::Duplicate("User already exists".into()));
    }

    let hash = hash_password(&password)?;
    let user = User::create(
        &state.db,
        payload.first_name.as_deref().unwrap_or(""),
        payload.last_name.as_deref().unwrap_or(""),
        &email,
        &hash,
    )
    .await?;

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".into(),
            token,
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (required(payload.email), required(payload.password)) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(ApiError::Validation(
                "Email and password are required".into(),
            ))
        }
    };

    // Same error for unknown email and wrong password, so callers cannot
    // probe which addresses have accounts.
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn google_auth(
    State(state): State<AppState>,
    Json(payload): Json<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let access_token = required(payload.token)
        .ok_or_else(|| ApiError::Validation("Token required".into()))?;

    let profile = match state.google.fetch_profile(&access_token).await {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "google token exchange failed");
            return Err(ApiError::GoogleAuth);
        }
    };

    // First sign-in creates the local account; later calls find it by email.
    let user = match User::find_by_email(&state.db, &profile.email).await? {
        Some(u) => u,
        None => {
            let hash = hash_password(&random_unusable_password())?;
            let created = User::create(
                &state.db,
                &profile.given_name,
                &profile.family_name,
                &profile.email,
                &hash,
            )
            .await?;
            info!(user_id = %created.id, email = %created.email, "user created via google");
            created
        }
    };

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, "google sign-in");
    let mut public = PublicUser::from(user);
    public.avatar = profile.picture;
    Ok(Json(AuthResponse {
        token,
        user: public,
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserListItem>>, ApiError> {
    let users = User::list(&state.db).await?;
    let items = users
        .into_iter()
        .map(|u| UserListItem {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            created_at: u.created_at,
        })
        .collect();
    Ok(Json(items))
}
