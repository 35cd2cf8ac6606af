use dinedir::auth::repo_types::UserRole;
use dinedir::auth::services::{hash_password, is_valid_email};
use dinedir::auth::User;
use dinedir::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "dinedir=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&app_state.db).await {
        tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
    }

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("create-admin") {
        return create_admin(&app_state, args.collect()).await;
    }

    let app = app::build_app(app_state);
    app::serve(app).await
}

/// Out-of-band admin setup: `dinedir create-admin <email> <password> [name]`.
async fn create_admin(state: &AppState, args: Vec<String>) -> anyhow::Result<()> {
    let email = args
        .first()
        .map(|e| e.trim().to_lowercase())
        .ok_or_else(|| anyhow::anyhow!("usage: dinedir create-admin <email> <password> [name]"))?;
    let password = args
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("usage: dinedir create-admin <email> <password> [name]"))?;
    let name = args.get(2).cloned().unwrap_or_default();

    anyhow::ensure!(is_valid_email(&email), "invalid email: {}", email);
    anyhow::ensure!(password.len() >= 8, "password must be at least 8 characters");

    let hash = hash_password(password)?;
    let user = User::create(&state.db, &email, &hash, &name, UserRole::Admin).await?;
    tracing::info!(user_id = %user.id, email = %user.email, "admin user created");
    println!("created admin {} ({})", user.email, user.id);
    Ok(())
}
