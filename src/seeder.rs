use sqlx::PgPool;
use tracing::info;

use crate::config::SeedConfig;
use crate::password::hash_password;
use crate::user::{AdminUser, Role};

/// Ensure the configured admin user exists.
///
/// Skips without touching the database when either credential is unset;
/// an existing row with the same email is left untouched, never updated.
pub async fn apply(db: &PgPool, cfg: &SeedConfig) -> anyhow::Result<()> {
    let Some((email, password)) = cfg.credentials() else {
        info!("ADMIN_EMAIL or ADMIN_PASSWORD not set; skipping admin user seeding");
        return Ok(());
    };

    let hash = hash_password(password)?;
    let created = AdminUser::seeded(email, hash).insert_if_absent(db).await?;
    if created {
        info!(email, "admin user created");
    } else {
        info!(email, "admin user already exists; left untouched");
    }
    Ok(())
}

/// Remove the seeded admin user.
///
/// Skips when no email is configured. The row is deleted only while its
/// role is still `admin`; a row reassigned to another role survives.
pub async fn revert(db: &PgPool, cfg: &SeedConfig) -> anyhow::Result<()> {
    let Some(email) = cfg.email() else {
        info!("ADMIN_EMAIL not set; skipping admin user removal");
        return Ok(());
    };

    let deleted = AdminUser::delete_if_role(db, email, Role::Admin).await?;
    if deleted > 0 {
        info!(email, "admin user removed");
    } else {
        info!(email, "no admin user row matched; nothing removed");
    }
    Ok(())
}
