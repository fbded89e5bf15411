use sqlx::PgPool;
use time::{macros::date, Date};

/// Role tag stored on a `Usuario` row, lowercase in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => anyhow::bail!("unknown role: {other}"),
        }
    }
}

/// Profile placeholders used when seeding the admin row.
const SEED_NAMES: &str = "Admin";
const SEED_LASTNAMES: &str = "User";
const SEED_BIRTHDATE: Date = date!(2000 - 01 - 01);
const SEED_PHONE_CODE: &str = "502";
const SEED_PHONE_NUMBER: &str = "00000000";

/// A `Usuario` row as written by the seeder.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
    pub names: String,
    pub lastnames: String,
    pub birthdate: Date,
    pub phone_code: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Role,
}

impl AdminUser {
    /// Build the admin row for `email` with placeholder profile fields.
    pub fn seeded(email: &str, password_hash: String) -> Self {
        Self {
            email: email.to_string(),
            names: SEED_NAMES.to_string(),
            lastnames: SEED_LASTNAMES.to_string(),
            birthdate: SEED_BIRTHDATE,
            phone_code: SEED_PHONE_CODE.to_string(),
            phone_number: SEED_PHONE_NUMBER.to_string(),
            password_hash,
            role: Role::Admin,
        }
    }

    /// Insert the row, leaving any existing row with the same email
    /// untouched. Returns `true` if a row was actually written.
    pub async fn insert_if_absent(&self, db: &PgPool) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO Usuario (email, names, lastnames, birthdate, phoneCode, phoneNumber, password, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&self.email)
        .bind(&self.names)
        .bind(&self.lastnames)
        .bind(self.birthdate)
        .bind(&self.phone_code)
        .bind(&self.phone_number)
        .bind(&self.password_hash)
        .bind(self.role.as_str())
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the row for `email` only if its role still matches `role`.
    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_if_role(db: &PgPool, email: &str, role: Role) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM Usuario
            WHERE email = $1 AND role = $2
            "#,
        )
        .bind(email)
        .bind(role.as_str())
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_form() {
        for role in [Role::Admin, Role::User] {
            let parsed: Role = role.as_str().parse().expect("known role should parse");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("unknown role"));
    }

    #[test]
    fn seeded_row_uses_placeholder_profile() {
        let user = AdminUser::seeded("admin@example.com", "$argon2id$fake".into());
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.names, "Admin");
        assert_eq!(user.lastnames, "User");
        assert_eq!(user.birthdate, date!(2000 - 01 - 01));
        assert_eq!(user.phone_code, "502");
        assert_eq!(user.phone_number, "00000000");
        assert_eq!(user.role, Role::Admin);
    }
}
