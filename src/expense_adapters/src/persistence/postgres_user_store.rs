use expense_core::{
    Email, HashedPassword, NewUser, User, UserId, UserName, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let name =
            UserName::try_from(row.name).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            UserId::from(row.id),
            name,
            email,
            HashedPassword::new(Secret::from(row.password_hash)),
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (name, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, password_hash
            "#,
        )
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_ref().expose_secret().as_str())
        .fetch_one(&mut *transaction)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        transaction
            .commit()
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        User::try_from(row)
    }
}
