// backend/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info, instrument, warn};

use super::{require_user_id, UserStore};
use crate::errors::{AppError, Result as AppResult};
use crate::models::{TradeItem, User, UserDetails};

const USER_DETAILS_COLUMNS: &str =
  "user_id, display_name, phone, email, postal_code, city, preferred_contact, profile_pic";

#[derive(Debug, Clone)]
pub struct PgUserStore {
  pool: PgPool,
}

impl PgUserStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> AppResult<Self> {
    let pool = PgPool::connect(database_url).await.map_err(|e| {
      error!(error = %e, "Failed to connect to the database.");
      AppError::Sqlx(e)
    })?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  /// Applies the SQL files under `backend/migrations`.
  pub async fn run_migrations(&self) -> AppResult<()> {
    sqlx::migrate!("./migrations")
      .run(&self.pool)
      .await
      .map_err(|e| AppError::Persistence(format!("Migration failed: {}", e)))?;
    info!("Database migrations applied.");
    Ok(())
  }
}

#[async_trait]
impl UserStore for PgUserStore {
  #[instrument(name = "pg_store::insert_user", skip(self, user), fields(user_id = %user.id))]
  async fn insert_user(&self, user: User) -> AppResult<User> {
    sqlx::query_as::<_, User>("INSERT INTO users (id, user_name, email) VALUES ($1, $2, $3) RETURNING id, user_name, email")
      .bind(&user.id)
      .bind(&user.user_name)
      .bind(&user.email)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
          warn!("Attempt to insert an existing user id.");
          AppError::Conflict(format!("User with ID {} already exists.", user.id))
        }
        other => {
          error!(error = %other, "Database error while inserting user.");
          AppError::Sqlx(other)
        }
      })
  }

  #[instrument(name = "pg_store::get_user", skip(self))]
  async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
    sqlx::query_as::<_, User>("SELECT id, user_name, email FROM users WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching user {}: {}", id, e);
        AppError::Sqlx(e)
      })
  }

  #[instrument(name = "pg_store::get_user_details", skip(self))]
  async fn get_user_details(&self, user_id: &str) -> AppResult<Option<UserDetails>> {
    sqlx::query_as::<_, UserDetails>(&format!(
      "SELECT {} FROM user_details WHERE user_id = $1",
      USER_DETAILS_COLUMNS
    ))
    .bind(user_id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      error!("Database error while fetching details for user {}: {}", user_id, e);
      AppError::Sqlx(e)
    })
  }

  #[instrument(name = "pg_store::upsert_user_details", skip_all)]
  async fn upsert_user_details(&self, details: UserDetails) -> AppResult<UserDetails> {
    require_user_id(&details)?;

    let sql = format!(
      "INSERT INTO user_details ({cols}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
       ON CONFLICT (user_id) DO UPDATE SET \
       display_name = EXCLUDED.display_name, phone = EXCLUDED.phone, email = EXCLUDED.email, \
       postal_code = EXCLUDED.postal_code, city = EXCLUDED.city, \
       preferred_contact = EXCLUDED.preferred_contact, profile_pic = EXCLUDED.profile_pic, \
       updated_at = NOW() \
       RETURNING {cols}",
      cols = USER_DETAILS_COLUMNS
    );

    sqlx::query_as::<_, UserDetails>(&sql)
      .bind(&details.user_id)
      .bind(&details.display_name)
      .bind(&details.phone)
      .bind(&details.email)
      .bind(&details.postal_code)
      .bind(&details.city)
      .bind(&details.preferred_contact)
      .bind(&details.profile_pic)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!(error = %e, "Database error while storing user details.");
        AppError::Sqlx(e)
      })
  }

  #[instrument(name = "pg_store::trade_items_by_user", skip(self))]
  async fn trade_items_by_user(&self, user_id: &str) -> AppResult<Vec<TradeItem>> {
    sqlx::query_as::<_, TradeItem>(
      "SELECT id, user_id, name, description, image_url FROM trade_items WHERE user_id = $1 ORDER BY name ASC",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(|e| {
      error!("Database error while fetching trade items for user {}: {}", user_id, e);
      AppError::Sqlx(e)
    })
  }
}
