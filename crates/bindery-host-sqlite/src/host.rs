//! [`SqliteHost`] — the SQLite implementation of [`HostPlatform`].

use std::path::Path;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use chrono::Utc;
use rand_core::OsRng;
use rusqlite::OptionalExtension as _;

use bindery_core::{
  content::{ContentItem, ContentPatch, ContentStatus, ContentTypeDef, ItemId, NewContentItem},
  host::HostPlatform,
  user::{NewUser, UserId, UserMeta},
};

use crate::{
  Error, Result,
  encode::{decode_dt, decode_status, encode_dt, encode_role, encode_status},
  schema::SCHEMA,
};

// ─── Host ────────────────────────────────────────────────────────────────────

/// A Bindery host backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and all
/// access is serialized through its worker thread.
#[derive(Clone)]
pub struct SqliteHost {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteHost {
  /// Open (or create) a host database at `path` and run schema
  /// initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let host = Self { conn };
    host.init_schema().await?;
    Ok(host)
  }

  /// Open an in-memory host — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let host = Self { conn };
    host.init_schema().await?;
    Ok(host)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Argon2 PHC hash for a provisioned user's password. Only the hash ever
  /// reaches a column.
  fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map(|h| h.to_string())
      .map_err(|e| Error::PasswordHash(e.to_string()))
  }
}

// ─── HostPlatform ────────────────────────────────────────────────────────────

impl HostPlatform for SqliteHost {
  type Error = Error;

  // ── Content-item store ────────────────────────────────────────────────

  async fn insert_item(&self, item: NewContentItem) -> Result<ItemId> {
    let created_at = encode_dt(Utc::now());
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (content_type, title, excerpt, author_id, status, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            item.content_type,
            item.title,
            item.excerpt,
            item.author as i64,
            encode_status(item.status),
            created_at,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id as ItemId)
  }

  async fn get_item(&self, id: ItemId) -> Result<Option<ContentItem>> {
    let row: Option<(String, String, String, i64, String, String)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT content_type, title, excerpt, author_id, status, created_at
               FROM items WHERE item_id = ?1",
              rusqlite::params![id as i64],
              |r| {
                Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?, r.get(5)?))
              },
            )
            .optional()?,
        )
      })
      .await?;

    row
      .map(|(content_type, title, excerpt, author_id, status, created_at)| {
        Ok(ContentItem {
          item_id: id,
          content_type,
          title,
          excerpt,
          author: author_id as UserId,
          status: decode_status(&status)?,
          created_at: decode_dt(&created_at)?,
        })
      })
      .transpose()
  }

  async fn update_item(&self, id: ItemId, patch: ContentPatch) -> Result<()> {
    if patch.is_empty() {
      return Ok(());
    }
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE items SET
             title     = COALESCE(?2, title),
             excerpt   = COALESCE(?3, excerpt),
             author_id = COALESCE(?4, author_id)
           WHERE item_id = ?1",
          rusqlite::params![
            id as i64,
            patch.title,
            patch.excerpt,
            patch.author.map(|a| a as i64),
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_item(&self, id: ItemId) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM item_terms WHERE item_id = ?1",
          rusqlite::params![id as i64],
        )?;
        conn.execute(
          "DELETE FROM items WHERE item_id = ?1",
          rusqlite::params![id as i64],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_items<'a>(
    &'a self,
    content_type: &'a str,
    status: ContentStatus,
  ) -> Result<Vec<ItemId>> {
    let content_type = content_type.to_owned();
    let ids = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT item_id FROM items
           WHERE content_type = ?1 AND status = ?2
           ORDER BY item_id",
        )?;
        let ids = stmt
          .query_map(
            rusqlite::params![content_type, encode_status(status)],
            |r| r.get::<_, i64>(0),
          )?
          .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
      })
      .await?;
    Ok(ids.into_iter().map(|id| id as ItemId).collect())
  }

  async fn register_content_type(&self, def: ContentTypeDef) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO content_types (name, singular_name, taxonomies)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![def.name, def.singular_name, def.taxonomies.join(",")],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Taxonomy store ────────────────────────────────────────────────────

  async fn set_item_terms<'a>(
    &'a self,
    id: ItemId,
    taxonomy: &'a str,
    labels: &'a [String],
  ) -> Result<()> {
    let taxonomy = taxonomy.to_owned();
    let labels = labels.to_vec();
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        // Detach the previous set within this taxonomy only.
        tx.execute(
          "DELETE FROM item_terms WHERE item_id = ?1 AND term_id IN
             (SELECT term_id FROM terms WHERE taxonomy = ?2)",
          rusqlite::params![id as i64, taxonomy],
        )?;

        for label in &labels {
          tx.execute(
            "INSERT OR IGNORE INTO terms (taxonomy, name) VALUES (?1, ?2)",
            rusqlite::params![taxonomy, label],
          )?;
          tx.execute(
            "INSERT OR IGNORE INTO item_terms (item_id, term_id)
             SELECT ?1, term_id FROM terms WHERE taxonomy = ?2 AND name = ?3",
            rusqlite::params![id as i64, taxonomy, label],
          )?;
        }

        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn item_term_names<'a>(
    &'a self,
    id: ItemId,
    taxonomy: &'a str,
  ) -> Result<Vec<String>> {
    let taxonomy = taxonomy.to_owned();
    let names = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT t.name FROM terms t
           JOIN item_terms it ON it.term_id = t.term_id
           WHERE it.item_id = ?1 AND t.taxonomy = ?2
           ORDER BY t.name",
        )?;
        let names = stmt
          .query_map(rusqlite::params![id as i64, taxonomy], |r| r.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
      })
      .await?;
    Ok(names)
  }

  // ── User directory ────────────────────────────────────────────────────

  async fn search_users<'a>(&'a self, display_name: &'a str) -> Result<Vec<UserId>> {
    let needle = display_name.to_owned();
    let ids = self
      .conn
      .call(move |conn| {
        // SQLite LIKE is case-insensitive for ASCII; ranking is insertion
        // order, so the oldest matching user wins.
        let mut stmt = conn.prepare(
          "SELECT user_id FROM users
           WHERE display_name LIKE '%' || ?1 || '%'
           ORDER BY user_id",
        )?;
        let ids = stmt
          .query_map(rusqlite::params![needle], |r| r.get::<_, i64>(0))?
          .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
      })
      .await?;
    Ok(ids.into_iter().map(|id| id as UserId).collect())
  }

  async fn insert_user(&self, user: NewUser) -> Result<UserId> {
    let password_hash = Self::hash_password(&user.password)?;
    let created_at = encode_dt(Utc::now());
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users
             (login, password_hash, first_name, last_name, display_name, role, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            user.login,
            password_hash,
            user.first_name,
            user.last_name,
            user.display_name,
            encode_role(user.role),
            created_at,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id as UserId)
  }

  async fn get_user_meta(&self, id: UserId) -> Result<Option<UserMeta>> {
    let meta = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT first_name, last_name FROM users WHERE user_id = ?1",
              rusqlite::params![id as i64],
              |r| {
                Ok(UserMeta { first_name: r.get(0)?, last_name: r.get(1)? })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(meta)
  }
}
