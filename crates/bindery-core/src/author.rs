//! Author resolution — find an existing user by display name, or provision
//! a new one.
//!
//! Matching is a case-insensitive substring search delegated to the host;
//! the first result in host ranking order wins. There is no deduplication
//! guarantee beyond that, and a provisioned user is permanent even if the
//! content write that prompted it later fails.

use rand_core::{OsRng, RngCore};

use crate::{
  Error, Result,
  host::HostPlatform,
  user::{NewUser, Role, UserId},
};

/// Resolve `name` to a user id, provisioning a new `author`-role user when
/// no existing display name matches.
pub async fn resolve_or_create<H: HostPlatform>(
  host: &H,
  name: &str,
) -> Result<UserId> {
  let matches = host.search_users(name).await.map_err(Error::host)?;
  if let Some(&id) = matches.first() {
    tracing::debug!(author = name, user_id = id, "matched existing author");
    return Ok(id);
  }

  let (first_name, last_name) = split_display_name(name);
  let user = NewUser {
    login: slugify(name),
    password: generate_password(),
    first_name,
    last_name,
    display_name: name.to_owned(),
    role: Role::Author,
  };

  let id = host.insert_user(user).await.map_err(Error::host)?;
  tracing::info!(author = name, user_id = id, "provisioned new author");
  Ok(id)
}

/// Best-effort split of a display name at the *first* space.
///
/// "Jane Doe" becomes ("Jane", "Doe"); a single token becomes the first name
/// with an empty last name. Anything after the first space lands in the last
/// name wholesale. Undefined beyond that, by contract.
pub fn split_display_name(name: &str) -> (String, String) {
  match name.split_once(' ') {
    Some((first, last)) => (first.to_owned(), last.to_owned()),
    None => (name.to_owned(), String::new()),
  }
}

/// Lowercase login slug: alphanumeric runs joined by single hyphens.
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut pending_sep = false;
  for c in name.chars() {
    if c.is_alphanumeric() {
      if pending_sep && !slug.is_empty() {
        slug.push('-');
      }
      pending_sep = false;
      slug.extend(c.to_lowercase());
    } else {
      pending_sep = true;
    }
  }
  slug
}

/// Random single-use password for a provisioned author. The author never
/// logs in through this API; the host hashes it on insert.
fn generate_password() -> String {
  let mut bytes = [0u8; 24];
  OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}
