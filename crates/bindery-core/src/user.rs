//! User directory types.

use serde::{Deserialize, Serialize};

/// Host-assigned user identifier.
pub type UserId = u64;

/// Role granted to a provisioned user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Author,
  Subscriber,
}

/// Input for [`HostPlatform::insert_user`](crate::host::HostPlatform::insert_user).
///
/// `password` is the clear text; hashing is the host's concern.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub login:        String,
  pub password:     String,
  pub first_name:   String,
  pub last_name:    String,
  pub display_name: String,
  pub role:         Role,
}

/// The public slice of a user record — what the book serializer exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMeta {
  pub first_name: String,
  pub last_name:  String,
}
