//! Folder access control.
//!
//! Encrypted folders are gated by a password *checksum*, not a password hash:
//! the derived value is the classic 32-bit rolling hash over UTF-16 code
//! units (`h = (h << 5) - h + code`, wrapping) rendered as a decimal string.
//! It provides equality-based gating only and no real confidentiality. A
//! hardened build should replace it with a vetted password-hashing
//! primitive; it is reproduced here bit-for-bit so checksums stored by
//! earlier versions keep verifying.
//!
//! Unlock state is sticky: there is no in-session re-lock transition. The
//! access map is only cleared externally (data import or reset). It is also
//! persisted with the repository so previously-unlocked folders stay
//! unlocked across reloads — a UX-continuity trade-off, not a security
//! boundary.

use crate::error::AccessError;
use crate::repository::Repository;

/// Compute the folder password checksum for a candidate password.
///
/// Not a cryptographic hash. See the module docs.
pub fn password_checksum(candidate: &str) -> String {
    let mut hash: i32 = 0;
    for code in candidate.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(code as i32);
    }
    hash.to_string()
}

impl Repository {
    /// Whether listing the folder's contents must be preceded by an unlock.
    ///
    /// True iff the folder is encrypted and not yet unlocked this session.
    /// Unknown folder ids do not require unlock (the listing will simply be
    /// empty).
    pub fn requires_unlock(&self, folder_id: &str) -> bool {
        let Some(folder) = self.folder(folder_id) else {
            return false;
        };
        folder.is_encrypted && !self.folder_access.get(folder_id).copied().unwrap_or(false)
    }

    /// Verify a candidate password against the folder's stored checksum.
    ///
    /// On match the folder is marked unlocked for the session. On mismatch
    /// the state is untouched and `AccessError::Denied` is returned; there is
    /// no attempt counting or lockout (the `max_unlock_attempts` config field
    /// is intentionally unwired, see `config`).
    pub fn verify_password(
        &mut self,
        folder_id: &str,
        candidate: &str,
    ) -> Result<(), AccessError> {
        let folder = self
            .folder(folder_id)
            .ok_or_else(|| AccessError::FolderNotFound(folder_id.to_string()))?;
        if !folder.is_encrypted {
            return Err(AccessError::NotEncrypted(folder_id.to_string()));
        }
        let stored = folder.password.as_deref().unwrap_or_default();
        if password_checksum(candidate) == stored {
            self.folder_access.insert(folder_id.to_string(), true);
            Ok(())
        } else {
            Err(AccessError::Denied(folder_id.to_string()))
        }
    }

    /// Clear all unlock state. Used by data import and reset.
    pub fn clear_folder_access(&mut self) {
        self.folder_access.clear();
    }
}
