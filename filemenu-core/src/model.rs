use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockType {
    #[default]
    None,
    Manual,
    Collaborative,
    Token,
}

impl LockType {
    /// Maps the numeric `lock-owner-type` WebDAV property.
    pub fn from_dav(value: i64) -> Self {
        match value {
            0 => Self::Manual,
            1 => Self::Collaborative,
            2 => Self::Token,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    CloudOnly,
    Cached,
    Partial,
    Syncing,
    Error,
}

/// Snapshot of a remote file as the sync subsystem last saw it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    pub remote_path: String,
    pub is_folder: bool,
    pub permissions: String,
    pub is_favorite: bool,
    pub sync_state: SyncState,
    pub is_locked: bool,
    pub lock_type: LockType,
    pub lock_owner_id: String,
    pub lock_owner_display_name: Option<String>,
    /// Seconds since the epoch, 0 when unknown.
    pub lock_timestamp: i64,
    /// Seconds, 0 when unknown.
    pub lock_timeout: i64,
}

impl FileEntry {
    pub fn lock_owner_name(&self) -> &str {
        self.lock_owner_display_name
            .as_deref()
            .unwrap_or(&self.lock_owner_id)
    }

    pub fn permissions(&self) -> Permissions {
        Permissions::parse(&self.permissions)
    }

    pub fn is_locked_by(&self, user_id: &str) -> bool {
        self.is_locked && self.lock_type == LockType::Manual && self.lock_owner_id == user_id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub write: bool,
    pub delete: bool,
    pub rename: bool,
    pub move_: bool,
    pub reshare: bool,
}

impl Permissions {
    pub fn parse(value: &str) -> Self {
        let mut permissions = Self::default();
        for flag in value.chars() {
            match flag {
                'W' | 'C' | 'K' => permissions.write = true,
                'D' => permissions.delete = true,
                'N' => permissions.rename = true,
                'V' => permissions.move_ = true,
                'R' => permissions.reshare = true,
                _ => {}
            }
        }
        permissions
    }
}
