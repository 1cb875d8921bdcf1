pub mod ids;

use serde::{Deserialize, Serialize};

/// Stable identifier of every row the file actions menu can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEntryId {
    LockedBy,
    LockedUntil,
    LockFile,
    UnlockFile,
    Rename,
    Move,
    Copy,
    Delete,
    Download,
    SyncFile,
    CancelSync,
    RemoveOfflineCopy,
    Favorite,
    Unfavorite,
    Share,
    SendFile,
    Details,
}

impl MenuEntryId {
    pub const ALL: [MenuEntryId; 17] = [
        MenuEntryId::LockedBy,
        MenuEntryId::LockedUntil,
        MenuEntryId::LockFile,
        MenuEntryId::UnlockFile,
        MenuEntryId::Rename,
        MenuEntryId::Move,
        MenuEntryId::Copy,
        MenuEntryId::Delete,
        MenuEntryId::Download,
        MenuEntryId::SyncFile,
        MenuEntryId::CancelSync,
        MenuEntryId::RemoveOfflineCopy,
        MenuEntryId::Favorite,
        MenuEntryId::Unfavorite,
        MenuEntryId::Share,
        MenuEntryId::SendFile,
        MenuEntryId::Details,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::LockedBy => "action_locked_by",
            Self::LockedUntil => "action_locked_until",
            Self::LockFile => "action_lock_file",
            Self::UnlockFile => "action_unlock_file",
            Self::Rename => "action_rename_file",
            Self::Move => "action_move",
            Self::Copy => "action_copy",
            Self::Delete => "action_remove_file",
            Self::Download => "action_download_file",
            Self::SyncFile => "action_sync_file",
            Self::CancelSync => "action_cancel_sync",
            Self::RemoveOfflineCopy => "action_remove_offline_copy",
            Self::Favorite => "action_favorite",
            Self::Unfavorite => "action_unset_favorite",
            Self::Share => "action_send_share_file",
            Self::SendFile => "action_send_file",
            Self::Details => "action_see_details",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == value)
    }

    /// Rows that describe the lock instead of acting on the file.
    pub fn is_lock_status(self) -> bool {
        matches!(self, Self::LockedBy | Self::LockedUntil)
    }
}
