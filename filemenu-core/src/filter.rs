use filemenu_integrations::MenuEntryId;
use serde::{Deserialize, Serialize};

use crate::menu::Menu;
use crate::model::{FileEntry, SyncState};

/// Decides which rows of a freshly inflated menu are legal for `file`.
pub trait ActionFilter {
    fn filter(&self, menu: &mut Menu, file: &FileEntry);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub file_locking: bool,
    pub sharing: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            file_locking: true,
            sharing: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterContext {
    pub user_id: String,
    pub capabilities: Capabilities,
}

/// Permission and sync-state driven filter for the single-file menu.
#[derive(Debug, Clone, Default)]
pub struct FileActionFilter {
    context: FilterContext,
}

impl FileActionFilter {
    pub fn new(context: FilterContext) -> Self {
        Self { context }
    }

    pub fn visible_actions(&self, file: &FileEntry) -> Vec<MenuEntryId> {
        MenuEntryId::ALL
            .into_iter()
            .filter(|id| self.allows(*id, file))
            .collect()
    }

    fn allows(&self, id: MenuEntryId, file: &FileEntry) -> bool {
        let permissions = file.permissions();
        let locking = self.context.capabilities.file_locking;
        match id {
            MenuEntryId::LockedBy | MenuEntryId::LockedUntil => file.is_locked,
            MenuEntryId::LockFile => {
                locking && !file.is_folder && !file.is_locked && permissions.write
            }
            MenuEntryId::UnlockFile => locking && self.can_unlock(file),
            MenuEntryId::Rename => permissions.rename && self.is_editable(file),
            MenuEntryId::Move => permissions.move_ && self.is_editable(file),
            MenuEntryId::Delete => permissions.delete && self.is_editable(file),
            MenuEntryId::Copy | MenuEntryId::Details => true,
            MenuEntryId::SendFile => !file.is_folder,
            MenuEntryId::Download => matches!(
                file.sync_state,
                SyncState::CloudOnly | SyncState::Partial | SyncState::Error
            ),
            MenuEntryId::SyncFile => {
                matches!(file.sync_state, SyncState::Cached | SyncState::Error)
            }
            MenuEntryId::CancelSync => file.sync_state == SyncState::Syncing,
            MenuEntryId::RemoveOfflineCopy => {
                matches!(file.sync_state, SyncState::Cached | SyncState::Partial)
            }
            MenuEntryId::Favorite => !file.is_favorite,
            MenuEntryId::Unfavorite => file.is_favorite,
            MenuEntryId::Share => self.context.capabilities.sharing && permissions.reshare,
        }
    }

    /// Only the owner of a manual lock may release it from the client.
    fn can_unlock(&self, file: &FileEntry) -> bool {
        !file.lock_owner_id.is_empty() && file.is_locked_by(&self.context.user_id)
    }

    fn is_editable(&self, file: &FileEntry) -> bool {
        !file.is_locked || self.can_unlock(file)
    }
}

impl ActionFilter for FileActionFilter {
    fn filter(&self, menu: &mut Menu, file: &FileEntry) {
        for id in MenuEntryId::ALL {
            menu.set_visible(id, self.allows(id, file));
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
