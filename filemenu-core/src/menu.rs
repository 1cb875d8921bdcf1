use filemenu_integrations::MenuEntryId;
use serde::Serialize;

use crate::strings::{StringCatalog, StringId};
use crate::styled::StyledText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuGroup {
    LockInfo,
    Locking,
    Edit,
    Offline,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: MenuEntryId,
    pub group: MenuGroup,
    pub title: StyledText,
    pub visible: bool,
    pub enabled: bool,
}

/// One menu row as it sits in the template before any filtering.
#[derive(Debug, Clone, Copy)]
struct TemplateRow {
    id: MenuEntryId,
    group: MenuGroup,
    enabled: bool,
}

const FILE_ACTIONS: [TemplateRow; 17] = [
    row(MenuEntryId::LockedBy, MenuGroup::LockInfo, false),
    row(MenuEntryId::LockedUntil, MenuGroup::LockInfo, false),
    row(MenuEntryId::LockFile, MenuGroup::Locking, true),
    row(MenuEntryId::UnlockFile, MenuGroup::Locking, true),
    row(MenuEntryId::Rename, MenuGroup::Edit, true),
    row(MenuEntryId::Move, MenuGroup::Edit, true),
    row(MenuEntryId::Copy, MenuGroup::Edit, true),
    row(MenuEntryId::Delete, MenuGroup::Edit, true),
    row(MenuEntryId::Download, MenuGroup::Offline, true),
    row(MenuEntryId::SyncFile, MenuGroup::Offline, true),
    row(MenuEntryId::CancelSync, MenuGroup::Offline, true),
    row(MenuEntryId::RemoveOfflineCopy, MenuGroup::Offline, true),
    row(MenuEntryId::Favorite, MenuGroup::Other, true),
    row(MenuEntryId::Unfavorite, MenuGroup::Other, true),
    row(MenuEntryId::Share, MenuGroup::Other, true),
    row(MenuEntryId::SendFile, MenuGroup::Other, true),
    row(MenuEntryId::Details, MenuGroup::Other, true),
];

const fn row(id: MenuEntryId, group: MenuGroup, enabled: bool) -> TemplateRow {
    TemplateRow { id, group, enabled }
}

pub struct MenuTemplate;

impl MenuTemplate {
    /// Every row of the single-file actions menu, hidden until a filter shows it.
    pub fn file_actions(strings: &StringCatalog, group_dividers: bool) -> Menu {
        let entries = FILE_ACTIONS
            .iter()
            .map(|row| MenuEntry {
                id: row.id,
                group: row.group,
                title: StringId::title_for(row.id)
                    .map(|id| StyledText::plain(strings.get(id)))
                    .unwrap_or_default(),
                visible: false,
                enabled: row.enabled,
            })
            .collect();
        Menu {
            entries,
            group_dividers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    group_dividers: bool,
}

impl Menu {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn group_dividers(&self) -> bool {
        self.group_dividers
    }

    pub fn find(&self, id: MenuEntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn find_mut(&mut self, id: MenuEntryId) -> Option<&mut MenuEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn is_visible(&self, id: MenuEntryId) -> bool {
        self.find(id).is_some_and(|entry| entry.visible)
    }

    pub fn set_visible(&mut self, id: MenuEntryId, visible: bool) {
        if let Some(entry) = self.find_mut(id) {
            entry.visible = visible;
        }
    }

    pub fn set_title(&mut self, id: MenuEntryId, title: StyledText) {
        if let Some(entry) = self.find_mut(id) {
            entry.title = title;
        }
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    /// Visible entries split at group boundaries. Without dividers the whole
    /// menu is a single section.
    pub fn sections(&self) -> Vec<Vec<&MenuEntry>> {
        let mut sections: Vec<Vec<&MenuEntry>> = Vec::new();
        let mut current_group = None;
        for entry in self.visible_entries() {
            let starts_section = self.group_dividers && current_group != Some(entry.group);
            match sections.last_mut() {
                Some(section) if !starts_section => section.push(entry),
                _ => sections.push(vec![entry]),
            }
            current_group = Some(entry.group);
        }
        sections
    }
}
