use filemenu_integrations::MenuEntryId;

use crate::filter::ActionFilter;
use crate::menu::{Menu, MenuTemplate};
use crate::model::{FileEntry, LockType};
use crate::relative_time::{Clock, RelativeTimeFormatter};
use crate::strings::{StringCatalog, StringId};
use crate::styled::{StyledText, TextStyle};

const MILLIS_PER_SECOND: i64 = 1_000;

/// Builds the single-file actions menu and annotates it with lock details.
pub struct LockAwareMenuPresenter<'a> {
    strings: &'a StringCatalog,
    formatter: &'a dyn RelativeTimeFormatter,
    clock: &'a dyn Clock,
    group_dividers: bool,
}

impl<'a> LockAwareMenuPresenter<'a> {
    pub fn new(
        strings: &'a StringCatalog,
        formatter: &'a dyn RelativeTimeFormatter,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            strings,
            formatter,
            clock,
            group_dividers: true,
        }
    }

    pub fn with_group_dividers(mut self, enabled: bool) -> Self {
        self.group_dividers = enabled;
        self
    }

    pub fn build(&self, file: &FileEntry, action_filter: &dyn ActionFilter) -> Menu {
        let mut menu = MenuTemplate::file_actions(self.strings, self.group_dividers);
        action_filter.filter(&mut menu, file);

        if !file.is_locked {
            menu.set_visible(MenuEntryId::LockedBy, false);
            menu.set_visible(MenuEntryId::LockedUntil, false);
            tracing::debug!(path = %file.remote_path, "file is not locked");
            return menu;
        }

        menu.set_title(MenuEntryId::LockedBy, self.locked_by_text(file));
        menu.set_visible(MenuEntryId::LockedBy, true);
        self.show_locked_until(&mut menu, file);
        tracing::debug!(
            path = %file.remote_path,
            lock_type = ?file.lock_type,
            locked_until = menu.is_visible(MenuEntryId::LockedUntil),
            "annotated menu with lock status"
        );
        menu
    }

    fn locked_by_text(&self, file: &FileEntry) -> StyledText {
        let owner = file.lock_owner_name();
        let template = match file.lock_type {
            LockType::Collaborative => StringId::LockedByApp,
            LockType::None | LockType::Manual | LockType::Token => StringId::LockedBy,
        };
        let formatted = self.strings.format_with_ranges(template, &[owner]);
        match formatted.first_range(0) {
            Some(range) => StyledText::with_range(formatted.text, range, TextStyle::Bold),
            None => StyledText::plain(formatted.text),
        }
    }

    fn show_locked_until(&self, menu: &mut Menu, file: &FileEntry) {
        let Some(expiration) = lock_expiration_millis(file) else {
            menu.set_visible(MenuEntryId::LockedUntil, false);
            return;
        };
        let relative = self
            .formatter
            .format(expiration, self.clock.now_millis(), true);
        let title = self
            .strings
            .format(StringId::LockExpirationInfo, &[relative.as_str()]);
        menu.set_title(MenuEntryId::LockedUntil, StyledText::plain(title));
        menu.set_visible(MenuEntryId::LockedUntil, true);
    }
}

/// Lock expiry in epoch milliseconds, `None` when either timing field is unset.
/// Out-of-range inputs wrap instead of being rejected.
pub fn lock_expiration_millis(file: &FileEntry) -> Option<i64> {
    if file.lock_timestamp == 0 || file.lock_timeout == 0 {
        return None;
    }
    Some(
        file.lock_timestamp
            .wrapping_add(file.lock_timeout)
            .wrapping_mul(MILLIS_PER_SECOND),
    )
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
