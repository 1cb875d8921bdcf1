use std::collections::HashMap;
use std::ops::Range;

use filemenu_integrations::MenuEntryId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid strings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown string key: {0}")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringId {
    LockedBy,
    LockedByApp,
    LockExpirationInfo,
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

impl StringId {
    pub const ALL: [StringId; 18] = [
        StringId::LockedBy,
        StringId::LockedByApp,
        StringId::LockExpirationInfo,
        StringId::LockFile,
        StringId::UnlockFile,
        StringId::Rename,
        StringId::Move,
        StringId::Copy,
        StringId::Delete,
        StringId::Download,
        StringId::SyncFile,
        StringId::CancelSync,
        StringId::RemoveOfflineCopy,
        StringId::Favorite,
        StringId::Unfavorite,
        StringId::Share,
        StringId::SendFile,
        StringId::Details,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::LockedBy => "locked_by",
            Self::LockedByApp => "locked_by_app",
            Self::LockExpirationInfo => "lock_expiration_info",
            Self::LockFile => "lock_file",
            Self::UnlockFile => "unlock_file",
            Self::Rename => "common_rename",
            Self::Move => "actionbar_move",
            Self::Copy => "actionbar_copy",
            Self::Delete => "common_remove",
            Self::Download => "filedetails_download",
            Self::SyncFile => "filedetails_sync_file",
            Self::CancelSync => "common_cancel_sync",
            Self::RemoveOfflineCopy => "remove_offline_copy",
            Self::Favorite => "favorite",
            Self::Unfavorite => "unset_favorite",
            Self::Share => "share",
            Self::SendFile => "action_send_file",
            Self::Details => "actionbar_see_details",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == value)
    }

    fn default_text(self) -> &'static str {
        match self {
            Self::LockedBy => "Locked by %1$s",
            Self::LockedByApp => "Locked by %1$s app",
            Self::LockExpirationInfo => "Expires: %1$s",
            Self::LockFile => "Lock file",
            Self::UnlockFile => "Unlock file",
            Self::Rename => "Rename",
            Self::Move => "Move",
            Self::Copy => "Copy",
            Self::Delete => "Delete",
            Self::Download => "Download",
            Self::SyncFile => "Sync",
            Self::CancelSync => "Cancel sync",
            Self::RemoveOfflineCopy => "Remove offline copy",
            Self::Favorite => "Add to favorites",
            Self::Unfavorite => "Remove from favorites",
            Self::Share => "Share",
            Self::SendFile => "Send",
            Self::Details => "Details",
        }
    }

    /// Static title of an action row. Lock-status rows are titled at build time.
    pub fn title_for(entry: MenuEntryId) -> Option<Self> {
        match entry {
            MenuEntryId::LockedBy | MenuEntryId::LockedUntil => None,
            MenuEntryId::LockFile => Some(Self::LockFile),
            MenuEntryId::UnlockFile => Some(Self::UnlockFile),
            MenuEntryId::Rename => Some(Self::Rename),
            MenuEntryId::Move => Some(Self::Move),
            MenuEntryId::Copy => Some(Self::Copy),
            MenuEntryId::Delete => Some(Self::Delete),
            MenuEntryId::Download => Some(Self::Download),
            MenuEntryId::SyncFile => Some(Self::SyncFile),
            MenuEntryId::CancelSync => Some(Self::CancelSync),
            MenuEntryId::RemoveOfflineCopy => Some(Self::RemoveOfflineCopy),
            MenuEntryId::Favorite => Some(Self::Favorite),
            MenuEntryId::Unfavorite => Some(Self::Unfavorite),
            MenuEntryId::Share => Some(Self::Share),
            MenuEntryId::SendFile => Some(Self::SendFile),
            MenuEntryId::Details => Some(Self::Details),
        }
    }
}

/// Resource strings keyed by `StringId`, English unless overridden.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    overrides: HashMap<StringId, String>,
}

impl StringCatalog {
    /// Reads a JSON object of `key -> template` on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        catalog.apply_json(raw)?;
        Ok(catalog)
    }

    pub fn apply_json(&mut self, raw: &str) -> Result<(), CatalogError> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        for (key, value) in entries {
            let id = StringId::from_key(&key).ok_or(CatalogError::UnknownKey(key))?;
            self.overrides.insert(id, value);
        }
        Ok(())
    }

    pub fn get(&self, id: StringId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }

    pub fn format(&self, id: StringId, args: &[&str]) -> String {
        format_template(self.get(id), args)
    }

    pub fn format_with_ranges(&self, id: StringId, args: &[&str]) -> FormattedText {
        format_template_with_ranges(self.get(id), args)
    }
}

/// Expands `%1$s`-style positional and `%s` sequential placeholders.
/// Missing arguments render as empty text.
pub fn format_template(template: &str, args: &[&str]) -> String {
    format_template_with_ranges(template, args).text
}

/// Template output plus the byte ranges each argument was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub text: String,
    /// `arg_ranges[i]` lists every placement of `args[i]`, in output order.
    pub arg_ranges: Vec<Vec<Range<usize>>>,
}

impl FormattedText {
    pub fn first_range(&self, arg: usize) -> Option<Range<usize>> {
        self.arg_ranges.get(arg)?.first().cloned()
    }
}

pub fn format_template_with_ranges(template: &str, args: &[&str]) -> FormattedText {
    let mut out = String::with_capacity(template.len());
    let mut arg_ranges = vec![Vec::new(); args.len()];
    let mut next_sequential = 0;
    let mut rest = template;
    let mut push_arg = |out: &mut String, index: usize| {
        if let Some(value) = args.get(index) {
            let start = out.len();
            out.push_str(value);
            arg_ranges[index].push(start..out.len());
        }
    };
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('s') {
            push_arg(&mut out, next_sequential);
            next_sequential += 1;
            rest = after;
        } else if let Some((index, after)) = parse_positional(tail) {
            push_arg(&mut out, index);
            rest = after;
        } else {
            out.push('%');
            rest = tail;
        }
    }
    out.push_str(rest);
    FormattedText {
        text: out,
        arg_ranges,
    }
}

fn parse_positional(tail: &str) -> Option<(usize, &str)> {
    let digits = tail.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = tail[digits..].strip_prefix("$s")?;
    let position: usize = tail[..digits].parse().ok()?;
    Some((position.checked_sub(1)?, after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lock_templates() {
        let catalog = StringCatalog::default();
        assert_eq!(catalog.format(StringId::LockedBy, &["bob"]), "Locked by bob");
        assert_eq!(
            catalog.format(StringId::LockedByApp, &["Text"]),
            "Locked by Text app"
        );
        assert_eq!(
            catalog.format(StringId::LockExpirationInfo, &["in 10 minutes"]),
            "Expires: in 10 minutes"
        );
    }

    #[test]
    fn template_placeholders() {
        assert_eq!(format_template("%2$s then %1$s", &["a", "b"]), "b then a");
        assert_eq!(format_template("%s and %s", &["a", "b"]), "a and b");
        assert_eq!(format_template("100%% of %1$s", &["x"]), "100% of x");
        assert_eq!(format_template("missing %3$s.", &["x"]), "missing .");
        assert_eq!(format_template("odd %d %0$s", &["x"]), "odd %d %0$s");
    }

    #[test]
    fn records_where_arguments_were_written() {
        let formatted = format_template_with_ranges("Locked by %1$s", &["Locked"]);
        assert_eq!(formatted.text, "Locked by Locked");
        assert_eq!(formatted.first_range(0), Some(10..16));

        let formatted = format_template_with_ranges("%2$s, %1$s and %2$s", &["a", "bb"]);
        assert_eq!(formatted.text, "bb, a and bb");
        assert_eq!(formatted.arg_ranges, vec![vec![4..5], vec![0..2, 10..12]]);

        let formatted = format_template_with_ranges("%s hat gesperrt", &["by"]);
        assert_eq!(formatted.first_range(0), Some(0..2));
        assert_eq!(formatted.first_range(1), None);
    }

    #[test]
    fn unused_argument_has_no_range() {
        let formatted = format_template_with_ranges("Expires soon", &["x"]);
        assert_eq!(formatted.text, "Expires soon");
        assert_eq!(formatted.first_range(0), None);
    }

    #[test]
    fn overrides_replace_defaults() {
        let catalog =
            StringCatalog::from_json(r#"{"locked_by": "Gesperrt von %1$s"}"#).unwrap();
        assert_eq!(
            catalog.format(StringId::LockedBy, &["bob"]),
            "Gesperrt von bob"
        );
        assert_eq!(catalog.get(StringId::Rename), "Rename");
    }

    #[test]
    fn rejects_unknown_keys_and_bad_json() {
        let err = StringCatalog::from_json(r#"{"nope": "x"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownKey(key) if key == "nope"));
        let err = StringCatalog::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn every_action_row_has_a_title() {
        for entry in MenuEntryId::ALL {
            assert_eq!(StringId::title_for(entry).is_none(), entry.is_lock_status());
        }
    }
}
