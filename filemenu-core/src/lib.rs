mod filter;
mod menu;
mod model;
mod presenter;
mod relative_time;
mod strings;
mod styled;

pub use filemenu_integrations::MenuEntryId;
pub use filter::{ActionFilter, Capabilities, FileActionFilter, FilterContext};
pub use menu::{Menu, MenuEntry, MenuGroup, MenuTemplate};
pub use model::{FileEntry, LockType, Permissions, SyncState};
pub use presenter::{LockAwareMenuPresenter, lock_expiration_millis};
pub use relative_time::{
    Clock, EnglishRelativeTime, FixedClock, RelativeStyle, RelativeTimeFormatter, SystemClock,
    format_absolute,
};
pub use strings::{
    CatalogError, FormattedText, StringCatalog, StringId, format_template,
    format_template_with_ranges,
};
pub use styled::{StyleSpan, StyledText, TextStyle};
