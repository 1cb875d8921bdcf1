pub const CONFIG_DIR_NAME: &str = "filemenu";
pub const STRINGS_FILENAME: &str = "strings.json";

pub const ENV_USER: &str = "FILEMENU_USER";
pub const ENV_FILE_LOCKING: &str = "FILEMENU_FILE_LOCKING";
pub const ENV_SHARING: &str = "FILEMENU_SHARING";
pub const ENV_GROUP_DIVIDERS: &str = "FILEMENU_GROUP_DIVIDERS";
pub const ENV_RELATIVE_STYLE: &str = "FILEMENU_RELATIVE_STYLE";
pub const ENV_STRINGS: &str = "FILEMENU_STRINGS";
pub const ENV_LOG: &str = "FILEMENU_LOG";
