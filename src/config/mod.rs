mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, DEFAULT_ENABLED_RULES, DEFAULT_LICENSE_TEMPLATE, DEFAULT_MAX_FILE_SIZE, FileSizeConfig,
    ForbiddenTokenConfig, GuardNamingKind,
    HeaderGuardConfig, IncludeGrouping, IncludeOrderConfig, LicenseHeaderConfig, RulesConfig,
    ScannerConfig, TokenKind,
};
