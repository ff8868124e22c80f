//! Global constants for patchstarter
//!
//! Centralized location for plist keys and fixed patch schema values

/// Location of the metadata file inside an application bundle
pub const INFO_PLIST_PATH: &str = "Contents/Info.plist";

pub const KEY_BUNDLE_NAME: &str = "CFBundleName";
pub const KEY_BUNDLE_IDENTIFIER: &str = "CFBundleIdentifier";
pub const KEY_SHORT_VERSION: &str = "CFBundleShortVersionString";
pub const KEY_BUNDLE_VERSION: &str = "CFBundleVersion";
pub const KEY_MINIMUM_SYSTEM_VERSION: &str = "LSMinimumSystemVersion";

/// Minimum OS offered when the bundle does not declare one
pub const DEFAULT_MINIMUM_OS: &str = "10.9";

/// Timestamp layout expected by the patch server (UTC, seconds precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Criterion names and operators used by the patch schema
pub const CRITERION_BUNDLE_ID: &str = "Application Bundle ID";
pub const CRITERION_APP_VERSION: &str = "Application Version";
pub const CRITERION_OS_VERSION: &str = "Operating System Version";
pub const OPERATOR_IS: &str = "is";
pub const OPERATOR_GREATER_OR_EQUAL: &str = "greater than or equal";
pub const CRITERION_TYPE_RECON: &str = "recon";

/// External converter for binary property lists
pub const PLUTIL: &str = "plutil";
