/// vCard bracket constants shared across crates
pub const VCARD_COMPONENT: &str = "VCARD";
pub const BEGIN_VCARD: &str = const_str::concat!("BEGIN:", VCARD_COMPONENT);
pub const END_VCARD: &str = const_str::concat!("END:", VCARD_COMPONENT);

/// Revision assumed until a record declares its own `VERSION`.
pub const LEGACY_VERSION: &str = "2.1";

pub const DEFAULT_FOLD_WIDTH: usize = 76;
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 16;

pub const CONFIG_FILE_NAME: &str = "vcfkit.toml";
pub const ENV_PREFIX: &str = "VCFKIT";
