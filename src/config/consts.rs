/// Default cap on input size for sessions and recipes (1 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
/// Smallest input cap a recipe may configure (1 KiB)
pub const MIN_INPUT_LIMIT_BYTES: usize = 1024;
/// Largest input cap a recipe may configure (16 MiB)
pub const MAX_INPUT_LIMIT_BYTES: usize = 16 * 1024 * 1024;
/// Most values a generator returns in one batch
pub const MAX_BATCH_SIZE: usize = 1000;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 256;
/// Passwords per batch
pub const MAX_PASSWORD_COUNT: usize = 100;
