//! Program-wide constants.

pub const WALLET_CONFIG_SEED: &[u8] = b"wallet_config";
pub const ALLOW_LIST_SEED: &[u8] = b"allow_list";
pub const SCHEDULE_SEED: &[u8] = b"schedule";
pub const VAULT_SEED: &[u8] = b"vault";
pub const MONTH_RECEIPT_SEED: &[u8] = b"month_receipt";

/// Max destinations stored in the allow-list PDA.
pub const MAX_ALLOWED_WALLETS: usize = 64;

/// Max vesting entries stored in the schedule PDA.
pub const MAX_SCHEDULE_EVENTS: usize = 180;

/// Max entries sharing one month. Every entry needs its destination token
/// account in the `withdraw` transaction, and the returned disbursement list
/// has to fit in return data.
pub const MAX_EVENTS_PER_MONTH: usize = 20;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one vesting period unless `initialize` overrides it.
pub const DEFAULT_MONTH_DURATION: i64 = 28 * SECONDS_PER_DAY;
