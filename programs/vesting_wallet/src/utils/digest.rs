//! Commitment to the frozen schedule, recorded at lock time so clients can
//! check the list they read back against what was locked.

use bytemuck::{Pod, Zeroable};

use crate::state::ScheduleEvent;

const DOMAIN: &[u8] = b"vesting_wallet:schedule:v1";

/// Fixed-layout encoding of one entry. No padding: 8 + 8 + 32 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct DigestLeaf {
    month: u64,
    amount: u64,
    destination: [u8; 32],
}

impl From<&ScheduleEvent> for DigestLeaf {
    fn from(e: &ScheduleEvent) -> Self {
        Self {
            month: u64::from(e.month).to_le(),
            amount: e.amount.to_le(),
            destination: e.destination.to_bytes(),
        }
    }
}

/// Order-sensitive digest of `events`.
pub fn schedule_digest(events: &[ScheduleEvent]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN);
    hasher.update(&(events.len() as u64).to_le_bytes());
    for e in events {
        hasher.update(bytemuck::bytes_of(&DigestLeaf::from(e)));
    }
    *hasher.finalize().as_bytes()
}
