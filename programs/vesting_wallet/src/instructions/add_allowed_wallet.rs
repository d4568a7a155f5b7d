use anchor_lang::prelude::*;

use crate::constants::{ALLOW_LIST_SEED, WALLET_CONFIG_SEED};
use crate::state::{AllowList, WalletConfig};

pub fn add_allowed_wallet(ctx: Context<AddAllowedWallet>, wallet: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let allow_list = &mut ctx.accounts.allow_list;
    if !allow_list.add(&ctx.accounts.wallet_config, &admin, wallet)? {
        // Already present; nothing to record.
        return Ok(());
    }

    emit!(AllowedWalletAdded {
        wallet,
        count: allow_list.wallets.len() as u16,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddAllowedWallet<'info> {
    #[account(seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        mut,
        seeds = [ALLOW_LIST_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub allow_list: Box<Account<'info, AllowList>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllowedWalletAdded {
    pub wallet: Pubkey,
    pub count: u16,
}
