use anchor_lang::prelude::*;

use crate::{state::RegistryInitialized, InitRegistry};

/// Creates an empty ballot registry owned by the payer.
///
/// # Arguments
/// * `registry_id` - Distinguishes this registry from others created by the same authority
pub fn init_registry(ctx: Context<InitRegistry>, registry_id: u64) -> Result<()> {
    msg!("Initializing ballot registry {}", registry_id);

    let authority = ctx.accounts.payer.key();
    ctx.accounts
        .registry
        .initialize(authority, registry_id, ctx.bumps.registry);

    emit!(RegistryInitialized {
        registry: ctx.accounts.registry.key(),
        authority,
        registry_id,
    });

    Ok(())
}
