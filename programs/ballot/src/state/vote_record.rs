use anchor_lang::prelude::*;

/// Marks that `voter` has voted on `ballot`. Never cleared once set.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct VoteRecord {
    /// PDA bump seed
    pub bump: u8,
    /// The ballot this vote belongs to
    pub ballot: Pubkey,
    pub voter: Pubkey,
    pub has_voted: bool,
}

impl VoteRecord {
    pub fn mark(&mut self, ballot: Pubkey, voter: Pubkey) {
        self.ballot = ballot;
        self.voter = voter;
        self.has_voted = true;
    }

    pub fn is_for(&self, ballot: Pubkey, voter: Pubkey) -> bool {
        self.has_voted && self.ballot == ballot && self.voter == voter
    }

    /// Decodes a record from a possibly uninitialized PDA.
    ///
    /// An empty account or one not owned by this program means the voter
    /// never voted.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let record = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(record))
    }
}
