use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::TRANSFER_AUTHORITY_SEED, errors::VoluntarioError, state::Allowance};

/// Balance of a token account and the allowance one spender holds over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPosition {
    pub balance: u64,
    pub allowance: u64,
}

impl TokenPosition {
    /// Position of `tokens` with no spender in view.
    pub fn of(tokens: &TokenAccount) -> Self {
        Self {
            balance: tokens.amount,
            allowance: 0,
        }
    }

    pub fn with_allowance(self, allowance: &Allowance) -> Self {
        Self {
            allowance: allowance.amount,
            ..self
        }
    }

    pub fn ensure_balance(&self, amount: u64) -> Result<()> {
        require!(
            self.balance >= amount,
            VoluntarioError::InsufficientBalance
        );
        Ok(())
    }

    pub fn ensure_allowance(&self, amount: u64) -> Result<()> {
        if self.allowance < amount {
            msg!("Allowance is {}, needs {}", self.allowance, amount);
            return err!(VoluntarioError::InsufficientAllowance);
        }
        Ok(())
    }
}

/// Accounts of a spend made on an allowance. The transfer authority is the SPL
/// delegate of `from` and signs the transfer.
pub(crate) struct DelegatedTransfer<'a, 'info> {
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub from: &'a InterfaceAccount<'info, TokenAccount>,
    pub to: &'a InterfaceAccount<'info, TokenAccount>,
    pub transfer_authority: &'a UncheckedAccount<'info>,
    pub transfer_authority_bump: u8,
}

impl DelegatedTransfer<'_, '_> {
    pub fn execute(&self, amount: u64) -> Result<()> {
        let signer: &[&[&[u8]]] = &[&[TRANSFER_AUTHORITY_SEED, &[self.transfer_authority_bump]]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.from.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.to.to_account_info(),
                    authority: self.transfer_authority.to_account_info(),
                },
                signer,
            ),
            amount,
            self.mint.decimals,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn code_of(err: Error) -> u32 {
        match err {
            Error::AnchorError(err) => err.error_code_number,
            Error::ProgramError(err) => panic!("unexpected program error: {err:?}"),
        }
    }

    fn assert_fails(result: Result<()>, expected: VoluntarioError) {
        let err = result.expect_err("check should have failed");
        assert_eq!(code_of(err), code_of(expected.into()));
    }

    const UNIT: u64 = 1_000_000_000;

    fn allowance(amount: u64) -> Allowance {
        Allowance {
            owner: Pubkey::new_unique(),
            spender: Pubkey::new_unique(),
            amount,
            bump: 0,
        }
    }

    #[test]
    fn position_without_a_spender_has_no_allowance() {
        let position = TokenPosition {
            balance: 1000 * UNIT,
            allowance: 0,
        };
        assert!(position.ensure_allowance(0).is_ok());
        assert_fails(
            position.ensure_allowance(1),
            VoluntarioError::InsufficientAllowance,
        );

        let approved = position.with_allowance(&allowance(50 * UNIT));
        assert_eq!(approved.allowance, 50 * UNIT);
        assert_eq!(approved.balance, 1000 * UNIT);
    }

    #[test]
    fn short_allowance_fails_even_with_enough_balance() {
        let position = TokenPosition {
            balance: 1000 * UNIT,
            allowance: 50 * UNIT,
        };
        assert!(position.ensure_balance(100 * UNIT).is_ok());
        assert_fails(
            position.ensure_allowance(100 * UNIT),
            VoluntarioError::InsufficientAllowance,
        );

        let raised = position.with_allowance(&allowance(100 * UNIT));
        assert!(raised.ensure_allowance(100 * UNIT).is_ok());
    }

    #[test]
    fn short_balance_fails_even_with_enough_allowance() {
        let position = TokenPosition {
            balance: 0,
            allowance: 100 * UNIT,
        };
        assert!(position.ensure_allowance(100 * UNIT).is_ok());
        assert_fails(
            position.ensure_balance(100 * UNIT),
            VoluntarioError::InsufficientBalance,
        );
    }

    #[test]
    fn exact_amounts_pass() {
        let position = TokenPosition {
            balance: 100,
            allowance: 100,
        };
        assert!(position.ensure_balance(100).is_ok());
        assert!(position.ensure_allowance(100).is_ok());
        assert!(position.ensure_balance(0).is_ok());
    }
}
