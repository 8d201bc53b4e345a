//! The constant-product pool.

use tracing::{error, info, warn};

use super::events::{EventLog, PoolEvent};
use super::pricing::{self, amounts_for_shares, quote_swap, shares_for_deposit};
use super::snapshot::PoolSnapshot;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, FeeTier, Liquidity, ParticipantId, Price, SwapDirection, SwapResult,
};
use crate::error::{DexError, Result};
use crate::math::{CheckedArithmetic, U256};
use crate::reserves::{ReserveDelta, ReserveLedger};
use crate::traits::AssetLedger;

/// A two-asset constant-product market.
///
/// The pool owns its [`ReserveLedger`] and both asset ledgers.  Every
/// mutating operation takes `&mut self`, so operations run one at a time
/// and an asset ledger, which never sees the pool, cannot re-enter one.
///
/// # Operation order
///
/// Each mutating call:
///
/// 1. validates input and computes the reserve delta from live reserves;
/// 2. checks the delta against the reserve ledger without applying it;
/// 3. checks balances and allowances on the asset ledgers;
/// 4. moves assets, undoing earlier legs if a later one fails;
/// 5. commits the delta and appends an event.
///
/// A call that returns `Err` leaves reserves, shares, asset balances and
/// allowances as they were.
///
/// # Examples
///
/// ```
/// use dex_core::assets::InMemoryAssetLedger;
/// use dex_core::config::PoolConfig;
/// use dex_core::domain::{Amount, ParticipantId};
/// use dex_core::pool::Pool;
/// use dex_core::traits::AssetLedger;
///
/// let alice = ParticipantId::from_bytes([1u8; 32]);
/// let config = PoolConfig::default();
/// let pool_account = config.pool_account();
///
/// let mut token_a = InMemoryAssetLedger::new("TKA");
/// let mut token_b = InMemoryAssetLedger::new("TKB");
/// token_a.mint(alice, Amount::new(1_000)).expect("mint");
/// token_b.mint(alice, Amount::new(1_000)).expect("mint");
/// token_a.approve(alice, pool_account, Amount::MAX).expect("approve");
/// token_b.approve(alice, pool_account, Amount::MAX).expect("approve");
///
/// let mut pool = Pool::new(config, token_a, token_b).expect("valid config");
/// let shares = pool.add_liquidity(alice, Amount::new(100), Amount::new(200)).expect("deposit");
/// assert_eq!(shares.get(), 141);
///
/// let out = pool.swap_a_for_b(alice, Amount::new(10)).expect("swap");
/// assert_eq!(out, Amount::new(18));
/// ```
#[derive(Debug, Clone)]
pub struct Pool<A: AssetLedger, B: AssetLedger> {
    config: PoolConfig,
    reserves: ReserveLedger,
    asset_a: A,
    asset_b: B,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
    events: EventLog,
}

/// Undo record for an asset pulled from a participant.
struct Pulled {
    asset: Asset,
    from: ParticipantId,
    amount: Amount,
    allowance: Amount,
}

impl<A: AssetLedger, B: AssetLedger> Pool<A, B> {
    /// Creates an empty pool over the two asset ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`] if `config` fails validation.
    pub fn new(config: PoolConfig, asset_a: A, asset_b: B) -> Result<Self> {
        config.validate()?;
        info!(
            fee = %config.fee_tier().basis_points(),
            pool_account = %config.pool_account(),
            "pool created"
        );
        Ok(Self {
            config,
            reserves: ReserveLedger::new(),
            asset_a,
            asset_b,
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
            events: EventLog::new(),
        })
    }

    // -- liquidity ----------------------------------------------------------

    /// Deposits `amount_a` of A and `amount_b` of B from `caller` and mints
    /// shares to them.
    ///
    /// Into an empty pool the deposit sets the price; otherwise shares are
    /// minted against the scarcer side and any excess on the other side is
    /// kept by the pool.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidAmount`] if either amount is zero, no share
    ///   would be minted, or `caller` is the pool account.
    /// - [`DexError::InsufficientAllowance`] / [`DexError::InsufficientBalance`]
    ///   if `caller` has not approved or does not hold the amounts.
    pub fn add_liquidity(
        &mut self,
        caller: ParticipantId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Liquidity> {
        self.ensure_external(caller)?;
        let shares = self.quote_add_liquidity(amount_a, amount_b)?;
        let delta = ReserveDelta::mint(caller, amount_a, amount_b, shares);
        self.reserves.validate_delta(&delta)?;

        self.ensure_pullable(Asset::A, caller, amount_a)?;
        self.ensure_pullable(Asset::B, caller, amount_b)?;

        let pulled_a = self.pull(Asset::A, caller, amount_a)?;
        if let Err(err) = self.pull(Asset::B, caller, amount_b) {
            self.undo_pull(pulled_a);
            return Err(err);
        }

        // Validated above against the same state.
        self.reserves.apply_delta(&delta)?;

        info!(participant = %caller, %amount_a, %amount_b, %shares, "liquidity added");
        self.events.push(PoolEvent::LiquidityAdded {
            participant: caller,
            amount_a,
            amount_b,
            shares,
        });
        Ok(shares)
    }

    /// Burns `shares` held by `caller` and pays out the proportional slice
    /// of both reserves.
    ///
    /// Redeeming the entire supply empties the pool exactly.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientBalance`] if `shares` is zero or exceeds
    ///   what `caller` holds.  Only the holder can redeem a balance.
    /// - [`DexError::InvalidAmount`] if the redemption would pay nothing or
    ///   `caller` is the pool account.
    pub fn remove_liquidity(
        &mut self,
        caller: ParticipantId,
        shares: Liquidity,
    ) -> Result<(Amount, Amount)> {
        self.ensure_external(caller)?;
        if shares.is_zero() {
            return Err(DexError::InsufficientBalance("shares must be positive"));
        }
        if shares > self.reserves.liquidity_of(&caller) {
            return Err(DexError::InsufficientBalance("shares exceed caller balance"));
        }
        let (amount_a, amount_b) = self.quote_remove_liquidity(shares)?;
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(DexError::InvalidAmount("redemption rounds to zero"));
        }
        let delta = ReserveDelta::burn(caller, amount_a, amount_b, shares);
        self.reserves.validate_delta(&delta)?;

        self.ensure_payable(Asset::A, amount_a)?;
        self.ensure_payable(Asset::B, amount_b)?;

        self.push(Asset::A, caller, amount_a)?;
        if let Err(err) = self.push(Asset::B, caller, amount_b) {
            self.undo_push(Asset::A, caller, amount_a);
            return Err(err);
        }

        self.reserves.apply_delta(&delta)?;

        info!(participant = %caller, %amount_a, %amount_b, %shares, "liquidity removed");
        self.events.push(PoolEvent::LiquidityRemoved {
            participant: caller,
            amount_a,
            amount_b,
            shares,
        });
        Ok((amount_a, amount_b))
    }

    /// Shares [`add_liquidity`](Self::add_liquidity) would mint right now.
    ///
    /// # Errors
    ///
    /// [`DexError::InvalidAmount`] if either amount is zero or no share
    /// would be minted.
    pub fn quote_add_liquidity(&self, amount_a: Amount, amount_b: Amount) -> Result<Liquidity> {
        shares_for_deposit(
            amount_a,
            amount_b,
            self.reserves.get_reserves(),
            self.reserves.total_liquidity(),
        )
    }

    /// Assets redeeming `shares` would pay right now, regardless of who
    /// holds them.
    ///
    /// # Errors
    ///
    /// [`DexError::InsufficientBalance`] if `shares` is zero or exceeds the
    /// total supply.
    pub fn quote_remove_liquidity(&self, shares: Liquidity) -> Result<(Amount, Amount)> {
        amounts_for_shares(
            shares,
            self.reserves.get_reserves(),
            self.reserves.total_liquidity(),
        )
    }

    // -- swaps --------------------------------------------------------------

    /// Sells `amount_in` of A for B.
    ///
    /// # Errors
    ///
    /// See [`swap_exact_in`](Self::swap_exact_in).
    pub fn swap_a_for_b(&mut self, caller: ParticipantId, amount_in: Amount) -> Result<Amount> {
        self.swap_exact_in(caller, SwapDirection::AToB, amount_in, None)
    }

    /// Sells `amount_in` of B for A.
    ///
    /// # Errors
    ///
    /// See [`swap_exact_in`](Self::swap_exact_in).
    pub fn swap_b_for_a(&mut self, caller: ParticipantId, amount_in: Amount) -> Result<Amount> {
        self.swap_exact_in(caller, SwapDirection::BToA, amount_in, None)
    }

    /// Sells exactly `amount_in` in `direction`, optionally refusing any
    /// output below `min_amount_out`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidAmount`] if `amount_in` is zero, the output
    ///   rounds to zero, or `caller` is the pool account.
    /// - [`DexError::EmptyPool`] if the pool has no reserves.
    /// - [`DexError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`DexError::InsufficientAllowance`] / [`DexError::InsufficientBalance`]
    ///   if `caller` cannot pay `amount_in`.
    pub fn swap_exact_in(
        &mut self,
        caller: ParticipantId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Option<Amount>,
    ) -> Result<Amount> {
        self.ensure_external(caller)?;
        let quote = self.quote_swap(direction, amount_in)?;
        let amount_out = quote.amount_out();
        if let Some(min) = min_amount_out {
            if amount_out < min {
                return Err(DexError::SlippageExceeded);
            }
        }

        let delta = ReserveDelta::swap(direction, amount_in, amount_out);
        self.reserves.validate_delta(&delta)?;
        let (fees_a, fees_b) = self.fees_after(direction, quote.fee())?;

        let (asset_in, asset_out) = (direction.asset_in(), direction.asset_out());
        self.ensure_pullable(asset_in, caller, amount_in)?;
        self.ensure_payable(asset_out, amount_out)?;

        let pulled = self.pull(asset_in, caller, amount_in)?;
        if let Err(err) = self.push(asset_out, caller, amount_out) {
            self.undo_pull(pulled);
            return Err(err);
        }

        self.reserves.apply_delta(&delta)?;
        self.accumulated_fees_a = fees_a;
        self.accumulated_fees_b = fees_b;

        info!(participant = %caller, %direction, %amount_in, %amount_out, "swap");
        self.events.push(PoolEvent::Swap {
            participant: caller,
            direction,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    /// Prices a swap against the live reserves without executing it.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidAmount`] if `amount_in` is zero or the output
    ///   rounds to zero.
    /// - [`DexError::EmptyPool`] if the pool has no reserves.
    pub fn quote_swap(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult> {
        quote_swap(direction, amount_in, self.reserves.get_reserves(), self.fee_tier())
    }

    /// Constant-product output for arbitrary reserves at this pool's fee.
    ///
    /// # Errors
    ///
    /// See [`get_amount_out`](crate::pool::get_amount_out).
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.fee_tier())
    }

    // -- queries ------------------------------------------------------------

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn get_reserves(&self) -> (Amount, Amount) {
        self.reserves.get_reserves()
    }

    /// Marginal price of A in B, 18-decimal fixed point; zero when empty.
    #[must_use]
    pub const fn get_price(&self) -> Price {
        self.reserves.get_price()
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.reserves.total_liquidity()
    }

    /// Shares held by `participant`.
    #[must_use]
    pub fn liquidity_of(&self, participant: &ParticipantId) -> Liquidity {
        self.reserves.liquidity_of(participant)
    }

    /// `reserve_a × reserve_b`, exact.
    #[must_use]
    pub const fn constant_product(&self) -> U256 {
        self.reserves.constant_product()
    }

    /// Lifetime fees retained on each input asset, `(A, B)`.
    #[must_use]
    pub const fn accumulated_fees(&self) -> (Amount, Amount) {
        (self.accumulated_fees_a, self.accumulated_fees_b)
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }

    /// The configuration the pool was created with.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Read access to the reserve ledger.
    #[must_use]
    pub const fn reserves(&self) -> &ReserveLedger {
        &self.reserves
    }

    /// Copy of the public state.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        let (reserve_a, reserve_b) = self.reserves.get_reserves();
        PoolSnapshot {
            reserve_a,
            reserve_b,
            total_liquidity: self.reserves.total_liquidity(),
            price: self.reserves.get_price(),
            fee_tier: self.config.fee_tier(),
            accumulated_fees_a: self.accumulated_fees_a,
            accumulated_fees_b: self.accumulated_fees_b,
        }
    }

    // -- events -------------------------------------------------------------

    /// Events committed since creation or the last drain.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        self.events.as_slice()
    }

    /// Takes every buffered event.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        self.events.drain()
    }

    // -- asset ledgers ------------------------------------------------------

    /// Ledger of asset A.
    pub const fn asset_a(&self) -> &A {
        &self.asset_a
    }

    /// Ledger of asset B.
    pub const fn asset_b(&self) -> &B {
        &self.asset_b
    }

    /// Mutable ledger of asset A, for minting and approvals.
    ///
    /// Moving the pool account's own balance through this bypasses the
    /// reserve ledger.
    pub fn asset_a_mut(&mut self) -> &mut A {
        &mut self.asset_a
    }

    /// Mutable ledger of asset B.  See [`asset_a_mut`](Self::asset_a_mut).
    pub fn asset_b_mut(&mut self) -> &mut B {
        &mut self.asset_b
    }

    /// Dismantles the pool, returning both ledgers.
    pub fn into_ledgers(self) -> (A, B) {
        (self.asset_a, self.asset_b)
    }

    // -- internals ----------------------------------------------------------

    fn ledger(&self, asset: Asset) -> &dyn AssetLedger {
        match asset {
            Asset::A => &self.asset_a,
            Asset::B => &self.asset_b,
        }
    }

    fn ledger_mut(&mut self, asset: Asset) -> &mut dyn AssetLedger {
        match asset {
            Asset::A => &mut self.asset_a,
            Asset::B => &mut self.asset_b,
        }
    }

    fn fees_after(&self, direction: SwapDirection, fee: Amount) -> Result<(Amount, Amount)> {
        match direction.asset_in() {
            Asset::A => Ok((self.accumulated_fees_a.safe_add(&fee)?, self.accumulated_fees_b)),
            Asset::B => Ok((self.accumulated_fees_a, self.accumulated_fees_b.safe_add(&fee)?)),
        }
    }

    fn ensure_external(&self, caller: ParticipantId) -> Result<()> {
        if caller == self.config.pool_account() {
            return Err(DexError::InvalidAmount("caller is the pool account"));
        }
        Ok(())
    }

    fn ensure_pullable(&self, asset: Asset, from: ParticipantId, amount: Amount) -> Result<()> {
        let pool_account = self.config.pool_account();
        let ledger = self.ledger(asset);
        if ledger.allowance(&from, &pool_account) < amount {
            return Err(DexError::InsufficientAllowance("pool not approved for amount"));
        }
        if ledger.balance_of(&from) < amount {
            return Err(DexError::InsufficientBalance("caller holds less than amount"));
        }
        Ok(())
    }

    fn ensure_payable(&self, asset: Asset, amount: Amount) -> Result<()> {
        let pool_account = self.config.pool_account();
        if self.ledger(asset).balance_of(&pool_account) < amount {
            warn!(%asset, %amount, "pool account holds less than its reserve");
            return Err(DexError::AccountingError("pool account below reserve"));
        }
        Ok(())
    }

    fn pull(&mut self, asset: Asset, from: ParticipantId, amount: Amount) -> Result<Pulled> {
        let pool_account = self.config.pool_account();
        let ledger = self.ledger_mut(asset);
        let allowance = ledger.allowance(&from, &pool_account);
        ledger.transfer_from(pool_account, from, pool_account, amount)?;
        Ok(Pulled {
            asset,
            from,
            amount,
            allowance,
        })
    }

    fn push(&mut self, asset: Asset, to: ParticipantId, amount: Amount) -> Result<()> {
        let pool_account = self.config.pool_account();
        self.ledger_mut(asset).transfer(pool_account, to, amount)
    }

    /// Takes back a payout made earlier in the same operation.
    fn undo_push(&mut self, asset: Asset, to: ParticipantId, amount: Amount) {
        let pool_account = self.config.pool_account();
        match self.ledger_mut(asset).transfer(to, pool_account, amount) {
            Ok(()) => warn!(%asset, participant = %to, %amount, "payout rolled back"),
            Err(err) => error!(%asset, participant = %to, error = %err, "payout rollback failed"),
        }
    }

    /// Returns pulled funds and restores the allowance they consumed.
    fn undo_pull(&mut self, pulled: Pulled) {
        let pool_account = self.config.pool_account();
        let ledger = self.ledger_mut(pulled.asset);
        let restored = ledger
            .transfer(pool_account, pulled.from, pulled.amount)
            .and_then(|()| ledger.approve(pulled.from, pool_account, pulled.allowance));
        match restored {
            Ok(()) => warn!(asset = %pulled.asset, participant = %pulled.from, amount = %pulled.amount, "transfer rolled back"),
            Err(err) => error!(asset = %pulled.asset, participant = %pulled.from, error = %err, "rollback failed"),
        }
    }
}
