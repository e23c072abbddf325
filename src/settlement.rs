use crate::api::*;
use crate::db::{WagerOutcome, DB};
use crate::error::{LedgerError, LedgerResult};
use crate::money::{from_cents, to_cents};
use crate::odds;
use crate::settings::SettlementSettings;
use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::time::sleep;

/// Resolves props and pays out their wagers.
///
/// Resolution first freezes the prop, so no wager can be added afterwards,
/// and only then drains the active wagers. Every wager is settled in its own
/// step which is safe to repeat: a wager leaves `active` exactly once.
pub struct SettlementEngine {
    db: Arc<Box<dyn DB + Send + Sync>>,
    policy: SettlementSettings,
}

/// Outcome of `wager` when `winning_choice` won.
pub fn outcome_for(wager: &Wager, winning_choice: &str) -> LedgerResult<WagerOutcome> {
    if wager.choice != winning_choice {
        return Ok(WagerOutcome::Loss);
    }
    let payout = odds::payout(wager.stake, wager.odds)?;
    Ok(WagerOutcome::Win {
        payout: to_cents(payout)?,
    })
}

impl SettlementEngine {
    pub fn new(db: Arc<Box<dyn DB + Send + Sync>>, policy: SettlementSettings) -> Self {
        Self { db, policy }
    }
    pub async fn resolve(
        &self,
        prop: RowId,
        winning_choice: &str,
        requester: &str,
    ) -> LedgerResult<SettlementReport> {
        let current = self.db.get_prop(prop).await?;
        self.check_host(current.party, requester).await?;
        // a concurrent resolve loses here and pays nothing
        let resolved = self.db.mark_resolved(prop, winning_choice).await?;
        debug!(
            "Resolved prop {} of party {} to {}",
            prop, resolved.party, winning_choice
        );
        self.drain(&resolved).await
    }
    /// Settles whatever is still active on an already resolved prop.
    pub async fn resettle(&self, prop: RowId, requester: &str) -> LedgerResult<SettlementReport> {
        let current = self.db.get_prop(prop).await?;
        self.check_host(current.party, requester).await?;
        if !current.is_resolved() {
            return Err(LedgerError::PropNotResolved(prop));
        }
        debug!("Resettling prop {}", prop);
        self.drain(&current).await
    }
    async fn check_host(&self, party: RowId, requester: &str) -> LedgerResult<()> {
        let party = self.db.get_party(party).await?;
        if party.host != requester {
            return Err(LedgerError::NotHost(party.id));
        }
        Ok(())
    }
    async fn drain(&self, prop: &Prop) -> LedgerResult<SettlementReport> {
        let winning_choice = prop
            .winning_choice
            .clone()
            .ok_or(LedgerError::PropNotResolved(prop.id))?;
        let mut report = SettlementReport {
            prop: prop.id,
            winning_choice: winning_choice.clone(),
            winners: 0,
            losers: 0,
            total_paid_out: Decimal::ZERO,
            unsettled: vec![],
        };
        let mut given_up = HashSet::new();
        // Listing again until nothing is left catches wagers that committed
        // right before the freeze but weren't visible to the first listing.
        loop {
            let pending: Vec<Wager> = self
                .db
                .list_active_wagers(prop.id)
                .await?
                .into_iter()
                .filter(|wager| !given_up.contains(&wager.id))
                .collect();
            if pending.is_empty() {
                break;
            }
            for wager in pending {
                match self.settle_with_retry(&wager, &winning_choice).await {
                    Ok(Some(WagerOutcome::Win { payout })) => {
                        report.winners += 1;
                        report.total_paid_out += from_cents(payout);
                    }
                    Ok(Some(WagerOutcome::Loss)) => report.losers += 1,
                    // settled by someone else in the meantime
                    Ok(None) => {}
                    Err(e) => {
                        error!("Giving up on settling wager {}: {}", wager.id, e);
                        given_up.insert(wager.id);
                        report.unsettled.push(wager.id);
                    }
                }
            }
        }
        debug!(
            "Settled prop {}: {} winners, {} losers, {} paid out, {} unsettled",
            prop.id,
            report.winners,
            report.losers,
            report.total_paid_out,
            report.unsettled.len()
        );
        Ok(report)
    }
    async fn settle_with_retry(
        &self,
        wager: &Wager,
        winning_choice: &str,
    ) -> LedgerResult<Option<WagerOutcome>> {
        let outcome = outcome_for(wager, winning_choice)?;
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.db.settle_wager(wager, outcome).await {
                Ok(true) => return Ok(Some(outcome)),
                Ok(false) => return Ok(None),
                Err(e) if attempt < max_attempts => {
                    warn!(
                        "Settling wager {} failed (attempt {}/{}): {}",
                        wager.id, attempt, max_attempts, e
                    );
                    sleep(self.policy.backoff(attempt)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
