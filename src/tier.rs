multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Contributor Tier — one record per contributing address
// ============================================================

/// Standing of a contributor in the pool, carrying the cumulative amount
/// contributed so far.
///
/// The only legal transition is `Supporter -> Approver`. An approver never
/// becomes a supporter again, so the enum is never rebuilt from a lower
/// total than the one it already holds.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ContributorTier<M: ManagedTypeApi> {
    /// Cumulative contribution strictly below the tier threshold.
    Supporter(BigUint<M>),
    /// Cumulative contribution reached the tier threshold. Votes on proposals.
    Approver(BigUint<M>),
}

impl<M: ManagedTypeApi> ContributorTier<M> {
    /// Tier reached after adding `amount` to the `prior` standing.
    /// A missing prior record counts as a zero balance.
    pub fn after_contribution(
        prior: Option<&Self>,
        amount: &BigUint<M>,
        threshold: &BigUint<M>,
    ) -> Self {
        let (new_total, was_approver) = match prior {
            Some(ContributorTier::Supporter(total)) => (total + amount, false),
            Some(ContributorTier::Approver(total)) => (total + amount, true),
            None => (amount.clone(), false),
        };

        if was_approver || &new_total >= threshold {
            ContributorTier::Approver(new_total)
        } else {
            ContributorTier::Supporter(new_total)
        }
    }

    pub fn total(&self) -> &BigUint<M> {
        match self {
            ContributorTier::Supporter(total) | ContributorTier::Approver(total) => total,
        }
    }

    pub fn is_approver(&self) -> bool {
        matches!(self, ContributorTier::Approver(_))
    }

    /// Amount this record adds to the aggregate approver total (zero for supporters).
    pub fn approver_weight(&self) -> BigUint<M> {
        match self {
            ContributorTier::Approver(total) => total.clone(),
            ContributorTier::Supporter(_) => BigUint::zero(),
        }
    }
}
