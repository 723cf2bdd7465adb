#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod funding_pool_proxy;
pub mod tier;
pub mod types;

use errors::*;
use tier::ContributorTier;
use types::{Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Lowest tier threshold a pool accepts: 0.001 EGLD.
pub const MIN_TIER_THRESHOLD: u64 = 1_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundingPool {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The registry deploys pools on behalf of its caller, so the
    /// administrator is passed explicitly instead of taken from the deployer.
    #[init]
    fn init(&self, tier_threshold: BigUint, administrator: ManagedAddress) {
        require!(
            tier_threshold >= MIN_TIER_THRESHOLD,
            ERR_BELOW_MINIMUM_THRESHOLD
        );

        self.tier_threshold().set(&tier_threshold);
        self.administrator().set(&administrator);
        self.total_approver_contributions().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Supporter below the threshold, approver at or above it.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_CONTRIBUTION);

        let prior = self.tier_of(&caller);
        let threshold = self.tier_threshold().get();
        let next = ContributorTier::after_contribution(prior.as_ref(), &amount, &threshold);

        let (was_approver, prior_weight) = match &prior {
            Some(tier) => (tier.is_approver(), tier.approver_weight()),
            None => (false, BigUint::zero()),
        };

        if next.is_approver() {
            self.total_approver_contributions().update(|total| {
                *total += next.total();
                *total -= &prior_weight;
            });

            if !was_approver {
                self.supporters().swap_remove(&caller);
                self.approvers().insert(caller.clone());
                self.approver_promoted_event(&caller, next.total());
            }
        } else {
            self.supporters().insert(caller.clone());
        }

        self.contributor_tier(&caller).set(&next);
        self.contribution_event(&caller, &amount, next.total());
    }

    // ========================================================
    // ENDPOINT: propose
    // Administrator only. Balance is checked at finalization, not here.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        description: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        self.require_administrator();

        let index = self.proposal_count().get();
        let proposal = Proposal::new(description, amount, recipient);

        self.proposals(index).set(&proposal);
        self.proposal_count().set(index + 1);

        self.proposal_created_event(index, &proposal.recipient, &proposal.amount);

        index
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per approver per proposal. Votes against only block
    // a second vote; they never reduce the approval count.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_index: u64, in_favor: bool) {
        let caller = self.blockchain().get_caller();
        require!(self.approvers().contains(&caller), ERR_NOT_QUALIFIED);

        let mut proposal = self.require_proposal(proposal_index);
        require!(!proposal.is_finalized(), ERR_ALREADY_FINALIZED);
        require!(
            !self.voted_by(proposal_index).contains(&caller),
            ERR_DUPLICATE_VOTE
        );

        if in_favor {
            proposal.approval_count += 1;
            self.proposals(proposal_index).set(&proposal);
        }
        self.voted_by(proposal_index).insert(caller.clone());

        self.vote_event(proposal_index, &caller, in_favor);
    }

    // ========================================================
    // ENDPOINT: finalize
    // Administrator only. Majority is measured against the approver
    // count at the moment of finalization.
    // ========================================================

    #[endpoint(finalize)]
    fn finalize(&self, proposal_index: u64) {
        self.require_administrator();

        let mut proposal = self.require_proposal(proposal_index);
        require!(!proposal.is_finalized(), ERR_ALREADY_FINALIZED);
        require!(
            proposal.has_majority(self.approver_count()),
            ERR_INSUFFICIENT_APPROVALS
        );
        require!(
            self.available_balance() >= proposal.amount,
            ERR_INSUFFICIENT_FUNDS
        );

        proposal.status = ProposalStatus::Finalized;
        self.proposals(proposal_index).set(&proposal);

        self.send().direct_egld(&proposal.recipient, &proposal.amount);
        self.proposal_finalized_event(proposal_index, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_administrator(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.administrator().get(), ERR_NOT_AUTHORIZED);
    }

    fn require_proposal(&self, proposal_index: u64) -> Proposal<Self::Api> {
        require!(
            proposal_index < self.proposal_count().get(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_index).get()
    }

    /// Missing record means the address never contributed.
    fn tier_of(&self, contributor: &ManagedAddress) -> Option<ContributorTier<Self::Api>> {
        let mapper = self.contributor_tier(contributor);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getAvailableBalance)]
    fn available_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getApproverCount)]
    fn approver_count(&self) -> u64 {
        self.approvers().len() as u64
    }

    #[view(getSupporterCount)]
    fn supporter_count(&self) -> u64 {
        self.supporters().len() as u64
    }

    #[view(getTier)]
    fn get_tier(&self, contributor: ManagedAddress) -> OptionalValue<ContributorTier<Self::Api>> {
        self.tier_of(&contributor).into()
    }

    #[view(getSupporterBalance)]
    fn get_supporter_balance(&self, contributor: ManagedAddress) -> BigUint {
        match self.tier_of(&contributor) {
            Some(ContributorTier::Supporter(total)) => total,
            _ => BigUint::zero(),
        }
    }

    #[view(getApproverBalance)]
    fn get_approver_balance(&self, contributor: ManagedAddress) -> BigUint {
        match self.tier_of(&contributor) {
            Some(ContributorTier::Approver(total)) => total,
            _ => BigUint::zero(),
        }
    }

    #[view(getContribution)]
    fn get_contribution(&self, contributor: ManagedAddress) -> BigUint {
        match self.tier_of(&contributor) {
            Some(tier) => tier.total().clone(),
            None => BigUint::zero(),
        }
    }

    #[view(isApprover)]
    fn is_approver(&self, contributor: ManagedAddress) -> bool {
        self.approvers().contains(&contributor)
    }

    #[view(getApprovers)]
    fn get_approvers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.approvers().len() as u64;
        let start = core::cmp::min(from, total) as usize;
        let end = core::cmp::min(from.saturating_add(count), total) as usize;

        for (idx, approver) in self.approvers().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(approver);
            }
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_index: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_index)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.proposal_count().get());

        for index in from..end {
            result.push(self.proposals(index).get());
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_index: u64, voter: ManagedAddress) -> bool {
        self.voted_by(proposal_index).contains(&voter)
    }

    /// Tier threshold, balance, proposal count, approver count, administrator.
    #[view(getSummary)]
    fn get_summary(&self) -> MultiValue5<BigUint, BigUint, u64, u64, ManagedAddress> {
        (
            self.tier_threshold().get(),
            self.available_balance(),
            self.proposal_count().get(),
            self.approver_count(),
            self.administrator().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_total: &BigUint,
    );

    #[event("approverPromoted")]
    fn approver_promoted_event(&self, #[indexed] contributor: &ManagedAddress, total: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] voter: &ManagedAddress,
        in_favor: bool,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getAdministrator)]
    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTierThreshold)]
    #[storage_mapper("tierThreshold")]
    fn tier_threshold(&self) -> SingleValueMapper<BigUint>;

    // ── Contributors ──

    #[storage_mapper("contributorTier")]
    fn contributor_tier(&self, contributor: &ManagedAddress) -> SingleValueMapper<ContributorTier<Self::Api>>;

    #[storage_mapper("supporters")]
    fn supporters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("approvers")]
    fn approvers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getTotalApproverContributions)]
    #[storage_mapper("totalApproverContributions")]
    fn total_approver_contributions(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_index: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votedBy")]
    fn voted_by(&self, proposal_index: u64) -> UnorderedSetMapper<ManagedAddress>;
}
