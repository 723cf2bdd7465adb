multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes. Can be finalized once a strict majority approves.
    Open,
    /// Funds sent to the recipient. Terminal state.
    Finalized,
}

// ============================================================
// Proposal — a disbursement request authored by the administrator
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Affirmative votes only; votes against are tracked in the voter set.
    pub approval_count: u64,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(description: ManagedBuffer<M>, amount: BigUint<M>, recipient: ManagedAddress<M>) -> Self {
        Proposal {
            description,
            amount,
            recipient,
            approval_count: 0,
            status: ProposalStatus::Open,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.status == ProposalStatus::Finalized
    }

    /// Strict majority against the approver count at the time of the check:
    /// `approvals * 2 > approver_count`.
    pub fn has_majority(&self, approver_count: u64) -> bool {
        u128::from(self.approval_count) * 2 > u128::from(approver_count)
    }
}
