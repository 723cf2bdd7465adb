use multiversx_sc::proxy_imports::*;

use crate::tier::ContributorTier;
use crate::types::Proposal;

pub struct FundingPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FundingPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FundingPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FundingPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct FundingPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FundingPoolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        tier_threshold: Arg0,
        administrator: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&tier_threshold)
            .argument(&administrator)
            .original_result()
    }
}

impl<Env, From, To, Gas> FundingPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    /// Payable: the EGLD attached to the call is the contribution.
    pub fn contribute(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("contribute")
            .original_result()
    }

    pub fn propose<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        description: Arg0,
        amount: Arg1,
        recipient: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("propose")
            .argument(&description)
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        proposal_index: Arg0,
        in_favor: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_index)
            .argument(&in_favor)
            .original_result()
    }

    pub fn finalize<Arg0: ProxyArg<u64>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("finalize")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn available_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableBalance")
            .original_result()
    }

    pub fn approver_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApproverCount")
            .original_result()
    }

    pub fn supporter_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupporterCount")
            .original_result()
    }

    pub fn get_tier<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ContributorTier<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTier")
            .argument(&contributor)
            .original_result()
    }

    pub fn get_supporter_balance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupporterBalance")
            .argument(&contributor)
            .original_result()
    }

    pub fn get_approver_balance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApproverBalance")
            .argument(&contributor)
            .original_result()
    }

    pub fn get_contribution<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContribution")
            .argument(&contributor)
            .original_result()
    }

    pub fn is_approver<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isApprover")
            .argument(&contributor)
            .original_result()
    }

    pub fn get_approvers<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApprovers")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, Proposal<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_index: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_index)
            .argument(&voter)
            .original_result()
    }

    pub fn get_summary(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue5<BigUint<Env::Api>, BigUint<Env::Api>, u64, u64, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSummary")
            .original_result()
    }

    pub fn administrator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdministrator")
            .original_result()
    }

    pub fn tier_threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTierThreshold")
            .original_result()
    }

    pub fn total_approver_contributions(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalApproverContributions")
            .original_result()
    }

    pub fn proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }
}
