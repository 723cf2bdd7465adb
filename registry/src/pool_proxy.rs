use multiversx_sc::proxy_imports::*;

/// Deploy-only view of the funding pool contract.
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
