#![no_std]

multiversx_sc::imports!();

pub mod pool_proxy;
pub mod registry_proxy;

// ============================================================
// Constants
// ============================================================

/// Lowest tier threshold a new pool may use: 0.001 EGLD. Same value the
/// funding pool checks in its own `init`.
pub const MIN_TIER_THRESHOLD: u64 = 1_000_000_000_000_000;

pub const ERR_BELOW_MINIMUM_THRESHOLD: &str = "Tier threshold is below the minimum";
pub const ERR_NOT_A_CONTRACT: &str = "Pool template must be a smart contract";

// ============================================================
// Contract
// ============================================================

/// Deploys funding pools by cloning the code of a template pool and keeps
/// every created pool address, in creation order, for discovery.
#[multiversx_sc::contract]
pub trait PoolRegistry {
    #[init]
    fn init(&self, pool_template: ManagedAddress) {
        self.set_template(pool_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: create
    // The caller becomes the administrator of the new pool.
    // ========================================================

    #[endpoint(create)]
    fn create(&self, tier_threshold: BigUint) -> ManagedAddress {
        require!(
            tier_threshold >= MIN_TIER_THRESHOLD,
            ERR_BELOW_MINIMUM_THRESHOLD
        );

        let caller = self.blockchain().get_caller();
        let template = self.pool_template().get();
        let code_metadata = self.blockchain().get_code_metadata(&template);

        let pool_address = self
            .tx()
            .typed(pool_proxy::FundingPoolProxy)
            .init(&tier_threshold, &caller)
            .from_source(template)
            .code_metadata(code_metadata)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.pools().push(&pool_address);
        self.pool_created_event(&pool_address, &caller, &tier_threshold);

        pool_address
    }

    #[only_owner]
    #[endpoint(setPoolTemplate)]
    fn set_pool_template(&self, pool_template: ManagedAddress) {
        self.set_template(pool_template);
    }

    fn set_template(&self, pool_template: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&pool_template),
            ERR_NOT_A_CONTRACT
        );

        self.pool_template().set(&pool_template);
        self.pool_template_updated_event(&pool_template);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDeployedPools)]
    fn get_deployed_pools(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for pool in self.pools().iter() {
            result.push(pool);
        }
        result
    }

    #[view(getPools)]
    fn get_pools(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.pools().len() as u64;
        let start = core::cmp::min(from, total) as usize;
        let end = core::cmp::min(from.saturating_add(count), total) as usize;

        // VecMapper is 1-based.
        for index in start..end {
            result.push(self.pools().get(index + 1));
        }
        result
    }

    #[view(getPoolCount)]
    fn get_pool_count(&self) -> u64 {
        self.pools().len() as u64
    }

    #[view(getMinimumThreshold)]
    fn get_minimum_threshold(&self) -> BigUint {
        BigUint::from(MIN_TIER_THRESHOLD)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("poolCreated")]
    fn pool_created_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] administrator: &ManagedAddress,
        tier_threshold: &BigUint,
    );

    #[event("poolTemplateUpdated")]
    fn pool_template_updated_event(&self, #[indexed] pool_template: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPoolTemplate)]
    #[storage_mapper("poolTemplate")]
    fn pool_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pools")]
    fn pools(&self) -> VecMapper<ManagedAddress>;
}
