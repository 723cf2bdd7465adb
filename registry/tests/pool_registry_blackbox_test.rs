use funding_pool::funding_pool_proxy;
use multiversx_sc_scenario::imports::*;
use pool_registry::{
    registry_proxy, ERR_BELOW_MINIMUM_THRESHOLD, ERR_NOT_A_CONTRACT, MIN_TIER_THRESHOLD,
};

const REGISTRY_CODE_PATH: MxscPath = MxscPath::new("output/pool-registry.mxsc.json");
const POOL_CODE_PATH: MxscPath = MxscPath::new("../output/funding-pool.mxsc.json");

const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("pool-registry");
const POOL_TEMPLATE_ADDRESS: TestSCAddress = TestSCAddress::new("pool-template");
const POOL_ONE: TestSCAddress = TestSCAddress::new("pool-one");
const POOL_TWO: TestSCAddress = TestSCAddress::new("pool-two");

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");

const TIER_THRESHOLD: u64 = 2 * MIN_TIER_THRESHOLD;
const INITIAL_BALANCE: u64 = 10 * TIER_THRESHOLD;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(REGISTRY_CODE_PATH, pool_registry::ContractBuilder);
    blockchain.register_contract(POOL_CODE_PATH, funding_pool::ContractBuilder);
    blockchain
}

struct RegistryTestState {
    world: ScenarioWorld,
}

impl RegistryTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(0u64);
        world.account(ALICE).nonce(1).balance(INITIAL_BALANCE);
        world.account(BOB).nonce(1).balance(INITIAL_BALANCE);
        world.account(CAROL).nonce(1).balance(0u64);

        world
            .tx()
            .from(OWNER)
            .typed(funding_pool_proxy::FundingPoolProxy)
            .init(MIN_TIER_THRESHOLD, OWNER)
            .code(POOL_CODE_PATH)
            .new_address(POOL_TEMPLATE_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(registry_proxy::PoolRegistryProxy)
            .init(POOL_TEMPLATE_ADDRESS)
            .code(REGISTRY_CODE_PATH)
            .new_address(REGISTRY_ADDRESS)
            .run();

        world.new_address(REGISTRY_ADDRESS, 0, POOL_ONE);
        world.new_address(REGISTRY_ADDRESS, 1, POOL_TWO);

        Self { world }
    }

    fn create(&mut self, requester: TestAddress, tier_threshold: u64) -> Address {
        self.world
            .tx()
            .from(requester)
            .to(REGISTRY_ADDRESS)
            .typed(registry_proxy::PoolRegistryProxy)
            .create(tier_threshold)
            .returns(ReturnsResult)
            .run()
            .to_address()
    }

    fn check_pool_count(&mut self, expected: u64) {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(registry_proxy::PoolRegistryProxy)
            .get_pool_count()
            .returns(ExpectValue(expected))
            .run();
    }
}

#[test]
fn create_rejects_threshold_below_minimum() {
    let mut state = RegistryTestState::new();

    for threshold in [0u64, MIN_TIER_THRESHOLD / 10 * 9, MIN_TIER_THRESHOLD - 1] {
        state
            .world
            .tx()
            .from(ALICE)
            .to(REGISTRY_ADDRESS)
            .typed(registry_proxy::PoolRegistryProxy)
            .create(threshold)
            .returns(ExpectError(4, ERR_BELOW_MINIMUM_THRESHOLD))
            .run();
    }

    state.check_pool_count(0);
}

#[test]
fn create_deploys_a_pool_administered_by_the_caller() {
    let mut state = RegistryTestState::new();

    let pool = state.create(ALICE, TIER_THRESHOLD);
    assert_eq!(pool, POOL_ONE.to_address());

    let administrator = state
        .world
        .query()
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .administrator()
        .returns(ReturnsResult)
        .run();
    assert_eq!(administrator.to_address(), ALICE.to_address());

    state
        .world
        .query()
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .tier_threshold()
        .returns(ExpectValue(TIER_THRESHOLD))
        .run();
    state.check_pool_count(1);
}

#[test]
fn minimum_threshold_itself_is_accepted() {
    let mut state = RegistryTestState::new();

    state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .get_minimum_threshold()
        .returns(ExpectValue(MIN_TIER_THRESHOLD))
        .run();

    state.create(BOB, MIN_TIER_THRESHOLD);
    state.check_pool_count(1);
}

#[test]
fn deployed_pools_are_listed_in_creation_order() {
    let mut state = RegistryTestState::new();

    state.create(ALICE, TIER_THRESHOLD);
    state.create(BOB, 3 * MIN_TIER_THRESHOLD);

    let pools: Vec<Address> = state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .get_deployed_pools()
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .map(|pool| pool.to_address())
        .collect();
    assert_eq!(pools, vec![POOL_ONE.to_address(), POOL_TWO.to_address()]);

    let page: Vec<Address> = state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .get_pools(1u64, 10u64)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .map(|pool| pool.to_address())
        .collect();
    assert_eq!(page, vec![POOL_TWO.to_address()]);

    let administrator = state
        .world
        .query()
        .to(POOL_TWO)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .administrator()
        .returns(ReturnsResult)
        .run();
    assert_eq!(administrator.to_address(), BOB.to_address());
}

#[test]
fn registry_minimum_matches_the_pool_minimum() {
    assert_eq!(MIN_TIER_THRESHOLD, funding_pool::MIN_TIER_THRESHOLD);
}

#[test]
fn pool_pages_past_the_end_are_empty() {
    let mut state = RegistryTestState::new();

    state.create(ALICE, TIER_THRESHOLD);

    for (from, count) in [(1u64, 10u64), (1u64 << 32, 1), (u64::MAX, u64::MAX)] {
        let page = state
            .world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(registry_proxy::PoolRegistryProxy)
            .get_pools(from, count)
            .returns(ReturnsResult)
            .run();
        assert_eq!(page.into_iter().count(), 0);
    }
}

#[test]
fn registry_requires_a_contract_template() {
    let mut world = world();
    world.account(OWNER).nonce(1).balance(0u64);

    world
        .tx()
        .from(OWNER)
        .typed(registry_proxy::PoolRegistryProxy)
        .init(ALICE)
        .code(REGISTRY_CODE_PATH)
        .new_address(REGISTRY_ADDRESS)
        .returns(ExpectError(4, ERR_NOT_A_CONTRACT))
        .run();
}

#[test]
fn only_the_owner_can_replace_the_template() {
    let mut state = RegistryTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .set_pool_template(POOL_TEMPLATE_ADDRESS)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .set_pool_template(ALICE)
        .returns(ExpectError(4, ERR_NOT_A_CONTRACT))
        .run();

    let template = state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(registry_proxy::PoolRegistryProxy)
        .pool_template()
        .returns(ReturnsResult)
        .run();
    assert_eq!(template.to_address(), POOL_TEMPLATE_ADDRESS.to_address());
}

#[test]
fn pool_created_through_the_registry_runs_a_full_disbursement() {
    let mut state = RegistryTestState::new();

    state.create(ALICE, TIER_THRESHOLD);

    state
        .world
        .tx()
        .from(BOB)
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .contribute()
        .egld(TIER_THRESHOLD)
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .propose("Hire an accountant", MIN_TIER_THRESHOLD, CAROL)
        .run();

    state
        .world
        .tx()
        .from(BOB)
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .vote(0u64, true)
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(POOL_ONE)
        .typed(funding_pool_proxy::FundingPoolProxy)
        .finalize(0u64)
        .run();

    state.world.check_account(CAROL).balance(MIN_TIER_THRESHOLD);
    state
        .world
        .check_account(POOL_ONE)
        .balance(TIER_THRESHOLD - MIN_TIER_THRESHOLD);
}
