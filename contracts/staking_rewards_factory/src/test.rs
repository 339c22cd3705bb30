#![allow(clippy::unwrap_used)]

extern crate std;

use crate::{Error, Role, StakingRewardsFactory, StakingRewardsFactoryClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, Symbol, TryFromVal, Val,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

const DECIMALS: i128 = 10_000_000;
const START: u64 = 1_700_000_000;
const GENESIS: u64 = START + 3_600;
const DAY: u64 = 86_400;

struct Factory<'a> {
    env: Env,
    factory: StakingRewardsFactoryClient<'a>,
    factory_id: Address,
    admin: Address,
    reward_token: token::Client<'a>,
    reward_admin: token::StellarAssetClient<'a>,
    issuer: Address,
}

fn tokens(n: i128) -> i128 {
    n * DECIMALS
}

fn setup<'a>() -> Factory<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = START);

    let admin = Address::generate(&env);
    let issuer = Address::generate(&env);
    let reward_id = env.register_stellar_asset_contract_v2(issuer.clone()).address();

    let factory_id = env.register_contract(None, StakingRewardsFactory);
    let factory = StakingRewardsFactoryClient::new(&env, &factory_id);
    factory.initialize(&admin, &reward_id, &GENESIS);

    Factory {
        reward_token: token::Client::new(&env, &reward_id),
        reward_admin: token::StellarAssetClient::new(&env, &reward_id),
        env,
        factory,
        factory_id,
        admin,
        issuer,
    }
}

impl Factory<'_> {
    fn new_staking_token(&self) -> Address {
        self.env
            .register_stellar_asset_contract_v2(self.issuer.clone())
            .address()
    }

    fn deploy(&self, staking_token: &Address, reward: i128, duration: u64) -> Address {
        let pool = self.env.register_contract(None, StakingRewardsContract);
        self.factory
            .deploy(&self.admin, staking_token, &reward, &duration, &pool);
        pool
    }

    fn set_time(&self, at: u64) {
        self.env.ledger().set_timestamp(at);
    }

    fn last_topic(&self) -> Symbol {
        let (_, topics, _) = self.env.events().all().last().unwrap();
        let first: Val = topics.get(0).unwrap();
        Symbol::try_from_val(&self.env, &first).unwrap()
    }
}

#[test]
fn initialize_once() {
    let f = setup();
    let config = f.factory.get_config();
    assert_eq!(config.rewards_token, f.reward_token.address);
    assert_eq!(config.staking_rewards_genesis, GENESIS);
    assert!(f.factory.has_role(&Role::DefaultAdmin, &f.admin));
    assert_eq!(
        f.factory.try_initialize(&f.admin, &f.reward_token.address, &GENESIS),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn deploy_configures_pool() {
    let f = setup();
    let staking_token = f.new_staking_token();
    let pool = f.deploy(&staking_token, 50, 8_000);
    assert_eq!(f.last_topic(), symbol_short!("PoolNew"));

    let info = f.factory.staking_rewards_info(&staking_token);
    assert_eq!(info.staking_rewards, pool);
    assert_eq!(info.reward_amount, 50);
    assert_eq!(info.duration, 8_000);
    assert_eq!(f.factory.staking_tokens().len(), 1);

    let pool_client = StakingRewardsContractClient::new(&f.env, &pool);
    let pool_config = pool_client.get_config();
    assert_eq!(pool_config.rewards_distribution, f.factory_id);
    assert_eq!(pool_config.rewards_token, f.reward_token.address);
    assert_eq!(pool_config.staking_token, staking_token);
    assert_eq!(pool_client.rewards_duration(), 8_000);
}

#[test]
fn deploy_rejects_duplicates_and_bad_terms() {
    let f = setup();
    let staking_token = f.new_staking_token();
    f.deploy(&staking_token, 50, 8_000);

    let other_pool = f.env.register_contract(None, StakingRewardsContract);
    assert_eq!(
        f.factory
            .try_deploy(&f.admin, &staking_token, &50, &8_000, &other_pool),
        Err(Ok(Error::PoolAlreadyExists))
    );

    let fresh = f.new_staking_token();
    assert_eq!(
        f.factory.try_deploy(&f.admin, &fresh, &-1, &8_000, &other_pool),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        f.factory.try_deploy(&f.admin, &fresh, &50, &0, &other_pool),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn deploy_requires_admin() {
    let f = setup();
    let outsider = Address::generate(&f.env);
    let pool = f.env.register_contract(None, StakingRewardsContract);
    let staking_token = f.new_staking_token();
    assert_eq!(
        f.factory
            .try_deploy(&outsider, &staking_token, &50, &8_000, &pool),
        Err(Ok(Error::AccessDenied))
    );
}

#[test]
fn deploy_fails_for_initialized_pool() {
    let f = setup();
    let first = f.new_staking_token();
    let pool = f.deploy(&first, 50, 8_000);

    let second = f.new_staking_token();
    assert_eq!(
        f.factory.try_deploy(&f.admin, &second, &50, &8_000, &pool),
        Err(Ok(Error::PoolInitFailed))
    );
    assert!(f.factory.try_staking_rewards_info(&second).is_err());
}

#[test]
fn update_before_notify_is_reflected() {
    let f = setup();
    let staking_token = f.new_staking_token();
    let pool = f.deploy(&staking_token, 50, 8_000);

    f.factory.update(&f.admin, &staking_token, &80, &9_000);
    assert_eq!(f.last_topic(), symbol_short!("PoolUpd"));

    let info = f.factory.staking_rewards_info(&staking_token);
    assert_eq!(info.reward_amount, 80);
    assert_eq!(info.duration, 9_000);
    assert_eq!(
        StakingRewardsContractClient::new(&f.env, &pool).rewards_duration(),
        9_000
    );
}

#[test]
fn update_blocked_while_period_runs() {
    let f = setup();
    let staking_token = f.new_staking_token();
    f.deploy(&staking_token, tokens(100), 8_000);
    f.reward_admin.mint(&f.factory_id, &tokens(100));

    f.set_time(GENESIS);
    f.factory.notify_reward_amounts();
    assert_eq!(
        f.factory.try_update(&f.admin, &staking_token, &80, &9_000),
        Err(Ok(Error::PeriodAlreadyStarted))
    );

    f.set_time(GENESIS + 8_000);
    f.factory.update(&f.admin, &staking_token, &80, &9_000);

    let unknown = f.new_staking_token();
    assert_eq!(
        f.factory.try_update(&f.admin, &unknown, &80, &9_000),
        Err(Ok(Error::PoolNotFound))
    );
}

#[test]
fn notify_waits_for_genesis_and_pools() {
    let f = setup();
    f.set_time(GENESIS);
    assert_eq!(f.factory.try_notify_reward_amounts(), Err(Ok(Error::NoPools)));

    f.set_time(GENESIS - 1);
    let staking_token = f.new_staking_token();
    f.deploy(&staking_token, 50, 8_000);
    assert_eq!(f.factory.try_notify_reward_amounts(), Err(Ok(Error::NotReady)));
    assert_eq!(
        f.factory.try_notify_reward_amount(&staking_token),
        Err(Ok(Error::NotReady))
    );

    f.set_time(GENESIS);
    let unknown = f.new_staking_token();
    assert_eq!(
        f.factory.try_notify_reward_amount(&unknown),
        Err(Ok(Error::PoolNotFound))
    );
}

#[test]
fn notify_funds_every_pool_once() {
    let f = setup();
    let token_a = f.new_staking_token();
    let token_b = f.new_staking_token();
    let pool_a = f.deploy(&token_a, tokens(100), 10 * DAY);
    let pool_b = f.deploy(&token_b, tokens(40), 20 * DAY);
    f.reward_admin.mint(&f.factory_id, &tokens(140));

    f.set_time(GENESIS);
    f.factory.notify_reward_amounts();
    assert_eq!(f.last_topic(), symbol_short!("Notified"));

    assert_eq!(f.reward_token.balance(&pool_a), tokens(100));
    assert_eq!(f.reward_token.balance(&pool_b), tokens(40));
    assert_eq!(f.reward_token.balance(&f.factory_id), 0);

    let info = f.factory.staking_rewards_info(&token_a);
    assert_eq!(info.reward_amount, 0);
    assert_eq!(info.period_start, GENESIS);
    assert_eq!(info.period_finish, GENESIS + 10 * DAY);

    let a = StakingRewardsContractClient::new(&f.env, &pool_a);
    assert_eq!(a.reward_rate(), tokens(100) / (10 * DAY) as i128);
    assert_eq!(a.period_finish(), GENESIS + 10 * DAY);

    // Nothing pending the second time round.
    f.factory.notify_reward_amounts();
    assert_eq!(f.reward_token.balance(&pool_a), tokens(100));
}

#[test]
fn staker_earns_from_factory_funded_pool() {
    let f = setup();
    let staking_token = f.new_staking_token();
    let pool_id = f.deploy(&staking_token, tokens(1_000), 30 * DAY);
    f.reward_admin.mint(&f.factory_id, &tokens(1_000));
    let pool = StakingRewardsContractClient::new(&f.env, &pool_id);

    let staker = Address::generate(&f.env);
    token::StellarAssetClient::new(&f.env, &staking_token).mint(&staker, &tokens(2));
    pool.stake(&staker, &tokens(2));

    f.set_time(GENESIS);
    f.factory.notify_reward_amount(&staking_token);

    f.set_time(GENESIS + 10 * DAY);
    let paid = pool.get_reward(&staker);
    assert!(paid > 0);
    assert_eq!(paid, pool.reward_rate() * (10 * DAY) as i128);
    assert_eq!(pool.get_reward(&staker), 0);
}

#[test]
fn admin_cannot_renounce_when_alone() {
    let f = setup();
    assert_eq!(
        f.factory.try_revoke_role(&f.admin, &Role::DefaultAdmin, &f.admin),
        Err(Ok(Error::LastAdmin))
    );
    assert!(f.factory.has_role(&Role::DefaultAdmin, &f.admin));
}
