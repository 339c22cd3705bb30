use super::constants::*;
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};
use staking_rewards::StakingRewardsContract;
use staking_rewards_factory::{StakingRewardsFactory, StakingRewardsFactoryClient};
use token_sale::{SaleConfig, TokenSaleContract, TokenSaleContractClient};

#[contracttype]
enum FeedKey {
    Price,
}

/// Fixed-answer price source.
#[contract]
pub struct StaticPriceFeed;

#[contractimpl]
impl StaticPriceFeed {
    pub fn set_price(env: Env, price: i128) {
        env.storage().instance().set(&FeedKey::Price, &price);
    }

    pub fn latest_price(env: Env) -> i128 {
        env.storage().instance().get(&FeedKey::Price).unwrap_or(0)
    }
}

/// Sale, factory and the three token ledgers they move.
pub struct Deployment<'a> {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub sale: TokenSaleContractClient<'a>,
    pub sale_id: Address,
    pub factory: StakingRewardsFactoryClient<'a>,
    pub factory_id: Address,
    pub sale_token: token::Client<'a>,
    pub payment_token: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub reward_token: token::Client<'a>,
    pub reward_admin: token::StellarAssetClient<'a>,
}

impl<'a> Deployment<'a> {
    /// Everything initialized, sale funded with its full supply, factory
    /// genesis one hour from now.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = START);

        let admin = Address::generate(&env);
        let treasury = Address::generate(&env);
        let sale_token = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let payment_token = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let reward_token = env.register_stellar_asset_contract_v2(admin.clone()).address();

        let feed_id = env.register_contract(None, StaticPriceFeed);
        StaticPriceFeedClient::new(&env, &feed_id).set_price(&NATIVE_USD);

        let sale_id = env.register_contract(None, TokenSaleContract);
        let sale = TokenSaleContractClient::new(&env, &sale_id);
        sale.initialize(
            &admin,
            &SaleConfig {
                token: sale_token.clone(),
                payment_token: payment_token.clone(),
                treasury: treasury.clone(),
                price_source: feed_id,
                max_supply: MAX_SUPPLY,
            },
        );
        token::StellarAssetClient::new(&env, &sale_token).mint(&sale_id, &MAX_SUPPLY);

        let factory_id = env.register_contract(None, StakingRewardsFactory);
        let factory = StakingRewardsFactoryClient::new(&env, &factory_id);
        factory.initialize(&admin, &reward_token, &(START + HOUR));

        Deployment {
            sale_token: token::Client::new(&env, &sale_token),
            payment_token: token::Client::new(&env, &payment_token),
            payment_admin: token::StellarAssetClient::new(&env, &payment_token),
            reward_token: token::Client::new(&env, &reward_token),
            reward_admin: token::StellarAssetClient::new(&env, &reward_token),
            env,
            admin,
            treasury,
            sale,
            sale_id,
            factory,
            factory_id,
        }
    }

    pub fn buyer(&self, payment: i128) -> Address {
        let user = Address::generate(&self.env);
        self.payment_admin.mint(&user, &payment);
        user
    }

    /// Install a pool for the sale token through the factory.
    pub fn deploy_sale_token_pool(&self, reward: i128, duration: u64) -> Address {
        let pool = self.env.register_contract(None, StakingRewardsContract);
        self.factory.deploy(
            &self.admin,
            &self.sale_token.address,
            &reward,
            &duration,
            &pool,
        );
        self.reward_admin.mint(&self.factory_id, &reward);
        pool
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn advance(&self, secs: u64) {
        let now = self.now();
        self.env.ledger().set_timestamp(now + secs);
    }
}

pub fn tokens(n: i128) -> i128 {
    n * DECIMALS
}
