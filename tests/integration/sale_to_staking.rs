use crate::utils::constants::*;
use crate::utils::*;
use staking_rewards::StakingRewardsContractClient;
use token_sale::Error as SaleError;

#[test]
fn bought_tokens_are_released_then_staked_for_rewards() {
    let d = Deployment::new();
    let end_at = d.now() + 7 * DAY;
    d.sale.create_phase(
        &d.admin,
        &true,
        &tokens(10),
        &FIVE_USD,
        &end_at,
        &tokens(5_000),
        &HOUR,
    );

    let amount = tokens(25);
    let price = d.sale.quote(&amount);
    assert!(price > 0);
    let buyer = d.buyer(price);

    let id = d.sale.buy_token(&buyer, &amount, &price);
    assert_eq!(d.payment_token.balance(&d.treasury), price);
    assert_eq!(d.payment_token.balance(&buyer), 0);
    assert_eq!(d.sale_token.balance(&buyer), 0);
    assert_eq!(d.sale.try_release(&buyer, &id), Err(Ok(SaleError::NotYetUnlocked)));

    d.advance(2 * DAY);
    d.sale.release(&buyer, &id);
    assert_eq!(d.sale_token.balance(&buyer), amount);
    assert_eq!(d.sale_token.balance(&d.sale_id), MAX_SUPPLY - amount);

    let pool_id = d.deploy_sale_token_pool(tokens(1_000), 30 * DAY);
    let pool = StakingRewardsContractClient::new(&d.env, &pool_id);
    pool.stake(&buyer, &amount);
    assert_eq!(d.sale_token.balance(&buyer), 0);

    d.factory.notify_reward_amounts();
    let rate = pool.reward_rate();
    assert_eq!(rate, tokens(1_000) / (30 * DAY) as i128);

    d.advance(10 * DAY);
    let paid = pool.get_reward(&buyer);
    assert!(paid > 0);
    assert_eq!(paid, rate * (10 * DAY) as i128);
    assert_eq!(d.reward_token.balance(&buyer), paid);
    assert_eq!(pool.get_reward(&buyer), 0);

    pool.exit(&buyer);
    assert_eq!(d.sale_token.balance(&buyer), amount);
}

#[test]
fn zero_timelock_purchase_can_be_staked_immediately() {
    let d = Deployment::new();
    let end_at = d.now() + DAY;
    d.sale
        .create_phase(&d.admin, &true, &0, &FIVE_USD, &end_at, &tokens(100), &0);

    let amount = tokens(40);
    let buyer = d.buyer(d.sale.quote(&amount));
    let id = d.sale.buy_token(&buyer, &amount, &d.sale.quote(&amount));
    assert_eq!(d.sale_token.balance(&buyer), amount);
    assert!(d.sale.get_vesting(&id).unwrap().claimed);

    let pool_id = d.deploy_sale_token_pool(tokens(10), 10 * DAY);
    StakingRewardsContractClient::new(&d.env, &pool_id).stake(&buyer, &amount);
    assert_eq!(d.sale_token.balance(&pool_id), amount);
}

#[test]
fn expired_phase_blocks_sale_but_not_staking_of_released_tokens() {
    let d = Deployment::new();
    let end_at = d.now() + HOUR;
    d.sale
        .create_phase(&d.admin, &true, &0, &FIVE_USD, &end_at, &tokens(100), &HOUR);

    let amount = tokens(10);
    let quote = d.sale.quote(&amount);
    let buyer = d.buyer(quote * 2);
    let id = d.sale.buy_token(&buyer, &amount, &quote);

    d.advance(50 * DAY);
    assert_eq!(
        d.sale.try_buy_token(&buyer, &amount, &quote),
        Err(Ok(SaleError::PhaseExpired))
    );

    d.sale.release(&buyer, &id);
    let pool_id = d.deploy_sale_token_pool(tokens(10), 10 * DAY);
    let pool = StakingRewardsContractClient::new(&d.env, &pool_id);
    pool.stake(&buyer, &amount);
    assert_eq!(pool.balance_of(&buyer), amount);
}
