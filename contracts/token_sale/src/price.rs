use crate::errors::Error;
use soroban_sdk::{contractclient, Address, Env};

const BPS_DENOMINATOR: i128 = 10_000;

/// Anything that can quote the native currency in the fiat unit phases are
/// priced in.
#[contractclient(name = "PriceSourceClient")]
pub trait PriceSource {
    fn latest_price(env: Env) -> i128;
}

/// Reads the feed once. A trapping feed, an undecodable answer or a
/// non-positive price all surface as `PriceUnavailable`.
pub fn latest_price(env: &Env, source: &Address) -> Result<i128, Error> {
    match PriceSourceClient::new(env, source).try_latest_price() {
        Ok(Ok(price)) if price > 0 => Ok(price),
        _ => Err(Error::PriceUnavailable),
    }
}

/// Native-currency amount owed for `amount` tokens:
/// `amount * price / latest_price`, then reduced by the sale discount.
/// Both divisions round up so a purchase is never cheaper than its price.
pub fn required_payment(
    amount: i128,
    price: i128,
    latest_price: i128,
    discount_bps: u32,
) -> Result<i128, Error> {
    let gross = div_ceil(
        amount.checked_mul(price).ok_or(Error::Overflow)?,
        latest_price,
    )
    .ok_or(Error::PriceUnavailable)?;
    if discount_bps == 0 {
        return Ok(gross);
    }
    let kept = BPS_DENOMINATOR
        .checked_sub(discount_bps as i128)
        .ok_or(Error::InvalidDiscount)?;
    div_ceil(gross.checked_mul(kept).ok_or(Error::Overflow)?, BPS_DENOMINATOR)
        .ok_or(Error::Overflow)
}

// Non-negative numerator, positive divisor.
fn div_ceil(numerator: i128, divisor: i128) -> Option<i128> {
    if divisor <= 0 || numerator < 0 {
        return None;
    }
    let quotient = numerator / divisor;
    if numerator % divisor == 0 {
        Some(quotient)
    } else {
        quotient.checked_add(1)
    }
}

pub fn validate_discount(discount_bps: u32) -> Result<(), Error> {
    if discount_bps as i128 > BPS_DENOMINATOR {
        return Err(Error::InvalidDiscount);
    }
    Ok(())
}
