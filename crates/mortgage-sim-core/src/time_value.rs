use crate::rounding::{monthly_rate, round_currency};
use crate::types::{Money, Rate};

/// Level monthly payment that amortizes `principal` over `months` at
/// `annual_rate` (percent), rounded to cents.
///
/// Degenerate cases: no months left pays the balance at once, a
/// non-positive balance needs no payment, and a zero rate splits the
/// balance evenly.
pub fn payment(principal: Money, annual_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return round_currency(principal);
    }
    if principal <= 0.0 {
        return 0.0;
    }

    let rate = monthly_rate(annual_rate);
    if rate == 0.0 {
        return round_currency(principal / f64::from(months));
    }

    let discount = (1.0 + rate).powf(-f64::from(months));
    round_currency(principal * rate / (1.0 - discount))
}

/// Interest accrued on `balance` over one month at `annual_rate`, in cents.
pub fn monthly_interest(balance: Money, annual_rate: Rate) -> Money {
    round_currency(balance * monthly_rate(annual_rate))
}
