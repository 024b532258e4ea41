use mortgage_sim_core::amortization::{simulate, LoanConfig, PaymentMode};
use mortgage_sim_core::solver::{required_extra_payment, RequiredExtraInput};
use pretty_assertions::assert_eq;

fn base_loan() -> LoanConfig {
    LoanConfig {
        principal: 300_000.0,
        term_months: 360.0,
        fixed_months: 60.0,
        fixed_apr: 4.5,
        variable_base_apr: 6.0,
        tre: 2.25,
        monthly_extra: 0.0,
        mode: PaymentMode::KeepPayment,
    }
}

#[test]
fn test_required_extra_is_the_least_cent_amount() {
    let input = RequiredExtraInput {
        loan: base_loan(),
        target_months: 240,
    };
    let out = required_extra_payment(&input).unwrap().result;

    assert!(out.extra_needed);
    assert!(out.required_extra > 0.0);
    assert!(out.resulting_payoff_months <= 240);
    assert_eq!(out.baseline_payoff_months, 360);
    assert!(out.interest_saved > 0.0);

    let at_answer = simulate(&base_loan().with_monthly_extra(out.required_extra));
    assert!(at_answer.payoff_months <= 240);
    assert_eq!(at_answer.payoff_months, out.resulting_payoff_months);

    let one_cent_less = simulate(&base_loan().with_monthly_extra(out.required_extra - 0.01));
    assert!(one_cent_less.payoff_months > 240);
}

#[test]
fn test_monthly_extra_on_input_is_ignored() {
    let with_extra = RequiredExtraInput {
        loan: base_loan().with_monthly_extra(5_000.0),
        target_months: 180,
    };
    let without = RequiredExtraInput {
        loan: base_loan(),
        target_months: 180,
    };
    let a = required_extra_payment(&with_extra).unwrap().result;
    let b = required_extra_payment(&without).unwrap().result;
    assert_eq!(a.required_extra, b.required_extra);
    assert_eq!(a.baseline_payoff_months, 360);
}

#[test]
fn test_target_beyond_term_needs_nothing() {
    let input = RequiredExtraInput {
        loan: base_loan(),
        target_months: 400,
    };
    let output = required_extra_payment(&input).unwrap();
    assert!(!output.result.extra_needed);
    assert_eq!(output.result.required_extra, 0.0);
    assert_eq!(output.result.resulting_payoff_months, 360);
    assert_eq!(output.warnings.len(), 1);
}

#[test]
fn test_shorter_target_needs_more_extra() {
    let extra_for = |target_months| {
        required_extra_payment(&RequiredExtraInput {
            loan: base_loan(),
            target_months,
        })
        .unwrap()
        .result
        .required_extra
    };
    assert!(extra_for(120) > extra_for(240));
    assert!(extra_for(12) > extra_for(120));
}
