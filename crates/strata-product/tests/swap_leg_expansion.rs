//! Integration tests for rate swap leg expansion.

use approx::assert_relative_eq;
use proptest::prelude::*;
use strata_basics::prelude::*;
use strata_product::prelude::*;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn following_sat_sun() -> BusinessDayAdjustment {
    BusinessDayAdjustment::of(BusinessDayConvention::ModifiedFollowing, HolidayCalendar::sat_sun())
}

fn fixed_leg(pay_receive: PayReceive) -> RateSwapLeg {
    RateSwapLeg::builder()
        .pay_receive(pay_receive)
        .accrual_schedule(
            PeriodicSchedule::of(
                date(2014, 9, 12),
                date(2021, 9, 12),
                Frequency::SemiAnnual,
                following_sat_sun(),
                StubConvention::ShortInitial,
            )
            .unwrap(),
        )
        .payment_schedule(
            PaymentSchedule::of(Frequency::SemiAnnual, 2).with_calendar(HolidayCalendar::sat_sun()),
        )
        .notional(NotionalAmount::of(Currency::USD, 100_000_000.0).unwrap())
        .calculation(FixedRateCalculation::of(0.015, DayCount::Thirty360).unwrap())
        .build()
        .unwrap()
}

fn ibor_leg(pay_receive: PayReceive) -> RateSwapLeg {
    RateSwapLeg::of(
        pay_receive,
        PeriodicSchedule::of(
            date(2014, 9, 12),
            date(2021, 9, 12),
            Frequency::Quarterly,
            following_sat_sun(),
            StubConvention::ShortInitial,
        )
        .unwrap(),
        PaymentSchedule::of(Frequency::Quarterly, 2).with_calendar(HolidayCalendar::sat_sun()),
        NotionalAmount::of(Currency::USD, 100_000_000.0).unwrap(),
        IborRateCalculation::of(IborIndex::USD_LIBOR_3M),
    )
}

#[test]
fn test_fixed_leg_period_count_and_sign() {
    let leg = fixed_leg(PayReceive::Pay);
    let expanded = leg.to_expanded().unwrap();

    // 7 years semi-annual
    assert_eq!(expanded.payment_periods().len(), 14);
    for payment in expanded.payment_periods() {
        assert_eq!(payment.currency(), Currency::USD);
        assert_eq!(payment.notional(), -100_000_000.0);
        assert_eq!(payment.accrual_periods().len(), 1);
        assert!(payment.payment_date() > payment.end_date());
    }
    assert!(expanded.fixed_amount().unwrap() < 0.0);
}

#[test]
fn test_receive_leg_is_positive() {
    let expanded = fixed_leg(PayReceive::Receive).to_expanded().unwrap();
    assert!(expanded
        .payment_periods()
        .iter()
        .all(|p| p.notional() == 100_000_000.0));

    let paid = fixed_leg(PayReceive::Pay).to_expanded().unwrap();
    assert_relative_eq!(
        expanded.fixed_amount().unwrap(),
        -paid.fixed_amount().unwrap(),
        epsilon = 1e-6
    );
}

#[test]
fn test_fixed_leg_regular_coupon() {
    let expanded = fixed_leg(PayReceive::Receive).to_expanded().unwrap();
    // 2015-03-12 to 2015-09-14 under 30/360: 182 days, slightly over half a year
    let second = &expanded.payment_periods()[1];
    assert_eq!(second.start_date(), date(2015, 3, 12));
    assert_eq!(second.end_date(), date(2015, 9, 14));
    assert_relative_eq!(second.year_fraction(), 182.0 / 360.0);
    assert_relative_eq!(
        second.fixed_amount().unwrap(),
        100_000_000.0 * 0.015 * 182.0 / 360.0,
        epsilon = 1e-6
    );
}

#[test]
fn test_leg_dates_are_adjusted() {
    let leg = fixed_leg(PayReceive::Pay);
    // 2021-09-12 is a Sunday
    assert_eq!(leg.start_date(), date(2014, 9, 12));
    assert_eq!(leg.end_date(), date(2021, 9, 13));
    assert_eq!(leg.currency(), Currency::USD);

    let expanded = leg.to_expanded().unwrap();
    assert_eq!(expanded.start_date(), leg.start_date());
    assert_eq!(expanded.end_date(), leg.end_date());
    assert_eq!(expanded.pay_receive(), PayReceive::Pay);
}

#[test]
fn test_ibor_leg_observations() {
    let expanded = ibor_leg(PayReceive::Receive).to_expanded().unwrap();
    assert_eq!(expanded.payment_periods().len(), 28);
    assert!(expanded.fixed_amount().is_none());

    for payment in expanded.payment_periods() {
        let accrual = &payment.accrual_periods()[0];
        match accrual.observation() {
            RateObservation::Ibor { index, fixing_date } => {
                assert_eq!(index, &IborIndex::USD_LIBOR_3M);
                assert!(*fixing_date < accrual.start_date());
            }
            RateObservation::Fixed { .. } => panic!("expected an Ibor observation"),
        }
    }
}

#[test]
fn test_quarterly_payment_of_monthly_accrual() {
    let leg = RateSwapLeg::of(
        PayReceive::Receive,
        PeriodicSchedule::of(
            date(2025, 1, 15),
            date(2026, 1, 15),
            Frequency::Monthly,
            BusinessDayAdjustment::NONE,
            StubConvention::ShortInitial,
        )
        .unwrap(),
        PaymentSchedule::of(Frequency::Quarterly, 0),
        NotionalAmount::of(Currency::GBP, 5_000_000.0).unwrap(),
        IborRateCalculation::of(IborIndex::GBP_LIBOR_3M),
    );
    let expanded = leg.to_expanded().unwrap();

    assert_eq!(expanded.payment_periods().len(), 4);
    for payment in expanded.payment_periods() {
        assert_eq!(payment.accrual_periods().len(), 3);
        assert_eq!(payment.payment_date(), payment.end_date());
    }
    // GBP LIBOR fixes on the period start
    let first = &expanded.payment_periods()[0].accrual_periods()[0];
    assert_eq!(first.observation().fixing_date(), Some(date(2025, 1, 15)));
}

#[test]
fn test_incompatible_payment_frequency_fails() {
    let leg = fixed_leg(PayReceive::Pay)
        .to_builder()
        .payment_schedule(PaymentSchedule::of(Frequency::Quarterly, 0))
        .build()
        .unwrap();
    assert!(matches!(
        leg.to_expanded(),
        Err(ProductError::InvalidSchedule { .. })
    ));
}

#[test]
fn test_builder_requires_every_part() {
    let result = RateSwapLeg::builder()
        .pay_receive(PayReceive::Pay)
        .notional(NotionalAmount::of(Currency::USD, 1.0).unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ProductError::MissingField {
            field: "accrual_schedule"
        })
    ));
}

#[test]
fn test_builder_round_trip() {
    let leg = ibor_leg(PayReceive::Pay);
    assert_eq!(leg.to_builder().build().unwrap(), leg);
}

#[test]
fn test_leg_serde_round_trip() {
    let leg = fixed_leg(PayReceive::Pay);
    let json = serde_json::to_string(&leg).unwrap();
    let parsed: RateSwapLeg = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, leg);
}

proptest! {
    #[test]
    fn prop_schedule_periods_are_contiguous(
        start_offset in 0i64..400,
        length_days in 40i64..4000,
        initial in any::<bool>(),
    ) {
        let start = date(2020, 1, 1).add_days(start_offset);
        let end = start.add_days(length_days);
        let stub = if initial { StubConvention::ShortInitial } else { StubConvention::ShortFinal };
        let schedule = PeriodicSchedule::of(
            start,
            end,
            Frequency::Monthly,
            BusinessDayAdjustment::NONE,
            stub,
        )
        .unwrap()
        .create_schedule()
        .unwrap();

        prop_assert_eq!(schedule.start_date(), Some(start));
        prop_assert_eq!(schedule.end_date(), Some(end));
        for pair in schedule.periods().windows(2) {
            prop_assert_eq!(pair[0].end_date(), pair[1].start_date());
        }
        for period in schedule.periods() {
            prop_assert!(period.length_in_days() > 0);
            prop_assert!(period.length_in_days() <= 31);
        }
    }
}
