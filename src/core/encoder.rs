use crate::domain::model::{FeatureVector as F, IncomeType, RawInput, Sex};

/// Builds the design vector for one applicant.
///
/// Each bracket group is an ordered `if / else if` chain: the first matching
/// rule wins, so the order below is part of the encoding.
pub fn encode(raw: &RawInput) -> F {
    let mut v = F::zeroed();
    let retiree = raw.income_type.is_retiree();

    v.set(F::INTERCEPT, true);
    v.set(F::SEX_FEMALE, raw.sex == Sex::Female);

    if let Some(slot) = tenure_slot(retiree, raw.employment_months) {
        v.set(slot, true);
    }

    if let Some(slot) = income_type_slot(raw) {
        v.set(slot, true);
    }

    if let Some(slot) = age_slot(retiree, raw.age) {
        v.set(slot, true);
    }

    v.set(F::HIGHER_ED, raw.education.is_higher_ed());
    v.set(F::HAS_VEHICLE, raw.has_vehicle);
    v.set(F::HAS_PROPERTY, raw.has_property);

    v
}

// The first bracket closes at 12 inclusive, so 12 months lands in "6-11".
fn tenure_slot(retiree: bool, months: i64) -> Option<usize> {
    if retiree {
        Some(F::TENURE_RETIREE)
    } else if (6..=12).contains(&months) {
        Some(F::TENURE_6_11)
    } else if (12..=17).contains(&months) {
        Some(F::TENURE_12_17)
    } else if (18..=23).contains(&months) {
        Some(F::TENURE_18_23)
    } else if (24..=29).contains(&months) {
        Some(F::TENURE_24_29)
    } else if (30..=35).contains(&months) {
        Some(F::TENURE_30_35)
    } else if (36..=41).contains(&months) {
        Some(F::TENURE_36_41)
    } else if months >= 42 {
        Some(F::TENURE_42_PLUS)
    } else {
        None
    }
}

fn income_type_slot(raw: &RawInput) -> Option<usize> {
    match raw.income_type {
        IncomeType::Retiree => Some(F::INCOME_RETIREE),
        IncomeType::BusinessOwner => Some(F::INCOME_BUSINESS_OWNER),
        IncomeType::PublicServant => Some(F::INCOME_PUBLIC_SERVANT),
        IncomeType::Other(_) => None,
    }
}

fn age_slot(retiree: bool, age: i64) -> Option<usize> {
    if retiree {
        Some(F::AGE_RETIREE)
    } else if age <= 29 {
        Some(F::AGE_YOUNG)
    } else if age >= 60 {
        Some(F::AGE_ELDERLY)
    } else {
        None
    }
}
