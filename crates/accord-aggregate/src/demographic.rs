//! Demographic summary — profile attributes passed through without identity.

use accord_core::{dataset::DemographicsMetrics, profile::ClientProfile};

/// Age group, city, and balance of the single contributing client.
///
/// With one client behind the aggregate the "average" balance is that
/// client's balance and `client_count` is 1. Name and client id never leave
/// the profile.
pub fn demographic_summary(profile: &ClientProfile) -> DemographicsMetrics {
  DemographicsMetrics {
    age_group:       profile.age_group.clone(),
    city:            profile.city.clone(),
    average_balance: profile.balance,
    client_count:    1,
  }
}
