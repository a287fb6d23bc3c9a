//! Canned reference data for demonstrations and tests.
//!
//! Three clients with five transactions each, plus the consent set the demo
//! environment seeds. Amounts are chosen so the aggregate figures are easy
//! to eyeball: client_1 spends 31 000 across five categories.

use accord_core::profile::{ClientProfile, ProfileDirectory, Transaction};
use chrono::NaiveDate;

use crate::service::ConsentRequest;

fn txn(
  id: &str,
  amount: f64,
  category: &str,
  day: u32,
  merchant: &str,
) -> Transaction {
  Transaction {
    id: id.to_owned(),
    amount,
    category: category.to_owned(),
    date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
    merchant: merchant.to_owned(),
  }
}

/// The three demo client profiles.
pub fn demo_profiles() -> Vec<ClientProfile> {
  vec![
    ClientProfile {
      client_id:    "client_1".to_owned(),
      name:         "Alice Hartwell".to_owned(),
      age_group:    "25-35".to_owned(),
      city:         "Northbridge".to_owned(),
      balance:      150_000.0,
      transactions: vec![
        txn("t1", 2500.0, "Restaurants", 15, "Harvest Table"),
        txn("t2", 5000.0, "Groceries", 14, "FreshMart"),
        txn("t3", 12000.0, "Electronics", 10, "Volt City"),
        txn("t4", 3500.0, "Transport", 8, "CityCab"),
        txn("t5", 8000.0, "Entertainment", 5, "Grand Cinema"),
      ],
    },
    ClientProfile {
      client_id:    "client_2".to_owned(),
      name:         "Marcus Bell".to_owned(),
      age_group:    "35-45".to_owned(),
      city:         "Easton".to_owned(),
      balance:      280_000.0,
      transactions: vec![
        txn("t6", 15000.0, "Clothing", 16, "Thread & Co"),
        txn("t7", 7000.0, "Beauty", 13, "Glow Studio"),
        txn("t8", 4500.0, "Cafes", 11, "Corner Roasters"),
        txn("t9", 20000.0, "Travel", 7, "Skyline Air"),
        txn("t10", 3000.0, "Fitness", 3, "Iron Works Gym"),
      ],
    },
    ClientProfile {
      client_id:    "client_3".to_owned(),
      name:         "Theo Marsh".to_owned(),
      age_group:    "18-25".to_owned(),
      city:         "Westfield".to_owned(),
      balance:      50_000.0,
      transactions: vec![
        txn("t11", 1500.0, "Fast Food", 17, "Burger Barn"),
        txn("t12", 8000.0, "Electronics", 12, "Volt City"),
        txn("t13", 2000.0, "Education", 9, "LearnHub"),
        txn("t14", 1000.0, "Transport", 6, "Metro Transit"),
        txn("t15", 4000.0, "Entertainment", 2, "PixelPlay Games"),
      ],
    },
  ]
}

/// The demo profiles as a ready-made directory.
pub fn demo_directory() -> ProfileDirectory {
  ProfileDirectory::new(demo_profiles())
}

/// The consent set the demo seeds: three active grants across two partners,
/// so "Retail Analytics Pro" ends up with datasets from two clients.
pub fn demo_consents() -> Vec<ConsentRequest> {
  vec![
    ConsentRequest {
      client_id:  "client_1".to_owned(),
      company:    "Retail Analytics Pro".to_owned(),
      data_types: vec![
        "category_spending".to_owned(),
        "average_bill".to_owned(),
        "age_group_stats".to_owned(),
      ],
      is_active:  true,
    },
    ConsentRequest {
      client_id:  "client_2".to_owned(),
      company:    "Retail Analytics Pro".to_owned(),
      data_types: vec![
        "category_spending".to_owned(),
        "age_group_stats".to_owned(),
      ],
      is_active:  true,
    },
    ConsentRequest {
      client_id:  "client_3".to_owned(),
      company:    "FinTech Insights".to_owned(),
      data_types: vec![
        "category_spending".to_owned(),
        "average_bill".to_owned(),
      ],
      is_active:  true,
    },
  ]
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use super::*;

  #[test]
  fn profiles_are_well_formed() {
    let profiles = demo_profiles();
    assert_eq!(profiles.len(), 3);

    let ids: BTreeSet<_> = profiles
      .iter()
      .flat_map(|p| p.transactions.iter().map(|t| t.id.clone()))
      .collect();
    assert_eq!(ids.len(), 15, "transaction ids must be unique");

    for profile in &profiles {
      assert_eq!(profile.transactions.len(), 5);
      assert!(profile.transactions.iter().all(|t| t.amount > 0.0));
    }
    assert_eq!(profiles[0].total_spent(), 31000.0);
  }

  #[test]
  fn demo_consents_only_reference_known_clients_and_labels() {
    let directory = demo_directory();
    for request in demo_consents() {
      assert!(directory.contains(&request.client_id));
      assert!(
        accord_core::consent::DataType::parse_labels(&request.data_types)
          .is_ok()
      );
    }
  }
}
