use portfolio_dashboard_core::models::bucket::{Bucket, TargetField};
use portfolio_dashboard_core::models::holdings::{BucketInputs, Holdings};
use portfolio_dashboard_core::models::horizon::{
    HorizonLabel, PredictionHorizon, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS,
    MIN_HORIZON_MONTHS,
};
use portfolio_dashboard_core::models::numeric::NumericInput;
use portfolio_dashboard_core::models::projection::ProjectionRow;
use portfolio_dashboard_core::models::snapshot::{Snapshot, SnapshotPatch};
use portfolio_dashboard_core::models::targets::TargetAllocation;

// ═══════════════════════════════════════════════════════════════════
//  Bucket / TargetField
// ═══════════════════════════════════════════════════════════════════

mod bucket {
    use super::*;

    #[test]
    fn display_order_is_fixed() {
        assert_eq!(
            Bucket::ALL,
            [
                Bucket::GlobalEquity,
                Bucket::JpHighDividend,
                Bucket::UsHighDividend,
                Bucket::Gold,
                Bucket::ForeignCash,
                Bucket::DomesticCash,
            ]
        );
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, bucket) in Bucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = Bucket::ALL.iter().map(|b| b.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Bucket::Gold.to_string(), "Gold");
        assert_eq!(Bucket::ForeignCash.to_string(), "USD Cash");
    }

    #[test]
    fn only_the_two_cash_buckets_are_cash() {
        let cash: Vec<Bucket> = Bucket::ALL.iter().copied().filter(|b| b.is_cash()).collect();
        assert_eq!(cash, vec![Bucket::ForeignCash, Bucket::DomesticCash]);
    }

    #[test]
    fn both_cash_buckets_share_the_cash_target() {
        assert_eq!(TargetField::for_bucket(Bucket::ForeignCash), TargetField::Cash);
        assert_eq!(TargetField::for_bucket(Bucket::DomesticCash), TargetField::Cash);
        assert_eq!(TargetField::for_bucket(Bucket::Gold), TargetField::Gold);
        assert_eq!(
            TargetField::for_bucket(Bucket::GlobalEquity),
            TargetField::GlobalEquity
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NumericInput
// ═══════════════════════════════════════════════════════════════════

mod numeric_input {
    use super::*;

    #[test]
    fn parse_number() {
        assert_eq!(NumericInput::parse("1500000").get(), Some(1_500_000.0));
        assert_eq!(NumericInput::parse(" 4.5 ").get(), Some(4.5));
        assert_eq!(NumericInput::parse("-2").get(), Some(-2.0));
    }

    #[test]
    fn empty_and_garbage_are_unset_and_read_as_zero() {
        for input in ["", "   ", "abc", "12abc", "NaN", "inf"] {
            let parsed = NumericInput::parse(input);
            assert!(!parsed.is_set(), "{input:?} should be unset");
            assert_eq!(parsed.value(), 0.0);
        }
    }

    #[test]
    fn non_finite_numbers_are_unset() {
        assert!(!NumericInput::new(f64::NAN).is_set());
        assert!(!NumericInput::new(f64::INFINITY).is_set());
    }

    #[test]
    fn non_negative_clamps_set_values_only() {
        assert_eq!(NumericInput::new(-5.0).non_negative().get(), Some(0.0));
        assert_eq!(NumericInput::new(5.0).non_negative().get(), Some(5.0));
        assert_eq!(NumericInput::UNSET.non_negative(), NumericInput::UNSET);
    }

    #[test]
    fn serializes_set_as_number_and_unset_as_empty_string() {
        assert_eq!(serde_json::to_string(&NumericInput::new(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&NumericInput::UNSET).unwrap(), "\"\"");
    }

    #[test]
    fn deserializes_numbers_strings_and_null() {
        let n: NumericInput = serde_json::from_str("42").unwrap();
        assert_eq!(n.get(), Some(42.0));
        let s: NumericInput = serde_json::from_str("\"1000\"").unwrap();
        assert_eq!(s.get(), Some(1000.0));
        let e: NumericInput = serde_json::from_str("\"\"").unwrap();
        assert!(!e.is_set());
        let z: NumericInput = serde_json::from_str("null").unwrap();
        assert!(!z.is_set());
        let g: NumericInput = serde_json::from_str("\"lots\"").unwrap();
        assert!(!g.is_set());
    }

    #[test]
    fn rejects_non_scalar_json() {
        assert!(serde_json::from_str::<NumericInput>("[1]").is_err());
        assert!(serde_json::from_str::<NumericInput>("true").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(NumericInput::new(12.5).to_string(), "12.5");
        assert_eq!(NumericInput::UNSET.to_string(), "");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Holdings / BucketInputs
// ═══════════════════════════════════════════════════════════════════

mod holdings {
    use super::*;

    #[test]
    fn default_is_all_unset() {
        let h = Holdings::default();
        for bucket in Bucket::ALL {
            assert!(!h.get(bucket).is_set());
        }
        assert_eq!(h.total(), 0.0);
    }

    #[test]
    fn set_replaces_only_one_bucket() {
        let mut h = Holdings::from_amounts([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        h.set(Bucket::Gold, NumericInput::new(40.0));
        assert_eq!(h.amount(Bucket::Gold), 40.0);
        assert_eq!(h.amount(Bucket::UsHighDividend), 3.0);
        assert_eq!(h.amount(Bucket::DomesticCash), 6.0);
    }

    #[test]
    fn total_counts_unset_as_zero() {
        let mut h = Holdings::default();
        h.set(Bucket::GlobalEquity, NumericInput::new(100.0));
        h.set(Bucket::ForeignCash, NumericInput::new(50.0));
        assert_eq!(h.total(), 150.0);
    }

    #[test]
    fn foreign_cash_is_summed_without_conversion() {
        let h = Holdings::from_amounts([0.0, 0.0, 0.0, 0.0, 1000.0, 1000.0]);
        assert_eq!(h.total(), 2000.0);
    }

    #[test]
    fn serde_keys() {
        let h = Holdings::from_amounts([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let json = serde_json::to_value(h).unwrap();
        assert_eq!(json["globalIndex"], 1.0);
        assert_eq!(json["jpHighDivETF"], 2.0);
        assert_eq!(json["usHighDivETF"], 3.0);
        assert_eq!(json["gold"], 4.0);
        assert_eq!(json["totalCashUSD"], 5.0);
        assert_eq!(json["totalCashJPY"], 6.0);
    }

    #[test]
    fn missing_keys_are_unset() {
        let h: Holdings = serde_json::from_str(r#"{"gold": "250000"}"#).unwrap();
        assert_eq!(h.amount(Bucket::Gold), 250_000.0);
        assert!(!h.get(Bucket::GlobalEquity).is_set());
    }

    #[test]
    fn bucket_inputs_store_domestic_cash_under_cash_key() {
        let inputs = BucketInputs::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let json = serde_json::to_value(inputs).unwrap();
        assert_eq!(json["cash"], 6.0);
        assert_eq!(json["totalCashUSD"], 5.0);
        assert!(json.get("totalCashJPY").is_none());
    }

    #[test]
    fn bucket_inputs_accept_historical_string_values() {
        let inputs: BucketInputs =
            serde_json::from_str(r#"{"globalIndex": "30000", "cash": "", "gold": 7}"#).unwrap();
        assert_eq!(inputs.value(Bucket::GlobalEquity), 30_000.0);
        assert_eq!(inputs.value(Bucket::DomesticCash), 0.0);
        assert_eq!(inputs.value(Bucket::Gold), 7.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TargetAllocation
// ═══════════════════════════════════════════════════════════════════

mod targets {
    use super::*;

    #[test]
    fn defaults() {
        let t = TargetAllocation::default();
        assert_eq!(t.global_equity, 40.0);
        assert_eq!(t.jp_high_dividend, 20.0);
        assert_eq!(t.us_high_dividend, 20.0);
        assert_eq!(t.gold, 10.0);
        assert_eq!(t.cash, 10.0);
        assert_eq!(t.total(), 100.0);
        assert!(t.is_balanced());
    }

    #[test]
    fn set_clamps_to_percentage_range() {
        let mut t = TargetAllocation::default();
        t.set(TargetField::Gold, 150.0);
        assert_eq!(t.gold, 100.0);
        t.set(TargetField::Gold, -5.0);
        assert_eq!(t.gold, 0.0);
        t.set(TargetField::Gold, f64::NAN);
        assert_eq!(t.gold, 0.0);
    }

    #[test]
    fn no_cross_field_normalization() {
        let mut t = TargetAllocation::default();
        t.set(TargetField::GlobalEquity, 90.0);
        assert_eq!(t.total(), 150.0);
        assert!(!t.is_balanced());
        assert_eq!(t.jp_high_dividend, 20.0);
    }

    #[test]
    fn cash_target_split_evenly() {
        let mut t = TargetAllocation::default();
        t.set(TargetField::Cash, 15.0);
        assert_eq!(t.pct_for(Bucket::ForeignCash), 7.5);
        assert_eq!(t.pct_for(Bucket::DomesticCash), 7.5);
        assert_eq!(t.pct_for(Bucket::GlobalEquity), 40.0);
    }

    #[test]
    fn per_bucket_targets_sum_to_field_total() {
        let t = TargetAllocation::default();
        let per_bucket: f64 = Bucket::ALL.iter().map(|b| t.pct_for(*b)).sum();
        assert_eq!(per_bucket, t.total());
    }

    #[test]
    fn deserializes_with_lenient_numbers() {
        let t: TargetAllocation = serde_json::from_str(
            r#"{"globalIndex": "50", "jpHighDivETF": 10, "usHighDivETF": 20, "gold": "", "cash": 20}"#,
        )
        .unwrap();
        assert_eq!(t.global_equity, 50.0);
        assert_eq!(t.gold, 0.0);
        assert_eq!(t.total(), 100.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PredictionHorizon
// ═══════════════════════════════════════════════════════════════════

mod horizon {
    use super::*;

    #[test]
    fn default_is_sixty_months() {
        assert_eq!(PredictionHorizon::default().months(), DEFAULT_HORIZON_MONTHS);
        assert_eq!(DEFAULT_HORIZON_MONTHS, 60);
    }

    #[test]
    fn new_clamps() {
        assert_eq!(PredictionHorizon::new(0).months(), MIN_HORIZON_MONTHS);
        assert_eq!(PredictionHorizon::new(-12).months(), 1);
        assert_eq!(PredictionHorizon::new(1000).months(), MAX_HORIZON_MONTHS);
        assert_eq!(PredictionHorizon::new(24).months(), 24);
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(PredictionHorizon::parse("").months(), 60);
        assert_eq!(PredictionHorizon::parse("ten").months(), 60);
        assert_eq!(PredictionHorizon::parse("36").months(), 36);
        assert_eq!(PredictionHorizon::parse("999").months(), 360);
    }

    #[test]
    fn label_splits_years_and_months() {
        assert_eq!(
            PredictionHorizon::new(30).label(),
            HorizonLabel { years: 2, months: 6 }
        );
        assert_eq!(PredictionHorizon::new(120).label().to_string(), "10y 0m");
    }

    #[test]
    fn serde_is_a_plain_integer() {
        assert_eq!(serde_json::to_string(&PredictionHorizon::new(24)).unwrap(), "24");
        let h: PredictionHorizon = serde_json::from_str("500").unwrap();
        assert_eq!(h.months(), 360);
        let f: PredictionHorizon = serde_json::from_str("12.7").unwrap();
        assert_eq!(f.months(), 12);
        assert!(serde_json::from_str::<PredictionHorizon>("\"soon\"").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Snapshot / SnapshotPatch
// ═══════════════════════════════════════════════════════════════════

mod snapshot {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            holdings: Holdings::from_amounts([400.0, 200.0, 200.0, 100.0, 50.0, 50.0]),
            targets: TargetAllocation::default(),
            monthly_contribution: BucketInputs::from_values([30.0, 0.0, 0.0, 0.0, 0.0, 10.0]),
            expected_return: BucketInputs::from_values([6.0, 4.0, 4.0, 2.0, 0.5, 0.0]),
            prediction_months: PredictionHorizon::new(120),
        }
    }

    #[test]
    fn default_snapshot() {
        let s = Snapshot::default();
        assert_eq!(s.holdings, Holdings::default());
        assert_eq!(s.targets, TargetAllocation::default());
        assert_eq!(s.prediction_months.months(), 60);
    }

    #[test]
    fn apply_replaces_only_present_fields() {
        let mut s = sample();
        let patch = SnapshotPatch {
            prediction_months: Some(PredictionHorizon::new(24)),
            ..SnapshotPatch::default()
        };
        let applied = s.apply(patch);
        assert_eq!(applied, 1);
        assert_eq!(s.prediction_months.months(), 24);
        assert_eq!(s.holdings, sample().holdings);
        assert_eq!(s.expected_return, sample().expected_return);
    }

    #[test]
    fn apply_full_patch_reproduces_snapshot() {
        let mut s = Snapshot::default();
        assert_eq!(s.apply(SnapshotPatch::from(sample())), 5);
        assert_eq!(s, sample());
    }

    #[test]
    fn from_patch_defaults_missing_fields() {
        let patch = SnapshotPatch {
            holdings: Some(sample().holdings),
            ..SnapshotPatch::default()
        };
        let s = Snapshot::from_patch(patch);
        assert_eq!(s.holdings, sample().holdings);
        assert_eq!(s.targets, TargetAllocation::default());
        assert_eq!(s.prediction_months, PredictionHorizon::default());
    }

    #[test]
    fn field_count() {
        assert_eq!(SnapshotPatch::default().field_count(), 0);
        assert_eq!(SnapshotPatch::from(sample()).field_count(), 5);
    }

    #[test]
    fn top_level_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in ["assets", "targets", "monthlyInvestment", "expectedReturns", "predictionMonths"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["predictionMonths"], 120);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ProjectionRow
// ═══════════════════════════════════════════════════════════════════

mod projection_row {
    use super::*;

    #[test]
    fn total_is_sum_of_balances() {
        let row = ProjectionRow::new(3, [10, 20, 30, 40, 50, 60]);
        assert_eq!(row.month, 3);
        assert_eq!(row.total, 210);
    }

    #[test]
    fn balance_by_bucket() {
        let row = ProjectionRow::new(0, [1, 2, 3, 4, 5, 6]);
        let values: Vec<i64> = Bucket::ALL.iter().map(|b| row.balance(*b)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
