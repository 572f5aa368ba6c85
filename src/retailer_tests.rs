//! Tests for retailer identifiers and condition vocabulary tables

use crate::models::CardCondition;
use crate::retailer::RetailerId;

#[test]
fn test_retailer_id_round_trip() {
    for id in RetailerId::all() {
        assert_eq!(RetailerId::parse(id.as_str()), Some(*id));
    }
}

#[test]
fn test_retailer_id_parse_case_insensitive() {
    assert_eq!(RetailerId::parse("f2f"), Some(RetailerId::F2F));
    assert_eq!(RetailerId::parse("wiz"), Some(RetailerId::Wiz));
    assert_eq!(RetailerId::parse("401g"), Some(RetailerId::Games401));
    assert_eq!(RetailerId::parse("scg"), None);
}

#[test]
fn test_retailer_id_serde_wire_names() {
    assert_eq!(
        serde_json::to_string(&RetailerId::Games401).unwrap(),
        "\"401G\""
    );
    let id: RetailerId = serde_json::from_str("\"WIZ\"").unwrap();
    assert_eq!(id, RetailerId::Wiz);
}

#[test]
fn test_f2f_condition_codes() {
    let profile = RetailerId::F2F.profile();
    assert_eq!(profile.map_condition(Some("NM")), CardCondition::NM);
    assert_eq!(profile.map_condition(Some("SP")), CardCondition::SP);
    // F2F's generic "played" grade maps to MP
    assert_eq!(profile.map_condition(Some("PL")), CardCondition::MP);
    assert_eq!(profile.map_condition(Some("HP")), CardCondition::HP);
}

#[test]
fn test_f2f_condition_codes_are_exact_match() {
    let profile = RetailerId::F2F.profile();
    // Free text does not match F2F's code table
    assert_eq!(
        profile.map_condition(Some("Near Mint")),
        CardCondition::UNKNOWN
    );
    assert_eq!(profile.map_condition(Some("NMX")), CardCondition::UNKNOWN);
}

#[test]
fn test_wiz_condition_phrases() {
    let profile = RetailerId::Wiz.profile();
    assert_eq!(
        profile.map_condition(Some("Near Mint, English")),
        CardCondition::NM
    );
    assert_eq!(profile.map_condition(Some("NM-Mint")), CardCondition::NM);
    assert_eq!(
        profile.map_condition(Some("Slightly Played")),
        CardCondition::SP
    );
    assert_eq!(
        profile.map_condition(Some("Moderately Played, French")),
        CardCondition::MP
    );
    assert_eq!(
        profile.map_condition(Some("Heavily Played")),
        CardCondition::HP
    );
}

#[test]
fn test_g401_condition_always_unknown() {
    let profile = RetailerId::Games401.profile();
    assert_eq!(
        profile.map_condition(Some("Near Mint")),
        CardCondition::UNKNOWN
    );
    assert_eq!(profile.map_condition(Some("NM")), CardCondition::UNKNOWN);
}

#[test]
fn test_map_condition_total_on_empty_and_absent() {
    for id in RetailerId::all() {
        let profile = id.profile();
        assert_eq!(profile.map_condition(None), CardCondition::UNKNOWN);
        assert_eq!(profile.map_condition(Some("")), CardCondition::UNKNOWN);
        assert_eq!(profile.map_condition(Some("   ")), CardCondition::UNKNOWN);
        assert_eq!(
            profile.map_condition(Some("garbage text")),
            CardCondition::UNKNOWN
        );
    }
}

#[test]
fn test_wiz_denies_art_series_titles() {
    let profile = RetailerId::Wiz.profile();
    assert!(profile.denies_title("Lightning Bolt - Art Series"));
    assert!(!profile.denies_title("Lightning Bolt - Masters Edition"));
    assert!(!RetailerId::F2F.profile().denies_title("Foo - Art Series"));
}

#[test]
fn test_g401_set_label_cleanup() {
    let profile = RetailerId::Games401.profile();
    assert_eq!(
        profile.clean_set("Magic: The Gathering Singles - Dominaria"),
        "Dominaria"
    );
    assert_eq!(profile.clean_set("  Dominaria  "), "Dominaria");
}

#[test]
fn test_unknown_stock_policy_per_retailer() {
    assert_eq!(RetailerId::F2F.profile().unknown_stock_count, 1);
    assert_eq!(RetailerId::Wiz.profile().unknown_stock_count, 0);
    assert_eq!(RetailerId::Games401.profile().unknown_stock_count, 0);
}
