//! Property-based tests for cipher list generation
//!
//! These tests verify invariants that should hold for all inputs:
//! - Two-line preference entries parse like their single-line form
//! - Disabled entries never reach the preference mappings
//! - Output order is a filtered subsequence of the enumeration order

use maint_scripts::ciphers::{cipher_blocks, parse_cipher_prefs, CipherInputs};
use proptest::prelude::*;

/// One preference table row: (pref name, macro, flag)
fn entry() -> impl Strategy<Value = (String, String, Option<bool>)> {
    (
        "security\\.ssl3\\.[a-z0-9_]{1,12}",
        "TLS_[A-Z0-9_]{1,20}",
        proptest::option::of(any::<bool>()),
    )
}

fn single_line(name: &str, macro_name: &str, flag: Option<bool>) -> Vec<String> {
    match flag {
        Some(flag) => vec![format!("{{ \"{}\", {}, {} }},", name, macro_name, flag)],
        None => vec![format!("{{ \"{}\", {} }},", name, macro_name)],
    }
}

fn two_line(name: &str, macro_name: &str, flag: bool) -> Vec<String> {
    vec![
        format!("{{ \"{}\",", name),
        format!("  {}, {} }},", macro_name, flag),
    ]
}

proptest! {
    /// Property: splitting an entry across two lines does not change the result
    #[test]
    fn prop_two_line_matches_single_line(
        entries in prop::collection::vec((entry(), any::<bool>()), 0..12)
    ) {
        let mut single = Vec::new();
        let mut mixed = Vec::new();
        for ((name, macro_name, flag), split) in &entries {
            let flag = flag.unwrap_or(false);
            single.extend(single_line(name, macro_name, Some(flag)));
            if *split {
                mixed.extend(two_line(name, macro_name, flag));
            } else {
                mixed.extend(single_line(name, macro_name, Some(flag)));
            }
        }

        let from_single = parse_cipher_prefs(&single).unwrap();
        let from_mixed = parse_cipher_prefs(&mixed).unwrap();
        prop_assert_eq!(from_single, from_mixed);
    }

    /// Property: only entries flagged `true` are recorded
    #[test]
    fn prop_disabled_entries_never_recorded(
        entries in prop::collection::vec(entry(), 0..12)
    ) {
        let lines: Vec<String> = entries
            .iter()
            .flat_map(|(name, macro_name, flag)| single_line(name, macro_name, *flag))
            .collect();
        let prefs = parse_cipher_prefs(&lines).unwrap();

        for (name, macro_name) in &prefs.by_name {
            let enabled_somewhere = entries
                .iter()
                .any(|(n, m, f)| n == name && m == macro_name && *f == Some(true));
            prop_assert!(enabled_somewhere);
        }
        for (name, macro_name, flag) in &entries {
            if *flag != Some(true) {
                let recorded_later = entries
                    .iter()
                    .any(|(n, _, f)| n == name && *f == Some(true));
                if !recorded_later {
                    prop_assert!(!prefs.by_name.contains_key(name));
                }
                let macro_enabled_elsewhere = entries
                    .iter()
                    .any(|(_, m, f)| m == macro_name && *f == Some(true));
                if !macro_enabled_elsewhere {
                    prop_assert!(!prefs.by_macro.contains_key(macro_name));
                }
            }
        }
    }

    /// Property: output follows enumeration order and never reorders
    #[test]
    fn prop_output_is_filtered_subsequence(
        suites in prop::collection::vec("TLS_[A-E]", 0..20),
        enabled in prop::collection::vec(any::<bool>(), 5)
    ) {
        let letters = ["A", "B", "C", "D", "E"];
        let table: Vec<String> = letters
            .iter()
            .map(|l| format!("{{ \"security.ssl3.{}\", TLS_{}, true }},", l, l))
            .collect();

        let inputs = CipherInputs {
            prefs: parse_cipher_prefs(&table).unwrap(),
            suites: suites.clone(),
            enabled: letters
                .iter()
                .zip(&enabled)
                .map(|(l, on)| (format!("security.ssl3.{}", l), on.to_string()))
                .collect(),
            protocol: letters
                .iter()
                .enumerate()
                .map(|(i, l)| (format!("TLS_{}", l), format!("0x000{}", i)))
                .collect(),
            ..Default::default()
        };

        let emitted: Vec<String> = cipher_blocks(&inputs)
            .unwrap()
            .into_iter()
            .map(|b| b.macro_name)
            .collect();
        let expected: Vec<String> = suites
            .iter()
            .filter(|s| {
                let idx = letters.iter().position(|l| s.ends_with(l)).unwrap();
                enabled[idx]
            })
            .cloned()
            .collect();
        prop_assert_eq!(emitted, expected);
    }
}
