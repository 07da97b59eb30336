use rand::{rngs::StdRng, Rng, SeedableRng};
use stride_core::{normalize, DayBlock, Intensity, PlanValue};

const WORDS: [&str; 8] = ["", "  ", "Squat", "low", "HIGH effort", "med", "a: b", "1. Row 2. Run"];

fn random_value(rng: &mut StdRng, depth: usize) -> PlanValue {
    let max_kind = if depth >= 10 { 4 } else { 6 };
    match rng.random_range(0..max_kind) {
        0 => PlanValue::Null,
        1 => PlanValue::Bool(rng.random_bool(0.5)),
        2 => PlanValue::from(rng.random_range(-1000_i64..1000)),
        3 => PlanValue::from(WORDS[rng.random_range(0..WORDS.len())]),
        4 => {
            let len = rng.random_range(0..4);
            PlanValue::List((0..len).map(|_| random_value(rng, depth + 1)).collect())
        }
        _ => {
            let len = rng.random_range(0..4);
            PlanValue::Map(
                (0..len)
                    .map(|i| (format!("k{i}"), random_value(rng, depth + 1)))
                    .collect(),
            )
        }
    }
}

#[test]
fn test_normalization_is_total_over_random_structures() {
    let mut rng = StdRng::seed_from_u64(0x5715_1de);

    for _ in 0..1000 {
        let value = random_value(&mut rng, 0);
        let text = normalize(&value);

        // Deterministic, and a map drops exactly the entries that render empty.
        assert_eq!(text, normalize(&value));
        if let PlanValue::Map(entries) = &value {
            let all_empty = entries.iter().all(|(_, v)| normalize(v).is_empty());
            assert_eq!(text.is_empty(), all_empty);
        }

        // Any of these shapes can show up as a day field.
        let day = DayBlock {
            intensity: value.clone(),
            routine: value,
            ..Default::default()
        };
        let _ = day.intensity_level();
        assert!(day.to_string().contains("TODAY"));
    }
}

#[test]
fn test_empty_entries_drop_out() {
    let value: PlanValue = serde_json::from_str(r#"{"a": "", "b": []}"#).unwrap();
    assert_eq!(normalize(&value), "");
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let mut value = PlanValue::from("bottom");
    for _ in 0..1_000 {
        value = PlanValue::List(vec![value]);
    }
    assert_eq!(normalize(&value), "");

    let mut shallow = PlanValue::from("bottom");
    for _ in 0..10 {
        shallow = PlanValue::Map(vec![("k".to_string(), shallow)]);
    }
    assert!(normalize(&shallow).ends_with("k: bottom"));
}

#[test]
fn test_classifier_over_shapes() {
    let parse = |raw: &str| serde_json::from_str::<PlanValue>(raw).unwrap();
    assert_eq!(Intensity::classify(&parse(r#""low to high""#)), Intensity::Low);
    assert_eq!(Intensity::classify(&parse(r#""Moderate""#)), Intensity::Moderate);
    assert_eq!(Intensity::classify(&parse(r#""""#)), Intensity::Unknown);
    assert_eq!(Intensity::classify(&parse(r#"["warm", "HIGH"]"#)), Intensity::High);
    assert_eq!(Intensity::classify(&parse("7")), Intensity::Unknown);
}
