use lsre_core::{Format, Validator};
use serde_json::{json, Value};

#[test]
fn test_batch_counts_type_errors_separately() {
    let values: Vec<Value> = vec![
        json!("user@example.com"),
        json!("not an email"),
        json!(null),
        json!(12),
        json!("admin@example.org"),
    ];
    let validator = Validator::with_formats([Format::Email]);

    let results = validator.validate_all(&values);
    assert_eq!(results.len(), 1);
    let email = &results[0];
    assert_eq!(email.total, 5);
    assert_eq!(email.matched, 2);
    assert_eq!(email.rejected, 1);
    assert_eq!(email.type_errors, 2);
    assert!(!email.is_passed());
}

#[test]
fn test_batch_is_deterministic_across_runs() {
    let values: Vec<String> = (0..5_000)
        .map(|i| match i % 4 {
            0 => format!("10.0.{}.{}", i % 256, (i / 256) % 256),
            1 => format!("host-{i}"),
            2 => format!("user{i}@example.com"),
            _ => format!("{:02}:{:02}", i % 24, i % 60),
        })
        .collect();
    let validator = Validator::all_formats();

    let first = validator.validate_all(&values);
    let second = validator.validate_all(&values);
    assert_eq!(first, second);

    let ipv4 = first.iter().find(|r| r.format == Format::Ipv4).unwrap();
    assert_eq!(ipv4.matched, 1_250);
    let time = first.iter().find(|r| r.format == Format::Time).unwrap();
    assert_eq!(time.matched, 1_250);
}

#[test]
fn test_concurrent_calls_share_compiled_patterns() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let slug = format!("post-{i}");
                (0..500).all(|_| Format::Slug.validate(slug.as_str()) == Ok(true))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
