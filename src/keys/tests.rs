use super::*;

#[test]
fn test_master_pk_concrete() {
    assert_eq!(master_pk("tenantA"), "MASTER#tenantA");
}

#[test]
fn test_setting_sk_concrete() {
    assert_eq!(setting_sk("code1"), "master_setting#code1");
}

#[test]
fn test_data_setting_sk_concrete() {
    assert_eq!(data_setting_sk("master_setting", "code1"), "master_setting#code1");
}

#[test]
fn test_parse_pk_concrete() {
    let parsed = parse_pk("MASTER#tenantA").unwrap();
    assert_eq!(
        parsed,
        PartitionKey {
            key_type: "MASTER".to_string(),
            tenant_code: "tenantA".to_string(),
        }
    );
}

#[test]
fn test_pk_round_trip() {
    let pk = master_pk("acme");
    let parsed = parse_pk(&pk).unwrap();
    assert_eq!(parsed.key_type, MASTER_PK_PREFIX);
    assert_eq!(parsed.tenant_code, "acme");
}

#[test]
fn test_sk_round_trip() {
    let sk = data_setting_sk("master_setting", "currency");
    let parsed = parse_data_setting_sk(&sk).unwrap();
    assert_eq!(parsed.setting_code, "master_setting");
    assert_eq!(parsed.code, "currency");
}

#[test]
fn test_parse_pk_rejects_zero_separators() {
    let err = parse_pk("bad").unwrap_err();
    assert!(matches!(
        err,
        KeyError::Malformed {
            kind: KeyKind::Partition,
            ..
        }
    ));
}

#[test]
fn test_parse_pk_rejects_extra_segments() {
    let err = parse_pk("a#b#c").unwrap_err();
    assert!(matches!(
        err,
        KeyError::Malformed {
            kind: KeyKind::Partition,
            ..
        }
    ));
}

#[test]
fn test_parse_sk_rejects_zero_separators() {
    assert!(parse_data_setting_sk("code1").is_err());
}

#[test]
fn test_parse_sk_rejects_extra_segments() {
    let err = parse_data_setting_sk("group#code#extra").unwrap_err();
    assert!(matches!(
        err,
        KeyError::Malformed {
            kind: KeyKind::Sort,
            ..
        }
    ));
}

#[test]
fn test_compose_is_deterministic() {
    assert_eq!(master_pk("t"), master_pk("t"));
    assert_eq!(data_setting_sk("g", "i"), data_setting_sk("g", "i"));
}

#[test]
fn test_error_carries_offending_value() {
    let err = parse_pk("a#b#c").unwrap_err();
    let KeyError::Malformed { value, .. } = err;
    assert_eq!(value, "a#b#c");
}

#[test]
fn test_embedded_separator_breaks_round_trip() {
    // The input contract forbids separators inside segments; when violated,
    // the composed key must fail to parse instead of truncating.
    let sk = data_setting_sk("group#sub", "code");
    assert!(parse_data_setting_sk(&sk).is_err());
}
