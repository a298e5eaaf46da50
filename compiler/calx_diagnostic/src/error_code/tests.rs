use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2004.as_str(), "E2004");
}

#[test]
fn test_predicate_exclusivity() {
    for &code in ErrorCode::ALL {
        let hits = [
            code.is_parser_error(),
            code.is_type_error(),
            code.is_eval_error(),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert_eq!(hits, 1, "{code} should belong to exactly one phase");
    }
}

#[test]
fn test_shared_descriptions() {
    assert_eq!(ErrorCode::E2001.description(), ErrorCode::E3001.description());
    assert_eq!(ErrorCode::E3006.description(), "native function failed");
}

#[test]
fn test_from_str_round_trips_every_code() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e2004".parse::<ErrorCode>(), Ok(ErrorCode::E2004));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}
