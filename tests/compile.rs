use chrono::NaiveDate;
use patsearch::{
    compile, compile_expression, parse, tokenize, Condition, ConditionTable, FilterPredicate,
    MatchOperator, MatchValue,
};
use serde_json::json;

/// Helper table used across the tests
fn conditions() -> ConditionTable {
    let mut table = ConditionTable::new();
    table.add("applicant", "Acme Corp"); // S1
    table.add("title", "battery"); // S2
    table.add("applicationDate", "2020-03-15"); // S3
    table.add("publicationDate", "not a date"); // S4
    table.add("document", "JP2021-123456"); // S5
    table
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_single_identifier() {
    let table = conditions();
    let expr = parse(&tokenize("S1")).unwrap().unwrap();
    assert_eq!(
        compile(&expr, &table).unwrap(),
        FilterPredicate::FieldMatch {
            field: "applicantName".to_string(),
            operator: MatchOperator::Contains,
            value: MatchValue::Text("Acme Corp".to_string()),
        }
    );
}

#[test]
fn test_connectives() {
    let table = conditions();
    let acme = FilterPredicate::contains("applicantName", "Acme Corp");
    let battery = FilterPredicate::contains("inventionTitle", "battery");
    let filed = FilterPredicate::date_equals("applicationDate", date(2020, 3, 15));

    assert_eq!(
        compile_expression("S1+S2", &table).unwrap(),
        FilterPredicate::Or(vec![acme.clone(), battery.clone()])
    );
    assert_eq!(
        compile_expression("S1×S2", &table).unwrap(),
        FilterPredicate::And(vec![acme.clone(), battery.clone()])
    );
    assert_eq!(
        compile_expression("Not[S2]", &table).unwrap(),
        FilterPredicate::Not(Box::new(battery.clone()))
    );
    assert_eq!(
        compile_expression("(S1+S2)×S3", &table).unwrap(),
        FilterPredicate::and(FilterPredicate::or(acme.clone(), battery.clone()), filed.clone())
    );
    assert_eq!(
        compile_expression("S1+S2×Not[S3]", &table).unwrap(),
        FilterPredicate::or(
            acme,
            FilterPredicate::and(battery, FilterPredicate::not(filed))
        )
    );
}

#[test]
fn test_bad_date_degrades_to_empty_and() {
    let table = conditions();
    assert_eq!(
        compile_expression("S4", &table).unwrap(),
        FilterPredicate::And(vec![])
    );
    // degraded leaves still sit inside the surrounding tree
    assert_eq!(
        compile_expression("S5+S4", &table).unwrap(),
        FilterPredicate::or(
            FilterPredicate::contains("documentNum", "JP2021-123456"),
            FilterPredicate::And(vec![])
        )
    );
}

#[test]
fn test_empty_expression() {
    let table = conditions();
    assert_eq!(compile_expression("", &table).unwrap(), FilterPredicate::empty());
    assert!(compile_expression("  ", &ConditionTable::new())
        .unwrap()
        .is_empty());
}

#[test]
fn test_condition_table_json() {
    let table: ConditionTable = serde_json::from_value(json!({
        "S1": { "field": "applicant", "value": "Acme" },
        "S2": { "field": "publicationDate", "value": "20190704", "type": "date" },
    }))
    .unwrap();

    assert_eq!(table.len(), 2);
    let s2 = table.get("S2").unwrap();
    assert_eq!(s2.id, "S2");
    assert_eq!(s2.kind.as_deref(), Some("date"));
    assert_eq!(table.next_id(), "S3");

    assert_eq!(
        compile_expression("S1×S2", &table).unwrap(),
        FilterPredicate::and(
            FilterPredicate::contains("applicantName", "Acme"),
            FilterPredicate::date_equals("publicationDate", date(2019, 7, 4)),
        )
    );

    let round_tripped = serde_json::to_value(&table).unwrap();
    assert_eq!(
        round_tripped,
        json!({
            "S1": { "field": "applicant", "value": "Acme" },
            "S2": { "field": "publicationDate", "value": "20190704", "type": "date" },
        })
    );
}

#[test]
fn test_predicate_json_shape() {
    let table: ConditionTable = [
        Condition::new("S1", "title", "solar"),
        Condition::new("S2", "applicationDate", "2022/01/31"),
    ]
    .into_iter()
    .collect();

    let predicate = compile_expression("S1+Not[S2]", &table).unwrap();
    assert_eq!(
        serde_json::to_value(&predicate).unwrap(),
        json!({
            "or": [
                { "fieldMatch": {
                    "field": "inventionTitle",
                    "operator": "contains",
                    "value": { "text": "solar" }
                } },
                { "not": { "fieldMatch": {
                    "field": "applicationDate",
                    "operator": "equals",
                    "value": { "date": "2022-01-31" }
                } } }
            ]
        })
    );

    let back: FilterPredicate = serde_json::from_value(serde_json::to_value(&predicate).unwrap()).unwrap();
    assert_eq!(back, predicate);
}

#[test]
fn test_table_is_not_mutated() {
    let table = conditions();
    let before = table.clone();
    let _ = compile_expression("S1+S2×Not[S3+S4]×S5", &table).unwrap();
    let _ = compile_expression("S1+S42", &table).unwrap_err();
    assert_eq!(table, before);
}

#[test]
fn test_long_chain_json_round_trip() {
    let mut table = ConditionTable::new();
    let ids: Vec<String> = (0..150)
        .map(|n| table.add("title", format!("keyword {n}")))
        .collect();

    let predicate = compile_expression(&ids.join("+"), &table).unwrap();
    match &predicate {
        FilterPredicate::Or(xs) => {
            assert_eq!(xs.len(), 150);
            assert_eq!(xs[149], FilterPredicate::contains("inventionTitle", "keyword 149"));
        }
        other => panic!("expected a flat OR, got {other}"),
    }

    let json = serde_json::to_string(&predicate).unwrap();
    let back: FilterPredicate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, predicate);

    let predicate = compile_expression(&ids.join("×"), &table).unwrap();
    assert!(matches!(&predicate, FilterPredicate::And(xs) if xs.len() == 150));
    let back: FilterPredicate =
        serde_json::from_str(&serde_json::to_string(&predicate).unwrap()).unwrap();
    assert_eq!(back, predicate);
}
