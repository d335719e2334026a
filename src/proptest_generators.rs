#[cfg(test)]
mod tests {
    use crate::condition::{Condition, ConditionTable};
    use crate::field::SearchField;
    use crate::predicate::{FilterPredicate, MatchOperator, MatchValue};
    use crate::{compile, compile_expression, parse, tokenize};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    const MAX_ID: u32 = 40;

    // Strategy for condition identifiers S1..=S40
    fn arb_identifier() -> impl Strategy<Value = String> {
        (1..=MAX_ID).prop_map(|n| format!("S{n}"))
    }

    // Strategy for well-formed expression text, with no whitespace
    fn arb_expression() -> impl Strategy<Value = String> {
        arb_identifier().prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}+{b}")),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}×{b}")),
                inner.clone().prop_map(|a| format!("Not[{a}]")),
                inner.prop_map(|a| format!("({a})")),
            ]
        })
    }

    // Strategy for text field keys: mapped, storage aliases and unmapped
    fn arb_text_field() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("document".to_string()),
            Just("application".to_string()),
            Just("title".to_string()),
            Just("applicant".to_string()),
            Just("applicantName".to_string()),
            "[a-z]{1,10}Code",
        ]
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (1990i32..2040, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn full_table() -> ConditionTable {
        (1..=MAX_ID)
            .map(|n| Condition::new(format!("S{n}"), "applicant", format!("company {n}")))
            .collect()
    }

    // Re-join the tokens of `expr` with whitespace and junk the tokenizer drops
    fn with_noise(expr: &str, noise: &[&str]) -> String {
        tokenize(expr)
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}{}", noise[i % noise.len()], t.text))
            .collect()
    }

    proptest! {
        #[test]
        fn canonical_rendering_round_trips(input in arb_expression()) {
            let tokens = tokenize(&input);
            let expr = parse(&tokens).unwrap().unwrap();
            let rendered = expr.to_string();
            // generated text is already canonical
            prop_assert_eq!(&rendered, &input);

            let tokens2 = tokenize(&rendered);
            let reparsed = parse(&tokens2).unwrap().unwrap();
            prop_assert_eq!(reparsed, expr);
        }

        #[test]
        fn whitespace_does_not_change_structure(input in arb_expression()) {
            let noisy = with_noise(&input, &["", " ", "\t", "\n ", " ? ", "x"]);
            let tokens = tokenize(&input);
            let noisy_tokens = tokenize(&noisy);
            prop_assert_eq!(parse(&noisy_tokens).unwrap(), parse(&tokens).unwrap());
        }

        #[test]
        fn every_identifier_resolves(input in arb_expression()) {
            let table = full_table();
            prop_assert!(compile_expression(&input, &table).is_ok());
        }

        #[test]
        fn identifiers_match_tokens(input in arb_expression()) {
            let tokens = tokenize(&input);
            let expr = parse(&tokens).unwrap().unwrap();
            let from_tokens: Vec<&str> = tokens
                .iter()
                .filter(|t| t.kind == crate::TokenKind::Identifier)
                .map(|t| t.text)
                .collect();
            prop_assert_eq!(expr.identifiers(), from_tokens);
        }

        #[test]
        fn single_text_condition_compiles_to_field_match(
            id in arb_identifier(),
            field in arb_text_field(),
            value in "[a-zA-Z0-9 ]{0,20}",
        ) {
            let table: ConditionTable =
                [Condition::new(id.clone(), field.clone(), value.clone())].into_iter().collect();
            let tokens = tokenize(&id);
            let expr = parse(&tokens).unwrap().unwrap();
            let predicate = compile(&expr, &table).unwrap();
            prop_assert_eq!(
                predicate,
                FilterPredicate::FieldMatch {
                    field: SearchField::from_key(&field).storage_name().to_string(),
                    operator: MatchOperator::Contains,
                    value: MatchValue::Text(value),
                }
            );
        }

        #[test]
        fn single_date_condition_compiles_to_field_match(
            id in arb_identifier(),
            published in any::<bool>(),
            date in arb_date(),
            compact in any::<bool>(),
        ) {
            let key = if published { "publicationDate" } else { "applicationDate" };
            let value = if compact {
                date.format("%Y%m%d").to_string()
            } else {
                date.format("%Y-%m-%d").to_string()
            };
            let table: ConditionTable =
                [Condition::new(id.clone(), key, value)].into_iter().collect();
            let predicate = compile_expression(&id, &table).unwrap();
            prop_assert_eq!(predicate, FilterPredicate::date_equals(key, date));
        }

        #[test]
        fn tokenize_never_panics(input in any::<String>()) {
            for token in tokenize(&input) {
                prop_assert_eq!(&input[token.offset..token.end()], token.text);
            }
        }
    }
}
