//! Fuzz target for the validation engine.
//!
//! Arbitrary field data and rule sets must never panic, and the recorded
//! error must agree with the returned outcome.

#![no_main]

use arbitrary::Arbitrary;
use formcheck_validation::{FieldData, FieldRules, FormValidator, RuleParam, RuleSpec};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzParam {
    None,
    Flag(bool),
    Limit(u16),
    Set(Vec<String>),
}

impl From<FuzzParam> for RuleParam {
    fn from(param: FuzzParam) -> Self {
        match param {
            FuzzParam::None => RuleParam::None,
            FuzzParam::Flag(flag) => RuleParam::Flag(flag),
            FuzzParam::Limit(limit) => RuleParam::Limit(limit as usize),
            FuzzParam::Set(values) => RuleParam::Set(values),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzForm {
    fields: Vec<(String, String)>,
    rules: Vec<(String, Vec<(u8, FuzzParam)>)>,
}

const RULE_NAMES: [&str; 12] = [
    "required",
    "alpha",
    "alpha_space",
    "numeric",
    "validate_int",
    "validate_bool",
    "validate_float",
    "validate_url",
    "min_length",
    "max_length",
    "from_array",
    "unknown",
];

fuzz_target!(|form: FuzzForm| {
    let data: FieldData = form.fields.into_iter().collect();

    let rules: RuleSpec = form
        .rules
        .into_iter()
        .map(|(field, checks)| {
            let field_rules = checks.into_iter().fold(FieldRules::new(), |rules, (index, param)| {
                let name = RULE_NAMES[index as usize % RULE_NAMES.len()];
                rules.rule(name, RuleParam::from(param))
            });
            (field, field_rules)
        })
        .collect();

    let mut validator = FormValidator::new(data, rules);
    let valid = validator.validate();

    assert_eq!(valid, validator.error().is_none());
    assert_eq!(valid, validator.run().is_ok());
});
