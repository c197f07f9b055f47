use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, Record};
use std::collections::BTreeMap;

/// Exact, case-sensitive match on every listed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    fields: BTreeMap<Field, String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn last_name(value: impl Into<String>) -> Self {
        Self::new().with(Field::LastName, value)
    }

    /// Builds criteria from `(field name, value)` pairs, e.g. `("last_name", "Smith")`.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut criteria = Self::new();
        for (key, value) in pairs {
            let field: Field = key.as_ref().parse()?;
            criteria = criteria.with(field, value);
        }
        Ok(criteria)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.fields
            .iter()
            .all(|(field, value)| record.field(*field) == value)
    }
}

pub fn run(records: &[Record], criteria: &SearchCriteria) -> Result<CmdResult> {
    let found: Vec<Record> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No entries found."));
    }
    Ok(result.with_listed_records(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;

    fn book() -> Vec<Record> {
        vec![
            Record::new("Smith", "John", "", "Acme", "1", "2"),
            Record::new("Jones", "Mary", "", "Globex", "3", "4"),
            Record::new("smith", "Lower", "", "Acme", "5", "6"),
            Record::new("Smith", "Jane", "", "Initech", "7", "8"),
            Record::new("Smithson", "Tom", "", "Acme", "9", "0"),
        ]
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let records = book();
        let result = run(&records, &SearchCriteria::new()).unwrap();
        assert_eq!(result.listed_records, records);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn last_name_is_exact_and_case_sensitive() {
        let result = run(&book(), &SearchCriteria::last_name("Smith")).unwrap();
        let firsts: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.first_name.as_str())
            .collect();
        assert_eq!(firsts, vec!["John", "Jane"]);
    }

    #[test]
    fn all_given_fields_must_match() {
        let criteria = SearchCriteria::last_name("Smith").with(Field::Organization, "Initech");
        let result = run(&book(), &criteria).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].first_name, "Jane");
    }

    #[test]
    fn no_match_is_empty_with_message() {
        let result = run(&book(), &SearchCriteria::last_name("Nobody")).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No entries found.");
    }

    #[test]
    fn from_pairs_parses_field_names() {
        let criteria =
            SearchCriteria::from_pairs([("last_name", "Jones"), ("first_name", "Mary")]).unwrap();
        let result = run(&book(), &criteria).unwrap();
        assert_eq!(result.listed_records.len(), 1);
    }

    #[test]
    fn from_pairs_rejects_unknown_field() {
        let err = SearchCriteria::from_pairs([("nickname", "Jo")]).unwrap_err();
        assert!(matches!(err, PhonebookError::UnknownField(name) if name == "nickname"));
    }
}
