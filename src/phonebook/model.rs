use crate::error::{PhonebookError, Result};
use std::fmt;
use std::str::FromStr;

/// Separates fields in the backing file.
pub const DELIMITER: char = ';';

/// Number of fields every stored line carries.
pub const FIELD_COUNT: usize = 6;

/// A named field of a [`Record`], in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::Organization => "organization",
            Field::WorkPhone => "work_phone",
            Field::PersonalPhone => "personal_phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| PhonebookError::UnknownField(s.to_string()))
    }
}

/// One contact: six free-text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Record {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        organization: impl Into<String>,
        work_phone: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            organization: organization.into(),
            work_phone: work_phone.into(),
            personal_phone: personal_phone.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    /// Full name in "last first middle" order.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }

    /// Rejects values that would break the line format on the next load.
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let value = self.field(field);
            if value.contains(DELIMITER) {
                return Err(PhonebookError::InvalidField {
                    field: field.to_string(),
                    reason: format!("must not contain '{}'", DELIMITER),
                });
            }
            if value.contains(['\n', '\r']) {
                return Err(PhonebookError::InvalidField {
                    field: field.to_string(),
                    reason: "must not contain line breaks".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parses one stored line. `line_no` is 1-based and only used for errors.
    pub fn from_line(line: &str, line_no: usize) -> Result<Self> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        match parts.as_slice() {
            [last, first, middle, org, work, personal] => {
                Ok(Record::new(*last, *first, *middle, *org, *work, *personal))
            }
            _ => Err(PhonebookError::MalformedLine {
                line: line_no,
                found: parts.len(),
            }),
        }
    }

    pub fn to_line(&self) -> String {
        let mut line = String::new();
        for (i, field) in Field::ALL.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            line.push_str(self.field(*field));
        }
        line
    }
}
