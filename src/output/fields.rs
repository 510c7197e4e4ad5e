use std::collections::BTreeSet;

use crate::constants::NO_LABEL_CODE;
use crate::error::{IiuError, Result};
use crate::output::CheckResult;

pub const FIELD_CODES_HELP: &str = "\
--return-only codes:
  c  print a time-stamp
  d  return the domain name
  i  return the IP address
  p  return the port
  s  return the status code
  t  return the response time
  l  return options without labels

Example: iiu -r d t -u example.com";

/// One selectable field. Its position in `FIELDS` is its output priority.
struct FieldDef {
    code: &'static str,
    label: Option<&'static str>,
    value: fn(&CheckResult) -> &str,
}

fn checked_at(check: &CheckResult) -> &str {
    &check.checked_at
}

fn domain(check: &CheckResult) -> &str {
    &check.record.domain
}

fn ip(check: &CheckResult) -> &str {
    &check.record.response_ip
}

fn port(check: &CheckResult) -> &str {
    &check.record.port
}

fn http_code(check: &CheckResult) -> &str {
    &check.record.http_code
}

fn response_time(check: &CheckResult) -> &str {
    &check.record.response_time
}

static FIELDS: [FieldDef; 6] = [
    FieldDef { code: "c", label: None, value: checked_at },
    FieldDef { code: "d", label: Some("domain"), value: domain },
    FieldDef { code: "i", label: Some("ip"), value: ip },
    FieldDef { code: "p", label: Some("port"), value: port },
    FieldDef { code: "s", label: Some("status_code"), value: http_code },
    FieldDef { code: "t", label: Some("response_time"), value: response_time },
];

const TIMESTAMP_INDEX: usize = 0;

/// Validated, de-duplicated `--return-only` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: BTreeSet<usize>,
    labels: bool,
}

impl FieldSelection {
    pub fn parse(codes: &[String]) -> Result<Self> {
        let codes: BTreeSet<&str> = codes.iter().map(String::as_str).collect();
        let labels = !codes.contains(NO_LABEL_CODE);

        let mut fields = BTreeSet::new();
        for code in codes.iter().filter(|c| **c != NO_LABEL_CODE) {
            match FIELDS.iter().position(|field| field.code == *code) {
                Some(index) => {
                    fields.insert(index);
                }
                None => return Err(IiuError::InvalidFieldCode(code.to_string())),
            }
        }

        if fields.is_empty() {
            return Err(IiuError::LabelOnly);
        }

        Ok(Self { fields, labels })
    }

    pub fn wants_timestamp(&self) -> bool {
        self.fields.contains(&TIMESTAMP_INDEX)
    }
}

/// Render the selected fields in canonical order, or a short down message
pub fn format_fields_output(check: &CheckResult, selection: &FieldSelection) -> String {
    if !check.state.is_up() {
        return if selection.wants_timestamp() {
            format!("{} - {} is down\n", check.checked_at, check.record.domain)
        } else {
            format!("{} is down\n", check.record.domain)
        };
    }

    let rendered: Vec<String> = selection
        .fields
        .iter()
        .map(|&index| {
            let field = &FIELDS[index];
            let value = (field.value)(check);
            match field.label {
                Some(label) if selection.labels => format!("{}={}", label, value),
                _ => value.to_string(),
            }
        })
        .collect();

    let mut output = rendered.join(" ");
    output.push('\n');
    output
}
