//! Derived configuration for template rendering

use crate::spring::questions::{DEP_ACTUATOR, DEP_JETTY, DEP_JPA};
use crate::survey::{Answer, AnswerSet};
use std::collections::BTreeMap;

/// A configuration field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

/// The full configuration a scaffold run renders with.
///
/// Seeded by copying every collected answer, then extended with derived
/// identifiers and feature flags. Lookups are total: an absent field reads
/// as empty text or a false flag, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldConfig {
    fields: BTreeMap<String, Field>,
}

impl ScaffoldConfig {
    /// Derive the rendering configuration from a collected answer set.
    ///
    /// Later steps may read earlier ones, so the order is fixed: raw
    /// answers, then composite identifiers, then feature flags.
    pub fn derive(answers: &AnswerSet) -> Self {
        let mut fields = BTreeMap::new();
        for (key, answer) in answers.iter() {
            let field = match answer {
                Answer::Text(s) | Answer::Choice(s) => Field::Text(s.clone()),
                Answer::Selections(values) => Field::List(values.clone()),
                Answer::Flag(b) => Field::Flag(*b),
            };
            fields.insert(key.to_string(), field);
        }
        let mut config = Self { fields };

        let application_name = format!("{}Application", pascal_case(config.text("baseName")));
        config
            .fields
            .insert("applicationName".to_string(), Field::Text(application_name));

        for dependency in [DEP_JETTY, DEP_ACTUATOR, DEP_JPA] {
            config.fields.insert(
                dependency.to_string(),
                Field::Flag(answers.selected("dependencies", dependency)),
            );
        }
        config.fields.insert(
            "sql".to_string(),
            Field::Flag(answers.choice_is("databaseType", "sql")),
        );

        config
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Text value of a field; empty when absent or not textual.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(Field::Text(s)) => s,
            _ => "",
        }
    }

    /// Flag value of a field; false when absent or not a flag.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Field::Flag(true)))
    }

    /// Substitution text for a placeholder. Total over all field names so
    /// an omitted field renders as empty rather than failing.
    pub fn placeholder(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Field::Text(s)) => s.clone(),
            Some(Field::Flag(b)) => b.to_string(),
            Some(Field::List(values)) => values.join(", "),
            None => String::new(),
        }
    }
}

/// Capitalize each word of `name`, dropping `-`, `_`, `.` and whitespace
/// separators: `my-service` becomes `MyService`.
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch == '.' || ch.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}
