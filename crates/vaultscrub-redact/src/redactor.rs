use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use vaultscrub_core::{RuleMatch, RuleSet};

/// What happened to a redacted property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionKind {
    /// Sensitive key dropped from its object
    KeyRemoved,
    /// Sensitive key kept, value replaced by the redaction text
    KeyMasked,
    /// Key kept, string value matched a value pattern
    ValueMasked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionInfo {
    /// JSON pointer (RFC 6901) to the property in the input document
    pub path: String,
    pub kind: RedactionKind,
    pub rule: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RedactionSummary {
    pub removed_keys: usize,
    pub masked_keys: usize,
    pub masked_values: usize,
}

impl RedactionSummary {
    pub fn total(&self) -> usize {
        self.removed_keys + self.masked_keys + self.masked_values
    }
}

/// Count redactions per kind
pub fn summarize(report: &[RedactionInfo]) -> RedactionSummary {
    report
        .iter()
        .fold(RedactionSummary::default(), |mut summary, info| {
            match info.kind {
                RedactionKind::KeyRemoved => summary.removed_keys += 1,
                RedactionKind::KeyMasked => summary.masked_keys += 1,
                RedactionKind::ValueMasked => summary.masked_values += 1,
            }
            summary
        })
}

/// Redact `value` with `rules`, returning a new document.
pub fn redact(value: &Value, rules: &RuleSet) -> Value {
    Walk {
        rules,
        report: None,
    }
    .value(value)
}

/// Redaction engine bound to one rule set
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    rules: RuleSet,
}

impl Redactor {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Redact sensitive properties from a document
    pub fn redact(&self, value: &Value) -> Value {
        redact(value, &self.rules)
    }

    /// Redact and also return one entry per redacted property, in document order
    pub fn redact_with_report(&self, value: &Value) -> (Value, Vec<RedactionInfo>) {
        let mut walk = Walk {
            rules: &self.rules,
            report: Some(Report::default()),
        };
        let redacted = walk.value(value);
        let entries = walk.report.map(|report| report.entries).unwrap_or_default();

        debug!(redactions = entries.len(), "Redacted document");

        (redacted, entries)
    }
}

#[derive(Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

#[derive(Default)]
struct Report {
    path: Vec<String>,
    entries: Vec<RedactionInfo>,
}

impl Report {
    fn pointer(&self) -> String {
        self.path.iter().fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(segment);
            pointer
        })
    }
}

/// Recursive descent over one document. Path bookkeeping only runs when a report is requested.
struct Walk<'r> {
    rules: &'r RuleSet,
    report: Option<Report>,
}

impl<'r> Walk<'r> {
    fn value(&mut self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.enter(Segment::Index(index));
                        let redacted = self.value(item);
                        self.leave();
                        redacted
                    })
                    .collect(),
            ),
            Value::Object(map) => Value::Object(self.object(map)),
            // Bare primitives are never value-matched, only object property values are
            _ => value.clone(),
        }
    }

    fn object(&mut self, map: &Map<String, Value>) -> Map<String, Value> {
        let rules = self.rules;
        let mut out = Map::with_capacity(map.len());

        for (key, prop) in map {
            if let Some(rule) = rules.matched_key_rule(key) {
                let kind = if rules.preserve_keys() {
                    out.insert(key.clone(), Value::String(rules.redaction_text().to_string()));
                    RedactionKind::KeyMasked
                } else {
                    RedactionKind::KeyRemoved
                };
                self.record(Segment::Key(key), kind, rule);
                continue;
            }

            match prop {
                Value::Array(_) | Value::Object(_) => {
                    self.enter(Segment::Key(key));
                    let redacted = self.value(prop);
                    self.leave();
                    out.insert(key.clone(), redacted);
                }
                _ => match rules.matched_value_rule(prop) {
                    Some(rule) => {
                        out.insert(key.clone(), Value::String(rules.redaction_text().to_string()));
                        self.record(Segment::Key(key), RedactionKind::ValueMasked, rule);
                    }
                    None => {
                        out.insert(key.clone(), prop.clone());
                    }
                },
            }
        }

        out
    }

    fn enter(&mut self, segment: Segment<'_>) {
        if let Some(report) = &mut self.report {
            report.path.push(escape(segment));
        }
    }

    fn leave(&mut self) {
        if let Some(report) = &mut self.report {
            report.path.pop();
        }
    }

    fn record(&mut self, segment: Segment<'_>, kind: RedactionKind, rule: RuleMatch<'_>) {
        if let Some(report) = &mut self.report {
            report.path.push(escape(segment));
            let path = report.pointer();
            report.path.pop();
            report.entries.push(RedactionInfo {
                path,
                kind,
                rule: rule.to_string(),
            });
        }
    }
}

fn escape(segment: Segment<'_>) -> String {
    match segment {
        Segment::Key(key) => key.replace('~', "~0").replace('/', "~1"),
        Segment::Index(index) => index.to_string(),
    }
}
