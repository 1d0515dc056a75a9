#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mathspeak_core::errors::{RuleError, RuleStoreError};
use mathspeak_core::models::RuleContext;
use mathspeak_core::traits::{
    IRewriteRule, IRuleStore, PassCompletedEvent, ProcessingCompletedEvent,
    ProcessingFailedEvent, ProcessingStartedEvent, Rewrite, RuleAppliedEvent, RuleRef,
    SpeechEventHandler,
};

/// Test rule: replaces every occurrence of `from` with `to`, or fails.
#[derive(Debug)]
pub struct ScriptedRule {
    pub id: String,
    pub priority: i32,
    pub areas: Vec<String>,
    pub from: String,
    pub to: String,
    pub fail: bool,
}

impl IRewriteRule for ScriptedRule {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.id
    }
    fn priority(&self) -> i32 {
        self.priority
    }
    fn subject_areas(&self) -> &[String] {
        &self.areas
    }
    fn matches(&self, text: &str) -> bool {
        text.contains(&self.from)
    }
    fn apply(&self, text: &str, _context: &RuleContext) -> Result<Rewrite, RuleError> {
        if self.fail {
            return Err(RuleError::ApplicationFailed {
                rule_id: self.id.clone(),
                reason: "boom".to_string(),
            });
        }
        if text.contains(&self.from) {
            Ok(Rewrite::applied(text.replace(&self.from, &self.to)))
        } else {
            Ok(Rewrite::unchanged(text))
        }
    }
}

pub fn replace(id: &str, priority: i32, area: &str, from: &str, to: &str) -> RuleRef {
    Arc::new(ScriptedRule {
        id: id.to_string(),
        priority,
        areas: vec![area.to_string()],
        from: from.to_string(),
        to: to.to_string(),
        fail: false,
    })
}

pub fn failing(id: &str, area: &str) -> RuleRef {
    Arc::new(ScriptedRule {
        id: id.to_string(),
        priority: 0,
        areas: vec![area.to_string()],
        from: String::new(),
        to: String::new(),
        fail: true,
    })
}

/// Test rule that blocks for `delay` before rewriting `from` into `to`.
#[derive(Debug)]
pub struct SlowRule {
    pub inner: ScriptedRule,
    pub delay: Duration,
}

impl IRewriteRule for SlowRule {
    fn id(&self) -> &str {
        self.inner.id()
    }
    fn name(&self) -> &str {
        self.inner.name()
    }
    fn priority(&self) -> i32 {
        self.inner.priority()
    }
    fn subject_areas(&self) -> &[String] {
        self.inner.subject_areas()
    }
    fn matches(&self, text: &str) -> bool {
        self.inner.matches(text)
    }
    fn apply(&self, text: &str, context: &RuleContext) -> Result<Rewrite, RuleError> {
        std::thread::sleep(self.delay);
        self.inner.apply(text, context)
    }
}

pub fn slow(id: &str, priority: i32, from: &str, to: &str, delay: Duration) -> RuleRef {
    Arc::new(SlowRule {
        inner: ScriptedRule {
            id: id.to_string(),
            priority,
            areas: vec!["general".to_string()],
            from: from.to_string(),
            to: to.to_string(),
            fail: false,
        },
        delay,
    })
}

/// Store with fixed buckets that counts lookups.
#[derive(Debug, Default)]
pub struct StaticStore {
    buckets: HashMap<String, Vec<RuleRef>>,
    pub unavailable: bool,
    pub lookups: Mutex<Vec<String>>,
}

impl StaticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, area: &str, rules: Vec<RuleRef>) -> Self {
        self.buckets.insert(area.to_string(), rules);
        self
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl IRuleStore for StaticStore {
    async fn find_by_subject_area(
        &self,
        subject_area: &str,
    ) -> Result<Vec<RuleRef>, RuleStoreError> {
        self.lookups.lock().unwrap().push(subject_area.to_string());
        if self.unavailable {
            return Err(RuleStoreError::Unavailable {
                reason: "store offline".to_string(),
            });
        }
        Ok(self.buckets.get(subject_area).cloned().unwrap_or_default())
    }
}

/// Handler that records a line per event.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub events: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, line: String) {
        self.events.lock().unwrap().push(line);
    }
}

impl SpeechEventHandler for RecordingHandler {
    fn on_processing_started(&self, event: &ProcessingStartedEvent) {
        self.push(format!("started:{}", event.subject_area));
    }
    fn on_rule_applied(&self, event: &RuleAppliedEvent) {
        self.push(format!("rule:{}:{}", event.rule_id, event.pass));
    }
    fn on_pass_completed(&self, event: &PassCompletedEvent) {
        self.push(format!("pass:{}:{}", event.pass, event.rules_applied));
    }
    fn on_processing_completed(&self, event: &ProcessingCompletedEvent) {
        self.push(format!("completed:{}", event.passes));
    }
    fn on_processing_failed(&self, event: &ProcessingFailedEvent) {
        self.push(format!("failed:{}:{}", event.stage, event.error_code));
    }
}

pub fn ids(rules: &[RuleRef]) -> Vec<&str> {
    rules.iter().map(|r| r.id()).collect()
}
