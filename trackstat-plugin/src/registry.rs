//! Action Registry

use crate::{ActionContext, ActionMeta, ActionPlugin};
use trackstat_core::ExportError;
use serde_json::{json, Value as JsonValue};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Central action registry, keyed by lowercase action key
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn ActionPlugin>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    pub fn with_action<A: ActionPlugin + 'static>(mut self, a: A) -> Self {
        let key = a.meta().key.to_lowercase();
        self.actions.insert(key, Arc::new(a));
        self
    }

    pub fn get_action(&self, key: &str) -> Option<&dyn ActionPlugin> {
        self.actions.get(&key.to_lowercase()).map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn execute(&self, key: &str, ctx: &mut ActionContext<'_>) -> Result<(), ExportError> {
        match self.get_action(key) {
            Some(action) => {
                tracing::debug!(action = action.meta().key, "executing action");
                action.execute(ctx)
            }
            None => {
                let similar = self.find_similar_actions(key);
                let mut err = ExportError::unknown_action(key);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_actions() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Registered keys similar to `key`, best match first
    fn find_similar_actions(&self, key: &str) -> Vec<String> {
        let key_lower = key.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.actions.keys()
            .filter_map(|name| {
                let score = Self::similarity_score(&key_lower, name);
                if score > 0 {
                    Some((name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared words of an underscore-separated key
        let query_words: HashSet<&str> = query.split('_').filter(|w| !w.is_empty()).collect();
        let shared = candidate.split('_').filter(|w| query_words.contains(w)).count();
        score += shared * 10;

        score
    }

    pub fn help(&self, key: Option<&str>) -> JsonValue {
        match key {
            Some(k) => self.help_for(k),
            None => self.general_help(),
        }
    }

    fn help_for(&self, key: &str) -> JsonValue {
        match self.get_action(key) {
            Some(a) => Self::action_to_help(a.meta()),
            None => json!({
                "error": format!("No action with key '{}'", key),
            }),
        }
    }

    fn general_help(&self) -> JsonValue {
        let mut keys: Vec<&str> = self.actions.values().map(|a| a.meta().key).collect();
        keys.sort_unstable();
        json!({
            "actions": keys,
            "usage": "Call help('ACTION_KEY') for detailed help.",
        })
    }

    fn action_to_help(meta: ActionMeta) -> JsonValue {
        json!({
            "key": meta.key,
            "name": meta.name,
            "type": "action",
            "description": meta.info_text,
            "icon": meta.icon,
        })
    }

    pub fn list_actions(&self) -> JsonValue {
        let mut metas: Vec<ActionMeta> = self.actions.values().map(|a| a.meta()).collect();
        metas.sort_by_key(|m| m.key);
        serde_json::to_value(metas).unwrap_or(JsonValue::Null)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
