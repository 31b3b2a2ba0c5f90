use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::error::DomainError;

/// String-keyed values handed to the template renderer for one artifact.
///
/// ## Why BTreeMap
///
/// Keys iterate in sorted order, so debug dumps and renderer inputs are
/// stable between runs.
///
/// Values are JSON values: strings for keys and component names, arrays of
/// serialised `FieldDescriptor`s for `fields` / `columns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationContext {
    values: BTreeMap<String, Value>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Insert any serialisable value (descriptor lists, flags).
    pub fn insert_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), DomainError> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|e| DomainError::InvalidContextValue {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.values.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read_back() {
        let mut ctx = GenerationContext::new();
        ctx.insert("className", "Person");
        ctx.insert_serialized("columns", &vec!["a", "b"]).unwrap();

        assert_eq!(ctx.get_str("className"), Some("Person"));
        assert_eq!(ctx.get("columns").unwrap().as_array().unwrap().len(), 2);
        assert!(ctx.get_str("columns").is_none());
        assert!(!ctx.contains("missing"));
    }

    #[test]
    fn keys_are_sorted() {
        let mut ctx = GenerationContext::new();
        ctx.insert("package", "p");
        ctx.insert("className", "C");
        ctx.insert("entityImport", "import x;");
        assert_eq!(
            ctx.keys().collect::<Vec<_>>(),
            ["className", "entityImport", "package"]
        );
    }
}
