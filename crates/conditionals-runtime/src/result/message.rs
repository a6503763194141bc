//! Human-readable condition explanations
//!
//! Messages read like `OnIntegerProperty (app.count=5) matched` or
//! `OnStringProperty (app.[a, b]=x) did not find properties 'a', 'b'`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the messages of several condition instances
pub const MESSAGE_SEPARATOR: &str = "; ";

/// Explanation of a condition outcome, one part per evaluated instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionMessage {
    parts: Vec<String>,
}

impl ConditionMessage {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start a message for `condition`, e.g. `OnIntegerProperty`
    pub fn for_condition(condition: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            condition: condition.into(),
            details: String::new(),
        }
    }

    /// Message with a single free-form part
    pub fn of(text: impl Into<String>) -> Self {
        Self {
            parts: vec![text.into()],
        }
    }

    /// Concatenate messages in order, skipping empty ones
    pub fn join<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = ConditionMessage>,
    {
        Self {
            parts: messages.into_iter().flat_map(|m| m.parts).collect(),
        }
    }

    /// Append another message after this one
    pub fn and(mut self, other: ConditionMessage) -> Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for ConditionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(MESSAGE_SEPARATOR))
    }
}

/// How items are rendered in a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    Normal,
    Quoted,
}

impl ItemStyle {
    fn apply(self, item: &str) -> String {
        match self {
            ItemStyle::Normal => item.to_string(),
            ItemStyle::Quoted => format!("'{}'", item),
        }
    }
}

/// Builder for a single message part
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    condition: String,
    details: String,
}

impl MessageBuilder {
    /// Condition details shown after the name, typically the spec display
    pub fn with_details(mut self, details: impl fmt::Display) -> Self {
        self.details = details.to_string();
        self
    }

    pub fn found(self, singular: &'static str, plural: &'static str) -> ItemsBuilder {
        self.items_builder("found", singular, plural)
    }

    pub fn did_not_find(self, singular: &'static str, plural: &'static str) -> ItemsBuilder {
        self.items_builder("did not find", singular, plural)
    }

    pub fn matched(self) -> ConditionMessage {
        self.because("matched")
    }

    pub fn because(self, reason: impl fmt::Display) -> ConditionMessage {
        ConditionMessage::of(format!("{} {}", self.head(), reason))
    }

    fn items_builder(self, reason: &'static str, singular: &'static str, plural: &'static str) -> ItemsBuilder {
        ItemsBuilder {
            builder: self,
            reason,
            singular,
            plural,
        }
    }

    fn head(&self) -> String {
        if self.details.is_empty() {
            self.condition.clone()
        } else {
            format!("{} {}", self.condition, self.details)
        }
    }
}

/// Second half of `found`/`did not find` messages
#[derive(Debug, Clone)]
pub struct ItemsBuilder {
    builder: MessageBuilder,
    reason: &'static str,
    singular: &'static str,
    plural: &'static str,
}

impl ItemsBuilder {
    pub fn items<S: AsRef<str>>(self, style: ItemStyle, items: &[S]) -> ConditionMessage {
        let text = self.describe(style, items);
        self.builder.because(text)
    }

    /// Render the clause alone, e.g. `did not find properties 'a', 'b'`
    pub fn describe<S: AsRef<str>>(&self, style: ItemStyle, items: &[S]) -> String {
        let noun = if items.len() == 1 { self.singular } else { self.plural };
        let rendered: Vec<String> = items.iter().map(|item| style.apply(item.as_ref())).collect();
        let mut text = format!("{} {}", self.reason, noun);
        if !rendered.is_empty() {
            text.push(' ');
            text.push_str(&rendered.join(", "));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_and_plural_items() {
        let single = ConditionMessage::for_condition("OnStringProperty")
            .with_details("(app.name=demo)")
            .did_not_find("property", "properties")
            .items(ItemStyle::Quoted, &["name"]);
        assert_eq!(single.to_string(), "OnStringProperty (app.name=demo) did not find property 'name'");

        let plural = ConditionMessage::for_condition("OnStringProperty")
            .did_not_find("property", "properties")
            .items(ItemStyle::Quoted, &["a", "b"]);
        assert_eq!(plural.to_string(), "OnStringProperty did not find properties 'a', 'b'");
    }

    #[test]
    fn test_describe_renders_clause_only() {
        let clause = ConditionMessage::for_condition("OnIntegerProperty")
            .found("property", "properties")
            .describe(ItemStyle::Quoted, &["a", "b"]);
        assert_eq!(clause, "found properties 'a', 'b'");
    }

    #[test]
    fn test_found_normal_style() {
        let message = ConditionMessage::for_condition("OnOs")
            .found("OS", "OS")
            .items(ItemStyle::Normal, &["linux"]);
        assert_eq!(message.to_string(), "OnOs found OS linux");
    }

    #[test]
    fn test_join_and_serialize() {
        let joined = ConditionMessage::join([
            ConditionMessage::of("first"),
            ConditionMessage::empty(),
            ConditionMessage::of("second"),
        ]);
        assert_eq!(joined.parts().len(), 2);
        assert_eq!(joined.to_string(), "first; second");
        assert_eq!(serde_json::to_string(&joined).unwrap(), r#"["first","second"]"#);
    }

    #[test]
    fn test_and_appends() {
        let message = ConditionMessage::of("a").and(ConditionMessage::of("b"));
        assert_eq!(message.to_string(), "a; b");
        assert!(ConditionMessage::empty().is_empty());
    }
}
