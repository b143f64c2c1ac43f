//! Prompt texts shown during interactive resolution.
//!
//! Templates substitute `{title}` with the slot's display title. The choice
//! list template also substitutes `{choices}` with the numbered items.

use serde::{Deserialize, Serialize};

use crate::gateway::NONE;
use crate::slot::ParameterSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    /// First request for a value when the slot declares no prompt.
    pub ask_value: String,
    /// Follow-up after a multi-word reply yielded nothing.
    pub ask_again: String,
    /// Request used when statement parsing is disabled.
    pub ask_unparsed: String,
    /// Disambiguation question placed above the numbered choices.
    pub choose: String,
    /// Label of the trailing "none of these" choice.
    pub none_label: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            ask_value: "What is the {title}?".to_string(),
            ask_again: "Please enter just the {title}.".to_string(),
            ask_unparsed: "Please enter the {title}.".to_string(),
            choose: "Which {title} did you mean?\n{choices}".to_string(),
            none_label: NONE.to_string(),
        }
    }
}

impl Prompts {
    /// The slot's own prompt, or the generic request for its title.
    pub fn value(&self, slot: &ParameterSlot) -> String {
        match &slot.prompt {
            Some(prompt) => prompt.clone(),
            None => fill(&self.ask_value, slot),
        }
    }

    pub fn again(&self, slot: &ParameterSlot) -> String {
        fill(&self.ask_again, slot)
    }

    pub fn unparsed(&self, slot: &ParameterSlot) -> String {
        match &slot.prompt {
            Some(prompt) => prompt.clone(),
            None => fill(&self.ask_unparsed, slot),
        }
    }

    /// Numbered choices `1..=n` followed by the none-of-these item `n + 1`.
    pub fn choices(&self, slot: &ParameterSlot, choices: &[String]) -> String {
        let mut items: Vec<String> = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| format!("{}. {}", index + 1, choice))
            .collect();
        items.push(format!("{}. {}", choices.len() + 1, self.none_label));

        fill(&self.choose, slot).replace("{choices}", &items.join("\n"))
    }
}

fn fill(template: &str, slot: &ParameterSlot) -> String {
    template.replace("{title}", slot.display_title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_prefers_the_declared_prompt() {
        let prompts = Prompts::default();
        let slot = ParameterSlot::new("databasename", "entity");
        assert_eq!(prompts.value(&slot), "What is the databasename?");

        let slot = slot.with_prompt("Which database should I use?");
        assert_eq!(prompts.value(&slot), "Which database should I use?");
        assert_eq!(prompts.again(&slot), "Please enter just the databasename.");
    }

    #[test]
    fn it_numbers_choices_with_a_trailing_none() {
        let prompts = Prompts::default();
        let slot = ParameterSlot::new("resource", "keyword").with_title("resource type");
        let rendered = prompts.choices(&slot, &["memory".to_string(), "disk".to_string()]);
        assert_eq!(
            rendered,
            "Which resource type did you mean?\n1. memory\n2. disk\n3. none"
        );
    }
}
