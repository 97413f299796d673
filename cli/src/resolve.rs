use crate::description::{Described, Permissions};
use cmdgraft::{CommandNode, Domain, Mapper, Requirement};
use std::fmt;

/// Parsers a client knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentParser {
    Bool,
    Integer,
    Float,
    /// A single unquoted word.
    Word,
    /// A word or a quoted phrase.
    String,
    /// The rest of the input.
    Greedy,
    Entity,
    Position,
}

impl ArgumentParser {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "word" => Self::Word,
            "string" => Self::String,
            "greedy" => Self::Greedy,
            "entity" => Self::Entity,
            "position" => Self::Position,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Word => "word",
            Self::String => "string",
            Self::Greedy => "greedy",
            Self::Entity => "entity",
            Self::Position => "position",
        }
    }
}

impl fmt::Display for ArgumentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a client gets completions for an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    /// Round-trip to the server for every completion request.
    AskServer,
    /// A completion list the client already has, by name.
    Named(String),
}

impl SuggestionSource {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ask_server" => Self::AskServer,
            other => Self::Named(other.to_string()),
        }
    }
}

/// Commands ready to be sent to a client.
#[derive(Debug, Clone)]
pub struct Resolved;

impl Domain for Resolved {
    type Context = Permissions;
    type ArgumentType = ArgumentParser;
    type Suggestions = SuggestionSource;
}

/// Resolves type and suggestion names. Requirements carry over unchanged.
#[derive(Debug, Default)]
pub struct ResolveMapper;

impl Mapper<Described, Resolved> for ResolveMapper {
    fn map_argument(
        &mut self,
        name: &str,
        ty: &String,
        suggestions: Option<&String>,
    ) -> CommandNode<Resolved> {
        let parser = ArgumentParser::from_name(ty).unwrap_or_else(|| {
            tracing::warn!(argument = name, ty = %ty, "unknown argument type, using string");
            ArgumentParser::String
        });
        let node = CommandNode::argument(name, parser);
        match suggestions {
            Some(source) => node.with_suggestions(SuggestionSource::from_name(source)),
            None => node,
        }
    }

    fn map_requirement(
        &mut self,
        requirement: &Requirement<Permissions>,
    ) -> Option<Requirement<Permissions>> {
        Some(requirement.clone())
    }
}
