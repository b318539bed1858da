//! Command registry: descriptors, registration source, and lookup.
//!
//! The registry is built exactly once from a registration source and never
//! mutated afterward. Command names match case-insensitively; descriptors
//! sharing a name are overloads distinguished by parameter count.

use std::collections::HashMap;
use std::fmt;

use devcon_types::error::Result;

use crate::value::{ArgKind, ArgValue};

/// Output produced by an invoked command.
///
/// The core does not display anything; the caller decides what to do with
/// this.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output.
    None,
}

/// The callable behind a command descriptor.
///
/// Receives the coerced argument list, one value per declared parameter.
/// A returned error is reported as an invocation failure and never
/// propagated past the dispatcher.
pub type CommandFn = Box<dyn Fn(&[ArgValue]) -> Result<CommandOutput>>;

/// One declared parameter of a command overload.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name, used only in signature displays.
    pub name: String,
    pub kind: ArgKind,
    /// Value used when the invocation omits this trailing parameter.
    pub default: Option<ArgValue>,
}

impl ParameterSpec {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// One registration-source entry: a named overload plus its callable.
///
/// Built fluently and handed to [`CommandRegistry::build`]:
///
/// ```
/// # use devcon_console::{ArgKind, ArgValue, CommandOutput, CommandSpec};
/// let spec = CommandSpec::new("greet", |args| {
///     Ok(CommandOutput::Text(format!("{}{}", args[0], args[1])))
/// })
/// .summary("Greet someone")
/// .param("name", ArgKind::Str)
/// .param_default("suffix", ArgKind::Str, ArgValue::Str("!".into()));
/// # let _ = spec;
/// ```
pub struct CommandSpec {
    name: String,
    summary: String,
    params: Vec<ParameterSpec>,
    handler: CommandFn,
}

impl CommandSpec {
    /// Start a registration entry for `name`.
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(&[ArgValue]) -> Result<CommandOutput> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            params: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// One-line description shown next to suggestions.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Append a required parameter.
    pub fn param(mut self, name: impl Into<String>, kind: ArgKind) -> Self {
        self.params.push(ParameterSpec {
            name: name.into(),
            kind,
            default: None,
        });
        self
    }

    /// Append a parameter with a default value.
    pub fn param_default(
        mut self,
        name: impl Into<String>,
        kind: ArgKind,
        default: ArgValue,
    ) -> Self {
        self.params.push(ParameterSpec {
            name: name.into(),
            kind,
            default: Some(default),
        });
        self
    }
}

/// An immutable record describing one invocable command overload.
pub struct CommandDescriptor {
    name: String,
    summary: String,
    params: Vec<ParameterSpec>,
    handler: CommandFn,
}

impl CommandDescriptor {
    /// The command name as registered (display casing preserved).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Declared parameters, in order.
    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether `given` positional arguments can satisfy this overload:
    /// either an exact count match, or fewer with every missing trailing
    /// parameter carrying a default.
    pub fn accepts_arity(&self, given: usize) -> bool {
        given == self.params.len()
            || (given < self.params.len() && self.params[given..].iter().all(ParameterSpec::has_default))
    }

    /// Invoke the callable with an already-coerced argument list.
    pub fn invoke(&self, args: &[ArgValue]) -> Result<CommandOutput> {
        (self.handler)(args)
    }

    /// Human-readable signature, e.g. `setcubecolor(uint r, uint g, uint b)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.kind.display_name(), p.name))
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("arity", &self.params.len())
            .finish_non_exhaustive()
    }
}

/// Immutable table of registered commands.
///
/// Built once before the first dispatch or suggestion and never mutated
/// afterward. Enumeration order is registration order; a later duplicate
/// `(name, arity)` registration replaces the earlier descriptor in its
/// original slot.
pub struct CommandRegistry {
    order: Vec<CommandDescriptor>,
    by_name: HashMap<String, Vec<usize>>,
}

impl CommandRegistry {
    /// Build the registry from a registration source.
    pub fn build(source: impl IntoIterator<Item = CommandSpec>) -> Self {
        let mut order: Vec<CommandDescriptor> = Vec::new();
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for spec in source {
            let desc = CommandDescriptor {
                name: spec.name,
                summary: spec.summary,
                params: spec.params,
                handler: spec.handler,
            };
            let key = desc.name.to_lowercase();
            let slots = by_name.entry(key).or_default();
            match slots.iter().find(|&&i| order[i].arity() == desc.arity()) {
                Some(&idx) => order[idx] = desc,
                None => {
                    slots.push(order.len());
                    order.push(desc);
                },
            }
        }

        Self { order, by_name }
    }

    /// All overloads registered under `name`, case-insensitive. Empty when
    /// the name is unknown.
    pub fn find(&self, name: &str) -> Vec<&CommandDescriptor> {
        match self.by_name.get(&name.to_lowercase()) {
            Some(idxs) => idxs.iter().map(|&i| &self.order[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Every descriptor in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.order.iter()
    }

    /// Number of registered descriptors (overloads counted separately).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
