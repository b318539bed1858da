//! Command dispatch: tokenize, resolve, coerce, invoke.
//!
//! Dispatch is permissive about bad arguments: a token that fails to coerce
//! is logged, substituted with the kind's zero value, and the invocation
//! still proceeds. Faults raised by the invoked operation itself are caught
//! and reported, never propagated.

use devcon_types::error::DevconError;

use crate::registry::{CommandDescriptor, CommandOutput, CommandRegistry};
use crate::token::tokenize;

/// Result of dispatching one input line.
#[derive(Debug)]
pub enum Outcome<'r> {
    /// The line held no tokens; nothing to do.
    Empty,
    /// The command ran and every argument coerced cleanly.
    Invoked {
        command: &'r CommandDescriptor,
        output: CommandOutput,
    },
    /// No registered command matches the given name.
    NotFound { name: String },
    /// The name matched but no overload accepts the argument count.
    /// `candidate` is the first overload found, for signature reporting.
    ArityMismatch {
        candidate: &'r CommandDescriptor,
        given: usize,
    },
    /// An argument failed to coerce. The command still ran with the kind's
    /// zero value substituted at `index`; `raw` is the offending token.
    ArgumentError {
        command: &'r CommandDescriptor,
        index: usize,
        raw: String,
        output: CommandOutput,
    },
    /// The invoked operation itself raised a fault.
    InvocationFailed {
        command: &'r CommandDescriptor,
        error: DevconError,
    },
}

/// Executes input lines against a registry.
pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Parse and execute one command line.
    ///
    /// Overload selection prefers an exact parameter-count match; among
    /// default-fill candidates the one needing the fewest fills wins, and
    /// remaining ties resolve by registration order.
    pub fn execute(&self, input: &str) -> Outcome<'r> {
        let tokens = tokenize(input);
        let Some((name, arg_tokens)) = tokens.split_first() else {
            return Outcome::Empty;
        };

        let overloads = self.registry.find(name);
        if overloads.is_empty() {
            return Outcome::NotFound { name: name.clone() };
        }

        let given = arg_tokens.len();
        let Some(command) = overloads
            .iter()
            .copied()
            .filter(|d| d.accepts_arity(given))
            .min_by_key(|d| d.arity())
        else {
            return Outcome::ArityMismatch {
                candidate: overloads[0],
                given,
            };
        };

        let mut args = Vec::with_capacity(command.arity());
        let mut first_error: Option<(usize, String)> = None;
        for (i, param) in command.params().iter().enumerate() {
            match arg_tokens.get(i) {
                Some(raw) => match param.kind.parse(raw) {
                    Some(value) => args.push(value),
                    None => {
                        log::warn!(
                            "cannot parse {raw:?} as {} for {}",
                            param.kind.display_name(),
                            command.signature(),
                        );
                        if first_error.is_none() {
                            first_error = Some((i, raw.clone()));
                        }
                        args.push(param.kind.zero());
                    },
                },
                None => args.push(
                    param
                        .default
                        .clone()
                        .expect("missing trailing parameter carries a default"),
                ),
            }
        }

        match command.invoke(&args) {
            Err(error) => Outcome::InvocationFailed { command, error },
            Ok(output) => match first_error {
                Some((index, raw)) => Outcome::ArgumentError {
                    command,
                    index,
                    raw,
                    output,
                },
                None => Outcome::Invoked { command, output },
            },
        }
    }
}
