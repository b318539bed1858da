//! Debug command interpreter core.
//!
//! An application registers named operations once at startup; an operator
//! invokes them by typing short text lines. The core is a registry-based
//! dispatch system: input lines are tokenized with quote awareness, the
//! command name resolves case-insensitively to an overload set, tokens are
//! coerced to the selected overload's parameter kinds, and the callable is
//! invoked. A separate engine answers per-keystroke autocomplete queries
//! from a lazily-built prefix cache.
//!
//! The core neither reads input nor displays results; it exposes
//! [`Dispatcher::execute`] and [`AutocompleteEngine::suggest`] and leaves
//! transport and rendering to the caller.

mod autocomplete;
mod dispatch;
mod registry;
mod token;
mod value;

/// Ranked suggestions over a lazily-built prefix cache.
pub use autocomplete::AutocompleteEngine;
/// Minimum fragment length before suggestions are produced.
pub use autocomplete::MIN_PREFIX_LEN;
/// Executes input lines against a registry.
pub use dispatch::Dispatcher;
/// Result of dispatching one input line.
pub use dispatch::Outcome;
/// A single registered command overload.
pub use registry::CommandDescriptor;
/// The callable signature behind a descriptor.
pub use registry::CommandFn;
/// Output produced by an invoked command.
pub use registry::CommandOutput;
/// Immutable lookup table built once from a registration source.
pub use registry::CommandRegistry;
/// One registration-source entry.
pub use registry::CommandSpec;
/// One declared parameter of an overload.
pub use registry::ParameterSpec;
/// Quote-aware input-line tokenizer.
pub use token::tokenize;
/// The closed set of parameter kinds.
pub use value::ArgKind;
/// A coerced argument value.
pub use value::ArgValue;
/// Member table for an enumeration-kind parameter.
pub use value::EnumSpec;
