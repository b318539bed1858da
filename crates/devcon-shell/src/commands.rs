//! Demo debug commands for the devcon shell.
//!
//! These are the registration source the shell hands to the registry: a
//! handful of operations poking at a toy scene, enough to exercise every
//! coercion path from the keyboard.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use devcon_console::{ArgKind, ArgValue, CommandOutput, CommandSpec, EnumSpec};
use devcon_types::error::DevconError;

/// Mutable scene state the demo commands act on.
#[derive(Debug, Default)]
pub struct CubeState {
    pub spawned: bool,
    pub color: (u64, u64, u64),
    pub position: (f64, f64, f64),
}

/// Build the demo registration source.
pub fn demo_commands(cube: Rc<RefCell<CubeState>>) -> Vec<CommandSpec> {
    let color_enum = EnumSpec::new("Color", [("Red", 0), ("Green", 1), ("Blue", 2)]);

    let spawn_cube = {
        let cube = Rc::clone(&cube);
        move |_args: &[ArgValue]| {
            cube.borrow_mut().spawned = true;
            Ok(CommandOutput::Text("cube spawned".to_string()))
        }
    };

    let set_cube_color = {
        let cube = Rc::clone(&cube);
        move |args: &[ArgValue]| {
            let mut cube = cube.borrow_mut();
            if !cube.spawned {
                return Err(DevconError::Command("no cube spawned".to_string()));
            }
            cube.color = (
                args[0].as_uint().unwrap_or(0),
                args[1].as_uint().unwrap_or(0),
                args[2].as_uint().unwrap_or(0),
            );
            Ok(CommandOutput::None)
        }
    };

    let set_cube_position = {
        let cube = Rc::clone(&cube);
        move |args: &[ArgValue]| {
            let mut cube = cube.borrow_mut();
            if !cube.spawned {
                return Err(DevconError::Command("no cube spawned".to_string()));
            }
            cube.position = (
                args[0].as_float().unwrap_or(0.0),
                args[1].as_float().unwrap_or(0.0),
                args[2].as_float().unwrap_or(0.0),
            );
            Ok(CommandOutput::None)
        }
    };

    let echo_enum = {
        let spec = Arc::clone(&color_enum);
        move |args: &[ArgValue]| {
            let ordinal = args[0].as_enum().unwrap_or(0);
            let text = match spec.member_name(ordinal) {
                Some(name) => format!("{name} ({ordinal})"),
                None => format!("({ordinal})"),
            };
            Ok(CommandOutput::Text(text))
        }
    };

    vec![
        CommandSpec::new("Echo", |args: &[ArgValue]| {
            Ok(CommandOutput::Text(args[0].to_string()))
        })
        .summary("Echo Text")
        .param("text", ArgKind::Str),
        CommandSpec::new("Add", |args: &[ArgValue]| {
            let a = args[0].as_int().unwrap_or(0);
            let b = args[1].as_int().unwrap_or(0);
            Ok(CommandOutput::Text(format!("{}", a + b)))
        })
        .summary("Add two integers")
        .param("a", ArgKind::Int)
        .param("b", ArgKind::Int),
        CommandSpec::new("Greet", |args: &[ArgValue]| {
            Ok(CommandOutput::Text(format!("{}{}", args[0], args[1])))
        })
        .summary("Greet someone")
        .param("name", ArgKind::Str)
        .param_default("suffix", ArgKind::Str, ArgValue::Str("!".to_string())),
        CommandSpec::new("SpawnCube", spawn_cube).summary("Spawn the test cube"),
        CommandSpec::new("SetCubeColor", set_cube_color)
            .summary("Set the test cube's color")
            .param("r", ArgKind::UInt)
            .param("g", ArgKind::UInt)
            .param("b", ArgKind::UInt),
        CommandSpec::new("SetCubePosition", set_cube_position)
            .summary("Move the test cube")
            .param("x", ArgKind::Float)
            .param("y", ArgKind::Float)
            .param("z", ArgKind::Float),
        CommandSpec::new("EchoEnum", echo_enum)
            .summary("Echo a Color member")
            .param("color", ArgKind::Enum(color_enum)),
        CommandSpec::new("Fail", |args: &[ArgValue]| {
            Err(DevconError::Command(args[0].to_string()))
        })
        .summary("Raise a command fault")
        .param_default(
            "message",
            ArgKind::Str,
            ArgValue::Str("deliberate failure".to_string()),
        ),
    ]
}
