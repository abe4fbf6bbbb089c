use log::info;
use std::process::Command;
use strokecore::library::GestureAction;
use strokecore::prelude::{ActionExecutor, GestureError, GestureResult};

/// Launches a matched gesture's configured command as a detached child
/// process. An all-empty action is a no-op.
pub struct ProcessLauncher;

impl ActionExecutor for ProcessLauncher {
    fn execute(&self, action: &GestureAction) -> GestureResult<()> {
        if action.is_empty() {
            info!("matched gesture has no action configured");
            return Ok(());
        }

        let mut command = Command::new(&action.path);
        if !action.arguments.is_empty() {
            command.args(action.arguments.split_whitespace());
        }
        if !action.start_in.is_empty() {
            command.current_dir(&action.start_in);
        }

        let child = command
            .spawn()
            .map_err(|e| GestureError::Action(format!("launching {}: {}", action.path, e)))?;
        info!("launched {} (pid {})", action.path, child.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_action_is_a_noop() {
        assert!(ProcessLauncher.execute(&GestureAction::default()).is_ok());
    }

    #[test]
    fn missing_executable_is_an_action_error() {
        let action = GestureAction::new("/definitely/not/a/real/binary", "", "");
        let err = ProcessLauncher.execute(&action).unwrap_err();
        assert!(matches!(err, GestureError::Action(_)));
    }
}
