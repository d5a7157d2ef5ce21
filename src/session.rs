//! Interactive session: the command dispatcher
//!
//! The session owns the read-eval-print loop. It reads a command line,
//! dispatches it against the store, and always comes back to the prompt,
//! whatever the command did. Errors stop at this boundary as a single
//! error line; only the end of input (or `quit`) ends the session.

use crate::cli::Command;
use crate::error::QuizError;
use crate::operations;
use crate::output::Output;
use crate::prompt::Prompt;
use crate::store::QuizStore;
use anyhow::Result;
use rand::Rng;
use tracing::{debug, error};

/// Text shown when waiting for a command
pub const COMMAND_PROMPT: &str = "quiz > ";

/// Dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a command line
    Idle,
    /// A command is asking the user for more input
    AwaitingInput,
    /// `quit` or end of input; no further commands are accepted
    Terminated,
}

/// Read-eval-print loop over a quiz store
pub struct Session<'env, R: Rng> {
    store: &'env mut dyn QuizStore,
    prompt: &'env mut dyn Prompt,
    out: &'env mut dyn Output,
    rng: R,
    state: SessionState,
}

impl<'env, R: Rng> Session<'env, R> {
    /// Create an idle session
    pub fn new(
        store: &'env mut dyn QuizStore,
        prompt: &'env mut dyn Prompt,
        out: &'env mut dyn Output,
        rng: R,
    ) -> Self {
        Self {
            store,
            prompt,
            out,
            rng,
            state: SessionState::Idle,
        }
    }

    /// Current dispatcher state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Read and execute commands until the session terminates
    ///
    /// Ctrl-C at the command prompt only re-prompts; end of input ends the
    /// session like `quit`.
    pub fn run(&mut self) {
        while self.state != SessionState::Terminated {
            match self.prompt.ask(COMMAND_PROMPT) {
                Ok(line) => self.execute(&line),
                Err(QuizError::Interrupted) => {}
                Err(err) => {
                    debug!("Command prompt closed: {err}");
                    self.terminate();
                }
            }
        }
    }

    /// Execute one command line and return to `Idle`
    ///
    /// Does nothing once the session is terminated.
    pub fn execute(&mut self, line: &str) {
        if self.state == SessionState::Terminated {
            return;
        }

        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return,
            Err(err) => {
                self.out.errorlog(&err.to_string());
                return;
            }
        };

        debug!("Dispatching {command:?}");
        if command.awaits_input() {
            self.state = SessionState::AwaitingInput;
        }

        let result = self.dispatch(command);

        if self.state == SessionState::AwaitingInput {
            self.state = SessionState::Idle;
        }
        if let Err(err) = result {
            self.report(&err);
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Help => operations::help(self.out),
            Command::List => operations::list(self.store, self.out),
            Command::Show(id) => operations::show(self.store, self.out, id)?,
            Command::Add => operations::add(self.store, self.prompt, self.out)?,
            Command::Delete(id) => operations::delete(self.store, self.out, id)?,
            Command::Edit(id) => operations::edit(self.store, self.prompt, self.out, id)?,
            Command::Test(id) => {
                operations::test_quiz(self.store, self.prompt, self.out, id)?;
            }
            Command::Play => {
                let report =
                    operations::play(self.store.get_all(), &mut self.rng, self.prompt, self.out)?;
                debug!("Game over: {report:?}");
            }
            Command::Credits => operations::credits(self.out),
            Command::Quit => {
                self.out.log("Bye!", None);
                self.terminate();
            }
        }
        Ok(())
    }

    fn report(&mut self, err: &anyhow::Error) {
        match err.downcast_ref::<QuizError>() {
            Some(QuizError::InputClosed) => self.terminate(),
            Some(quiz_error) => self.out.errorlog(&quiz_error.to_string()),
            None => {
                error!("Unexpected error: {err:#}");
                self.out.errorlog(&format!("{err:#}"));
            }
        }
    }

    fn terminate(&mut self) {
        debug!("Session terminated");
        self.state = SessionState::Terminated;
    }
}
