//! Help and credits

use crate::output::{Color, Output};

const HELP: &[&str] = &[
    " h|help - Show this help.",
    " list - List the existing quizzes.",
    " show <id> - Show the question and the answer of the given quiz.",
    " add - Add a new quiz interactively.",
    " delete <id> - Delete the given quiz.",
    " edit <id> - Edit the given quiz.",
    " test <id> - Test the given quiz.",
    " p|play - Play: answer every quiz in random order.",
    " credits - Credits.",
    " q|quit - Quit the program.",
];

/// Print the command summary
pub fn help(out: &mut dyn Output) {
    out.log("Commands:", None);
    for line in HELP {
        out.log(line, None);
    }
}

/// Print the authors
pub fn credits(out: &mut dyn Output) {
    out.log("Authors:", None);
    for author in env!("CARGO_PKG_AUTHORS").split(':') {
        out.log(author, Some(Color::Green));
    }
}
