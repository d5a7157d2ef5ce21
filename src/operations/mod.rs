//! Operations module
//!
//! One handler per interactive command: listing and editing quizzes,
//! testing a single quiz, and the play loop

pub mod check;
pub mod crud;
pub mod info;
pub mod play;

pub use check::*;
pub use crud::*;
pub use info::*;
pub use play::*;
