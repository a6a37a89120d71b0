//! Game engine
//!
//! Everything needed to run one puzzle: the board, the ledger, puzzle
//! selection, the wheel and the per-round state machine. No I/O happens here.

pub mod ledger;
pub mod reveal;
pub mod selector;
pub mod session;
pub mod wheel;

pub use ledger::{Ledger, PENALTY_AMOUNT, PenaltyApplied};
pub use reveal::{AvailableLetters, Board, Cell, PLACEHOLDER};
pub use selector::{Corpus, CorpusError, Puzzle};
pub use session::{
    GameError, RoundEvent, RoundInput, RoundReport, Session, SpinResult, TurnPhase, Winner,
};
pub use wheel::{STANDARD_WEDGES, ScriptedWheel, SpinSource, Wedge, Wheel};
