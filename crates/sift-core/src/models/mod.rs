pub mod corpus;
pub mod suggestion;

pub use corpus::Corpus;
pub use suggestion::{ActionType, Suggestion, SuggestionId};
