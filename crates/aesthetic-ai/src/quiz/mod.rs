//! Quiz classifier: weighted multi-axis answers in, a primary axis with an
//! optional secondary tendency out.

mod classifier;
mod domain;


pub use classifier::{QuizClassifier, SECONDARY_THRESHOLD};
pub use domain::{
    Answer, AnswerSet, AxisSpec, DefinitionError, ProfileSummary, Question, QuizCatalog,
    QuizDefinition, QuizResultPayload, SkinProfile,
};
