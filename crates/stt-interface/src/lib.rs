pub mod listen;

pub use listen::{Alternatives, Channel, ListenResponse, Metadata, Results, Utterance, Word};
