//! Message assembly: turning values into text and joining fragments.

mod buffer;
mod stringify;

pub use buffer::MessageBuffer;
pub use stringify::Stringify;
