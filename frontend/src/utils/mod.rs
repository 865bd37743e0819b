pub mod capture;
pub mod debounce;
pub mod form;
pub mod message;
pub mod time;

pub use debounce::{Debouncer, RequestSequence};
pub use form::FormError;
pub use message::MessageState;
