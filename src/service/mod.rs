pub mod bootstrap;

pub use bootstrap::prepare_state;
