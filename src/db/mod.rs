pub mod codec;
pub mod pool;
pub mod schema;
pub mod store;

pub use codec::CodecError;
pub use store::UserStore;
