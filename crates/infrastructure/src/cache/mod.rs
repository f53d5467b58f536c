mod store;

pub use store::TtlCache;
