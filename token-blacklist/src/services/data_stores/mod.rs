pub mod hashmap_blacklist_store;

pub use hashmap_blacklist_store::HashmapBlacklistStore;
