pub mod hashmap_session_store;
pub mod hashmap_user_store;

pub use hashmap_session_store::HashMapSessionStore;
pub use hashmap_user_store::HashMapUserStore;
