//! In-process storage for link items.
//!
//! Items are seeded once from a JSON file and served read-only afterwards.

mod item_record;
mod memory_link_repository;

pub use item_record::ItemRecord;
pub use memory_link_repository::InMemoryLinkRepository;
