pub mod inmemory;

pub use inmemory::InMemoryMoodStore;
