mod loader;

pub use loader::{load_dataset, spawn_dataset_loader};
