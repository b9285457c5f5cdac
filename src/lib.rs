pub mod scene;
pub mod render;
pub mod engine;

// Upload panel: deterministic mock report
pub mod analysis;
