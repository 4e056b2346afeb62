/// UI building blocks
///
/// This module handles:
/// - The scaled image view (viewer.rs)
/// - The colored rating bar (viewer.rs)

pub mod viewer;
