/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The selected image and its preview (upload.rs)
/// - The detection workflow state machine (workflow.rs)
/// - The onboarding guide (guide.rs)
/// - The settings database holding persisted flags (settings.rs)

pub mod data;
pub mod guide;
pub mod settings;
pub mod upload;
pub mod workflow;
