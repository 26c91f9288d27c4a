/// UI building blocks
///
/// - The thumbnail gallery grid (gallery.rs)
/// - The modal overlay layer (modal.rs)

pub mod gallery;
pub mod modal;
