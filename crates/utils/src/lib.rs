mod display_outcome;
mod display_version;
mod list_dir_entries;
mod normalize_target_dir;

pub use display_outcome::display_outcome;
pub use display_version::display_version;
pub use list_dir_entries::list_dir_entries;
pub use normalize_target_dir::normalize_target_dir;
