/*!
 Contains functions that generate the correct path to the Lockdown preferences container.
*/

use std::path::PathBuf;

/// Location of the Lockdown group preferences, relative to the user's home directory
pub const DEFAULT_CONTAINER_PATH: &str = "Library/Containers/com.corybohon.Lockdown-Mac/Data/Library/Preferences/group.corybohon.Lockdown.plist";

/// Get the user's home directory
pub fn home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Get the default path Lockdown stores its items at on macOS
///
/// # Example:
///
/// ```
/// use lockdown_archive::util::dirs::default_container_path;
///
/// let path = default_container_path();
/// ```
pub fn default_container_path() -> Option<PathBuf> {
    home().map(|home| home.join(DEFAULT_CONTAINER_PATH))
}
