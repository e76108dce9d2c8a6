mod model;
mod storage;

pub use model::{SettingsData, SidebarSettingsData};
pub use storage::{
    SettingsLoad, SettingsLoadStatus, load_settings, load_settings_from_path,
    save_settings, save_settings_to_path,
};
