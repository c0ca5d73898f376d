//! Static copy for the explanatory blocks.

use crate::models::info::{InfoBlock, INFO_BLOCKS};

#[tauri::command]
pub fn get_info_blocks() -> Vec<InfoBlock> {
    INFO_BLOCKS.to_vec()
}
