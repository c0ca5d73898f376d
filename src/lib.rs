use tauri::Manager;

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

use commands::IntakeState;
use services::preview::PREVIEW_SCHEME;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            app.manage(IntakeState::new());
            Ok(())
        })
        .register_uri_scheme_protocol(PREVIEW_SCHEME, |ctx, request| {
            let state = ctx.app_handle().state::<IntakeState>();
            services::preview::respond(&state.previews, request.uri().path())
        })
        .invoke_handler(tauri::generate_handler![
            commands::files::add_dropped_files,
            commands::files::list_files,
            commands::files::release_preview,
            commands::drag::set_drop_zone,
            commands::drag::drag_over,
            commands::drag::drag_leave,
            commands::drag::drag_drop,
            commands::picker::pick_files,
            commands::info::get_info_blocks,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
