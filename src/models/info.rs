//! Static informational copy rendered under the uploader.

use serde::Serialize;

/// One explanatory block. Fixed copy, no parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoBlock {
    pub title: &'static str,
    pub copy: &'static str,
}

/// The three explanatory blocks shown below the preview grid.
pub const INFO_BLOCKS: [InfoBlock; 3] = [
    InfoBlock {
        title: "Why this demo?",
        copy: "You asked if you can upload a picture here. This playground does not \
               accept uploads directly, but this page shows how a drag-and-drop uploader \
               could work if the platform enabled image sharing.",
    },
    InfoBlock {
        title: "What actually happens?",
        copy: "The file never leaves your machine. Everything stays local. We render a \
               preview so you understand what information could be captured if uploads \
               were supported.",
    },
    InfoBlock {
        title: "What if I need to share?",
        copy: "Use an external host (Google Drive, Dropbox, Imgur) and paste the \
               shareable link in the chat. That keeps your files in your control while \
               still letting collaborators see them.",
    },
];
