use shared::{AnalysisMode, MediaKind};
use web_sys::FileList;

/// First picked file `kind` can accept; files with no reported type pass.
pub fn first_file_of_kind(file_list: &FileList, kind: MediaKind) -> Option<web_sys::File> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| kind.accepts_mime(&file.type_()))
}

pub fn mode_icon(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Text => "fa-newspaper",
        AnalysisMode::Image => "fa-image",
        AnalysisMode::Audio => "fa-microphone",
        AnalysisMode::Video => "fa-video",
        AnalysisMode::Ai => "fa-robot",
    }
}

pub fn mode_tab_label(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Text => "News Text",
        AnalysisMode::Image => "Image",
        AnalysisMode::Audio => "Audio",
        AnalysisMode::Video => "Video",
        AnalysisMode::Ai => "AI Detector",
    }
}
