use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fas fa-shield-alt"></i> {" Fake News & AI Content Detector"}</h1>
            <p class="subtitle">{"Check news text, images, audio, video, or writing for signs of fabrication"}</p>
        </header>
    }
}
