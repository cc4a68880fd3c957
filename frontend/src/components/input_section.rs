use super::super::Model;
use super::super::Msg;
use super::utils::{first_file_of_kind, mode_icon, mode_tab_label};
use shared::request::{MIN_AI_CONTENT_CHARS, MIN_TEXT_CHARS};
use shared::{AnalysisMode, ContentType, MediaKind};
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub(crate) fn render_input_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="card input-card">
            <div class="card-header">
                { render_mode_tabs(model, ctx) }
            </div>
            <div class="card-body tab-content">
                {
                    match model.mode {
                        AnalysisMode::Text => render_text_panel(model, ctx),
                        AnalysisMode::Ai => render_ai_panel(model, ctx),
                        AnalysisMode::Image => render_media_panel(model, ctx, MediaKind::Image),
                        AnalysisMode::Audio => render_media_panel(model, ctx, MediaKind::Audio),
                        AnalysisMode::Video => render_media_panel(model, ctx, MediaKind::Video),
                    }
                }
                { render_actions(model, ctx) }
            </div>
        </div>
    }
}

fn render_mode_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <ul class="nav nav-tabs card-header-tabs" role="tablist">
            { for AnalysisMode::iter().map(|mode| {
                let is_active = model.mode == mode;
                html! {
                    <li class="nav-item" role="presentation" key={mode.to_string()}>
                        <button
                            id={format!("{}-tab", mode)}
                            class={classes!("nav-link", is_active.then_some("active"))}
                            type="button"
                            role="tab"
                            onclick={link.callback(move |_| Msg::SelectMode(mode))}
                        >
                            <i class={classes!("fas", mode_icon(mode), "me-2")}></i>
                            { mode_tab_label(mode) }
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}

fn render_text_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let oninput = ctx.link().callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetText(area.value())
    });
    let length = model.form.text.trim().chars().count();

    html! {
        <div class="tab-pane active" id="text-pane">
            <label for="newsInput" class="form-label">{"News article or headline"}</label>
            <textarea
                id="newsInput"
                ref={model.text_input.clone()}
                class="form-control"
                rows="8"
                placeholder="Paste the news text you want to verify..."
                value={model.form.text.clone()}
                {oninput}
            />
            <small class="form-text text-muted">
                { format!("{} characters (minimum {}) · Ctrl+Enter to analyze", length, MIN_TEXT_CHARS) }
            </small>
        </div>
    }
}

fn render_ai_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let oninput = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetAiContent(area.value())
    });
    let on_type_change = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetContentType(ContentType::from_str(&select.value()).unwrap_or_default())
    });
    let on_deep_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDeepAnalysis(input.checked())
    });
    let length = model.form.ai_content.trim().chars().count();

    html! {
        <div class="tab-pane active" id="ai-pane">
            <label for="aiContentInput" class="form-label">{"Content to check for AI authorship"}</label>
            <textarea
                id="aiContentInput"
                class="form-control"
                rows="8"
                placeholder="Paste an essay, post, or code snippet..."
                value={model.form.ai_content.clone()}
                {oninput}
            />
            <small class="form-text text-muted">
                { format!("{} characters (minimum {})", length, MIN_AI_CONTENT_CHARS) }
            </small>
            <div class="row mt-3">
                <div class="col-md-6">
                    <label for="aiContentType" class="form-label">{"Content type"}</label>
                    <select id="aiContentType" class="form-select" onchange={on_type_change}>
                        { for ContentType::iter().map(|content_type| html! {
                            <option
                                value={content_type.to_string()}
                                selected={content_type == model.form.ai_content_type}
                            >
                                { content_type.label() }
                            </option>
                        })}
                    </select>
                </div>
                <div class="col-md-6 form-check form-switch mt-4">
                    <input
                        id="deepAnalysis"
                        class="form-check-input"
                        type="checkbox"
                        checked={model.form.deep_analysis}
                        onchange={on_deep_change}
                    />
                    <label for="deepAnalysis" class="form-check-label">{"Deep analysis"}</label>
                </div>
            </div>
        </div>
    }
}

fn render_media_panel(model: &Model, ctx: &Context<Model>, kind: MediaKind) -> Html {
    let link = ctx.link();
    let input = model.form.media.get(&kind);

    let on_file_change = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().and_then(|files| first_file_of_kind(&files, kind));

        input.set_value("");

        match picked {
            Some(file) => Msg::SetMediaFile(kind, file),
            None => Msg::SetError(format!("Please choose a valid {} file.", kind)),
        }
    });
    let on_context_input = link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetMediaContext(kind, area.value())
    });

    let file_name = input
        .and_then(|i| i.file.as_ref())
        .map(|file| file.name());
    let context = input.map(|i| i.context.clone()).unwrap_or_default();

    html! {
        <div class="tab-pane active" id={format!("{}-pane", kind)}>
            <label for={format!("{}Input", kind)} class="form-label">
                { format!("Upload {} file", kind) }
            </label>
            <input
                id={format!("{}Input", kind)}
                class="form-control"
                type="file"
                accept={kind.accept()}
                onchange={on_file_change}
            />
            {
                match file_name {
                    Some(name) => html! { <small class="form-text text-muted">{ format!("Selected: {}", name) }</small> },
                    None => html! {},
                }
            }
            { render_media_preview(model, kind) }
            <label for={format!("{}Text", kind)} class="form-label mt-3">
                {"Context or caption (optional)"}
            </label>
            <textarea
                id={format!("{}Text", kind)}
                class="form-control"
                rows="3"
                placeholder="Where did this come from? What does it claim to show?"
                value={context}
                oninput={on_context_input}
            />
        </div>
    }
}

fn render_media_preview(model: &Model, kind: MediaKind) -> Html {
    let Some(url) = model
        .form
        .media
        .get(&kind)
        .and_then(|i| i.preview_url.as_ref())
    else {
        return html! {};
    };

    match kind {
        MediaKind::Image => html! {
            <div id="imagePreview" class="media-preview mt-3">
                <img src={url.to_string()} alt="Image preview" />
            </div>
        },
        MediaKind::Audio => html! {
            <div id="audioPreview" class="media-preview mt-3">
                <audio controls=true src={url.to_string()}></audio>
            </div>
        },
        MediaKind::Video => html! {
            <div id="videoPreview" class="media-preview mt-3">
                <video controls=true src={url.to_string()}></video>
            </div>
        },
    }
}

fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <div class="button-container mt-3">
                <button
                    id="analyzeBtn"
                    class="btn btn-primary analyze-btn"
                    disabled={model.in_flight.is_pending()}
                    onclick={link.callback(|_| Msg::Analyze)}
                >
                    { render_analyze_button_content(model) }
                </button>
                <button
                    id="clearBtn"
                    class="btn btn-outline-secondary"
                    onclick={link.callback(|_| Msg::ClearAll)}
                >
                    <i class="fas fa-eraser me-2"></i>{"Clear"}
                </button>
            </div>
            {
                if model.in_flight.is_pending() {
                    html! {
                        <div id="loadingSpinner" class="text-center mt-3">
                            <div class="spinner-border text-primary" role="status"></div>
                            <p class="mt-2">{"Analyzing content..."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn render_analyze_button_content(model: &Model) -> Html {
    if model.in_flight.is_pending() {
        html! { <><span class="spinner-border spinner-border-sm me-2"></span>{"Processing..."}</> }
    } else {
        html! { <><i class="fas fa-search me-2"></i>{ model.mode.button_label() }</> }
    }
}
