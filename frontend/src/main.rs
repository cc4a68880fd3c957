mod api;
mod components;
mod config;

use api::BrowserTransport;
use components::header::render_header;
use components::input_section::render_input_section;
use components::results::render_results;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::present::DetailBlock;
use shared::{
    AnalysisMode, AnalysisRequest, AnalysisResult, ContentType, DispatchError, Dispatcher,
    InFlight, MediaKind, RenderedView, present_error, present_outcome,
};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

// Models
#[derive(Default)]
struct MediaInput {
    file: Option<web_sys::File>,
    preview_url: Option<ObjectUrl>,
    context: String,
}

struct FormState {
    text: String,
    ai_content: String,
    ai_content_type: ContentType,
    deep_analysis: bool,
    media: HashMap<MediaKind, MediaInput>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            ai_content: String::new(),
            ai_content_type: ContentType::default(),
            deep_analysis: true,
            media: HashMap::new(),
        }
    }
}

// Yew msg components
enum Msg {
    // Form edits
    SelectMode(AnalysisMode),
    SetText(String),
    SetAiContent(String),
    SetContentType(ContentType),
    SetDeepAnalysis(bool),
    SetMediaFile(MediaKind, web_sys::File),
    SetMediaContext(MediaKind, String),
    ClearAll,

    // Analysis
    Analyze,
    SubmitShortcut,
    AnalysisFinished(u64, Result<AnalysisResult, DispatchError>),
    RevealConfidence,
    ToggleReason(usize),

    // UI states
    SetError(String),
}

/// The page's single view-model: owns the form, the in-flight flag and the
/// rendered result card.
struct Model {
    mode: AnalysisMode,
    form: FormState,
    dispatcher: Rc<Dispatcher<BrowserTransport>>,
    in_flight: InFlight,
    text_input: NodeRef,
    view: Option<RenderedView>,
    bar_value: f64,
    expanded_reasons: HashSet<usize>,
    reveal_timeout: Option<Timeout>,
    keydown_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load_config();
        log::info!("Using classification API at '{}'", config.api_base);

        let mut model = Self {
            mode: AnalysisMode::default(),
            form: FormState::default(),
            dispatcher: Rc::new(Dispatcher::new(BrowserTransport, config)),
            in_flight: InFlight::default(),
            text_input: NodeRef::default(),
            view: None,
            bar_value: 0.0,
            expanded_reasons: HashSet::new(),
            reveal_timeout: None,
            keydown_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    if key_event.ctrl_key() && key_event.key() == "Enter" {
                        link.send_message(Msg::SubmitShortcut);
                    }
                }
            });
            model.keydown_listener = Some(listener);
        } else {
            log::warn!("No global window; Ctrl+Enter shortcut disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Form edits
            Msg::SelectMode(mode) => self.handle_select_mode(mode),
            Msg::SetText(text) => {
                self.form.text = text;
                true
            }
            Msg::SetAiContent(content) => {
                self.form.ai_content = content;
                true
            }
            Msg::SetContentType(content_type) => {
                self.form.ai_content_type = content_type;
                true
            }
            Msg::SetDeepAnalysis(enabled) => {
                self.form.deep_analysis = enabled;
                true
            }
            Msg::SetMediaFile(kind, file) => self.handle_media_file(kind, file),
            Msg::SetMediaContext(kind, context) => {
                self.form.media.entry(kind).or_default().context = context;
                true
            }
            Msg::ClearAll => self.handle_clear_all(),

            // Analysis
            Msg::Analyze => self.handle_analyze(ctx),
            Msg::SubmitShortcut => {
                self.mode == AnalysisMode::Text && self.handle_analyze(ctx)
            }
            Msg::AnalysisFinished(ticket, outcome) => {
                self.handle_analysis_finished(ctx, ticket, outcome)
            }
            Msg::RevealConfidence => {
                self.reveal_timeout = None;
                self.bar_value = self.view.as_ref().map_or(0.0, |view| view.bar.value);
                true
            }
            Msg::ToggleReason(index) => {
                if !self.expanded_reasons.remove(&index) {
                    self.expanded_reasons.insert(index);
                }
                true
            }

            // UI states
            Msg::SetError(message) => {
                self.show_view(ctx, present_error(&message));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_input_section(self, ctx) }
                    { render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Content Verification | Rust WASM client"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_select_mode(&mut self, mode: AnalysisMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.in_flight.supersede();
        self.hide_result();
        true
    }

    fn handle_media_file(&mut self, kind: MediaKind, file: web_sys::File) -> bool {
        let preview_url = ObjectUrl::from(GlooFile::from(file.clone()));
        let input = self.form.media.entry(kind).or_default();
        input.file = Some(file);
        input.preview_url = Some(preview_url);
        true
    }

    fn handle_clear_all(&mut self) -> bool {
        self.form = FormState::default();
        self.in_flight.supersede();
        self.hide_result();

        if self.mode == AnalysisMode::Text {
            if let Some(area) = self.text_input.cast::<HtmlTextAreaElement>() {
                if let Err(e) = area.focus() {
                    log::warn!("Could not focus news input: {:?}", e);
                }
            }
        }
        true
    }

    fn handle_analyze(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.in_flight.begin() else {
            return false;
        };
        self.hide_result();

        let request = self.build_request();
        let dispatcher = Rc::clone(&self.dispatcher);
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = dispatcher.dispatch(request).await;
            link.send_message(Msg::AnalysisFinished(ticket, outcome));
        });

        true
    }

    fn handle_analysis_finished(
        &mut self,
        ctx: &Context<Self>,
        ticket: u64,
        outcome: Result<AnalysisResult, DispatchError>,
    ) -> bool {
        if !self.in_flight.finish(ticket) {
            log::info!("Dropping outcome of superseded request #{}", ticket);
            return false;
        }
        if let Err(e) = &outcome {
            log::warn!("Analysis failed: {}", e);
        }
        self.show_view(ctx, present_outcome(&outcome));
        true
    }

    // Helper methods
    fn build_request(&self) -> AnalysisRequest<web_sys::File> {
        if let Some(kind) = self.mode.media_kind() {
            let input = self.form.media.get(&kind);
            return AnalysisRequest::Media {
                kind,
                file: input.and_then(|i| i.file.clone()),
                context: input.map(|i| i.context.clone()).unwrap_or_default(),
            };
        }

        match self.mode {
            AnalysisMode::Ai => AnalysisRequest::AiContent {
                content: self.form.ai_content.clone(),
                content_type: self.form.ai_content_type,
                deep_analysis: self.form.deep_analysis,
            },
            _ => AnalysisRequest::Text {
                text: self.form.text.clone(),
            },
        }
    }

    fn show_view(&mut self, ctx: &Context<Self>, view: RenderedView) {
        if let Some(timeout) = self.reveal_timeout.take() {
            timeout.cancel();
        }

        self.expanded_reasons = view
            .details
            .iter()
            .filter_map(|block| match block {
                DetailBlock::Reasons(sections) => Some(sections),
                _ => None,
            })
            .flat_map(|sections| sections.iter().enumerate())
            .filter(|(_, section)| section.expanded)
            .map(|(index, _)| index)
            .collect();

        // The bar fills after a short delay for the transition.
        self.bar_value = 0.0;
        let link = ctx.link().clone();
        let delay = self.dispatcher.config().reveal_delay_ms;
        self.reveal_timeout = Some(Timeout::new(delay, move || {
            link.send_message(Msg::RevealConfidence);
        }));

        self.view = Some(view);
    }

    fn hide_result(&mut self) {
        if let Some(timeout) = self.reveal_timeout.take() {
            timeout.cancel();
        }
        self.view = None;
        self.bar_value = 0.0;
        self.expanded_reasons.clear();
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    gloo_console::log!("Content verification client starting...");
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
