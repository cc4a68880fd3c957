use super::super::Model;
use super::super::Msg;
use shared::present::{
    ConfidenceBar, DetailBlock, IndicatorKind, PointItem, ReasonSection, Warning,
};
use shared::response::ScoreSplit;
use yew::prelude::*;

pub(crate) fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(view) = &model.view else {
        return html! {};
    };

    // Same class as the final bar; the value lags until the reveal timer fires.
    let bar = ConfidenceBar {
        class: view.bar.class,
        value: model.bar_value,
    };

    html! {
        <div id="resultCard" class="card result-card mt-4">
            <div id="resultHeader" class={classes!("card-header", view.header_class)}>
                <h5 class="mb-0"><i class="fas fa-chart-bar me-2"></i>{"Analysis Result"}</h5>
            </div>
            <div class="card-body">
                <div class="text-center mb-4">
                    <span id="predictionBadge" class={classes!("badge", "fs-4", "px-4", "py-3", view.badge.class)}>
                        <i class={classes!("fas", view.badge.icon, "me-2")}></i>
                        { &view.badge.label }
                    </span>
                </div>

                <div class="confidence-meter mb-4">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="progress">
                        <div
                            id="confidenceBar"
                            class={classes!("progress-bar", "progress-bar-striped", "progress-bar-animated", bar.class)}
                            role="progressbar"
                            style={bar.width()}
                        ></div>
                    </div>
                    <div id="confidenceText" class="meter-value">{ bar.text() }</div>
                </div>

                <div id="messageAlert" class={classes!("alert", view.alert.class)}>
                    <span id="messageText">{ &view.alert.message }</span>
                </div>

                <div id="detailsBody" class="details-body">
                    <h6>{"Detailed Analysis"}</h6>
                    { for view.details.iter().map(|block| render_detail_block(model, ctx, block)) }
                </div>
            </div>
        </div>
    }
}

fn render_detail_block(model: &Model, ctx: &Context<Model>, block: &DetailBlock) -> Html {
    match block {
        DetailBlock::ScoreMeter(split) => render_score_meter(split),
        DetailBlock::Indicators { kind, terms } => render_indicators(*kind, terms),
        DetailBlock::AnalysisPoints(items) => render_analysis_points(items),
        DetailBlock::Reasons(sections) => render_reasons(model, ctx, sections),
        DetailBlock::Warning(warning) => render_warning(*warning),
        DetailBlock::NoAnomalies => html! {
            <ul class="details-list">
                <li>
                    <i class="fas fa-info-circle me-2"></i>
                    { block.placeholder_text().unwrap_or_default() }
                </li>
            </ul>
        },
        DetailBlock::Unavailable => html! {
            <p class="text-muted mb-0">{ block.placeholder_text().unwrap_or_default() }</p>
        },
    }
}

fn render_score_meter(split: &ScoreSplit) -> Html {
    html! {
        <>
            <div class="ai-score-meter">
                <span class="score-label ai">
                    <i class="fas fa-robot me-1"></i>{ format!("AI: {}%", split.ai_score) }
                </span>
                <div class="score-bar">
                    <div class="score-bar-fill ai" style={format!("width: {}%", split.ai_score)}></div>
                </div>
                <span class="score-label human">
                    <i class="fas fa-user me-1"></i>{ format!("Human: {}%", split.human_score) }
                </span>
            </div>
            <div class="mb-3">
                <small class="text-muted">
                    <i class="fas fa-info-circle me-1"></i>
                    {"Content Type: "}<strong>{ &split.content_type }</strong>
                    {" | AI Patterns: "}<strong>{ split.ai_patterns_found.to_string() }</strong>
                    {" | Human Patterns: "}<strong>{ split.human_patterns_found.to_string() }</strong>
                </small>
            </div>
        </>
    }
}

fn render_indicators(kind: IndicatorKind, terms: &[String]) -> Html {
    html! {
        <ul class="details-list">
            <li class={kind.class()}>
                <strong>{ kind.title() }</strong>
                <br />
                { terms.join(", ") }
            </li>
        </ul>
    }
}

fn render_analysis_points(items: &[PointItem]) -> Html {
    html! {
        <ul class="details-list">
            { for items.iter().map(|item| match item {
                PointItem::Separator(title) => html! {
                    <li class="separator-item"><strong>{ title }</strong></li>
                },
                PointItem::Point { tone, text } => html! {
                    <li class={tone.class()}>
                        <i class="fas fa-microchip me-2"></i>{ text }
                    </li>
                },
            })}
        </ul>
    }
}

fn render_reasons(model: &Model, ctx: &Context<Model>, sections: &[ReasonSection]) -> Html {
    let link = ctx.link();

    html! {
        <div class="detailed-reasons-section mt-4">
            <h6 class="text-danger mb-3">
                <i class="fas fa-exclamation-triangle me-2"></i>{"Detailed Analysis Report"}
            </h6>
            <div class="accordion" id="reasonsAccordion">
                { for sections.iter().enumerate().map(|(index, section)| {
                    let is_expanded = model.expanded_reasons.contains(&index);
                    html! {
                        <div class="accordion-item reason-card" key={index.to_string()}>
                            <h2 class="accordion-header">
                                <button
                                    class={classes!("accordion-button", (!is_expanded).then_some("collapsed"))}
                                    type="button"
                                    onclick={link.callback(move |_| Msg::ToggleReason(index))}
                                >
                                    <i class="fas fa-search-minus me-2 text-danger"></i>
                                    <strong>{ &section.title }</strong>
                                </button>
                            </h2>
                            <div
                                id={format!("reason{}", index)}
                                class={classes!("accordion-collapse", "collapse", is_expanded.then_some("show"))}
                            >
                                <div class="accordion-body">
                                    <div class="explanation-box mb-3">
                                        <h6 class="text-primary">
                                            <i class="fas fa-info-circle me-1"></i>{" Why This Matters:"}
                                        </h6>
                                        <p class="mb-0">{ &section.explanation }</p>
                                    </div>
                                    <div class="technical-box">
                                        <h6 class="text-secondary">
                                            <i class="fas fa-cog me-1"></i>{" Technical Details:"}
                                        </h6>
                                        <code class="technical-code">{ &section.technical }</code>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

fn render_warning(warning: Warning) -> Html {
    html! {
        <div class="alert alert-warning mt-3">
            <i class={classes!("fas", warning.icon(), "me-2")}></i>
            <strong>{ warning.title() }</strong>
            { format!(" {}", warning.description()) }
        </div>
    }
}
