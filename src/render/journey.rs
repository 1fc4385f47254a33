use crate::core::content::SiteContent;
use crate::core::cursor::StageCursor;
use crate::core::journey::{
    badge, fun_fact, phase_label, progress_dots, progress_percent, stage_label, transition_label,
};
use crate::domain::model::Stage;
use crate::domain::ports::AssetResolver;
use maud::{html, Markup};

pub fn render(content: &SiteContent, assets: &dyn AssetResolver, cursor: &StageCursor) -> Markup {
    let journey = &content.journey;
    let len = journey.stages.len();

    html! {
        section.journey-hero {
            h1 { (journey.heading) }
            p { (journey.intro) }
            a.cta href="#explorer" { "🦋 Start Your Journey 🦋" }
        }
        section.timeline data-motion="scroll-heading" {
            h2 { "The Complete Lifecycle" }
            @for (index, stage) in journey.stages.iter().enumerate() {
                (stage_card(stage, index, len, assets))
            }
        }
        (progress(cursor))
        (explorer(cursor, assets))
        section.facts {
            h3 { "Amazing Butterfly Facts" }
            div.grid {
                @for fact in &journey.facts {
                    div.card {
                        div.icon { (fact.icon) }
                        h4 { (fact.title) }
                        p { (fact.description) }
                    }
                }
            }
        }
        button.back-to-start type="button" data-action="reset" title="Back to Start" { "🦋" }
    }
}

fn stage_card(stage: &Stage, index: usize, len: usize, assets: &dyn AssetResolver) -> Markup {
    html! {
        article.stage-card.card id={ "stage-" (stage.id) } data-motion="stagger" {
            span.badge { (badge(index)) }
            p.phase { (phase_label(index, len)) }
            h3 { (stage.icon) " " (stage.title) }
            p.subtitle { (stage.subtitle) }
            ul.stage-meta {
                li { "⏱️ " (stage.duration_label) }
                li { "🎯 " (stage_label(&stage.id)) }
                li { "🔄 " (transition_label(index, len)) }
            }
            img src=(assets.resolve(&stage.media_ref)) alt=(stage.title) loading="lazy";
            h4 { "What Happens in This Stage?" }
            p { (stage.description) }
            p.fun-fact { strong { "Did you know?" } " " (fun_fact(stage)) }
        }
        @if index + 1 < len {
            p.connector { "⬇️ " (progress_percent(index, len)) "% Complete" }
        }
    }
}

fn progress(cursor: &StageCursor) -> Markup {
    html! {
        section.progress {
            h3 { "Your Journey Progress" }
            div.dots {
                @for (i, reached) in progress_dots(cursor).into_iter().enumerate() {
                    span.dot.reached[reached] { (i + 1) }
                }
            }
            div.bar style={ "width: " (progress_percent(cursor.index(), cursor.len())) "%" } {}
        }
    }
}

fn explorer(cursor: &StageCursor, assets: &dyn AssetResolver) -> Markup {
    let stage = cursor.current();

    html! {
        section.explorer.card id="explorer" data-stage-index=(cursor.index()) {
            h3 { "Interactive Stage Explorer" }
            img src=(assets.resolve(&stage.media_ref)) alt=(stage.title);
            p.phase { (phase_label(cursor.index(), cursor.len())) }
            h4 { (stage.title) }
            p.subtitle { (stage.subtitle) }
            p { (stage.description) }
            p.duration { "⏱️ " (stage.duration_label) }
            nav.stepper {
                button type="button" data-action="prev" { "← Previous" }
                div.selectors {
                    @for i in 0..cursor.len() {
                        @let current = i == cursor.index();
                        button.dot.active[current] type="button" data-stage=(i)
                            aria-label={ "Stage " (i + 1) }
                            aria-current=[current.then_some("step")] {}
                    }
                }
                button type="button" data-action="next" { "Next →" }
            }
        }
    }
}
