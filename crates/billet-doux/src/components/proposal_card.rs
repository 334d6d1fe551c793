//! The proposal card: prompt, then one of two responses.

use billet_ui::CardContent;
use dioxus::prelude::*;

use crate::state::Answer;

#[component]
pub fn ProposalCard(
    content: CardContent,
    answer: Option<Answer>,
    on_choose: EventHandler<Answer>,
) -> Element {
    rsx! {
        div { class: "proposal-card",

            if answer.is_none() {
                h1 { class: "card-title script-font", "{content.title}" }
                p { class: "card-text",
                    "{content.message}"
                    span { class: "card-question", "{content.question}" }
                }
                div { class: "answer-buttons",
                    button {
                        class: "yes-button",
                        onclick: move |_| on_choose.call(Answer::Yes),
                        "{content.yes_label}"
                    }
                    button {
                        class: "no-button",
                        onclick: move |_| on_choose.call(Answer::No),
                        "{content.no_label}"
                    }
                }
            }

            if answer == Some(Answer::Yes) {
                div { class: "answer-reveal",
                    h2 { class: "card-title script-font", "{content.yes_title}" }
                    p { class: "card-text", "{content.yes_text}" }
                    div { class: "answer-flourish", "🧸🌹" }
                }
            }

            if answer == Some(Answer::No) {
                div { class: "answer-reveal",
                    h2 { class: "card-title script-font", "{content.no_title}" }
                    p { class: "card-text", "{content.no_text}" }
                }
            }
        }
    }
}
