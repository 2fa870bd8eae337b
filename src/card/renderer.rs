//! Card Renderer
//!
//! Builds the Teams card for one alert:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ <rule description>   (severity style)│
//! ├──────────────────────────────────────┤
//! │ Agent: <name> (ID <id>)              │
//! │ Rule: <id> (Level <level>)           │
//! │ ──────────────────────────────────── │
//! │ [Show Full Log ▸]   showToggle       │
//! │ [Hide Full Log ▾]   hideToggle   (h) │
//! │ <full log, monospace> fullLogBlock(h)│
//! └──────────────────────────────────────┘
//! ```
//!
//! The toggles are plain `Action.ToggleVisibility` wiring; the client flips
//! the three ids, nothing is tracked here.

use super::severity::Severity;
use super::types::{
    Action, ActionSet, AdaptiveCard, Container, ContainerStyle, Element, FontType, FontWeight,
    Inline, RichTextBlock, Spacing, TargetElement, TextBlock, TextRun, ToggleVisibility,
};
use crate::alert::Alert;
use crate::constants::{
    FULL_LOG_ID, HIDE_TOGGLE_ID, HIDE_TOGGLE_TITLE, SHOW_TOGGLE_ID, SHOW_TOGGLE_TITLE,
};

/// Render the alert as an Adaptive Card
pub fn render(alert: &Alert) -> AdaptiveCard {
    let severity = Severity::from_level(alert.rule_level);
    tracing::info!("Generating MS Teams Adaptive Card ({} severity)", severity.as_str());

    AdaptiveCard::new(vec![
        header(&alert.rule_description, severity),
        labeled_line(
            "Agent: ",
            format!("{} ", alert.agent_name),
            format!("(ID {})", alert.agent_id),
        ),
        labeled_line(
            "Rule: ",
            format!("{} ", alert.rule_id),
            format!("(Level {})", alert.rule_level),
        ),
        show_toggle(),
        hide_toggle(),
        full_log_block(&alert.full_log),
    ])
}

fn header(description: &str, severity: Severity) -> Element {
    Element::Container(Container {
        style: Some(severity.style()),
        bleed: Some(true),
        items: vec![Element::TextBlock(TextBlock {
            text: description.to_string(),
            weight: Some(FontWeight::Bolder),
            ..Default::default()
        })],
        ..Default::default()
    })
}

fn labeled_line(label: &str, value: String, detail: String) -> Element {
    Element::RichTextBlock(RichTextBlock {
        inlines: vec![
            Inline::TextRun(TextRun::bold(label)),
            Inline::TextRun(TextRun::plain(value)),
            Inline::TextRun(TextRun::italic(detail)),
        ],
    })
}

fn show_toggle() -> Element {
    Element::Container(Container {
        id: Some(SHOW_TOGGLE_ID.to_string()),
        spacing: Some(Spacing::Medium),
        separator: Some(true),
        items: vec![toggle_action(SHOW_TOGGLE_TITLE, true)],
        ..Default::default()
    })
}

fn hide_toggle() -> Element {
    Element::Container(Container {
        id: Some(HIDE_TOGGLE_ID.to_string()),
        is_visible: Some(false),
        items: vec![toggle_action(HIDE_TOGGLE_TITLE, false)],
        ..Default::default()
    })
}

/// `reveal` = true shows the log and swaps to the hide button
fn toggle_action(title: &str, reveal: bool) -> Element {
    Element::ActionSet(ActionSet {
        actions: vec![Action::ToggleVisibility(ToggleVisibility {
            title: title.to_string(),
            target_elements: vec![
                TargetElement::new(FULL_LOG_ID, reveal),
                TargetElement::new(SHOW_TOGGLE_ID, !reveal),
                TargetElement::new(HIDE_TOGGLE_ID, reveal),
            ],
        })],
    })
}

fn full_log_block(full_log: &str) -> Element {
    Element::Container(Container {
        id: Some(FULL_LOG_ID.to_string()),
        is_visible: Some(false),
        style: Some(ContainerStyle::Emphasis),
        bleed: Some(false),
        spacing: Some(Spacing::Small),
        items: vec![Element::TextBlock(TextBlock {
            text: full_log.to_string(),
            wrap: Some(true),
            max_lines: Some(0),
            font_type: Some(FontType::Monospace),
            ..Default::default()
        })],
        ..Default::default()
    })
}
