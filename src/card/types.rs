//! Adaptive Card Types
//!
//! Only the subset of the Adaptive Card 1.3 schema the notifier emits.
//! Optional properties are skipped when unset so the client applies its
//! own defaults (a container without `isVisible` is visible).

use serde::Serialize;

use crate::constants::{
    ADAPTIVE_CARD_SCHEMA, ADAPTIVE_CARD_TYPE, ADAPTIVE_CARD_VERSION, CARD_FALLBACK_TEXT,
};

// ============================================================================
// ENVELOPE
// ============================================================================

/// Top-level card document posted to the webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub version: &'static str,
    pub msteams: MsTeams,
    pub body: Vec<Element>,
    pub fallback_text: String,
}

impl AdaptiveCard {
    pub fn new(body: Vec<Element>) -> Self {
        Self {
            schema: ADAPTIVE_CARD_SCHEMA,
            card_type: ADAPTIVE_CARD_TYPE,
            version: ADAPTIVE_CARD_VERSION,
            msteams: MsTeams { width: "Full" },
            body,
            fallback_text: CARD_FALLBACK_TEXT.to_string(),
        }
    }

    /// Find an element anywhere in the body by its `id`
    pub fn find(&self, id: &str) -> Option<&Element> {
        find_in(&self.body, id)
    }
}

fn find_in<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    elements.iter().find_map(|element| match element {
        Element::Container(c) if c.id.as_deref() == Some(id) => Some(element),
        Element::Container(c) => find_in(&c.items, id),
        _ => None,
    })
}

/// Teams-specific host options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MsTeams {
    pub width: &'static str,
}

// ============================================================================
// ELEMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Element {
    Container(Container),
    TextBlock(TextBlock),
    RichTextBlock(RichTextBlock),
    ActionSet(ActionSet),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    pub items: Vec<Element>,
}

impl Container {
    /// Visibility before any toggle has been activated
    pub fn initially_visible(&self) -> bool {
        self.is_visible.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    /// `0` means no line limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBlock {
    pub inlines: Vec<Inline>,
}

impl RichTextBlock {
    /// Concatenated text of all runs, ignoring formatting
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::TextRun(run) => run.text.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Inline {
    TextRun(TextRun),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), weight: None, italic: None }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), weight: Some(FontWeight::Bolder), italic: None }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { text: text.into(), weight: None, italic: Some(true) }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSet {
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.ToggleVisibility")]
    ToggleVisibility(ToggleVisibility),
}

/// Client-side visibility flip of the referenced elements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVisibility {
    pub title: String,
    pub target_elements: Vec<TargetElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetElement {
    pub element_id: String,
    pub is_visible: bool,
}

impl TargetElement {
    pub fn new(element_id: &str, is_visible: bool) -> Self {
        Self { element_id: element_id.to_string(), is_visible }
    }
}

// ============================================================================
// STYLE TOKENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStyle {
    Default,
    Emphasis,
    Good,
    Attention,
    Warning,
    Accent,
}

impl ContainerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStyle::Default => "default",
            ContainerStyle::Emphasis => "emphasis",
            ContainerStyle::Good => "good",
            ContainerStyle::Attention => "attention",
            ContainerStyle::Warning => "warning",
            ContainerStyle::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Spacing {
    Small,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontType {
    Monospace,
}
