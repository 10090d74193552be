//! Shared constants for the editor core.

// ── Style keys ──────────────────────────────────────────────────

/// Font size style property.
pub const STYLE_FONT_SIZE: &str = "fontSize";

/// Text color style property.
pub const STYLE_COLOR: &str = "color";

/// Bottom margin style property.
pub const STYLE_MARGIN_BOTTOM: &str = "marginBottom";

/// Font weight style property (starter heading only).
pub const STYLE_FONT_WEIGHT: &str = "fontWeight";

/// Line height style property (starter paragraph only).
pub const STYLE_LINE_HEIGHT: &str = "lineHeight";

// ── Defaults ────────────────────────────────────────────────────

/// Font size given to a freshly dropped heading.
pub const HEADING_FONT_SIZE: &str = "2rem";

/// Font size given to every other freshly dropped block.
pub const BODY_FONT_SIZE: &str = "1rem";

/// Text color given to every freshly dropped block.
pub const DEFAULT_COLOR: &str = "#1a1a1a";

/// Bottom margin given to every freshly dropped block.
pub const DEFAULT_MARGIN_BOTTOM: &str = "1rem";

/// Content of a freshly dropped heading.
pub const HEADING_CONTENT: &str = "New Heading";

/// Content of a freshly dropped paragraph.
pub const PARAGRAPH_CONTENT: &str = "New Paragraph";

/// Image shown when an image block has no URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x300";

/// Label shown when a button block has no text.
pub const BUTTON_FALLBACK_LABEL: &str = "Click me";

// ── Notifications ───────────────────────────────────────────────

/// Message sent to the notifier after a successful save.
pub const SAVE_SUCCESS_MESSAGE: &str = "Changes saved successfully!";

/// Message sent to the notifier when a save cannot be serialized.
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save changes";
