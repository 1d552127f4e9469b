//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// A short hand-written guide to the toolbox (static markdown).
pub struct UsageGuideResource;

const GUIDE: &str = r#"# Toolbox usage

This server bundles small developer utilities as MCP tools.

## Codecs

- `json_format` - validate JSON, pretty-print (`mode: "format"`) or
  minify (`mode: "minify"`).
- `base64_convert` - `mode: "encode"` or `"decode"`, standard alphabet.
- `url_convert` - percent-encode/decode a URL component.

## Time

- `timestamp_convert` - pass a Unix timestamp (10 digits = seconds,
  more = milliseconds) or a datetime string; omit the value for "now".

## Colors

The color tools share one workspace with linear undo/redo:

- `color_convert` - stateless conversion between hex, RGB, HSL, CMYK.
- `color_set` - commit a new workspace color (hex, rgb, hsl, or a
  single `channel` edit).
- `color_transform` - `random`, `invert`, `lighten` or `darken`.
- `color_undo` / `color_redo` - step through the history.
- `color_recent` - list or clear the recently used colors.

Committing after an undo discards the redone tail.

## QR codes

- `qr_generate` - SVG markup or terminal block art, error correction
  levels L/M/Q/H, preset sizes 128/200/256/512, custom colors, and an
  optional `output_path` to write the SVG to disk.

Per-tool reference docs are available at `toolbox://docs/{tool}`.
"#;

impl ResourceDefinition for UsageGuideResource {
    const URI: &'static str = "toolbox://docs/usage";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How the toolbox tools fit together";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_guide_mentions_every_tool() {
        for name in [
            "json_format",
            "base64_convert",
            "url_convert",
            "timestamp_convert",
            "color_convert",
            "color_set",
            "color_transform",
            "color_undo",
            "color_redo",
            "color_recent",
            "qr_generate",
        ] {
            assert!(GUIDE.contains(name), "guide missing {}", name);
        }
    }
}
