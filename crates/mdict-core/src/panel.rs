//! Self-contained frame document for one dictionary result.
//!
//! The document is handed to a sandboxed frame as inline content. Its script
//! posts `iframe-resize` on every DOM mutation and on load, asks the host for
//! the theme with `request-theme`, applies `theme` replies by toggling a CSS
//! inversion filter, relays `data-entry-word` clicks as `entry-click`, and plays
//! `data-sound-url` links locally.

use crate::bridge::{FRAME_HEIGHT_PADDING, MIN_FRAME_HEIGHT, PanelFrame};

pub const FRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups";

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <style>
    body { margin: 0; padding: 12px; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; }
    img { max-width: 100%; height: auto; }
    a[data-entry-word] { color: #2563eb; text-decoration: none; cursor: pointer; }
    a[data-entry-word]:hover { text-decoration: underline; }
    a[data-sound-url] { cursor: pointer; }
    html.dark { filter: invert(1) hue-rotate(180deg); background: #fff; }
    html.dark img, html.dark video, html.dark svg { filter: invert(1) hue-rotate(180deg); }
  </style>
</head>
<body>
  <div id="class_{attr_uuid}">
    <div class="mdict">{html}</div>
  </div>
  <script>
    (function () {
      var uuid = {js_uuid};
      function unquote(value) {
        return value.replace(/^["']|["']$/g, '');
      }
      function notifyHeight() {
        var h = document.documentElement.scrollHeight;
        window.parent.postMessage({ type: 'iframe-resize', uuid: uuid, height: h }, '*');
      }
      new MutationObserver(notifyHeight).observe(document.body, { childList: true, subtree: true, attributes: true });
      window.addEventListener('load', function () {
        setTimeout(notifyHeight, 100);
        window.parent.postMessage({ type: 'request-theme', uuid: uuid }, '*');
      });
      notifyHeight();

      window.addEventListener('message', function (e) {
        var data = e.data;
        if (!data || data.type !== 'theme') return;
        document.documentElement.classList.toggle('dark', !!data.dark);
      });

      document.addEventListener('click', function (e) {
        var link = e.target && e.target.closest ? e.target.closest('a') : null;
        if (!link) return;
        var entryWord = link.getAttribute('data-entry-word');
        if (entryWord) {
          e.preventDefault();
          window.parent.postMessage({ type: 'entry-click', word: unquote(entryWord) }, '*');
          return;
        }
        var soundUrl = link.getAttribute('data-sound-url');
        if (soundUrl) {
          e.preventDefault();
          try {
            new Audio(unquote(soundUrl)).play().catch(function () {});
          } catch (err) {}
        }
      });
    })();
  </script>
</body>
</html>"#;

const HOST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html class="{theme}">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body { margin: 0 auto; max-width: 960px; padding: 16px; font-family: sans-serif; }
    html.dark body { background: #111827; color: #e5e7eb; }
    section { margin-bottom: 16px; border: 1px solid #d1d5db; border-radius: 8px; overflow: hidden; }
    section h2 { margin: 0; padding: 8px 12px; font-size: 14px; }
    iframe { display: block; width: 100%; border: 0; }
  </style>
</head>
<body>
  <header id="entry-click"></header>
{frames}
  <script>
    (function () {
      var dark = {dark};
      function frameFor(uuid) {
        var frames = document.querySelectorAll('iframe[data-uuid]');
        for (var i = 0; i < frames.length; i++) {
          if (frames[i].getAttribute('data-uuid') === uuid) return frames[i];
        }
        return null;
      }
      window.addEventListener('message', function (e) {
        var data = e.data;
        if (!data || typeof data.type !== 'string') return;
        var frame;
        if (data.type === 'iframe-resize') {
          frame = frameFor(data.uuid);
          if (frame) frame.style.height = Math.max(data.height + {padding}, {min_height}) + 'px';
        } else if (data.type === 'request-theme') {
          frame = frameFor(data.uuid);
          if (frame && frame.contentWindow) frame.contentWindow.postMessage({ type: 'theme', dark: dark }, '*');
        } else if (data.type === 'entry-click') {
          window.dispatchEvent(new CustomEvent('dict-entry-click', { detail: { word: data.word } }));
          document.getElementById('entry-click').textContent = data.word;
        }
      });
    })();
  </script>
</body>
</html>"#;

/// Escape for use inside a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// JSON string literal that is also safe inside a `<script>` element
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Full HTML document embedding `html` for the dictionary `uuid`
pub fn render_document(uuid: &str, html: &str) -> String {
    // split first so neither the uuid nor the content can be read as a placeholder
    let (head, tail) = DOCUMENT_TEMPLATE
        .split_once("{html}")
        .unwrap_or((DOCUMENT_TEMPLATE, ""));
    let fill = |part: &str| {
        part.replace("{attr_uuid}", &escape_attr(uuid))
            .replace("{js_uuid}", &js_string(uuid))
    };
    format!("{}{}{}", fill(head), html, fill(tail))
}

/// Standalone host page that embeds `frames` and answers their messages
pub fn render_host_page(word: &str, frames: &[PanelFrame], dark: bool) -> String {
    let sections: Vec<String> = frames
        .iter()
        .map(|f| {
            format!(
                "  <section>\n    <h2>{}</h2>\n    <iframe data-uuid=\"{}\" sandbox=\"{}\" style=\"height: {}px\" srcdoc=\"{}\"></iframe>\n  </section>",
                escape_attr(&f.title),
                escape_attr(&f.uuid),
                FRAME_SANDBOX,
                f.height,
                escape_attr(&f.document),
            )
        })
        .collect();

    // the looked-up word is substituted last and the frames are never scanned
    let (head, tail) = HOST_TEMPLATE
        .split_once("{frames}")
        .unwrap_or((HOST_TEMPLATE, ""));
    let fill = |part: &str| {
        part.replace("{theme}", if dark { "dark" } else { "" })
            .replace("{dark}", if dark { "true" } else { "false" })
            .replace("{padding}", &FRAME_HEIGHT_PADDING.to_string())
            .replace("{min_height}", &MIN_FRAME_HEIGHT.to_string())
            .replace("{title}", &escape_attr(word))
    };
    format!("{}{}{}", fill(head), sections.join("\n"), fill(tail))
}

/// Plain-text preview of a rendered entry, for text front-ends
pub fn text_excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    let mut skip_depth: Option<&str> = None;
    let lowered = html.to_ascii_lowercase();
    let bytes = html.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end_tag) = skip_depth {
            match lowered[i..].find(end_tag) {
                Some(pos) => {
                    i += pos + end_tag.len();
                    skip_depth = None;
                }
                None => break,
            }
            continue;
        }

        let rest = &lowered[i..];
        if rest.starts_with("<script") {
            skip_depth = Some("</script>");
            continue;
        }
        if rest.starts_with("<style") {
            skip_depth = Some("</style>");
            continue;
        }

        let ch = match html[i..].chars().next() {
            Some(ch) => ch,
            None => break,
        };
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
        i += ch.len_utf8();
    }

    let collapsed = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let mut cut: String = collapsed.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }
}
